// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end list queries against in-memory stores
//!
//! Each test drives `ListQueryOrchestrator` the way an HTTP handler would: raw
//! `take` and cursor in, JSON envelope out.

mod helpers;

use helpers::{
    balance_store, holding_rows, init_tracing, internal_tx_rows, keep, orchestrator,
    transaction_rows, transaction_store, transfer_event_rows, walk_forward,
};
use ledgerscan::{
    BalanceView, InternalTxView, LedgerscanError, ListEndpoint, MemoryStore, PaginationError,
    StoreError, TokenHoldingRow, TokenHoldingView, TransactionRow, TransactionView,
    TransferEventRow, TransferEventView,
};
use serde_json::json;

#[tokio::test]
async fn test_forward_page_from_block_position() -> anyhow::Result<()> {
    init_tracing();
    let store = transaction_store(transaction_rows(498..=502, 5));

    let response = orchestrator()
        .list(
            ListEndpoint::Transactions,
            2,
            Some("500_3"),
            &store,
            TransactionView::try_from,
        )
        .await?;

    let json = serde_json::to_value(&response)?;
    assert_eq!(
        json["paginationData"],
        json!({
            "nextCursor": "500_1",
            "prevCursor": "500_2",
            "take": 2,
            "hasMore": true
        })
    );

    let data = json["data"].as_array().expect("data array");
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["blockNumber"], 500);
    assert_eq!(data[0]["transactionIndex"], 2);
    assert_eq!(data[0]["value"], "2");
    assert_eq!(data[0]["gasUsed"], "21000");
    assert_eq!(data[1]["transactionIndex"], 1);
    assert_eq!(store.fetch_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_forward_page_of_ten_from_block_position() -> anyhow::Result<()> {
    let store = transaction_store(transaction_rows(498..=502, 5));

    let response = orchestrator()
        .list(ListEndpoint::Transactions, 10, Some("500_3"), &store, keep)
        .await?;

    let positions: Vec<String> = response
        .data
        .unwrap_or_default()
        .iter()
        .map(|tx| format!("{}_{}", tx.block_number, tx.transaction_index))
        .collect();
    assert_eq!(
        positions,
        vec![
            "500_2", "500_1", "500_0", "499_4", "499_3", "499_2", "499_1", "499_0", "498_4",
            "498_3",
        ]
    );

    let pagination = response.pagination_data.expect("pagination data");
    assert!(pagination.has_more);
    assert_eq!(pagination.take, 10);
    assert_eq!(pagination.next_cursor.as_deref(), Some("498_3"));
    assert_eq!(pagination.prev_cursor.as_deref(), Some("500_2"));
    assert_eq!(store.fetch_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_backward_page_from_block_position() -> anyhow::Result<()> {
    let store = transaction_store(transaction_rows(498..=502, 5));

    let response = orchestrator()
        .list(ListEndpoint::Transactions, -2, Some("500_3"), &store, keep)
        .await?;

    let positions: Vec<(u32, u32)> = response
        .data
        .unwrap_or_default()
        .iter()
        .map(|tx| (tx.block_number, tx.transaction_index))
        .collect();
    assert_eq!(positions, vec![(501, 0), (500, 4)]);

    let pagination = response.pagination_data.expect("pagination data");
    assert!(pagination.has_more);
    assert_eq!(pagination.take, -2);
    assert_eq!(pagination.prev_cursor.as_deref(), Some("501_0"));
    assert_eq!(pagination.next_cursor.as_deref(), Some("500_4"));
    Ok(())
}

#[tokio::test]
async fn test_exact_fit_has_no_cursors() -> anyhow::Result<()> {
    let store = balance_store(3);

    let response = orchestrator()
        .list(
            ListEndpoint::BalancesByAddress,
            3,
            None,
            &store,
            BalanceView::try_from,
        )
        .await?;

    let data = response.data.expect("data");
    assert_eq!(data.len(), 3);
    assert_eq!(data[0].balance, "3");

    let pagination = response.pagination_data.expect("pagination data");
    assert!(!pagination.has_more);
    assert_eq!(pagination.next_cursor, None);
    assert_eq!(pagination.prev_cursor, None);
    Ok(())
}

#[tokio::test]
async fn test_empty_listing_serializes_data_null() -> anyhow::Result<()> {
    let store = transaction_store(Vec::new());

    let response = orchestrator()
        .list(
            ListEndpoint::TransactionsByBlock,
            10,
            None,
            &store,
            TransactionView::try_from,
        )
        .await?;

    assert_eq!(serde_json::to_value(&response)?, json!({ "data": null }));
    Ok(())
}

#[tokio::test]
async fn test_store_failure_is_a_server_fault() {
    let store = balance_store(3).with_failure(StoreError::query_failed("statement timeout"));

    let err = orchestrator()
        .list(
            ListEndpoint::BalancesByAddress,
            10,
            None,
            &store,
            BalanceView::try_from,
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        LedgerscanError::Pagination(PaginationError::FetchFailed { .. })
    ));
    assert!(!err.is_client_error());
    assert_eq!(
        err.to_string(),
        "Pagination error: Failed to fetch records: Store query failed: statement timeout"
    );
}

#[tokio::test]
async fn test_invalid_cursor_field_is_rejected_before_fetch() {
    let store = MemoryStore::new("holders", holding_rows(3, Some(6)), TokenHoldingRow::holder_key);

    let err = orchestrator()
        .list(ListEndpoint::AccountsByToken, 10, Some("0xabc_123"), &store, keep)
        .await
        .unwrap_err();

    assert!(err.is_client_error());
    assert!(err.to_string().contains("address"), "{err}");
    assert_eq!(store.fetch_count(), 0);
}

#[tokio::test]
async fn test_forward_walk_visits_every_row_once() {
    let store = transaction_store(transaction_rows(1..=5, 5));

    let pages = walk_forward(ListEndpoint::Transactions, 4, &store).await;
    assert_eq!(pages.len(), 7);

    let walked: Vec<TransactionRow> = pages
        .iter()
        .flat_map(|page| page.data.clone().unwrap_or_default())
        .collect();
    assert_eq!(walked, store.rows());

    let last = pages.last().and_then(|p| p.pagination_data.clone()).expect("last page");
    assert!(!last.has_more);
    assert_eq!(last.next_cursor, None);
}

#[tokio::test]
async fn test_forward_walk_with_exact_multiple_has_no_empty_page() {
    let store = balance_store(24);
    let pages = walk_forward(ListEndpoint::BalancesByAddress, 4, &store).await;
    assert_eq!(pages.len(), 6);
    assert!(pages.iter().all(|p| p.data.as_ref().map(Vec::len) == Some(4)));
}

#[tokio::test]
async fn test_backward_from_prev_cursor_reproduces_previous_page() -> anyhow::Result<()> {
    let store = transaction_store(transaction_rows(1..=4, 5));
    let orchestrator = orchestrator();

    let first = orchestrator
        .list(ListEndpoint::TransactionsByAddress, 3, None, &store, keep)
        .await?;
    let second = orchestrator
        .list(
            ListEndpoint::TransactionsByAddress,
            3,
            first.pagination_data.as_ref().and_then(|p| p.next_cursor.as_deref()),
            &store,
            keep,
        )
        .await?;
    let third = orchestrator
        .list(
            ListEndpoint::TransactionsByAddress,
            3,
            second.pagination_data.as_ref().and_then(|p| p.next_cursor.as_deref()),
            &store,
            keep,
        )
        .await?;

    // back from the third page lands on the second
    let back_to_second = orchestrator
        .list(
            ListEndpoint::TransactionsByAddress,
            -3,
            third.pagination_data.as_ref().and_then(|p| p.prev_cursor.as_deref()),
            &store,
            keep,
        )
        .await?;
    assert_eq!(back_to_second.data, second.data);
    let pagination = back_to_second.pagination_data.expect("pagination data");
    assert!(pagination.has_more);
    assert!(pagination.prev_cursor.is_some());

    // back from the second page lands on the first, which has nothing before it
    let back_to_first = orchestrator
        .list(
            ListEndpoint::TransactionsByAddress,
            -3,
            second.pagination_data.as_ref().and_then(|p| p.prev_cursor.as_deref()),
            &store,
            keep,
        )
        .await?;
    assert_eq!(back_to_first.data, first.data);
    let pagination = back_to_first.pagination_data.expect("pagination data");
    assert!(!pagination.has_more);
    assert_eq!(pagination.prev_cursor, None);
    Ok(())
}

#[tokio::test]
async fn test_token_holders_page_on_address_and_block() -> anyhow::Result<()> {
    let store = MemoryStore::new("holders", holding_rows(5, Some(6)), TokenHoldingRow::holder_key);

    let response = orchestrator()
        .list(
            ListEndpoint::AccountsByToken,
            2,
            None,
            &store,
            TokenHoldingView::try_from,
        )
        .await?;

    let pagination = response.pagination_data.expect("pagination data");
    assert_eq!(
        pagination.next_cursor.as_deref(),
        Some("0x0000000000000000000000000000000000000002_1002")
    );

    let data = response.data.expect("data");
    assert_eq!(data[0].balance, "1");
    assert_eq!(data[0].name, "(Not provided)");
    assert_eq!(data[1].balance, "2");

    // the emitted cursor feeds straight back in
    let next = orchestrator()
        .list(
            ListEndpoint::AccountsByToken,
            2,
            Some("0x0000000000000000000000000000000000000002_1002"),
            &store,
            TokenHoldingView::try_from,
        )
        .await?;
    assert_eq!(
        next.pagination_data.and_then(|p| p.prev_cursor).as_deref(),
        Some("0x0000000000000000000000000000000000000003_1003")
    );
    Ok(())
}

#[tokio::test]
async fn test_holdings_of_unresolved_token_use_native_decimals() -> anyhow::Result<()> {
    let store = MemoryStore::new("holdings", holding_rows(1, None), TokenHoldingRow::contract_key);

    let response = orchestrator()
        .list(
            ListEndpoint::TokensByAddress,
            10,
            None,
            &store,
            TokenHoldingView::try_from,
        )
        .await?;

    let json = serde_json::to_value(&response)?;
    assert_eq!(json["data"][0]["balance"], "0.000000000001");
    assert_eq!(json["data"][0]["decimals"], 18);
    assert_eq!(json["paginationData"]["nextCursor"], serde_json::Value::Null);
    Ok(())
}

#[tokio::test]
async fn test_internal_txs_by_address_page_on_id_and_role() -> anyhow::Result<()> {
    let store = MemoryStore::new("itxs", internal_tx_rows(3), ledgerscan::InternalTxRow::cursor_key);
    let orchestrator = orchestrator();

    let first = orchestrator
        .list(
            ListEndpoint::InternalTxsByAddress,
            3,
            None,
            &store,
            InternalTxView::try_from,
        )
        .await?;
    let cursor = first.pagination_data.and_then(|p| p.next_cursor);
    assert_eq!(
        cursor.as_deref(),
        Some("00000000000000000000000000000002_from")
    );

    let second = orchestrator
        .list(
            ListEndpoint::InternalTxsByAddress,
            3,
            cursor.as_deref(),
            &store,
            InternalTxView::try_from,
        )
        .await?;
    let json = serde_json::to_value(&second)?;
    assert_eq!(json["data"][0]["role"], "to");
    assert_eq!(json["data"][0]["action"]["gas"], "21000");
    assert_eq!(json["data"][2]["internalTxId"], "00000000000000000000000000000001");
    assert_eq!(json["paginationData"]["hasMore"], false);
    assert_eq!(json["paginationData"]["nextCursor"], serde_json::Value::Null);
    Ok(())
}

#[tokio::test]
async fn test_transfer_events_by_address_page_on_event_id() -> anyhow::Result<()> {
    let store = MemoryStore::new("transfers", transfer_event_rows(5), TransferEventRow::cursor_key);
    let orchestrator = orchestrator();

    let first = orchestrator
        .list(
            ListEndpoint::TransferEventsByAddress,
            2,
            None,
            &store,
            TransferEventView::try_from,
        )
        .await?;
    let json = serde_json::to_value(&first)?;
    assert_eq!(json["data"][0]["eventId"], "00000000000000000000000000000005");
    assert_eq!(json["data"][0]["totalSupply"], "5");
    assert_eq!(json["data"][0]["contract_detail"]["symbol"], "TKN");
    assert_eq!(json["data"][1]["totalSupply"], "4");
    assert_eq!(
        json["paginationData"],
        json!({
            "nextCursor": "00000000000000000000000000000004",
            "prevCursor": null,
            "take": 2,
            "hasMore": true
        })
    );

    let second = orchestrator
        .list(
            ListEndpoint::TransferEventsByAddress,
            2,
            Some("00000000000000000000000000000004"),
            &store,
            TransferEventView::try_from,
        )
        .await?;
    let ids: Vec<String> = second
        .data
        .unwrap_or_default()
        .into_iter()
        .map(|event| event.event_id)
        .collect();
    assert_eq!(
        ids,
        vec![
            "00000000000000000000000000000003",
            "00000000000000000000000000000002"
        ]
    );
    let pagination = second.pagination_data.expect("pagination data");
    assert_eq!(pagination.prev_cursor.as_deref(), Some("00000000000000000000000000000003"));
    assert_eq!(pagination.next_cursor.as_deref(), Some("00000000000000000000000000000002"));

    // an internal transaction cursor names the wrong id shape for this listing
    let err = orchestrator
        .list(
            ListEndpoint::TransferEventsByAddress,
            2,
            Some("00000000000000000000000000000004_to"),
            &store,
            TransferEventView::try_from,
        )
        .await
        .unwrap_err();
    assert!(err.is_client_error());
    Ok(())
}

#[tokio::test]
async fn test_take_as_query_text() -> anyhow::Result<()> {
    let store = balance_store(20);

    let response = orchestrator()
        .list_from_query(
            ListEndpoint::BalancesByAddress,
            Some("-2"),
            Some("10"),
            &store,
            BalanceView::try_from,
        )
        .await?;
    let ids: Vec<String> = response
        .data
        .unwrap_or_default()
        .into_iter()
        .map(|b| b.id)
        .collect();
    assert_eq!(ids, vec!["12", "11"]);

    for bad in ["0", "abc", "1000"] {
        let err = orchestrator()
            .list_from_query(
                ListEndpoint::BalancesByAddress,
                Some(bad),
                None,
                &store,
                BalanceView::try_from,
            )
            .await
            .unwrap_err();
        assert!(
            matches!(err, LedgerscanError::Pagination(PaginationError::InvalidTake { .. })),
            "{bad}: {err}"
        );
    }
    Ok(())
}
