// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for ledgerscan integration tests
//!
//! Row fixtures for each listing and in-memory stores built from them, so list
//! queries can be exercised end to end without a database.

#![allow(dead_code)]

use alloy_primitives::{Address, B128, B256};
use ledgerscan::{
    BalanceRow, ContractDetail, CursorKey, InternalTxRow, ListEndpoint, ListQueryOrchestrator,
    ListResponse, MemoryStore, NumericError, PaginationConfig, Role, TokenHoldingRow,
    TransactionRow, TransferEventRow,
};
use std::future::Future;

/// Install a tracing subscriber once, honouring `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Run a future to completion on a fresh single-threaded runtime
///
/// For property tests, which cannot be `#[tokio::test]`.
pub fn block_on<F: Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime")
        .block_on(future)
}

pub fn orchestrator() -> ListQueryOrchestrator {
    ListQueryOrchestrator::new(PaginationConfig::default())
}

/// `per_block` transactions in each of `blocks`, worth `transaction_index` ether each
pub fn transaction_rows(blocks: std::ops::RangeInclusive<u32>, per_block: u32) -> Vec<TransactionRow> {
    blocks
        .flat_map(|block_number| {
            (0..per_block).map(move |transaction_index| TransactionRow {
                hash: B256::with_last_byte(transaction_index as u8),
                block_number,
                transaction_index,
                from: Address::repeat_byte(0x01),
                to: Some(Address::repeat_byte(0x02)),
                value: Some(format!("{:x}", u128::from(transaction_index) * 10u128.pow(18))),
                gas_price: Some("3b9aca00".to_string()),
                gas_used: Some("5208".to_string()),
                timestamp: 1_700_000_000 + u64::from(block_number),
            })
        })
        .collect()
}

pub fn transaction_store(rows: Vec<TransactionRow>) -> MemoryStore<TransactionRow> {
    MemoryStore::new("transactions", rows, TransactionRow::cursor_key)
}

/// Balances with ids `1..=count`, balance `id` ether
pub fn balance_store(count: u32) -> MemoryStore<BalanceRow> {
    let rows = (1..=count)
        .map(|id| BalanceRow {
            id,
            block_number: id * 10,
            timestamp: 1_700_000_000 + u64::from(id),
            balance: format!("{id}000000000000000000"),
        })
        .collect();
    MemoryStore::new("balances", rows, BalanceRow::cursor_key)
}

/// One holding per holder address `0x00..01` through `0x00..holders`, all of one token
pub fn holding_rows(holders: u8, decimals: Option<u8>) -> Vec<TokenHoldingRow> {
    (1..=holders)
        .map(|n| TokenHoldingRow {
            address: Address::with_last_byte(n),
            contract: Address::repeat_byte(0xcc),
            block_number: 1_000 + u32::from(n),
            block_hash: B256::with_last_byte(n),
            balance: Some(format!("{n}000000")),
            name: None,
            symbol: Some("TKN".to_string()),
            decimals,
        })
        .collect()
}

/// Both sides of `count` internal transactions, as an address listing sees them
pub fn internal_tx_rows(count: u8) -> Vec<InternalTxRow> {
    (1..=count)
        .flat_map(|n| {
            [Role::From, Role::To].map(|role| InternalTxRow {
                internal_tx_id: B128::with_last_byte(n),
                transaction_hash: B256::with_last_byte(n),
                block_number: u32::from(n),
                role: Some(role),
                kind: "call".to_string(),
                timestamp: 1_600_000_000,
                action: Some(r#"{"gas":"0x5208","value":"0x0"}"#.to_string()),
                result: Some(r#"{"gasUsed":"0x5208"}"#.to_string()),
                error: None,
            })
        })
        .collect()
}

/// Transfers with event ids `1..=count`, event `n` moving `n` whole tokens
pub fn transfer_event_rows(count: u8) -> Vec<TransferEventRow> {
    (1..=count)
        .map(|n| TransferEventRow {
            event_id: B128::with_last_byte(n),
            transaction_hash: B256::with_last_byte(n),
            block_number: 2_000 + u32::from(n),
            address: Address::repeat_byte(0xcc),
            timestamp: 1_650_000_000 + u64::from(n),
            args: Some(format!(
                r#"["0x0101010101010101010101010101010101010101","0x0202020202020202020202020202020202020202","{n}000000000000000000"]"#
            )),
            contract_detail: ContractDetail {
                name: Some("Token".to_string()),
                symbol: Some("TKN".to_string()),
            },
            contract_interfaces: vec!["ERC20".to_string()],
        })
        .collect()
}

pub fn position(block_number: u32, transaction_index: u32) -> CursorKey {
    CursorKey::BlockNumberTransactionIndex {
        block_number,
        transaction_index,
    }
}

/// Identity formatter for listings that only care about cursors
pub fn keep<T>(row: T) -> Result<T, NumericError> {
    Ok(row)
}

/// Walk a listing forward page by page until `nextCursor` runs out
pub async fn walk_forward<R>(
    endpoint: ListEndpoint,
    take: i32,
    store: &MemoryStore<R>,
) -> Vec<ListResponse<R>>
where
    R: Clone + Send + Sync,
{
    let orchestrator = orchestrator();
    let mut pages = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let page = orchestrator
            .list(endpoint, take, cursor.as_deref(), store, keep)
            .await
            .expect("page");
        cursor = page
            .pagination_data
            .as_ref()
            .and_then(|p| p.next_cursor.clone());
        pages.push(page);
        if cursor.is_none() {
            return pages;
        }
    }
}
