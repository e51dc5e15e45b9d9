// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! List endpoints and the response envelope
//!
//! Every paginated listing of the explorer goes through
//! [`ListQueryOrchestrator::list`]: validate `take`, decode the cursor with the
//! endpoint's [`CursorKind`], run one page through the engine, encode the boundary
//! keys and format each row.

mod orchestrator;

pub use orchestrator::ListQueryOrchestrator;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cursor::{CursorKind, HexIdLabel};

/// Paginated listings, each with a fixed cursor kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListEndpoint {
    /// All known addresses
    Addresses,
    /// All known tokens
    Tokens,
    /// Native balance history of one address
    BalancesByAddress,
    /// Holders of one token
    AccountsByToken,
    /// Tokens held by one address
    TokensByAddress,
    /// All transactions
    Transactions,
    /// Transactions of one block
    TransactionsByBlock,
    /// Transactions sent or received by one address
    TransactionsByAddress,
    /// Events emitted by one contract
    EventsByAddress,
    /// Transfer events touching one address
    TransferEventsByAddress,
    /// Internal transactions of one block
    InternalTxsByBlock,
    /// Internal transactions of one transaction
    InternalTxsByTransaction,
    /// Internal transactions touching one address, on either side
    InternalTxsByAddress,
}

impl ListEndpoint {
    /// Every endpoint
    pub const ALL: [ListEndpoint; 13] = [
        ListEndpoint::Addresses,
        ListEndpoint::Tokens,
        ListEndpoint::BalancesByAddress,
        ListEndpoint::AccountsByToken,
        ListEndpoint::TokensByAddress,
        ListEndpoint::Transactions,
        ListEndpoint::TransactionsByBlock,
        ListEndpoint::TransactionsByAddress,
        ListEndpoint::EventsByAddress,
        ListEndpoint::TransferEventsByAddress,
        ListEndpoint::InternalTxsByBlock,
        ListEndpoint::InternalTxsByTransaction,
        ListEndpoint::InternalTxsByAddress,
    ];

    /// Kind of cursor this listing accepts and emits
    pub const fn cursor_kind(self) -> CursorKind {
        match self {
            ListEndpoint::Addresses | ListEndpoint::Tokens | ListEndpoint::BalancesByAddress => {
                CursorKind::NumericId
            }
            ListEndpoint::AccountsByToken => CursorKind::AddressBlockNumber,
            ListEndpoint::TokensByAddress => CursorKind::ContractBlockNumber,
            ListEndpoint::Transactions
            | ListEndpoint::TransactionsByBlock
            | ListEndpoint::TransactionsByAddress => CursorKind::BlockNumberTransactionIndex,
            ListEndpoint::EventsByAddress | ListEndpoint::TransferEventsByAddress => {
                CursorKind::HexId(HexIdLabel::EventId)
            }
            ListEndpoint::InternalTxsByBlock | ListEndpoint::InternalTxsByTransaction => {
                CursorKind::HexId(HexIdLabel::InternalTxId)
            }
            ListEndpoint::InternalTxsByAddress => CursorKind::HexIdRole,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            ListEndpoint::Addresses => "addresses",
            ListEndpoint::Tokens => "tokens",
            ListEndpoint::BalancesByAddress => "balances_by_address",
            ListEndpoint::AccountsByToken => "accounts_by_token",
            ListEndpoint::TokensByAddress => "tokens_by_address",
            ListEndpoint::Transactions => "transactions",
            ListEndpoint::TransactionsByBlock => "transactions_by_block",
            ListEndpoint::TransactionsByAddress => "transactions_by_address",
            ListEndpoint::EventsByAddress => "events_by_address",
            ListEndpoint::TransferEventsByAddress => "transfer_events_by_address",
            ListEndpoint::InternalTxsByBlock => "internal_txs_by_block",
            ListEndpoint::InternalTxsByTransaction => "internal_txs_by_transaction",
            ListEndpoint::InternalTxsByAddress => "internal_txs_by_address",
        }
    }
}

impl fmt::Display for ListEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cursor block of a non-empty listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationData {
    /// Cursor to continue forward from, `null` at the end of the listing
    pub next_cursor: Option<String>,
    /// Cursor to go back from, `null` on the first page
    pub prev_cursor: Option<String>,
    /// Take as requested, sign included
    pub take: i32,
    /// Whether rows exist past this page in the requested direction
    pub has_more: bool,
}

/// Response envelope of every list endpoint
///
/// An empty listing serializes as `{"data":null}`.
///
/// # Examples
///
/// ```
/// use ledgerscan::ListResponse;
///
/// let empty: ListResponse<u32> = ListResponse::empty();
/// assert_eq!(serde_json::to_string(&empty).unwrap(), r#"{"data":null}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    /// Cursor block, absent when there is no data
    #[serde(
        rename = "paginationData",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub pagination_data: Option<PaginationData>,
    /// Rows of the page, `null` when the listing is empty
    pub data: Option<Vec<T>>,
}

impl<T> ListResponse<T> {
    /// Envelope for an empty listing
    pub fn empty() -> Self {
        Self {
            pagination_data: None,
            data: None,
        }
    }

    /// Returns true if there is no data
    pub fn is_empty(&self) -> bool {
        self.data.as_ref().is_none_or(Vec::is_empty)
    }
}
