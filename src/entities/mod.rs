// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Stored rows and the views served for them
//!
//! Each `*Row` is what a record source reads; each `*View` is what a list endpoint
//! returns, with every amount normalized to its display unit. Conversions are
//! `TryFrom` so they can be handed straight to
//! [`ListQueryOrchestrator::list`](crate::ListQueryOrchestrator::list) as the
//! formatter.

mod balance;
mod event;
mod holding;
mod internal_tx;
mod transaction;

pub use balance::{BalanceRow, BalanceView};
pub use event::{
    ContractDetail, EventRow, EventTransactionView, EventView, TransferEventRow,
    TransferEventView,
};
pub use holding::{TokenHoldingRow, TokenHoldingView};
pub use internal_tx::{InternalTxRow, InternalTxView};
pub use transaction::{TransactionRow, TransactionView};

use serde_json::{Map, Value};
use tracing::debug;

/// Parse stored JSON text; missing, empty or unreadable text is `None`
fn parse_json(raw: Option<&str>) -> Option<Value> {
    let raw = raw.filter(|raw| !raw.is_empty())?;

    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!(error = %e, "Unreadable stored payload, treating as empty");
            None
        }
    }
}

/// Parse a stored payload; anything but a JSON object reads as `{}`
fn parse_object(raw: Option<&str>) -> Map<String, Value> {
    match parse_json(raw) {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    }
}
