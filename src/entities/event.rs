// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

use alloy_primitives::{hex, Address, B128, B256};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{parse_json, parse_object};
use crate::cursor::{CursorKey, HexIdLabel};
use crate::errors::NumericError;
use crate::numeric::{normalize, wei_to_ether, Radix};
use crate::types::decimals::TokenDecimals;

/// Name and symbol of the emitting contract, as far as the indexer knows them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractDetail {
    /// Contract name
    pub name: Option<String>,
    /// Token symbol
    pub symbol: Option<String>,
}

/// Log event joined with its transaction and emitting contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRow {
    /// Event id
    pub event_id: B128,
    /// Emitting transaction
    pub transaction_hash: B256,
    /// Including block
    pub block_number: u32,
    /// Emitting contract
    pub address: Address,
    /// Decoded event name, if the ABI was known
    pub event: Option<String>,
    /// Block timestamp, seconds
    pub timestamp: u64,
    /// Decoded arguments as JSON text
    pub args: Option<String>,
    /// Value of the emitting transaction, wei, hex
    pub transaction_value: Option<String>,
    /// Receipt of the emitting transaction as JSON text
    pub receipt: Option<String>,
    /// What is known about the emitting contract
    pub contract_detail: ContractDetail,
}

impl EventRow {
    /// Listing key, newest event first
    pub fn cursor_key(&self) -> CursorKey {
        event_key(self.event_id)
    }
}

/// Emitting transaction as served with an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventTransactionView {
    /// Ether
    pub value: String,
    /// Receipt with `logs` narrowed to the served event
    pub receipt: Value,
}

/// Log event as served
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventView {
    /// Event id, 32 lowercase hex characters
    pub event_id: String,
    /// Emitting transaction
    pub transaction_hash: B256,
    /// Including block
    pub block_number: u32,
    /// Emitting contract
    pub address: Address,
    /// Decoded event name
    pub event: Option<String>,
    /// Block timestamp as text
    pub timestamp: String,
    /// Decoded arguments, `null` when unreadable
    pub args: Value,
    /// Emitting transaction
    pub transaction: EventTransactionView,
    /// What is known about the emitting contract
    #[serde(rename = "contract_detail")]
    pub contract_detail: ContractDetail,
}

impl TryFrom<EventRow> for EventView {
    type Error = NumericError;

    fn try_from(row: EventRow) -> Result<Self, Self::Error> {
        let event_id = hex::encode(row.event_id);
        let value = wei_to_ether(row.transaction_value.as_deref(), Radix::Hex)?;

        let mut receipt = parse_object(row.receipt.as_deref());
        if let Some(Value::Array(logs)) = receipt.get_mut("logs") {
            logs.retain(|log| log_belongs_to(log, &event_id));
        }

        Ok(Self {
            event_id,
            transaction_hash: row.transaction_hash,
            block_number: row.block_number,
            address: row.address,
            event: row.event,
            timestamp: row.timestamp.to_string(),
            args: parse_json(row.args.as_deref()).unwrap_or(Value::Null),
            transaction: EventTransactionView {
                value,
                receipt: Value::Object(receipt),
            },
            contract_detail: row.contract_detail,
        })
    }
}

/// Token transfer event of an address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferEventRow {
    /// Event id
    pub event_id: B128,
    /// Emitting transaction
    pub transaction_hash: B256,
    /// Including block
    pub block_number: u32,
    /// Token contract
    pub address: Address,
    /// Block timestamp, seconds
    pub timestamp: u64,
    /// Decoded `[from, to, amount]` as JSON text, amount in base units
    pub args: Option<String>,
    /// What is known about the token contract
    pub contract_detail: ContractDetail,
    /// Interfaces the token contract implements (`ERC20`, `ERC721`, ...)
    pub contract_interfaces: Vec<String>,
}

impl TransferEventRow {
    /// Listing key, newest event first
    pub fn cursor_key(&self) -> CursorKey {
        event_key(self.event_id)
    }
}

/// Transfer event as served
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferEventView {
    /// Event id, 32 lowercase hex characters
    pub event_id: String,
    /// Emitting transaction
    pub transaction_hash: B256,
    /// Including block
    pub block_number: u32,
    /// Token contract
    pub address: Address,
    /// Block timestamp as text
    pub timestamp: String,
    /// Decoded arguments, `null` when unreadable
    pub args: Value,
    /// Transferred amount scaled by 18 decimals, `"0"` when `args` is not a triple
    pub total_supply: String,
    /// What is known about the token contract
    #[serde(rename = "contract_detail")]
    pub contract_detail: ContractDetail,
    /// Interfaces the token contract implements
    #[serde(rename = "contract_interface")]
    pub contract_interface: Vec<String>,
}

impl TryFrom<TransferEventRow> for TransferEventView {
    type Error = NumericError;

    fn try_from(row: TransferEventRow) -> Result<Self, Self::Error> {
        let args = parse_json(row.args.as_deref()).unwrap_or(Value::Null);

        let total_supply = match args.as_array().map(Vec::as_slice) {
            Some([_, _, amount]) => {
                let amount = match amount {
                    Value::String(text) => text.clone(),
                    other => other.to_string(),
                };
                normalize(Some(amount.as_str()), Radix::Decimal, TokenDecimals::NATIVE)?
            }
            _ => "0".to_string(),
        };

        Ok(Self {
            event_id: hex::encode(row.event_id),
            transaction_hash: row.transaction_hash,
            block_number: row.block_number,
            address: row.address,
            timestamp: row.timestamp.to_string(),
            args,
            total_supply,
            contract_detail: row.contract_detail,
            contract_interface: row.contract_interfaces,
        })
    }
}

fn event_key(id: B128) -> CursorKey {
    CursorKey::HexId {
        label: HexIdLabel::EventId,
        id,
    }
}

/// Whether a receipt log carries `event_id`, ignoring case and a `0x` prefix
fn log_belongs_to(log: &Value, event_id: &str) -> bool {
    log.get("eventId")
        .and_then(Value::as_str)
        .map(|id| id.strip_prefix("0x").unwrap_or(id))
        .is_some_and(|id| id.eq_ignore_ascii_case(event_id))
}
