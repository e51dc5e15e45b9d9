// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

use alloy_primitives::{hex, B128, B256};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::parse_object;
use crate::cursor::{CursorKey, HexIdLabel, Role};
use crate::errors::NumericError;
use crate::numeric::{hex_quantity, wei_to_ether, Radix};

/// Internal transaction as stored: trace payloads are raw JSON text
///
/// `role` is only set by address listings, where one internal transaction can
/// appear twice (once per side).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalTxRow {
    /// Trace id
    pub internal_tx_id: B128,
    /// Parent transaction
    pub transaction_hash: B256,
    /// Including block
    pub block_number: u32,
    /// Side the listed address appeared on
    pub role: Option<Role>,
    /// Trace type (`call`, `create`, ...)
    #[serde(rename = "type")]
    pub kind: String,
    /// Block timestamp, seconds
    pub timestamp: u64,
    /// Trace action as JSON text, quantities in hex
    pub action: Option<String>,
    /// Trace result as JSON text, quantities in hex
    pub result: Option<String>,
    /// Revert reason, if the trace failed
    pub error: Option<String>,
}

impl InternalTxRow {
    /// Listing key: id alone, or id and role in address listings
    pub fn cursor_key(&self) -> CursorKey {
        match self.role {
            Some(role) => CursorKey::HexIdRole {
                id: self.internal_tx_id,
                role,
            },
            None => CursorKey::HexId {
                label: HexIdLabel::InternalTxId,
                id: self.internal_tx_id,
            },
        }
    }
}

/// Internal transaction as served
///
/// `action.gas` and `result.gasUsed` become base-10 integers, `action.value`
/// becomes ether. Other payload fields pass through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalTxView {
    /// Trace id, 32 lowercase hex characters
    pub internal_tx_id: String,
    /// Parent transaction
    pub transaction_hash: B256,
    /// Including block
    pub block_number: u32,
    /// Side the listed address appeared on, omitted outside address listings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// Trace type
    #[serde(rename = "type")]
    pub kind: String,
    /// Block timestamp as text
    pub timestamp: String,
    /// Trace action with normalized `gas` and `value`
    pub action: Value,
    /// Trace result with normalized `gasUsed`
    pub result: Value,
    /// Revert reason, if the trace failed
    pub error: Option<String>,
}

impl TryFrom<InternalTxRow> for InternalTxView {
    type Error = NumericError;

    fn try_from(row: InternalTxRow) -> Result<Self, Self::Error> {
        let mut action = parse_object(row.action.as_deref());
        let gas = hex_quantity(action.get("gas").and_then(Value::as_str))?;
        let value = wei_to_ether(action.get("value").and_then(Value::as_str), Radix::Hex)?;
        action.insert("gas".to_string(), Value::String(gas));
        action.insert("value".to_string(), Value::String(value));

        let mut result = parse_object(row.result.as_deref());
        let gas_used = hex_quantity(result.get("gasUsed").and_then(Value::as_str))?;
        result.insert("gasUsed".to_string(), Value::String(gas_used));

        Ok(Self {
            internal_tx_id: hex::encode(row.internal_tx_id),
            transaction_hash: row.transaction_hash,
            block_number: row.block_number,
            role: row.role,
            kind: row.kind,
            timestamp: row.timestamp.to_string(),
            action: Value::Object(action),
            result: Value::Object(result),
            error: row.error,
        })
    }
}
