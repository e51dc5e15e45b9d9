// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

use alloy_primitives::{Address, B256};
use serde::{Deserialize, Serialize};

use crate::cursor::CursorKey;
use crate::errors::NumericError;
use crate::numeric::{hex_quantity, wei_to_ether, Radix};

/// Transaction as stored, quantities as hex text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRow {
    /// Transaction hash
    pub hash: B256,
    /// Including block
    pub block_number: u32,
    /// Position within the block
    pub transaction_index: u32,
    /// Sender
    pub from: Address,
    /// `None` for contract creation
    pub to: Option<Address>,
    /// Wei, hex
    pub value: Option<String>,
    /// Wei per gas, hex
    pub gas_price: Option<String>,
    /// Gas, hex
    pub gas_used: Option<String>,
    /// Block timestamp, seconds
    pub timestamp: u64,
}

impl TransactionRow {
    /// Listing key, newest block and index first
    pub fn cursor_key(&self) -> CursorKey {
        CursorKey::BlockNumberTransactionIndex {
            block_number: self.block_number,
            transaction_index: self.transaction_index,
        }
    }
}

/// Transaction as served: value and gas price in ether, gas used as an integer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionView {
    /// Transaction hash
    pub hash: B256,
    /// Including block
    pub block_number: u32,
    /// Position within the block
    pub transaction_index: u32,
    /// Sender
    pub from: Address,
    /// Recipient, `null` for contract creation
    pub to: Option<Address>,
    /// Ether
    pub value: String,
    /// Ether per gas
    pub gas_price: String,
    /// Gas as a base-10 integer
    pub gas_used: String,
    /// Block timestamp as text
    pub timestamp: String,
}

impl TryFrom<TransactionRow> for TransactionView {
    type Error = NumericError;

    fn try_from(row: TransactionRow) -> Result<Self, Self::Error> {
        Ok(Self {
            value: wei_to_ether(row.value.as_deref(), Radix::Hex)?,
            gas_price: wei_to_ether(row.gas_price.as_deref(), Radix::Hex)?,
            gas_used: hex_quantity(row.gas_used.as_deref())?,
            hash: row.hash,
            block_number: row.block_number,
            transaction_index: row.transaction_index,
            from: row.from,
            to: row.to,
            timestamp: row.timestamp.to_string(),
        })
    }
}
