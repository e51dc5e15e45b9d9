// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::cursor::CursorKey;
use crate::errors::NumericError;
use crate::numeric::{wei_to_ether, Radix};

/// Native balance of an address at one block, balance in wei (base 10)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceRow {
    /// Surrogate row id
    pub id: u32,
    /// Block the balance was recorded at
    pub block_number: u32,
    /// Block timestamp, seconds
    pub timestamp: u64,
    /// Wei, base 10
    pub balance: String,
}

impl BalanceRow {
    /// Listing key, newest id first
    pub fn cursor_key(&self) -> CursorKey {
        CursorKey::NumericId { id: self.id }
    }
}

/// Balance as served, in ether
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceView {
    /// Row id as text
    pub id: String,
    /// Block the balance was recorded at
    pub block_number: u32,
    /// Block timestamp as text
    pub timestamp: String,
    /// Ether
    pub balance: String,
}

impl TryFrom<BalanceRow> for BalanceView {
    type Error = NumericError;

    fn try_from(row: BalanceRow) -> Result<Self, Self::Error> {
        Ok(Self {
            balance: wei_to_ether(Some(&row.balance), Radix::Decimal)?,
            id: row.id.to_string(),
            block_number: row.block_number,
            timestamp: row.timestamp.to_string(),
        })
    }
}
