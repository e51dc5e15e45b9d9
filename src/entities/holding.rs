// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

use alloy_primitives::{Address, B256};
use serde::{Deserialize, Serialize};

use crate::config::constants::NOT_PROVIDED;
use crate::cursor::CursorKey;
use crate::errors::NumericError;
use crate::numeric::{normalize, Radix};
use crate::types::decimals::TokenDecimals;

/// Token balance of a holder, joined with what the indexer knows about the token
///
/// The same row backs two listings: holders of a token (keyed by holder) and
/// tokens of a holder (keyed by contract).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenHoldingRow {
    /// Holder address
    pub address: Address,
    /// Token contract
    pub contract: Address,
    /// Block the balance was recorded at
    pub block_number: u32,
    /// Hash of that block
    pub block_hash: B256,
    /// Base units, base 10
    pub balance: Option<String>,
    /// Token name, if the indexer resolved it
    pub name: Option<String>,
    /// Token symbol, if the indexer resolved it
    pub symbol: Option<String>,
    /// Declared decimals; `None` and `0` both mean unknown
    pub decimals: Option<u8>,
}

impl TokenHoldingRow {
    /// Key in a token's holder listing
    pub fn holder_key(&self) -> CursorKey {
        CursorKey::AddressBlockNumber {
            address: self.address,
            block_number: self.block_number,
        }
    }

    /// Key in a holder's token listing
    pub fn contract_key(&self) -> CursorKey {
        CursorKey::ContractBlockNumber {
            contract: self.contract,
            block_number: self.block_number,
        }
    }

    fn decimals(&self) -> TokenDecimals {
        TokenDecimals::or_native(self.decimals)
    }
}

/// Token holding as served, balance in whole tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenHoldingView {
    /// Holder address
    pub address: Address,
    /// Token contract
    pub contract: Address,
    /// Block the balance was recorded at
    pub block_number: u32,
    /// Hash of that block
    pub block_hash: B256,
    /// Balance scaled by `decimals`
    pub balance: String,
    /// Token name or `(Not provided)`
    pub name: String,
    /// Token symbol or `(Not provided)`
    pub symbol: String,
    /// Decimals the balance was scaled by
    pub decimals: TokenDecimals,
}

impl TryFrom<TokenHoldingRow> for TokenHoldingView {
    type Error = NumericError;

    fn try_from(row: TokenHoldingRow) -> Result<Self, Self::Error> {
        let decimals = row.decimals();
        let balance = normalize(row.balance.as_deref(), Radix::Decimal, decimals)?;

        Ok(Self {
            address: row.address,
            contract: row.contract,
            block_number: row.block_number,
            block_hash: row.block_hash,
            balance,
            name: or_not_provided(row.name),
            symbol: or_not_provided(row.symbol),
            decimals,
        })
    }
}

/// Missing or empty text is served as `(Not provided)`
fn or_not_provided(value: Option<String>) -> String {
    value
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| NOT_PROVIDED.to_string())
}
