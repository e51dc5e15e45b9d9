// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token decimal precision type

use serde::{Deserialize, Serialize};

use crate::config::constants::NATIVE_DECIMALS;

/// Number of decimal places used to scale a base-unit amount
///
/// Native currency uses 18 (wei → ether). ERC-20 tokens declare their own count,
/// which the indexer may not have resolved; [`or_native`](Self::or_native) falls
/// back to 18 in that case, matching how explorer balances are rendered.
///
/// # Examples
///
/// ```
/// use ledgerscan::TokenDecimals;
///
/// assert_eq!(TokenDecimals::NATIVE.as_u8(), 18);
/// assert_eq!(TokenDecimals::or_native(Some(6)).as_u8(), 6);
/// assert_eq!(TokenDecimals::or_native(None), TokenDecimals::NATIVE);
/// assert_eq!(TokenDecimals::or_native(Some(0)), TokenDecimals::NATIVE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenDecimals(u8);

impl TokenDecimals {
    /// Native currency decimals (18)
    pub const NATIVE: Self = Self(NATIVE_DECIMALS);

    /// No scaling; the amount is rendered as a plain integer
    pub const NONE: Self = Self(0);

    /// Create a new decimal precision value
    pub const fn new(decimals: u8) -> Self {
        Self(decimals)
    }

    /// Use the declared decimals, or native decimals when unknown.
    ///
    /// A declared count of zero is treated as unknown.
    pub fn or_native(decimals: Option<u8>) -> Self {
        match decimals {
            Some(0) | None => Self::NATIVE,
            Some(declared) => Self(declared),
        }
    }

    /// Get the inner u8 value
    pub const fn as_u8(&self) -> u8 {
        self.0
    }
}

impl Default for TokenDecimals {
    fn default() -> Self {
        Self::NATIVE
    }
}

impl From<u8> for TokenDecimals {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TokenDecimals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} decimals", self.0)
    }
}
