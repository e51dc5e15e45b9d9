// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Exact normalization of base-unit ledger amounts
//!
//! Ledger amounts are stored as integers in their smallest unit (wei for the native
//! currency, the token's base unit for ERC-20s), either as base-10 text or as hex
//! quantities. Rendering them for humans means dividing by `10^decimals`, which must
//! be exact: amounts routinely exceed `u64` and an `f64` cannot represent 18
//! fractional digits. Everything here is done on big integers; the decimal point is
//! inserted textually and never rounded.
//!
//! # Examples
//!
//! ```
//! use ledgerscan::{normalize, Radix, TokenDecimals};
//!
//! let ether = normalize(Some("1500000000000000000"), Radix::Decimal, TokenDecimals::NATIVE).unwrap();
//! assert_eq!(ether, "1.5");
//!
//! let ether = normalize(Some("de0b6b3a7640000"), Radix::Hex, TokenDecimals::NATIVE).unwrap();
//! assert_eq!(ether, "1");
//!
//! let usdc = normalize(Some("100000000"), Radix::Decimal, TokenDecimals::new(6)).unwrap();
//! assert_eq!(usdc, "100");
//! ```

use bigdecimal::num_bigint::{BigInt, BigUint};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::errors::NumericError;
use crate::types::decimals::TokenDecimals;

/// Base an integer amount is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Radix {
    /// Base 10
    Decimal,
    /// Base 16, with or without a `0x` prefix
    Hex,
}

impl Radix {
    /// Numeric base
    pub const fn base(self) -> u32 {
        match self {
            Radix::Decimal => 10,
            Radix::Hex => 16,
        }
    }
}

impl std::fmt::Display for Radix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Radix::Decimal => f.write_str("base-10"),
            Radix::Hex => f.write_str("base-16"),
        }
    }
}

/// Parse an unsigned integer amount in the given base
///
/// Missing or empty input is zero. Signs, separators and whitespace are rejected.
pub fn parse_base_units(value: Option<&str>, radix: Radix) -> Result<BigUint, NumericError> {
    let raw = match value {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Ok(BigUint::default()),
    };

    let digits = match radix {
        Radix::Hex => raw
            .strip_prefix("0x")
            .or_else(|| raw.strip_prefix("0X"))
            .unwrap_or(raw),
        Radix::Decimal => raw,
    };

    // a bare "0x" is still zero
    if digits.is_empty() {
        return Ok(BigUint::default());
    }

    if !digits.chars().all(|c| c.is_digit(radix.base())) {
        return Err(NumericError::invalid_input(raw, radix));
    }

    BigUint::parse_bytes(digits.as_bytes(), radix.base())
        .ok_or_else(|| NumericError::invalid_input(raw, radix))
}

/// Render `value / 10^decimals` exactly, in plain decimal notation
///
/// Trailing fractional zeros are trimmed and a whole result has no decimal point.
/// Missing or empty input renders as `"0"`.
///
/// # Errors
///
/// Returns [`NumericError::InvalidNumericInput`] when `value` is not an unsigned
/// integer in `radix`.
pub fn normalize(
    value: Option<&str>,
    radix: Radix,
    decimals: TokenDecimals,
) -> Result<String, NumericError> {
    let amount = parse_base_units(value, radix)?;
    Ok(format_scaled(&amount, decimals))
}

/// Same as [`normalize`], returned as a [`BigDecimal`] for further arithmetic
///
/// # Example
///
/// ```
/// use bigdecimal::BigDecimal;
/// use ledgerscan::{normalize_to_decimal, Radix, TokenDecimals};
/// use std::str::FromStr;
///
/// let value = normalize_to_decimal(Some("123450"), Radix::Decimal, TokenDecimals::new(4)).unwrap();
/// assert_eq!(value, BigDecimal::from_str("12.345").unwrap());
/// ```
pub fn normalize_to_decimal(
    value: Option<&str>,
    radix: Radix,
    decimals: TokenDecimals,
) -> Result<BigDecimal, NumericError> {
    let amount = parse_base_units(value, radix)?;
    Ok(BigDecimal::new(BigInt::from(amount), i64::from(decimals.as_u8())).normalized())
}

/// Native currency amount in wei → ether
pub fn wei_to_ether(value: Option<&str>, radix: Radix) -> Result<String, NumericError> {
    normalize(value, radix, TokenDecimals::NATIVE)
}

/// Hex quantity → base-10 integer text (gas, gas used, nonces)
pub fn hex_quantity(value: Option<&str>) -> Result<String, NumericError> {
    normalize(value, Radix::Hex, TokenDecimals::NONE)
}

/// Insert the decimal point into an already parsed amount
pub(crate) fn format_scaled(amount: &BigUint, decimals: TokenDecimals) -> String {
    let width = usize::from(decimals.as_u8());
    if width == 0 {
        return amount.to_string();
    }

    let divisor = BigUint::from(10u32).pow(u32::from(decimals.as_u8()));
    let whole = amount / &divisor;
    let fractional = amount % &divisor;

    let fractional_str = format!("{:0>width$}", fractional.to_string());
    let trimmed = fractional_str.trim_end_matches('0');

    if trimmed.is_empty() {
        whole.to_string()
    } else {
        format!("{whole}.{trimmed}")
    }
}
