// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Opaque cursor text ↔ typed key

use alloy_primitives::{Address, B128};
use std::str::FromStr;

use super::key::{CursorKey, Role};
use super::kind::CursorKind;
use crate::config::constants::{CURSOR_DELIMITER, MAX_CURSOR_INTEGER};
use crate::errors::CursorError;

/// Encoder/decoder for one cursor kind
///
/// Cursors are opaque to callers; this type owns the wire contract. Decoding is
/// strict (exact field counts, fixed-width hex, 4-byte integers) and normalizes
/// hex to lowercase, so a decoded key re-encodes to the canonical string.
///
/// # Examples
///
/// ```
/// use ledgerscan::{CursorCodec, CursorKey, CursorKind};
///
/// let codec = CursorCodec::new(CursorKind::BlockNumberTransactionIndex);
///
/// let key = codec.decode(Some("500_3")).unwrap().unwrap();
/// assert_eq!(key, CursorKey::BlockNumberTransactionIndex { block_number: 500, transaction_index: 3 });
/// assert_eq!(codec.encode(&key).unwrap(), "500_3");
///
/// // absent and empty cursors mean "start of the listing", not an error
/// assert_eq!(codec.decode(None).unwrap(), None);
/// assert_eq!(codec.decode(Some("")).unwrap(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorCodec {
    kind: CursorKind,
}

impl CursorCodec {
    /// Create a codec for `kind`
    pub const fn new(kind: CursorKind) -> Self {
        Self { kind }
    }

    /// Kind this codec handles
    pub const fn kind(&self) -> CursorKind {
        self.kind
    }

    /// Encode a key to its opaque wire form
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::KindMismatch`] if `key` is not of this codec's kind.
    pub fn encode(&self, key: &CursorKey) -> Result<String, CursorError> {
        if key.kind() != self.kind {
            return Err(CursorError::KindMismatch {
                expected: self.kind,
                found: key.kind(),
            });
        }
        Ok(key.to_string())
    }

    /// Decode an opaque cursor
    ///
    /// Returns `Ok(None)` when the cursor is absent or empty.
    ///
    /// # Errors
    ///
    /// - [`CursorError::MalformedCursor`] if the field count does not match the kind
    /// - [`CursorError::InvalidCursorField`] if a field fails validation
    pub fn decode(&self, value: Option<&str>) -> Result<Option<CursorKey>, CursorError> {
        let raw = match value {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Ok(None),
        };

        let parts: Vec<&str> = raw.split(CURSOR_DELIMITER).collect();
        if parts.len() != self.kind.arity() {
            return Err(CursorError::malformed(self.kind, raw, parts.len()));
        }

        let key = match (self.kind, parts.as_slice()) {
            (CursorKind::AddressBlockNumber, [address, block_number]) => {
                CursorKey::AddressBlockNumber {
                    address: parse_address("address", address)?,
                    block_number: parse_u32("blockNumber", block_number)?,
                }
            }
            (CursorKind::ContractBlockNumber, [contract, block_number]) => {
                CursorKey::ContractBlockNumber {
                    contract: parse_address("contract", contract)?,
                    block_number: parse_u32("blockNumber", block_number)?,
                }
            }
            (CursorKind::BlockNumberTransactionIndex, [block_number, transaction_index]) => {
                CursorKey::BlockNumberTransactionIndex {
                    block_number: parse_u32("blockNumber", block_number)?,
                    transaction_index: parse_u32("transactionIndex", transaction_index)?,
                }
            }
            (CursorKind::NumericId, [id]) => CursorKey::NumericId {
                id: parse_u32("id", id)?,
            },
            (CursorKind::HexId(label), [id]) => CursorKey::HexId {
                label,
                id: parse_hex_id(label.field_name(), id)?,
            },
            (CursorKind::HexIdRole, [id, role]) => CursorKey::HexIdRole {
                id: parse_hex_id("internalTxId", id)?,
                role: Role::parse(role)
                    .ok_or_else(|| CursorError::invalid_field("role", *role, "expected \"to\" or \"from\""))?,
            },
            // arity was checked above, every kind has a matching arm
            _ => return Err(CursorError::malformed(self.kind, raw, parts.len())),
        };

        Ok(Some(key))
    }
}

/// `0x` followed by exactly 40 hex characters, any case
fn parse_address(field: &'static str, value: &str) -> Result<Address, CursorError> {
    let digits = value
        .strip_prefix("0x")
        .ok_or_else(|| CursorError::invalid_field(field, value, "expected 0x-prefixed address"))?;

    if digits.len() != 40 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CursorError::invalid_field(
            field,
            value,
            "expected 40 hex characters",
        ));
    }

    Address::from_str(digits).map_err(|e| CursorError::invalid_field(field, value, e.to_string()))
}

/// Unsigned base-10 integer within the 4-byte bound
fn parse_u32(field: &'static str, value: &str) -> Result<u32, CursorError> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CursorError::invalid_field(
            field,
            value,
            "expected a non-negative integer",
        ));
    }

    value.parse::<u32>().map_err(|_| {
        CursorError::invalid_field(
            field,
            value,
            format!("must be at most {MAX_CURSOR_INTEGER}"),
        )
    })
}

/// Exactly 32 hex characters, no prefix
fn parse_hex_id(field: &'static str, value: &str) -> Result<B128, CursorError> {
    if value.len() != 32 || !value.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CursorError::invalid_field(
            field,
            value,
            "expected a 32-character hexadecimal string",
        ));
    }

    B128::from_str(value).map_err(|e| CursorError::invalid_field(field, value, e.to_string()))
}
