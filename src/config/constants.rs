// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Wire-format and formatting constants
//!
//! This module centralizes the magic values shared by the cursor codec, the amount
//! normalizer and the entity formatters.

/// Separator between cursor fields. Addresses and hex ids never contain it.
pub const CURSOR_DELIMITER: &str = "_";

/// Largest block number, transaction index or numeric id a cursor may carry.
pub const MAX_CURSOR_INTEGER: u32 = u32::MAX;

/// Decimals of the native currency (wei → ether).
pub const NATIVE_DECIMALS: u8 = 18;

/// Placeholder for token names and symbols the indexer never resolved.
pub const NOT_PROVIDED: &str = "(Not provided)";

/// Page size used when the caller omits `take`.
pub const DEFAULT_TAKE: i32 = 10;

/// Largest page size a caller may request in either direction.
pub const MAX_TAKE: u32 = 100;
