// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for base-unit amount normalization.

use crate::numeric::Radix;

/// Errors raised while normalizing integer ledger amounts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumericError {
    /// The value is not an unsigned integer in the stated base.
    #[error("Invalid numeric input: \"{value}\" is not a {radix} integer")]
    InvalidNumericInput {
        /// Raw value as received
        value: String,
        /// Base the value was parsed in
        radix: Radix,
    },
}

impl NumericError {
    /// Create an `InvalidNumericInput` error.
    pub fn invalid_input(value: impl Into<String>, radix: Radix) -> Self {
        NumericError::InvalidNumericInput {
            value: value.into(),
            radix,
        }
    }
}
