// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the ledgerscan library.
//!
//! This module follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained handling ([`CursorError`],
//!   [`NumericError`], [`PaginationError`], [`StoreError`])
//! - **Unified error type** ([`LedgerscanError`]) returned by the list orchestrator
//!
//! Every error is either a client-input fault (a bad `take`, a cursor that does not
//! belong to the endpoint, an amount that is not an integer) or a server fault (the
//! store failed, or stored data could not be formatted). Use
//! [`LedgerscanError::is_client_error`] to tell them apart when mapping to a
//! response.
//!
//! # Examples
//!
//! ```rust
//! use ledgerscan::{CursorCodec, CursorKind, LedgerscanError};
//!
//! fn decode(raw: &str) -> Result<(), LedgerscanError> {
//!     CursorCodec::new(CursorKind::NumericId).decode(Some(raw))?;
//!     Ok(())
//! }
//!
//! let err = decode("not-a-number").unwrap_err();
//! assert!(err.is_client_error());
//! ```

mod cursor;
mod numeric;
mod pagination;
mod store;

pub use cursor::CursorError;
pub use numeric::NumericError;
pub use pagination::PaginationError;
pub use store::StoreError;

/// Unified error type for all ledgerscan operations.
///
/// All module-specific error types convert into `LedgerscanError` via `From`, so `?`
/// propagates them naturally.
#[derive(Debug, thiserror::Error)]
pub enum LedgerscanError {
    /// Error from cursor decoding or encoding.
    #[error("Cursor error: {0}")]
    Cursor(#[from] CursorError),

    /// Error from normalizing a caller-supplied amount.
    #[error("Numeric error: {0}")]
    Numeric(#[from] NumericError),

    /// Error from page validation or record fetching.
    #[error("Pagination error: {0}")]
    Pagination(#[from] PaginationError),

    /// A stored row could not be formatted.
    #[error("Failed to format record: {0}")]
    Format(NumericError),
}

impl LedgerscanError {
    /// Returns true for faults caused by the request rather than the server.
    pub fn is_client_error(&self) -> bool {
        match self {
            LedgerscanError::Cursor(e) => e.is_client_error(),
            LedgerscanError::Numeric(_) => true,
            LedgerscanError::Pagination(e) => e.is_client_error(),
            LedgerscanError::Format(_) => false,
        }
    }
}

impl From<StoreError> for LedgerscanError {
    fn from(err: StoreError) -> Self {
        LedgerscanError::Pagination(PaginationError::from(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::CursorKind;
    use crate::numeric::Radix;

    #[test]
    fn test_client_faults_are_classified() {
        let take: LedgerscanError = PaginationError::invalid_take(0, "must not be 0").into();
        assert!(take.is_client_error());

        let backward: LedgerscanError = PaginationError::BackwardPaginationRequiresCursor.into();
        assert!(backward.is_client_error());

        let malformed: LedgerscanError =
            CursorError::malformed(CursorKind::BlockNumberTransactionIndex, "500", 1).into();
        assert!(malformed.is_client_error());

        let numeric: LedgerscanError = NumericError::invalid_input("xyz", Radix::Decimal).into();
        assert!(numeric.is_client_error());
    }

    #[test]
    fn test_server_faults_are_classified() {
        let fetch: LedgerscanError = StoreError::unavailable("connection refused").into();
        assert!(!fetch.is_client_error());
        assert_eq!(
            fetch.to_string(),
            "Pagination error: Failed to fetch records: Store unavailable: connection refused"
        );

        let mismatch: LedgerscanError = CursorError::KindMismatch {
            expected: CursorKind::NumericId,
            found: CursorKind::BlockNumberTransactionIndex,
        }
        .into();
        assert!(!mismatch.is_client_error());

        let format = LedgerscanError::Format(NumericError::invalid_input("0xzz", Radix::Hex));
        assert!(!format.is_client_error());
    }

    #[test]
    fn test_malformed_cursor_message_names_the_kind() {
        let err = CursorError::malformed(CursorKind::BlockNumberTransactionIndex, "500", 1);
        assert_eq!(
            err.to_string(),
            "Invalid cursor format. Expected format: \"blockNumber_transactionIndex\" (2 field(s)), found 1 in \"500\""
        );
    }
}
