// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for page requests and page assembly.

use super::StoreError;

/// Errors raised while validating a page request or fetching its rows.
///
/// # Examples
///
/// ```rust
/// use ledgerscan::{PageRequest, PaginationError, Take};
///
/// let take = Take::new(-5).unwrap();
/// assert!(matches!(
///     PageRequest::new(take, None),
///     Err(PaginationError::BackwardPaginationRequiresCursor)
/// ));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum PaginationError {
    /// `take` is zero, not an integer, or outside the configured bound.
    #[error("Invalid take \"{take}\": {reason}")]
    InvalidTake {
        /// Raw take as received
        take: String,
        /// Why it was rejected
        reason: String,
    },

    /// Negative `take` without a cursor has no anchor to move back from.
    #[error("Cannot paginate backward without a cursor.")]
    BackwardPaginationRequiresCursor,

    /// The record source failed.
    #[error("Failed to fetch records: {source}")]
    FetchFailed {
        /// Underlying store failure
        #[from]
        source: StoreError,
    },
}

impl PaginationError {
    /// Create an `InvalidTake` error.
    pub fn invalid_take(take: impl ToString, reason: impl Into<String>) -> Self {
        PaginationError::InvalidTake {
            take: take.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns true when the error was caused by caller-supplied paging input.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, PaginationError::FetchFailed { .. })
    }
}
