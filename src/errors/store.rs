// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types reported by record sources.

/// Failure reported by a [`RecordSource`](crate::RecordSource) implementation.
///
/// Timeouts, retries and connection handling belong to the store; this type only
/// carries what went wrong so the pagination layer can surface it as a server fault.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The query ran but failed.
    #[error("Store query failed: {details}")]
    QueryFailed {
        /// Details from the store
        details: String,
    },

    /// The store could not be reached.
    #[error("Store unavailable: {details}")]
    Unavailable {
        /// Details from the store
        details: String,
    },
}

impl StoreError {
    /// Create a `QueryFailed` error with details.
    pub fn query_failed(details: impl Into<String>) -> Self {
        StoreError::QueryFailed {
            details: details.into(),
        }
    }

    /// Create an `Unavailable` error with details.
    pub fn unavailable(details: impl Into<String>) -> Self {
        StoreError::Unavailable {
            details: details.into(),
        }
    }
}
