// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for ledgerscan operations.
//!
//! Telemetry is kept out of business logic: each instrumented operation has a
//! span helper here instead of an `#[instrument]` attribute.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub async fn my_operation(&self, param: Type) -> Result<T> {
//!     let span = spans::my_operation(param_value);
//!     async move { /* business logic */ }.instrument(span).await
//! }
//! ```

use tracing::{Level, Span};

use crate::list::ListEndpoint;
use crate::pagination::Direction;

/// Create span for a complete list query: decode, fetch, format.
///
/// Parent: None (root span for this operation)
/// Children: paginate span
#[inline]
pub(crate) fn list_query(endpoint: ListEndpoint, source: &'static str, take: i32) -> Span {
    tracing::span!(
        Level::INFO,
        "ledgerscan.list_query",
        endpoint = %endpoint,
        source = source,
        take = take,
    )
}

/// Create span for a single paginate call.
///
/// Parent: list_query span, when called through the orchestrator
/// Children: the record source's own spans
#[inline]
pub(crate) fn paginate(take: i32, direction: Direction, has_cursor: bool) -> Span {
    tracing::debug_span!(
        "ledgerscan.paginate",
        take = take,
        direction = %direction,
        has_cursor = has_cursor,
    )
}
