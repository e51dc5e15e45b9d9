// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Decode, fetch, format

use tracing::{debug, Instrument};

use super::{ListEndpoint, ListResponse, PaginationData};
use crate::config::PaginationConfig;
use crate::cursor::{CursorCodec, CursorKey};
use crate::errors::{LedgerscanError, NumericError};
use crate::pagination::{paginate, PageRequest};
use crate::spans;
use crate::store::RecordSource;
use crate::types::take::Take;

/// Runs list queries for every endpoint against a [`RecordSource`]
///
/// Holds no state besides its configuration; one orchestrator can serve every
/// endpoint concurrently.
///
/// # Examples
///
/// ```
/// use ledgerscan::{CursorKey, ListEndpoint, ListQueryOrchestrator, MemoryStore, PaginationConfig};
///
/// # tokio_test_block_on(async {
/// let store = MemoryStore::new("addresses", (1..=5).collect::<Vec<u32>>(), |id| CursorKey::NumericId { id: *id });
/// let orchestrator = ListQueryOrchestrator::new(PaginationConfig::default());
///
/// let response = orchestrator
///     .list(ListEndpoint::Addresses, 2, None, &store, |id| Ok(id.to_string()))
///     .await
///     .unwrap();
///
/// assert_eq!(response.data, Some(vec!["5".to_string(), "4".to_string()]));
/// let pagination = response.pagination_data.unwrap();
/// assert_eq!(pagination.next_cursor.as_deref(), Some("4"));
/// assert_eq!(pagination.prev_cursor, None);
/// # });
/// # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ListQueryOrchestrator {
    config: PaginationConfig,
}

impl ListQueryOrchestrator {
    /// Creates an orchestrator with the given paging limits
    pub fn new(config: PaginationConfig) -> Self {
        Self { config }
    }

    /// Paging limits in use
    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// Serve one page of `endpoint`
    ///
    /// A page is returned only when every step succeeds; there are no partial
    /// results.
    ///
    /// # Errors
    ///
    /// - [`LedgerscanError::Pagination`] for an invalid `take`, backward travel
    ///   without a cursor, or a failed fetch
    /// - [`LedgerscanError::Cursor`] for a cursor that does not decode with the
    ///   endpoint's kind, or a source whose keys are of another kind
    /// - [`LedgerscanError::Format`] when `format` rejects a stored row
    pub async fn list<S, O, F>(
        &self,
        endpoint: ListEndpoint,
        take: i32,
        cursor: Option<&str>,
        source: &S,
        format: F,
    ) -> Result<ListResponse<O>, LedgerscanError>
    where
        S: RecordSource + ?Sized,
        F: Fn(S::Row) -> Result<O, NumericError>,
    {
        let span = spans::list_query(endpoint, source.name(), take);
        async move {
            let take = Take::bounded(take, &self.config)?;
            self.run(endpoint, take, cursor, source, format).await
        }
        .instrument(span)
        .await
    }

    /// Same as [`list`](Self::list), with `take` as raw query text
    ///
    /// A missing `take` falls back to the configured default.
    pub async fn list_from_query<S, O, F>(
        &self,
        endpoint: ListEndpoint,
        take: Option<&str>,
        cursor: Option<&str>,
        source: &S,
        format: F,
    ) -> Result<ListResponse<O>, LedgerscanError>
    where
        S: RecordSource + ?Sized,
        F: Fn(S::Row) -> Result<O, NumericError>,
    {
        let take = Take::from_query(take, &self.config)?;
        self.list(endpoint, take.get(), cursor, source, format).await
    }

    async fn run<S, O, F>(
        &self,
        endpoint: ListEndpoint,
        take: Take,
        cursor: Option<&str>,
        source: &S,
        format: F,
    ) -> Result<ListResponse<O>, LedgerscanError>
    where
        S: RecordSource + ?Sized,
        F: Fn(S::Row) -> Result<O, NumericError>,
    {
        let codec = CursorCodec::new(endpoint.cursor_kind());
        let cursor = codec.decode(cursor)?;
        let request = PageRequest::new(take, cursor)?;

        let page = paginate(
            &request,
            |fetch| source.fetch(fetch),
            |row| source.cursor_key(row),
        )
        .await?;

        if page.is_empty() {
            debug!(%endpoint, "Empty listing");
            return Ok(ListResponse::empty());
        }

        let encode = |key: Option<&CursorKey>| key.map(|key| codec.encode(key)).transpose();
        let next_cursor = encode(page.next_cursor.as_ref())?;
        let prev_cursor = encode(page.prev_cursor.as_ref())?;

        let page = page.try_map(format).map_err(LedgerscanError::Format)?;

        debug!(
            %endpoint,
            rows = page.items.len(),
            has_more = page.has_more,
            "Served listing page"
        );

        Ok(ListResponse {
            pagination_data: Some(PaginationData {
                next_cursor,
                prev_cursor,
                take: take.get(),
                has_more: page.has_more,
            }),
            data: Some(page.items),
        })
    }
}
