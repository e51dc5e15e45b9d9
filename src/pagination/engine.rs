// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Over-fetch, trim and derive cursors

use std::future::Future;
use tracing::{debug, warn, Instrument};

use super::{Direction, FetchRequest, PageRequest, PageResult};
use crate::cursor::CursorKey;
use crate::errors::{PaginationError, StoreError};
use crate::spans;

/// Fetch one page and assemble it
///
/// Calls `fetch` exactly once with `|take| + 1` rows requested. Store failures are
/// wrapped in [`PaginationError::FetchFailed`]; nothing is retried here.
///
/// # Examples
///
/// ```
/// use ledgerscan::{paginate, CursorKey, PageRequest, StoreError, Take};
///
/// # tokio_test_block_on(async {
/// let request = PageRequest::new(Take::new(2).unwrap(), None).unwrap();
/// let page = paginate(
///     &request,
///     |fetch| async move { Ok::<_, StoreError>((1..=fetch.count as u32).rev().collect::<Vec<_>>()) },
///     |id| CursorKey::NumericId { id: *id },
/// )
/// .await
/// .unwrap();
///
/// assert_eq!(page.items, vec![3, 2]);
/// assert!(page.has_more);
/// # });
/// # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
/// # }
/// ```
pub async fn paginate<T, F, Fut, K>(
    request: &PageRequest,
    fetch: F,
    key_of: K,
) -> Result<PageResult<T>, PaginationError>
where
    F: FnOnce(FetchRequest) -> Fut,
    Fut: Future<Output = Result<Vec<T>, StoreError>>,
    K: Fn(&T) -> CursorKey,
{
    let take = request.take();
    let span = spans::paginate(take.get(), take.direction(), request.cursor().is_some());

    let rows = fetch(request.fetch_request())
        .instrument(span.clone())
        .await
        .map_err(|source| {
            warn!(parent: &span, error = %source, "Record fetch failed");
            PaginationError::FetchFailed { source }
        })?;

    let _guard = span.enter();
    Ok(assemble_page(request, rows, key_of))
}

/// Trim fetched rows to a page and derive its cursors
///
/// `rows` must be in fetch order (nearest the cursor first), as returned for
/// `request.fetch_request()`. This step does no I/O.
///
/// # Examples
///
/// ```
/// use ledgerscan::{assemble_page, CursorKey, PageRequest, Take};
///
/// // listing is 9, 8, 7, ... ; page backward by 2 from the row keyed 5
/// let cursor = CursorKey::NumericId { id: 5 };
/// let request = PageRequest::new(Take::new(-2).unwrap(), Some(cursor)).unwrap();
///
/// let page = assemble_page(&request, vec![6u32, 7, 8], |id| CursorKey::NumericId { id: *id });
///
/// assert_eq!(page.items, vec![7, 6]);
/// assert!(page.has_more);
/// assert_eq!(page.prev_cursor, Some(CursorKey::NumericId { id: 7 }));
/// assert_eq!(page.next_cursor, Some(CursorKey::NumericId { id: 6 }));
/// ```
pub fn assemble_page<T, K>(request: &PageRequest, mut rows: Vec<T>, key_of: K) -> PageResult<T>
where
    K: Fn(&T) -> CursorKey,
{
    let take = request.take();
    let size = take.size();
    let direction = take.direction();

    if rows.is_empty() {
        debug!(take = take.get(), "No records found");
        return PageResult::empty();
    }

    let fetch_count = take.fetch_count();
    if rows.len() > fetch_count {
        warn!(
            fetched = rows.len(),
            requested = fetch_count,
            "Record source returned more rows than requested, ignoring the surplus"
        );
        rows.truncate(fetch_count);
    }

    let has_more = rows.len() > size;

    match direction {
        Direction::Forward => rows.truncate(size),
        Direction::Backward => {
            rows.reverse();
            let surplus = rows.len().saturating_sub(size);
            rows.drain(..surplus);
        }
    }

    let next_cursor = if direction == Direction::Forward && !has_more {
        None
    } else {
        rows.last().map(&key_of)
    };

    let prev_cursor = if request.cursor().is_none() || (direction == Direction::Backward && !has_more)
    {
        None
    } else {
        rows.first().map(&key_of)
    };

    debug!(
        take = take.get(),
        items = rows.len(),
        has_more,
        "Assembled page"
    );

    PageResult {
        items: rows,
        has_more,
        next_cursor,
        prev_cursor,
    }
}
