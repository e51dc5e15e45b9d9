// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! In-memory record source

use async_trait::async_trait;
use std::cmp::Ordering;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
use tracing::debug;

use super::RecordSource;
use crate::cursor::CursorKey;
use crate::errors::StoreError;
use crate::pagination::{Direction, FetchRequest};

/// Rows held in listing order
///
/// Rows are sorted once at construction by [`CursorKey::natural_cmp`] of their key
/// and never change afterwards, so concurrent fetches need no locking.
///
/// # Examples
///
/// ```rust
/// use ledgerscan::{CursorKey, MemoryStore, StoreError};
///
/// let store = MemoryStore::new("ids", vec![3u32, 1, 2], |id| CursorKey::NumericId { id: *id });
/// assert_eq!(store.rows(), &[3, 2, 1]);
///
/// // every fetch fails, for error-path tests
/// let failing = store.with_failure(StoreError::unavailable("connection refused"));
/// ```
#[derive(Debug)]
pub struct MemoryStore<R> {
    name: &'static str,
    rows: Vec<R>,
    key_of: fn(&R) -> CursorKey,
    failure: Option<StoreError>,
    fetches: AtomicUsize,
}

impl<R> MemoryStore<R> {
    /// Creates a store over `rows`, sorting them into listing order
    pub fn new(name: &'static str, mut rows: Vec<R>, key_of: fn(&R) -> CursorKey) -> Self {
        rows.sort_by(|a, b| key_of(a).natural_cmp(&key_of(b)));
        Self {
            name,
            rows,
            key_of,
            failure: None,
            fetches: AtomicUsize::new(0),
        }
    }

    /// Makes every fetch fail with `error`
    pub fn with_failure(mut self, error: StoreError) -> Self {
        self.failure = Some(error);
        self
    }

    /// All rows in listing order
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Number of fetches served so far, failed ones included
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(AtomicOrdering::Relaxed)
    }

    /// Index of the first row past `cursor` going forward
    fn after(&self, cursor: &CursorKey) -> usize {
        self.rows
            .partition_point(|row| (self.key_of)(row).natural_cmp(cursor) != Ordering::Greater)
    }

    /// Index one past the last row before `cursor`
    fn before(&self, cursor: &CursorKey) -> usize {
        self.rows
            .partition_point(|row| (self.key_of)(row).natural_cmp(cursor) == Ordering::Less)
    }
}

impl<R: Clone> MemoryStore<R> {
    fn select(&self, request: &FetchRequest) -> Vec<R> {
        match (request.direction, request.cursor.as_ref()) {
            (Direction::Forward, None) => self.rows.iter().take(request.count).cloned().collect(),
            (Direction::Forward, Some(cursor)) => self.rows[self.after(cursor)..]
                .iter()
                .take(request.count)
                .cloned()
                .collect(),
            // nothing lies before the start of the listing
            (Direction::Backward, None) => Vec::new(),
            (Direction::Backward, Some(cursor)) => self.rows[..self.before(cursor)]
                .iter()
                .rev()
                .take(request.count)
                .cloned()
                .collect(),
        }
    }
}

#[async_trait]
impl<R> RecordSource for MemoryStore<R>
where
    R: Clone + Send + Sync,
{
    type Row = R;

    async fn fetch(&self, request: FetchRequest) -> Result<Vec<R>, StoreError> {
        self.fetches.fetch_add(1, AtomicOrdering::Relaxed);

        if let Some(error) = &self.failure {
            debug!(store = self.name, error = %error, "Memory store configured to fail");
            return Err(error.clone());
        }

        let rows = self.select(&request);
        debug!(
            store = self.name,
            requested = request.count,
            returned = rows.len(),
            direction = %request.direction,
            "Memory store fetch"
        );
        Ok(rows)
    }

    fn cursor_key(&self, row: &R) -> CursorKey {
        (self.key_of)(row)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
