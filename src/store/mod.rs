// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Record sources behind the pagination engine
//!
//! A [`RecordSource`] answers exactly one kind of query: "give me up to `count` rows
//! strictly past this key, in this direction, nearest the key first". Everything
//! else about the store (SQL, connection pools, timeouts) stays behind the trait.
//!
//! - [`MemoryStore`]: sorted in-memory rows, used by tests and local tooling
//!
//! # Examples
//!
//! ```rust
//! use ledgerscan::{CursorKey, Direction, FetchRequest, MemoryStore, RecordSource};
//!
//! # tokio_test_block_on(async {
//! let store = MemoryStore::new("ids", vec![1u32, 2, 3, 4], |id| CursorKey::NumericId { id: *id });
//!
//! // listing order is newest id first
//! let rows = store
//!     .fetch(FetchRequest {
//!         count: 2,
//!         cursor: Some(CursorKey::NumericId { id: 4 }),
//!         direction: Direction::Forward,
//!     })
//!     .await
//!     .unwrap();
//! assert_eq!(rows, vec![3, 2]);
//! # });
//! # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

use async_trait::async_trait;

use crate::cursor::CursorKey;
use crate::errors::StoreError;
use crate::pagination::FetchRequest;

mod memory;

pub use memory::MemoryStore;

/// Trait for stores that can serve keyset pages
///
/// # Contract
///
/// `fetch` returns at most `request.count` rows whose keys lie strictly past
/// `request.cursor` in `request.direction` (from the start of the listing when the
/// cursor is absent), ordered nearest the cursor first. Returning fewer rows means
/// the listing ended.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so one source can serve concurrent
/// requests.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Row type as read from the store
    type Row: Send;

    /// Fetch one batch of rows
    async fn fetch(&self, request: FetchRequest) -> Result<Vec<Self::Row>, StoreError>;

    /// Cursor key of a row
    fn cursor_key(&self, row: &Self::Row) -> CursorKey;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}
