// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Bidirectional keyset pagination
//!
//! A page request is a signed [`Take`] plus an optional decoded cursor. The engine
//! asks the store for one row more than the page holds, uses that extra row to
//! decide whether the listing continues in the requested direction, trims it, and
//! derives the keys the next and previous pages resume from.
//!
//! ```text
//! display order:   r1  r2  r3  r4  r5  r6  r7  r8
//!                          ^cursor
//! take =  2  (forward)     fetch r4 r5 r6   -> page [r4 r5], sentinel r6 dropped
//! take = -2  (backward)    fetch r2 r1      -> page [r1 r2], no sentinel
//! ```
//!
//! Rows are fetched nearest the cursor first; backward pages are flipped back into
//! display order before trimming, so the sentinel of a backward fetch is the first
//! displayed row.

mod engine;

pub use engine::{assemble_page, paginate};

use serde::{Deserialize, Serialize};

use crate::cursor::CursorKey;
use crate::errors::PaginationError;
use crate::types::take::Take;

/// Direction of travel relative to the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Away from the start of the listing
    Forward,
    /// Back towards the start of the listing
    Backward,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Forward => f.write_str("forward"),
            Direction::Backward => f.write_str("backward"),
        }
    }
}

/// Validated page request
///
/// # Examples
///
/// ```
/// use ledgerscan::{CursorKey, PageRequest, Take};
///
/// let cursor = CursorKey::NumericId { id: 42 };
/// let request = PageRequest::new(Take::new(-10).unwrap(), Some(cursor)).unwrap();
/// assert_eq!(request.fetch_request().count, 11);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    take: Take,
    cursor: Option<CursorKey>,
}

impl PageRequest {
    /// Create a request, rejecting backward travel without a cursor
    pub fn new(take: Take, cursor: Option<CursorKey>) -> Result<Self, PaginationError> {
        if take.direction() == Direction::Backward && cursor.is_none() {
            return Err(PaginationError::BackwardPaginationRequiresCursor);
        }
        Ok(Self { take, cursor })
    }

    /// Requested take
    pub const fn take(&self) -> Take {
        self.take
    }

    /// Decoded cursor, if the caller sent one
    pub const fn cursor(&self) -> Option<&CursorKey> {
        self.cursor.as_ref()
    }

    /// The single fetch this request needs
    pub fn fetch_request(&self) -> FetchRequest {
        FetchRequest {
            count: self.take.fetch_count(),
            cursor: self.cursor,
            direction: self.take.direction(),
        }
    }
}

/// What a record source is asked for
///
/// Sources return at most `count` rows strictly past `cursor` in `direction`
/// (from the start of the listing when there is no cursor), nearest the cursor
/// first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    /// Rows to return: page size plus one
    pub count: usize,
    /// Exclusive anchor
    pub cursor: Option<CursorKey>,
    /// Direction of travel from the anchor
    pub direction: Direction,
}

/// One page of rows in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult<T> {
    /// Rows of the page, at most `|take|`
    pub items: Vec<T>,
    /// Whether the fetch found rows past the page in the requested direction
    pub has_more: bool,
    /// Key of the last item, unless a forward fetch reached the end
    pub next_cursor: Option<CursorKey>,
    /// Key of the first item, unless there was no cursor or a backward fetch
    /// reached the start
    pub prev_cursor: Option<CursorKey>,
}

impl<T> PageResult<T> {
    /// A page with no rows and no cursors
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            has_more: false,
            next_cursor: None,
            prev_cursor: None,
        }
    }

    /// Returns true if the page has no rows
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Transform every row, keeping the cursors
    pub fn try_map<U, E>(self, f: impl FnMut(T) -> Result<U, E>) -> Result<PageResult<U>, E> {
        Ok(PageResult {
            items: self.items.into_iter().map(f).collect::<Result<_, _>>()?,
            has_more: self.has_more,
            next_cursor: self.next_cursor,
            prev_cursor: self.prev_cursor,
        })
    }
}
