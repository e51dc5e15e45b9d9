// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Signed page size

use serde::{Deserialize, Serialize};

use crate::config::PaginationConfig;
use crate::errors::PaginationError;
use crate::pagination::Direction;

/// Requested page size whose sign selects the direction
///
/// Positive values page forward (away from the start of the listing), negative
/// values page backward from a cursor. Zero is never a valid `Take`.
///
/// # Examples
///
/// ```
/// use ledgerscan::{Direction, Take};
///
/// let take = Take::new(-25).unwrap();
/// assert_eq!(take.direction(), Direction::Backward);
/// assert_eq!(take.size(), 25);
/// assert_eq!(take.fetch_count(), 26);
///
/// assert!(Take::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Take(i32);

impl Take {
    /// Create a take, rejecting zero
    pub fn new(take: i32) -> Result<Self, PaginationError> {
        if take == 0 {
            return Err(PaginationError::invalid_take(take, "take must not be 0"));
        }
        Ok(Self(take))
    }

    /// Create a take, rejecting zero and magnitudes above `config.max_take`
    pub fn bounded(take: i32, config: &PaginationConfig) -> Result<Self, PaginationError> {
        let take = Self::new(take)?;
        if !config.allows(take.0) {
            return Err(PaginationError::invalid_take(
                take.0,
                format!(
                    "take must be between -{max} and {max}",
                    max = config.max_take
                ),
            ));
        }
        Ok(take)
    }

    /// Parse a textual `take` query parameter
    ///
    /// A missing parameter falls back to `config.default_take`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ledgerscan::{PaginationConfig, Take};
    ///
    /// let config = PaginationConfig::default();
    /// assert_eq!(Take::from_query(None, &config).unwrap().get(), 10);
    /// assert_eq!(Take::from_query(Some("-3"), &config).unwrap().get(), -3);
    /// assert!(Take::from_query(Some("ten"), &config).is_err());
    /// assert!(Take::from_query(Some("1000"), &config).is_err());
    /// ```
    pub fn from_query(raw: Option<&str>, config: &PaginationConfig) -> Result<Self, PaginationError> {
        let Some(raw) = raw else {
            return Self::bounded(config.default_take, config);
        };

        let parsed: i64 = raw
            .trim()
            .parse()
            .map_err(|_| PaginationError::invalid_take(raw, "take must be an integer"))?;

        let take: i32 = parsed
            .try_into()
            .map_err(|_| PaginationError::invalid_take(raw, "take is out of range"))?;

        Self::bounded(take, config)
    }

    /// Signed value as requested
    pub const fn get(&self) -> i32 {
        self.0
    }

    /// Page size, `|take|`
    pub fn size(&self) -> usize {
        self.0.unsigned_abs() as usize
    }

    /// Rows to fetch: one more than the page to detect further rows
    pub fn fetch_count(&self) -> usize {
        self.size() + 1
    }

    /// Direction selected by the sign
    pub const fn direction(&self) -> Direction {
        if self.0 > 0 {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }
}

impl TryFrom<i32> for Take {
    type Error = PaginationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Take> for i32 {
    fn from(take: Take) -> Self {
        take.0
    }
}

impl std::fmt::Display for Take {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
