// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for list queries
//!
//! Controls the page-size bounds applied before a request reaches the pagination
//! engine.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use ledgerscan::PaginationConfig;
//!
//! let config = PaginationConfig::default();
//! assert_eq!(config.default_take, 10);
//! assert_eq!(config.max_take, 100);
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use ledgerscan::PaginationConfigBuilder;
//!
//! let config = PaginationConfigBuilder::new()
//!     .default_take(25)
//!     .max_take(250)
//!     .build();
//! assert_eq!(config.max_take, 250);
//! ```

pub mod constants;

use constants::{DEFAULT_TAKE, MAX_TAKE};

/// Page-size bounds for list queries
///
/// Use [`PaginationConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    /// Page size used when the caller omits `take`
    /// Default: 10
    pub default_take: i32,

    /// Largest `|take|` accepted in either direction
    /// Default: 100
    pub max_take: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_take: DEFAULT_TAKE,
            max_take: MAX_TAKE,
        }
    }
}

impl PaginationConfig {
    /// Returns true if `|take|` is within the configured bound
    ///
    /// # Example
    ///
    /// ```rust
    /// use ledgerscan::PaginationConfig;
    ///
    /// let config = PaginationConfig::default();
    /// assert!(config.allows(-100));
    /// assert!(!config.allows(101));
    /// ```
    pub fn allows(&self, take: i32) -> bool {
        take.unsigned_abs() <= self.max_take
    }
}

/// Builder for [`PaginationConfig`]
///
/// # Example
///
/// ```rust
/// use ledgerscan::PaginationConfigBuilder;
///
/// let config = PaginationConfigBuilder::new().max_take(50).build();
/// assert_eq!(config.default_take, 10);
/// ```
pub struct PaginationConfigBuilder {
    config: PaginationConfig,
}

impl Default for PaginationConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PaginationConfigBuilder {
    /// Create a new builder starting from the defaults
    pub fn new() -> Self {
        Self {
            config: PaginationConfig::default(),
        }
    }

    /// Set the page size used when `take` is omitted
    pub fn default_take(mut self, take: i32) -> Self {
        self.config.default_take = take;
        self
    }

    /// Set the largest `|take|` accepted
    pub fn max_take(mut self, max: u32) -> Self {
        self.config.max_take = max;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> PaginationConfig {
        self.config
    }
}
