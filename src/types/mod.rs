// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types shared across ledgerscan.
//!
//! - Token decimal counts used to scale base-unit amounts
//! - Signed page sizes and their direction

pub mod decimals;
pub mod take;

// Note: Public types are re-exported from lib.rs, not here
