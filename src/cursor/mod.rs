// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Opaque pagination cursors
//!
//! A cursor is the key of the boundary row of a page, serialized as its fields
//! joined by `_`. Each list endpoint pages on one [`CursorKind`]; a
//! [`CursorCodec`] built for that kind turns cursor text into a typed
//! [`CursorKey`] and back.
//!
//! | Kind | Wire form |
//! |---|---|
//! | `AddressBlockNumber` | `0x<40 hex>_<u32>` |
//! | `ContractBlockNumber` | `0x<40 hex>_<u32>` |
//! | `BlockNumberTransactionIndex` | `<u32>_<u32>` |
//! | `NumericId` | `<u32>` |
//! | `HexId` | `<32 hex>` |
//! | `HexIdRole` | `<32 hex>_to` or `<32 hex>_from` |

mod codec;
mod key;
mod kind;

pub use codec::CursorCodec;
pub use key::{CursorKey, Role};
pub use kind::{CursorKind, HexIdLabel};
