// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Keyset pagination and exact amount normalization for blockchain explorer
//! listings.
//!
//! - [`CursorCodec`]: opaque cursor text ↔ typed [`CursorKey`] for each
//!   [`CursorKind`]
//! - [`paginate`]: one over-fetching query per page, trimmed in either direction,
//!   with next/previous cursors derived from the boundary rows
//! - [`normalize`]: base-unit integers (decimal or hex) scaled by token decimals,
//!   exactly
//! - [`ListQueryOrchestrator`]: the above wired together for every
//!   [`ListEndpoint`], returning the [`ListResponse`] envelope
//!
//! # Example
//!
//! ```
//! use ledgerscan::{
//!     BalanceRow, BalanceView, ListEndpoint, ListQueryOrchestrator, MemoryStore,
//!     PaginationConfig,
//! };
//!
//! # tokio_test_block_on(async {
//! let rows = (1..=3)
//!     .map(|id| BalanceRow {
//!         id,
//!         block_number: 100 + id,
//!         timestamp: 1_700_000_000,
//!         balance: "1500000000000000000".to_string(),
//!     })
//!     .collect::<Vec<BalanceRow>>();
//! let store = MemoryStore::new("balances", rows, BalanceRow::cursor_key);
//!
//! let orchestrator = ListQueryOrchestrator::new(PaginationConfig::default());
//! let page = orchestrator
//!     .list(ListEndpoint::BalancesByAddress, 2, None, &store, BalanceView::try_from)
//!     .await
//!     .unwrap();
//!
//! let data = page.data.unwrap();
//! assert_eq!(data[0].id, "3");
//! assert_eq!(data[0].balance, "1.5");
//! assert_eq!(page.pagination_data.unwrap().next_cursor.as_deref(), Some("2"));
//! # });
//! # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

pub mod config;
pub mod cursor;
pub mod entities;
pub mod errors;
pub mod list;
pub mod numeric;
pub mod pagination;
pub mod store;
pub mod types;

mod spans;

pub use config::{PaginationConfig, PaginationConfigBuilder};
pub use cursor::{CursorCodec, CursorKey, CursorKind, HexIdLabel, Role};
pub use entities::{
    BalanceRow, BalanceView, ContractDetail, EventRow, EventTransactionView, EventView,
    InternalTxRow, InternalTxView, TokenHoldingRow, TokenHoldingView, TransactionRow,
    TransactionView, TransferEventRow, TransferEventView,
};
pub use errors::{CursorError, LedgerscanError, NumericError, PaginationError, StoreError};
pub use list::{ListEndpoint, ListQueryOrchestrator, ListResponse, PaginationData};
pub use numeric::{
    hex_quantity, normalize, normalize_to_decimal, parse_base_units, wei_to_ether, Radix,
};
pub use pagination::{
    assemble_page, paginate, Direction, FetchRequest, PageRequest, PageResult,
};
pub use store::{MemoryStore, RecordSource};
pub use types::decimals::TokenDecimals;
pub use types::take::Take;
