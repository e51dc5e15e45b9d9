// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Closed set of cursor shapes

use serde::{Deserialize, Serialize};

/// Which 32-hex-character identifier a [`CursorKind::HexId`] cursor carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HexIdLabel {
    /// Log event id
    EventId,
    /// Transaction id
    TransactionId,
    /// Internal transaction (trace) id
    InternalTxId,
}

impl HexIdLabel {
    /// Field name as it appears in cursors, errors and stored rows
    pub const fn field_name(self) -> &'static str {
        match self {
            HexIdLabel::EventId => "eventId",
            HexIdLabel::TransactionId => "transactionId",
            HexIdLabel::InternalTxId => "internalTxId",
        }
    }
}

/// Shape of a cursor: which fields it carries and in what order
///
/// Every list endpoint pages on exactly one kind. The set is closed so that adding
/// a kind forces every codec and ordering match to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CursorKind {
    /// `address_blockNumber`
    AddressBlockNumber,
    /// `contract_blockNumber`
    ContractBlockNumber,
    /// `blockNumber_transactionIndex`
    BlockNumberTransactionIndex,
    /// A single 4-byte numeric id
    NumericId,
    /// A single 32-hex-character id
    HexId(HexIdLabel),
    /// `internalTxId_role`
    HexIdRole,
}

impl CursorKind {
    /// Number of `_`-separated fields in the wire form
    pub const fn arity(self) -> usize {
        match self {
            CursorKind::NumericId | CursorKind::HexId(_) => 1,
            CursorKind::AddressBlockNumber
            | CursorKind::ContractBlockNumber
            | CursorKind::BlockNumberTransactionIndex
            | CursorKind::HexIdRole => 2,
        }
    }

    /// Field names in canonical order
    pub const fn fields(self) -> &'static [&'static str] {
        match self {
            CursorKind::AddressBlockNumber => &["address", "blockNumber"],
            CursorKind::ContractBlockNumber => &["contract", "blockNumber"],
            CursorKind::BlockNumberTransactionIndex => &["blockNumber", "transactionIndex"],
            CursorKind::NumericId => &["id"],
            CursorKind::HexId(HexIdLabel::EventId) => &["eventId"],
            CursorKind::HexId(HexIdLabel::TransactionId) => &["transactionId"],
            CursorKind::HexId(HexIdLabel::InternalTxId) => &["internalTxId"],
            CursorKind::HexIdRole => &["internalTxId", "role"],
        }
    }

    /// Rank used to order keys of different kinds against each other
    pub(crate) const fn rank(self) -> u8 {
        match self {
            CursorKind::AddressBlockNumber => 0,
            CursorKind::ContractBlockNumber => 1,
            CursorKind::BlockNumberTransactionIndex => 2,
            CursorKind::NumericId => 3,
            CursorKind::HexId(HexIdLabel::EventId) => 4,
            CursorKind::HexId(HexIdLabel::TransactionId) => 5,
            CursorKind::HexId(HexIdLabel::InternalTxId) => 6,
            CursorKind::HexIdRole => 7,
        }
    }
}

impl std::fmt::Display for CursorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CursorKind::NumericId => f.write_str("numeric_id"),
            other => f.write_str(&other.fields().join("_")),
        }
    }
}
