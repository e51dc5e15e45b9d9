// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Typed cursor keys

use alloy_primitives::{hex, Address, B128};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::kind::{CursorKind, HexIdLabel};
use crate::config::constants::CURSOR_DELIMITER;

/// Side of an internal transaction an address appeared on
///
/// `From` orders before `To`, matching how address listings group both rows of
/// the same internal transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Sender side
    From,
    /// Receiver side
    To,
}

impl Role {
    /// Wire token
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::From => "from",
            Role::To => "to",
        }
    }

    /// Parse the exact wire token; anything else is `None`
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "from" => Some(Role::From),
            "to" => Some(Role::To),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded cursor: the key of the boundary row a page resumes from
///
/// Each variant carries the typed fields of one [`CursorKind`]. Integers are
/// bounded to 4 bytes, addresses and ids are fixed-width byte arrays, so a key that
/// exists is always encodable.
///
/// # Examples
///
/// ```
/// use ledgerscan::{CursorKey, CursorKind};
///
/// let key = CursorKey::BlockNumberTransactionIndex { block_number: 500, transaction_index: 3 };
/// assert_eq!(key.kind(), CursorKind::BlockNumberTransactionIndex);
/// assert_eq!(key.to_string(), "500_3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorKey {
    /// Holder address and the block its balance was recorded at
    AddressBlockNumber {
        /// Holder address
        address: Address,
        /// Block number
        block_number: u32,
    },
    /// Token contract and the block its balance was recorded at
    ContractBlockNumber {
        /// Token contract
        contract: Address,
        /// Block number
        block_number: u32,
    },
    /// Position of a transaction in the chain
    BlockNumberTransactionIndex {
        /// Block number
        block_number: u32,
        /// Index within the block
        transaction_index: u32,
    },
    /// Surrogate row id
    NumericId {
        /// Row id
        id: u32,
    },
    /// Event, transaction or internal transaction id
    HexId {
        /// Which id this is
        label: HexIdLabel,
        /// 16-byte id
        id: B128,
    },
    /// Internal transaction id plus the side an address appeared on
    HexIdRole {
        /// Internal transaction id
        id: B128,
        /// Side of the transfer
        role: Role,
    },
}

impl CursorKey {
    /// Kind this key belongs to
    pub const fn kind(&self) -> CursorKind {
        match self {
            CursorKey::AddressBlockNumber { .. } => CursorKind::AddressBlockNumber,
            CursorKey::ContractBlockNumber { .. } => CursorKind::ContractBlockNumber,
            CursorKey::BlockNumberTransactionIndex { .. } => {
                CursorKind::BlockNumberTransactionIndex
            }
            CursorKey::NumericId { .. } => CursorKind::NumericId,
            CursorKey::HexId { label, .. } => CursorKind::HexId(*label),
            CursorKey::HexIdRole { .. } => CursorKind::HexIdRole,
        }
    }

    /// Field values in canonical order, as they appear on the wire
    pub fn fields(&self) -> Vec<String> {
        match self {
            CursorKey::AddressBlockNumber {
                address,
                block_number,
            } => vec![hex::encode_prefixed(address), block_number.to_string()],
            CursorKey::ContractBlockNumber {
                contract,
                block_number,
            } => vec![hex::encode_prefixed(contract), block_number.to_string()],
            CursorKey::BlockNumberTransactionIndex {
                block_number,
                transaction_index,
            } => vec![block_number.to_string(), transaction_index.to_string()],
            CursorKey::NumericId { id } => vec![id.to_string()],
            CursorKey::HexId { id, .. } => vec![hex::encode(id)],
            CursorKey::HexIdRole { id, role } => vec![hex::encode(id), role.to_string()],
        }
    }

    /// Compare two keys in the listing order of their kind
    ///
    /// This is the order rows are displayed in: ids and block positions newest
    /// first; holder listings by address (or contract) ascending, then newest
    /// block first. Keys of different kinds are ordered by kind so the relation
    /// stays total.
    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (
                CursorKey::AddressBlockNumber {
                    address: a,
                    block_number: ab,
                },
                CursorKey::AddressBlockNumber {
                    address: b,
                    block_number: bb,
                },
            )
            | (
                CursorKey::ContractBlockNumber {
                    contract: a,
                    block_number: ab,
                },
                CursorKey::ContractBlockNumber {
                    contract: b,
                    block_number: bb,
                },
            ) => a.cmp(b).then_with(|| bb.cmp(ab)),
            (
                CursorKey::BlockNumberTransactionIndex {
                    block_number: ab,
                    transaction_index: ai,
                },
                CursorKey::BlockNumberTransactionIndex {
                    block_number: bb,
                    transaction_index: bi,
                },
            ) => (bb, bi).cmp(&(ab, ai)),
            (CursorKey::NumericId { id: a }, CursorKey::NumericId { id: b }) => b.cmp(a),
            (
                CursorKey::HexId {
                    label: al,
                    id: a,
                },
                CursorKey::HexId {
                    label: bl,
                    id: b,
                },
            ) if al == bl => b.cmp(a),
            (
                CursorKey::HexIdRole { id: a, role: ar },
                CursorKey::HexIdRole { id: b, role: br },
            ) => b.cmp(a).then_with(|| ar.cmp(br)),
            _ => self.kind().rank().cmp(&other.kind().rank()),
        }
    }
}

impl fmt::Display for CursorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fields().join(CURSOR_DELIMITER))
    }
}
