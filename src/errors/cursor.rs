// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for cursor encoding and decoding.

use crate::cursor::CursorKind;

/// Errors raised by [`CursorCodec`](crate::CursorCodec).
///
/// `MalformedCursor` and `InvalidCursorField` are client-input faults: the caller sent
/// a cursor that cannot belong to the endpoint. `KindMismatch` is raised while
/// encoding and means a store handed back a key of the wrong shape.
///
/// # Examples
///
/// ```rust
/// use ledgerscan::{CursorCodec, CursorError, CursorKind};
///
/// let codec = CursorCodec::new(CursorKind::AddressBlockNumber);
/// match codec.decode(Some("0xabc_123")) {
///     Err(CursorError::InvalidCursorField { field, .. }) => assert_eq!(field, "address"),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CursorError {
    /// The cursor does not split into the number of fields its kind requires.
    #[error(
        "Invalid cursor format. Expected format: \"{kind}\" ({expected} field(s)), found {found} in \"{value}\""
    )]
    MalformedCursor {
        /// Kind the endpoint expects
        kind: CursorKind,
        /// Raw cursor as received
        value: String,
        /// Field count of the kind
        expected: usize,
        /// Field count actually found
        found: usize,
    },

    /// A single field failed its kind-specific validation.
    #[error("Invalid {field} in cursor: \"{value}\" ({reason})")]
    InvalidCursorField {
        /// Field name (`address`, `blockNumber`, `role`, ...)
        field: &'static str,
        /// Offending field text
        value: String,
        /// Why the field was rejected
        reason: String,
    },

    /// A key of one kind was handed to a codec for another kind.
    #[error("Cursor kind mismatch: codec expects \"{expected}\", key is \"{found}\"")]
    KindMismatch {
        /// Kind the codec was built for
        expected: CursorKind,
        /// Kind of the key passed in
        found: CursorKind,
    },
}

impl CursorError {
    /// Create a `MalformedCursor` error.
    pub fn malformed(kind: CursorKind, value: impl Into<String>, found: usize) -> Self {
        CursorError::MalformedCursor {
            kind,
            value: value.into(),
            expected: kind.arity(),
            found,
        }
    }

    /// Create an `InvalidCursorField` error.
    pub fn invalid_field(
        field: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CursorError::InvalidCursorField {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Returns true when the error was caused by caller-supplied cursor text.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, CursorError::KindMismatch { .. })
    }
}
