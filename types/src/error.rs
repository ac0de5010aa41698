//! Error-kind taxonomy shared across crates.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The category of a validation failure.
///
/// Every crate-level error maps onto exactly one kind so that callers can
/// branch on the category without matching each crate's error enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Missing or empty version, unknown action type, or a malformed
    /// non-payment field of an action.
    MalformedEnvelope,
    /// A required payment field is missing, has the wrong type, or has the
    /// wrong cardinality.
    MalformedPayment,
    /// A primitive shape failure: address, signature, prevout or txid.
    InvalidAddressOrSignatureShape,
    /// Wrong action type at a position, or a message after a terminal one.
    SequenceOrderViolation,
    /// A derived hash does not match the referenced hash.
    LinkageMismatch,
    /// Currency or escrow disagreement between the listing and a later message.
    PolicyMismatch,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::MalformedEnvelope => "malformed envelope",
            Self::MalformedPayment => "malformed payment",
            Self::InvalidAddressOrSignatureShape => "invalid address or signature shape",
            Self::SequenceOrderViolation => "sequence order violation",
            Self::LinkageMismatch => "linkage mismatch",
            Self::PolicyMismatch => "policy mismatch",
        };
        f.write_str(s)
    }
}

/// Errors raised while constructing value types from strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    #[error("unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("invalid content hash: {0}")]
    InvalidHash(String),
}
