use omp_types::ErrorKind;
use thiserror::Error;

/// A format violation: what kind, where, and why.
///
/// Displays as `"{path}: {reason}"`, e.g.
/// `action.seller.payment.signatures: amount of signatures does not match amount of prevouts`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{path}: {reason}")]
pub struct FormatError {
    pub kind: ErrorKind,
    pub path: String,
    pub reason: String,
}

impl FormatError {
    pub fn new(kind: ErrorKind, path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn envelope(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedEnvelope, path, reason)
    }

    pub fn payment(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedPayment, path, reason)
    }

    pub fn shape(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidAddressOrSignatureShape, path, reason)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}
