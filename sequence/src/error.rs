use omp_crypto::HashError;
use omp_format::FormatError;
use omp_types::{ActionType, ContentHash, ErrorKind};
use thiserror::Error;

/// Why a sequence was rejected, and at which message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SequenceError {
    #[error("message {index}: {source}")]
    Format {
        index: usize,
        #[source]
        source: FormatError,
    },

    #[error("message {index}: {source}")]
    Hash {
        index: usize,
        #[source]
        source: HashError,
    },

    #[error("message {index}: {reason}")]
    OrderViolation { index: usize, reason: String },

    #[error("message {index}: {action} references {received}, expected {expected}")]
    LinkageMismatch {
        index: usize,
        action: ActionType,
        expected: ContentHash,
        received: ContentHash,
    },

    #[error("message {index}: {reason}")]
    PolicyMismatch { index: usize, reason: String },
}

impl SequenceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Format { source, .. } => source.kind(),
            Self::Hash { .. } => ErrorKind::MalformedEnvelope,
            Self::OrderViolation { .. } => ErrorKind::SequenceOrderViolation,
            Self::LinkageMismatch { .. } => ErrorKind::LinkageMismatch,
            Self::PolicyMismatch { .. } => ErrorKind::PolicyMismatch,
        }
    }

    /// Position of the offending message in the sequence.
    pub fn index(&self) -> usize {
        match self {
            Self::Format { index, .. }
            | Self::Hash { index, .. }
            | Self::OrderViolation { index, .. }
            | Self::LinkageMismatch { index, .. }
            | Self::PolicyMismatch { index, .. } => *index,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config: cannot read {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("config: {0}")]
    Parse(String),

    #[error("config: {0}")]
    Serialize(String),

    #[error("config: {0}")]
    Logging(#[from] omp_utils::LoggingError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_and_indices() {
        let err = SequenceError::OrderViolation {
            index: 4,
            reason: "invalid amount of actions".into(),
        };
        assert_eq!(err.kind(), ErrorKind::SequenceOrderViolation);
        assert_eq!(err.index(), 4);
        assert_eq!(err.to_string(), "message 4: invalid amount of actions");

        let err = SequenceError::Format {
            index: 1,
            source: FormatError::payment("action.buyer.payment", "missing or not an object"),
        };
        assert_eq!(err.kind(), ErrorKind::MalformedPayment);
        assert_eq!(
            err.to_string(),
            "message 1: action.buyer.payment: missing or not an object"
        );
    }
}
