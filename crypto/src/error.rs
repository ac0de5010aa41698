use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    #[error("hash: required field missing: {path}")]
    MissingField { path: String },

    #[error("hash: empty field configuration")]
    EmptyConfig,

    #[error("hash: cannot canonicalize value: {0}")]
    Canonical(String),
}
