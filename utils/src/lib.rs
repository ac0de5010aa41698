//! Shared utilities for the trade-message verifier.

pub mod logging;

pub use logging::{init_logging, LogFormat, LoggingError};
