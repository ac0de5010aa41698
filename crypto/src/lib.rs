//! Hashing for the escrowed-trade protocol.
//!
//! - **SHA-256** over canonical bytes for every derived hash
//! - **Canonical JSON** (RFC 8785) so independent parties produce identical bytes
//! - **ConfigurableHasher**: selects the identity-bearing fields of a message
//!   per action type and hashes only those

pub mod canonical;
pub mod config;
pub mod error;
pub mod hash;
pub mod hasher;

pub use canonical::{canonical_bytes, write_canonical};
pub use config::{HashableConfig, HashableField};
pub use error::HashError;
pub use hash::sha256;
pub use hasher::ConfigurableHasher;
