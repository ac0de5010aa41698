//! Verification of ordered escrowed-trade message sequences.
//!
//! A trade is a chain of up to four messages:
//!
//! ```text
//! MPA_LISTING_ADD -> MPA_BID -> MPA_ACCEPT | MPA_REJECT | MPA_CANCEL -> MPA_LOCK | MPA_CANCEL
//! ```
//!
//! Every message is format-checked first. The chain is then folded
//! left-to-right: each position admits only certain action types, each
//! response references the derived hash of the message it answers, and the
//! bid and later payments must agree with the listing's currency and escrow
//! terms. Hashes are always recomputed, never taken from the messages.

pub mod config;
pub mod error;
pub mod state;
pub mod verify;

pub use config::VerifierConfig;
pub use error::{ConfigError, SequenceError};
pub use state::SequenceState;
pub use verify::{validate_sequence, SequenceVerifier, MAX_ACTIONS};
