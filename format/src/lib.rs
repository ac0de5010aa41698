//! Format validation for escrowed-trade protocol messages.
//!
//! Every message is checked here before it is hashed or enters the sequence
//! verifier. Validation runs over the parsed `serde_json::Value` tree so that
//! any input, however partial, yields a field-path-qualified error instead of
//! a panic. The first violated rule wins.
//!
//! Layers, leaves first:
//! - [`primitives`]: predicates and shape checks for txids, addresses,
//!   prevouts and signature objects
//! - [`escrow`]: payment validators per escrow scheme (MULTISIG, MAD_CT)
//! - per-action validators ([`listing`], [`bid`], [`accept`], [`reject`],
//!   [`cancel`], [`lock`])
//! - [`envelope`]: version and action-type checks plus dispatch

pub mod accept;
pub mod bid;
pub mod cancel;
pub mod envelope;
pub mod error;
pub mod escrow;
pub mod listing;
pub mod lock;
pub mod node;
pub mod primitives;
pub mod reject;

pub use envelope::{decode_envelope, parse_envelope, validate_envelope, validate_format};
pub use error::FormatError;
pub use escrow::{
    validate_accept_payment, validate_bid_payment, validate_lock_payment, EscrowValidator,
};
