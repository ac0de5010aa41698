//! Value types for the escrowed-trade message protocol.
//!
//! This crate defines the data shared by every other crate in the workspace:
//! the message envelope and its closed set of actions, escrow payment data,
//! crypto value types (addresses, prevouts, signatures), the wire enumerations
//! and the error-kind taxonomy.
//!
//! Everything here is plain immutable data. Structural validation of the raw
//! JSON lives in `omp-format`; these types are what a validated message is
//! lifted into.

#[macro_use]
mod macros;

pub mod accept;
pub mod action;
pub mod address;
pub mod bid;
pub mod currency;
pub mod error;
pub mod escrow;
pub mod hash;
pub mod listing;
pub mod lock;
pub mod payment;
pub mod prevout;
pub mod signature;

pub use accept::{AcceptAction, CancelAction, RejectAction};
pub use action::{Action, ActionType, Envelope};
pub use address::{CryptoAddress, CryptoAddressType};
pub use bid::BidAction;
pub use currency::Cryptocurrency;
pub use error::{ErrorKind, TypeError};
pub use escrow::{EscrowReleaseType, EscrowType, SaleType};
pub use hash::ContentHash;
pub use listing::ListingAddAction;
pub use lock::LockAction;
pub use payment::{PaymentDataAccept, PaymentDataBid, PaymentDataLock};
pub use prevout::{BlindPrevout, Prevout};
pub use signature::{SignatureObject, SignatureSet};
