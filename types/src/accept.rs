//! Seller responses to a bid: accept, reject, cancel.

use crate::hash::ContentHash;
use crate::payment::PaymentDataAccept;
use serde::{Deserialize, Serialize};

/// `MPA_ACCEPT`: the seller commits to the bid and signs the escrow inputs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptAction {
    pub generated: u64,
    /// Derived hash of the bid being accepted.
    pub bid: ContentHash,
    pub seller: AcceptSeller,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptSeller {
    pub payment: PaymentDataAccept,
}

/// `MPA_REJECT`: terminal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectAction {
    pub generated: u64,
    pub bid: ContentHash,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// `MPA_CANCEL`: terminal. Either party may cancel before the lock.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelAction {
    pub generated: u64,
    pub bid: ContentHash,
}
