//! The message envelope and the closed set of actions it can carry.
//!
//! Action types:
//! - **ListingAdd**: seller publishes an item and payment terms
//! - **Bid**: buyer offers to buy, naming prevouts and a change address
//! - **Accept**: seller signs the escrow inputs and the release transaction
//! - **Reject**: seller declines the bid (terminal)
//! - **Cancel**: either party walks away before the lock (terminal)
//! - **Lock**: buyer signs the escrow inputs and the refund transaction

use crate::accept::{AcceptAction, CancelAction, RejectAction};
use crate::bid::BidAction;
use crate::hash::ContentHash;
use crate::listing::ListingAddAction;
use crate::lock::LockAction;
use serde::{Deserialize, Serialize};

wire_enum! {
    /// The `action.type` tag.
    pub enum ActionType {
        ListingAdd => "MPA_LISTING_ADD",
        Bid => "MPA_BID",
        Accept => "MPA_ACCEPT",
        Reject => "MPA_REJECT",
        Cancel => "MPA_CANCEL",
        Lock => "MPA_LOCK",
    }
}

impl ActionType {
    /// Whether no message may follow this one in a sequence.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Reject | Self::Cancel)
    }
}

/// Top-level message wrapper: a protocol version and one action.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub version: String,
    pub action: Action,
}

/// The unified action enum, tagged on the wire by `type`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    #[serde(rename = "MPA_LISTING_ADD")]
    ListingAdd(ListingAddAction),
    #[serde(rename = "MPA_BID")]
    Bid(BidAction),
    #[serde(rename = "MPA_ACCEPT")]
    Accept(AcceptAction),
    #[serde(rename = "MPA_REJECT")]
    Reject(RejectAction),
    #[serde(rename = "MPA_CANCEL")]
    Cancel(CancelAction),
    #[serde(rename = "MPA_LOCK")]
    Lock(LockAction),
}

impl Action {
    pub fn action_type(&self) -> ActionType {
        match self {
            Self::ListingAdd(_) => ActionType::ListingAdd,
            Self::Bid(_) => ActionType::Bid,
            Self::Accept(_) => ActionType::Accept,
            Self::Reject(_) => ActionType::Reject,
            Self::Cancel(_) => ActionType::Cancel,
            Self::Lock(_) => ActionType::Lock,
        }
    }

    /// The bid hash a response or lock refers to. `None` for listings and bids.
    pub fn bid_reference(&self) -> Option<&ContentHash> {
        match self {
            Self::ListingAdd(_) | Self::Bid(_) => None,
            Self::Accept(a) => Some(&a.bid),
            Self::Reject(a) => Some(&a.bid),
            Self::Cancel(a) => Some(&a.bid),
            Self::Lock(a) => Some(&a.bid),
        }
    }
}
