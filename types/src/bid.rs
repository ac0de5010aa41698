//! Bid: the buyer's offer on a listing.

use crate::hash::ContentHash;
use crate::payment::PaymentDataBid;
use serde::{Deserialize, Serialize};

/// `MPA_BID`: references the listing by its derived hash.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BidAction {
    pub generated: u64,
    /// Derived hash of the listing being bid on.
    pub item: ContentHash,
    pub buyer: BidBuyer,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub objects: Vec<serde_json::Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidBuyer {
    pub payment: PaymentDataBid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<serde_json::Value>,
}
