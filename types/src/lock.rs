//! Lock: the buyer's final signatures that commit funds into escrow.

use crate::hash::ContentHash;
use crate::payment::PaymentDataLock;
use serde::{Deserialize, Serialize};

/// `MPA_LOCK`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockAction {
    pub generated: u64,
    pub bid: ContentHash,
    pub buyer: LockBuyer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<LockInfo>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockBuyer {
    pub payment: PaymentDataLock,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}
