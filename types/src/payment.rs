//! Escrow payment data carried by bid, accept and lock actions.
//!
//! Each step has one enum tagged by the `escrow` field. Accept payments embed
//! the bid payment of the same scheme (flattened on the wire), so the
//! "accept extends bid" relationship is a field, not a cast.

use crate::address::CryptoAddress;
use crate::currency::Cryptocurrency;
use crate::escrow::EscrowType;
use crate::prevout::{BlindPrevout, Prevout};
use crate::signature::{SignatureObject, SignatureSet};
use serde::{Deserialize, Serialize};

/// Buyer payment data of a bid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "escrow")]
pub enum PaymentDataBid {
    #[serde(rename = "MULTISIG")]
    Multisig(BidMultisig),
    #[serde(rename = "MAD_CT")]
    MadCt(BidMadCt),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidMultisig {
    pub cryptocurrency: Cryptocurrency,
    pub pub_key: String,
    pub prevouts: Vec<Prevout>,
    pub change_address: CryptoAddress,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidMadCt {
    pub cryptocurrency: Cryptocurrency,
    pub prevouts: Vec<BlindPrevout>,
    pub change_address: CryptoAddress,
    pub release_address: CryptoAddress,
}

impl PaymentDataBid {
    pub fn escrow_type(&self) -> EscrowType {
        match self {
            Self::Multisig(_) => EscrowType::Multisig,
            Self::MadCt(_) => EscrowType::MadCt,
        }
    }

    pub fn cryptocurrency(&self) -> Cryptocurrency {
        match self {
            Self::Multisig(p) => p.cryptocurrency,
            Self::MadCt(p) => p.cryptocurrency,
        }
    }

    pub fn prevout_count(&self) -> usize {
        match self {
            Self::Multisig(p) => p.prevouts.len(),
            Self::MadCt(p) => p.prevouts.len(),
        }
    }
}

/// Seller payment data of an accept.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "escrow")]
pub enum PaymentDataAccept {
    #[serde(rename = "MULTISIG")]
    Multisig(AcceptMultisig),
    #[serde(rename = "MAD_CT")]
    MadCt(AcceptMadCt),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptMultisig {
    #[serde(flatten)]
    pub bid: BidMultisig,
    pub fee: u64,
    pub signatures: Vec<SignatureObject>,
    pub release: SignatureSet,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptMadCt {
    #[serde(flatten)]
    pub bid: BidMadCt,
    pub fee: u64,
    pub signatures: Vec<SignatureObject>,
    pub release: SignatureSet,
    pub destroy: SignatureSet,
}

impl PaymentDataAccept {
    pub fn escrow_type(&self) -> EscrowType {
        match self {
            Self::Multisig(_) => EscrowType::Multisig,
            Self::MadCt(_) => EscrowType::MadCt,
        }
    }
}

/// Buyer payment data of a lock.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "escrow")]
pub enum PaymentDataLock {
    #[serde(rename = "MULTISIG")]
    Multisig(LockMultisig),
    #[serde(rename = "MAD_CT")]
    MadCt(LockMadCt),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockMultisig {
    pub signatures: Vec<SignatureObject>,
    pub refund: SignatureSet,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockMadCt {
    pub signatures: Vec<SignatureObject>,
    pub refund: SignatureSet,
    pub destroy: SignatureSet,
}

impl PaymentDataLock {
    pub fn escrow_type(&self) -> EscrowType {
        match self {
            Self::Multisig(_) => EscrowType::Multisig,
            Self::MadCt(_) => EscrowType::MadCt,
        }
    }
}
