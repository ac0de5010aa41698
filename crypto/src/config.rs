//! Field-selection configurations for the canonical hasher.
//!
//! A configuration lists, in order, the identity-bearing fields of one action
//! type. Timestamps (`generated`), seller signatures, free-form `objects` and
//! the producer-supplied `hash` never appear in a configuration, so they can
//! change without changing the derived hash.

use omp_types::ActionType;

/// One field taken from the payload (`from`, a dot path) and the key it is
/// written under in the hashed object (`to`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashableField {
    pub from: String,
    pub to: String,
}

impl HashableField {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Ordered list of fields that make up a message's derived hash.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashableConfig {
    pub fields: Vec<HashableField>,
}

impl HashableConfig {
    pub fn new(fields: Vec<HashableField>) -> Self {
        Self { fields }
    }

    fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self::new(
            pairs
                .iter()
                .map(|(from, to)| HashableField::new(*from, *to))
                .collect(),
        )
    }

    /// The configuration for a given action type.
    pub fn for_action(action_type: ActionType) -> Self {
        match action_type {
            ActionType::ListingAdd => Self::listing(),
            ActionType::Bid => Self::bid(),
            ActionType::Accept => Self::accept(),
            ActionType::Reject => Self::reject(),
            ActionType::Cancel => Self::cancel(),
            ActionType::Lock => Self::lock(),
        }
    }

    /// `MPA_LISTING_ADD`: seller, item description and payment terms.
    pub fn listing() -> Self {
        Self::from_pairs(&[
            ("type", "type"),
            ("item.seller.address", "seller"),
            ("item.information.title", "title"),
            ("item.information.shortDescription", "shortDescription"),
            ("item.information.longDescription", "longDescription"),
            ("item.information.category", "category"),
            ("item.payment.type", "paymentType"),
            ("item.payment.escrow.type", "escrowType"),
            ("item.payment.escrow.ratio", "escrowRatio"),
            ("item.payment.options", "paymentOptions"),
        ])
    }

    /// `MPA_BID`: the listing reference and the buyer's escrow inputs.
    pub fn bid() -> Self {
        Self::from_pairs(&[
            ("type", "type"),
            ("item", "item"),
            ("buyer.payment.cryptocurrency", "cryptocurrency"),
            ("buyer.payment.escrow", "escrow"),
            ("buyer.payment.prevouts", "prevouts"),
            ("buyer.payment.changeAddress", "changeAddress"),
        ])
    }

    /// `MPA_ACCEPT`
    pub fn accept() -> Self {
        Self::from_pairs(&[
            ("type", "type"),
            ("bid", "bid"),
            ("seller.payment.escrow", "escrow"),
            ("seller.payment.fee", "fee"),
            ("seller.payment.prevouts", "prevouts"),
        ])
    }

    /// `MPA_REJECT`
    pub fn reject() -> Self {
        Self::from_pairs(&[("type", "type"), ("bid", "bid")])
    }

    /// `MPA_CANCEL`
    pub fn cancel() -> Self {
        Self::from_pairs(&[("type", "type"), ("bid", "bid")])
    }

    /// `MPA_LOCK`
    pub fn lock() -> Self {
        Self::from_pairs(&[
            ("type", "type"),
            ("bid", "bid"),
            ("buyer.payment.escrow", "escrow"),
        ])
    }
}
