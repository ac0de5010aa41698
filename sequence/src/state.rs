//! Accumulator threaded through a sequence fold.

use omp_types::{ContentHash, ListingAddAction};

/// What later messages of a trade are checked against.
///
/// Replaced when the listing (position 0) and the bid (position 1) are
/// accepted; read-only afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SequenceState {
    pub listing: Option<ListingAddAction>,
    pub listing_hash: Option<ContentHash>,
    pub bid_hash: Option<ContentHash>,
}

impl SequenceState {
    pub fn with_listing(listing: ListingAddAction, listing_hash: ContentHash) -> Self {
        Self {
            listing: Some(listing),
            listing_hash: Some(listing_hash),
            bid_hash: None,
        }
    }

    pub fn with_bid_hash(self, bid_hash: ContentHash) -> Self {
        Self {
            bid_hash: Some(bid_hash),
            ..self
        }
    }
}
