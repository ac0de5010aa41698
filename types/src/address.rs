//! Cryptocurrency address type with an explicit address-type tag.

use serde::{Deserialize, Serialize};
use std::fmt;

wire_enum! {
    /// The kind of address a payment is sent to.
    pub enum CryptoAddressType {
        /// Regular base58 pay-to-pubkey-hash address.
        Normal => "NORMAL",
        /// Stealth address; required for confidential-transaction escrow.
        Stealth => "STEALTH",
    }
}

/// A receiving or change address as carried inside payment data.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CryptoAddress {
    #[serde(rename = "type")]
    pub address_type: CryptoAddressType,
    pub address: String,
}

impl CryptoAddress {
    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.address
    }
}

impl fmt::Display for CryptoAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.address_type, self.address)
    }
}
