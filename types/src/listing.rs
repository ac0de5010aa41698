//! The listing that opens every trade sequence.

use crate::address::CryptoAddress;
use crate::currency::Cryptocurrency;
use crate::escrow::{EscrowReleaseType, EscrowType, SaleType};
use serde::{Deserialize, Serialize};

/// `MPA_LISTING_ADD`: a seller publishes an item and its payment terms.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListingAddAction {
    pub generated: u64,
    pub item: ListingItem,
    /// Hash as claimed by the producer. Never trusted; always recomputed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListingItem {
    pub information: ItemInfo,
    pub seller: SellerInfo,
    pub payment: PaymentInfo,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub objects: Vec<serde_json::Value>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemInfo {
    pub title: String,
    pub short_description: String,
    pub long_description: String,
    pub category: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shipping_destinations: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerInfo {
    pub address: String,
    pub signature: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaymentInfo {
    #[serde(rename = "type")]
    pub sale_type: SaleType,
    pub escrow: EscrowConfig,
    pub options: Vec<PaymentOption>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EscrowConfig {
    #[serde(rename = "type")]
    pub escrow_type: EscrowType,
    pub ratio: EscrowRatio,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seconds_to_lock: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_type: Option<EscrowReleaseType>,
}

/// Deposit ratios, in percent of the price, each party puts into escrow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscrowRatio {
    pub buyer: u64,
    pub seller: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOption {
    pub currency: Cryptocurrency,
    pub base_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_price: Option<ShippingPrice>,
    pub address: CryptoAddress,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShippingPrice {
    pub domestic: f64,
    pub international: f64,
}

impl ListingAddAction {
    /// The escrow scheme every later message of the trade must use.
    pub fn escrow_type(&self) -> EscrowType {
        self.item.payment.escrow.escrow_type
    }

    /// Whether the listing offers a payment option in `currency`.
    pub fn accepts_currency(&self, currency: Cryptocurrency) -> bool {
        self.item
            .payment
            .options
            .iter()
            .any(|option| option.currency == currency)
    }
}
