//! `MPA_LISTING_ADD` format checks.

use crate::error::FormatError;
use crate::node::Node;
use crate::primitives;
use omp_types::{Cryptocurrency, EscrowReleaseType, EscrowType, SaleType};
use serde_json::Value;

pub fn validate(action: &Value) -> Result<(), FormatError> {
    let action = Node::action(action)?;
    action.integer("generated")?;

    let item = action.object("item")?;
    validate_information(&item.object("information")?)?;
    validate_seller(&item.object("seller")?)?;
    validate_payment(&item.object("payment")?)?;
    item.optional_array("objects")?;

    if let Some(hash) = action.optional_string("hash")? {
        if !primitives::is_content_hash(hash) {
            return Err(action.error("hash", "not a valid hash"));
        }
    }
    Ok(())
}

fn validate_information(information: &Node<'_>) -> Result<(), FormatError> {
    information.string("title")?;
    information.string("shortDescription")?;
    information.string("longDescription")?;
    validate_string_list(information, information.array("category")?, "category")?;

    if let Some(location) = information.optional_object("location")? {
        location.string("country")?;
        location.optional_string("address")?;
    }
    let destinations = information.optional_array("shippingDestinations")?;
    validate_string_list(information, destinations, "shippingDestinations")
}

fn validate_string_list(
    parent: &Node<'_>,
    items: &[Value],
    key: &str,
) -> Result<(), FormatError> {
    match items.iter().position(|item| !primitives::is_non_empty_string(item)) {
        Some(i) => Err(parent.error(&format!("{key}[{i}]"), "not a non empty string")),
        None => Ok(()),
    }
}

fn validate_seller(seller: &Node<'_>) -> Result<(), FormatError> {
    seller.string("address")?;
    seller.string("signature")?;
    Ok(())
}

fn validate_payment(payment: &Node<'_>) -> Result<(), FormatError> {
    payment.tag::<SaleType>("type")?;

    let escrow = payment.object("escrow")?;
    escrow.tag::<EscrowType>("type")?;
    let ratio = escrow.object("ratio")?;
    ratio.integer("buyer")?;
    ratio.integer("seller")?;
    escrow.optional_integer("secondsToLock")?;
    escrow.optional_tag::<EscrowReleaseType>("releaseType")?;

    let options = payment.array("options")?;
    let options_path = payment.child_path("options");
    for (i, option) in options.iter().enumerate() {
        let option = Node::new(Some(option), format!("{options_path}[{i}]"), payment.kind())?;
        option.tag::<Cryptocurrency>("currency")?;
        option.number("basePrice")?;
        if let Some(shipping) = option.optional_object("shippingPrice")? {
            shipping.number("domestic")?;
            shipping.number("international")?;
        }
        primitives::validate_crypto_address(option.get("address"), &option.child_path("address"))?;
    }
    Ok(())
}
