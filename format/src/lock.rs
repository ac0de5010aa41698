//! `MPA_LOCK` format checks.

use crate::error::FormatError;
use crate::escrow::{payment_with_scheme, validate_lock_payment};
use crate::node::Node;
use serde_json::Value;

pub fn validate(action: &Value) -> Result<(), FormatError> {
    let action = Node::action(action)?;
    action.integer("generated")?;
    action.content_hash("bid")?;

    let buyer = action.object("buyer")?;
    let (payment, scheme) = payment_with_scheme(&buyer, "payment")?;
    validate_lock_payment(payment, scheme)?;

    if let Some(info) = action.optional_object("info")? {
        info.optional_string("memo")?;
    }
    Ok(())
}
