//! `MPA_REJECT` format checks.

use crate::error::FormatError;
use crate::node::Node;
use serde_json::Value;

pub fn validate(action: &Value) -> Result<(), FormatError> {
    let action = Node::action(action)?;
    action.integer("generated")?;
    action.content_hash("bid")?;
    action.optional_string("reason")?;
    Ok(())
}
