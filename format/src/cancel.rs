//! `MPA_CANCEL` format checks.

use crate::error::FormatError;
use crate::node::Node;
use serde_json::Value;

pub fn validate(action: &Value) -> Result<(), FormatError> {
    let action = Node::action(action)?;
    action.integer("generated")?;
    action.content_hash("bid")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn needs_bid_hash() {
        let hash = "a90b35ef3d3a77ef2496bb00e6e5009e6267840add627341d79cae0241316a36";
        assert!(validate(&json!({ "type": "MPA_CANCEL", "generated": 1, "bid": hash })).is_ok());
        assert!(validate(&json!({ "type": "MPA_CANCEL", "generated": 1 })).is_err());
        assert!(validate(&json!({ "type": "MPA_CANCEL", "bid": hash })).is_err());
    }
}
