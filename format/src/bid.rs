//! `MPA_BID` format checks.

use crate::error::FormatError;
use crate::escrow::{payment_with_scheme, validate_bid_payment};
use crate::node::Node;
use serde_json::Value;

pub fn validate(action: &Value) -> Result<(), FormatError> {
    let action = Node::action(action)?;
    action.integer("generated")?;
    action.content_hash("item")?;

    let buyer = action.object("buyer")?;
    let (payment, scheme) = payment_with_scheme(&buyer, "payment")?;
    validate_bid_payment(payment, scheme)?;
    buyer.optional_object("shippingAddress")?;

    action.optional_array("objects")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use omp_types::ErrorKind;
    use serde_json::json;

    const HASH: &str = "a90b35ef3d3a77ef2496bb00e6e5009e6267840add627341d79cae0241316a36";
    const TXID: &str = "0c9f1e4e4a4e7f2d6b8c3d0f5a1e2b3c4d5e6f708192a3b4c5d6e7f8091a2b3c";

    fn bid() -> Value {
        json!({
            "type": "MPA_BID",
            "generated": 1592210962300u64,
            "item": HASH,
            "buyer": {
                "payment": {
                    "escrow": "MULTISIG",
                    "cryptocurrency": "PART",
                    "pubKey": "02aabbcc",
                    "prevouts": [{ "txid": TXID, "vout": 0 }],
                    "changeAddress": { "type": "NORMAL", "address": "pZmMxcdzhqPknghTFHMRKyW4SGndXJw2H9" }
                },
                "shippingAddress": { "firstName": "a", "country": "AU" }
            },
            "objects": [{ "key": "size", "value": "L" }]
        })
    }

    #[test]
    fn valid_bid() {
        assert!(validate(&bid()).is_ok());
    }

    #[test]
    fn item_must_be_a_hash() {
        let mut action = bid();
        action["item"] = json!("not-a-hash");
        let err = validate(&action).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedEnvelope);
        assert_eq!(err.path, "action.item");
    }

    #[test]
    fn missing_payment_is_a_payment_error() {
        let mut action = bid();
        action["buyer"].as_object_mut().unwrap().remove("payment");
        let err = validate(&action).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedPayment);
        assert_eq!(err.path, "action.buyer.payment");
    }

    #[test]
    fn unsupported_scheme() {
        let mut action = bid();
        action["buyer"]["payment"]["escrow"] = json!("FE");
        let err = validate(&action).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedPayment);
        assert!(err.reason.starts_with("escrow type not supported"));
    }

    #[test]
    fn shipping_address_must_be_an_object() {
        let mut action = bid();
        action["buyer"]["shippingAddress"] = json!("somewhere");
        assert_eq!(
            validate(&action).unwrap_err().path,
            "action.buyer.shippingAddress"
        );
    }
}
