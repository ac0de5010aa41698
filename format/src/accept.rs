//! `MPA_ACCEPT` format checks.

use crate::error::FormatError;
use crate::escrow::{payment_with_scheme, validate_accept_payment};
use crate::node::Node;
use serde_json::Value;

pub fn validate(action: &Value) -> Result<(), FormatError> {
    let action = Node::action(action)?;
    action.integer("generated")?;
    action.content_hash("bid")?;

    let seller = action.object("seller")?;
    let (payment, scheme) = payment_with_scheme(&seller, "payment")?;
    validate_accept_payment(payment, scheme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use omp_types::ErrorKind;
    use serde_json::json;

    const HASH: &str = "a90b35ef3d3a77ef2496bb00e6e5009e6267840add627341d79cae0241316a36";
    const TXID: &str = "0c9f1e4e4a4e7f2d6b8c3d0f5a1e2b3c4d5e6f708192a3b4c5d6e7f8091a2b3c";

    fn accept(signatures: usize) -> Value {
        let signature = json!({ "pubKey": "02aabbcc", "signature": "3044022001" });
        json!({
            "type": "MPA_ACCEPT",
            "generated": 1592210962400u64,
            "bid": HASH,
            "seller": {
                "payment": {
                    "escrow": "MULTISIG",
                    "cryptocurrency": "PART",
                    "pubKey": "03ddeeff",
                    "prevouts": [{ "txid": TXID, "vout": 0 }, { "txid": TXID, "vout": 1 }],
                    "changeAddress": { "type": "NORMAL", "address": "pZmMxcdzhqPknghTFHMRKyW4SGndXJw2H9" },
                    "fee": 2000,
                    "signatures": vec![signature.clone(); signatures],
                    "release": { "signatures": [signature] }
                }
            }
        })
    }

    #[test]
    fn valid_accept() {
        assert!(validate(&accept(2)).is_ok());
    }

    #[test]
    fn signature_count_mismatch() {
        let err = validate(&accept(1)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedPayment);
        assert_eq!(
            err.to_string(),
            "action.seller.payment.signatures: amount of signatures does not match amount of prevouts"
        );
    }

    #[test]
    fn bid_reference_is_required() {
        let mut action = accept(2);
        action.as_object_mut().unwrap().remove("bid");
        assert_eq!(validate(&action).unwrap_err().path, "action.bid");
    }
}
