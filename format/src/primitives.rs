//! Primitive validators.
//!
//! The `is_*` functions are total predicates over arbitrary JSON values. The
//! `validate_*` functions check composite shapes (address, prevout, signature
//! object) and report failures as `InvalidAddressOrSignatureShape` at the
//! given path.

use crate::error::FormatError;
use crate::node::Node;
use omp_types::{ContentHash, CryptoAddressType, ErrorKind};
use serde_json::Value;

/// Bitcoin-style base58 alphabet (no `0`, `O`, `I`, `l`).
const BASE58_ALPHABET: &[u8] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Length bounds (inclusive) of a NORMAL base58 address.
const NORMAL_ADDRESS_LEN: (usize, usize) = (26, 35);
/// Length bounds (inclusive) of a STEALTH base58 address.
const STEALTH_ADDRESS_LEN: (usize, usize) = (90, 120);

/// Hex characters in a transaction id.
const TXID_HEX_LEN: usize = 64;
/// Hex characters in a blinding factor (32 bytes).
const BLIND_FACTOR_HEX_LEN: usize = 64;

pub fn is_non_empty_object(value: &Value) -> bool {
    value.as_object().is_some_and(|map| !map.is_empty())
}

pub fn is_non_negative_integer(value: &Value) -> bool {
    value.as_u64().is_some()
}

pub fn is_non_empty_string(value: &Value) -> bool {
    value.as_str().is_some_and(|s| !s.is_empty())
}

pub fn is_non_empty_array(value: &Value) -> bool {
    value.as_array().is_some_and(|items| !items.is_empty())
}

/// Non-empty, even-length hex string.
pub fn is_hex(s: &str) -> bool {
    !s.is_empty() && hex::decode(s).is_ok()
}

pub fn is_base58(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| BASE58_ALPHABET.contains(&b))
}

/// 64 hex characters.
pub fn is_txid(value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|s| s.len() == TXID_HEX_LEN && is_hex(s))
}

pub fn is_content_hash(s: &str) -> bool {
    ContentHash::is_well_formed(s)
}

/// Whether `address` is a plausible address of the given type.
pub fn is_address_for_type(address_type: CryptoAddressType, address: &str) -> bool {
    let (min, max) = match address_type {
        CryptoAddressType::Normal => NORMAL_ADDRESS_LEN,
        CryptoAddressType::Stealth => STEALTH_ADDRESS_LEN,
    };
    (min..=max).contains(&address.len()) && is_base58(address)
}

/// Validate a `{ type, address }` crypto address and return its type.
pub fn validate_crypto_address(
    value: Option<&Value>,
    path: &str,
) -> Result<CryptoAddressType, FormatError> {
    let node = Node::new(value, path, ErrorKind::InvalidAddressOrSignatureShape)?;
    let address_type: CryptoAddressType = node.tag("type")?;
    let address = node.string("address")?;
    if !is_address_for_type(address_type, address) {
        return Err(node.error("address", format!("not a valid {address_type} address")));
    }
    Ok(address_type)
}

/// Validate a previous-output reference `{ txid, vout, _scriptPubKey?, _address?, _satoshis? }`.
pub fn validate_prevout(value: &Value, path: &str) -> Result<(), FormatError> {
    let node = Node::new(Some(value), path, ErrorKind::InvalidAddressOrSignatureShape)?;
    validate_outpoint(&node)
}

/// Validate a confidential prevout: a prevout plus a 32-byte `blindFactor`.
pub fn validate_blind_prevout(value: &Value, path: &str) -> Result<(), FormatError> {
    let node = Node::new(Some(value), path, ErrorKind::InvalidAddressOrSignatureShape)?;
    validate_outpoint(&node)?;
    let blind_factor = node.string("blindFactor")?;
    if blind_factor.len() != BLIND_FACTOR_HEX_LEN || !is_hex(blind_factor) {
        return Err(node.error("blindFactor", "not a 32 byte hex string"));
    }
    Ok(())
}

fn validate_outpoint(node: &Node<'_>) -> Result<(), FormatError> {
    if !node.get("txid").is_some_and(is_txid) {
        return Err(node.error("txid", "missing or not a valid txid"));
    }
    let vout = node.integer("vout")?;
    if u32::try_from(vout).is_err() {
        return Err(node.error("vout", "out of range"));
    }
    if let Some(script) = node.optional_string("_scriptPubKey")? {
        if !is_hex(script) {
            return Err(node.error("_scriptPubKey", "not a hex string"));
        }
    }
    if let Some(address) = node.optional_string("_address")? {
        if address.is_empty() {
            return Err(node.error("_address", "empty string"));
        }
    }
    node.optional_integer("_satoshis")?;
    Ok(())
}

/// Validate a `{ pubKey, signature }` object. Shape only, no verification.
pub fn validate_signature_object(value: &Value, path: &str) -> Result<(), FormatError> {
    let node = Node::new(Some(value), path, ErrorKind::InvalidAddressOrSignatureShape)?;
    let pub_key = node.string("pubKey")?;
    if !is_hex(pub_key) {
        return Err(node.error("pubKey", "not a hex string"));
    }
    let signature = node.string("signature")?;
    if !is_hex(signature) {
        return Err(node.error("signature", "not a hex string"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const TXID: &str = "0c9f1e4e4a4e7f2d6b8c3d0f5a1e2b3c4d5e6f708192a3b4c5d6e7f8091a2b3c";
    const NORMAL: &str = "pZmMxcdzhqPknghTFHMRKyW4SGndXJw2H9";
    const STEALTH: &str = "TetYrezhU9QHwdLzKq4Q3ajgj13STH8fxtzytWxT312LjmEwBVs7nBTYW6sjamAUfwLQWqGbzESXxF9jNwNnFnpjkhJ3PEKSncizDP";

    #[test]
    fn predicates_are_total() {
        for value in [json!(null), json!(1), json!(-1), json!("s"), json!([]), json!({})] {
            let _ = is_non_empty_object(&value);
            let _ = is_non_negative_integer(&value);
            let _ = is_non_empty_string(&value);
            let _ = is_non_empty_array(&value);
            let _ = is_txid(&value);
        }
        assert!(!is_non_empty_object(&json!({})));
        assert!(is_non_empty_object(&json!({ "a": 1 })));
        assert!(!is_non_negative_integer(&json!(-1)));
        assert!(!is_non_empty_string(&json!("")));
        assert!(!is_non_empty_array(&json!([])));
    }

    #[test]
    fn txid_shape() {
        assert!(is_txid(&json!(TXID)));
        assert!(!is_txid(&json!(&TXID[1..])));
        assert!(!is_txid(&json!("zz".repeat(32))));
        assert!(!is_txid(&json!(42)));
    }

    #[test]
    fn base58_excludes_ambiguous_characters() {
        assert!(is_base58(NORMAL));
        assert!(!is_base58("0OIl"));
        assert!(!is_base58(""));
    }

    #[test]
    fn crypto_address_dispatches_on_type() {
        let normal = json!({ "type": "NORMAL", "address": NORMAL });
        let stealth = json!({ "type": "STEALTH", "address": STEALTH });
        assert_eq!(
            validate_crypto_address(Some(&normal), "a").unwrap(),
            CryptoAddressType::Normal
        );
        assert_eq!(
            validate_crypto_address(Some(&stealth), "a").unwrap(),
            CryptoAddressType::Stealth
        );

        let swapped = json!({ "type": "STEALTH", "address": NORMAL });
        let err = validate_crypto_address(Some(&swapped), "action.buyer.payment.changeAddress")
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidAddressOrSignatureShape);
        assert_eq!(err.path, "action.buyer.payment.changeAddress.address");
        assert_eq!(err.reason, "not a valid STEALTH address");
    }

    #[test]
    fn crypto_address_rejects_unknown_type() {
        let value = json!({ "type": "WITNESS", "address": NORMAL });
        let err = validate_crypto_address(Some(&value), "addr").unwrap_err();
        assert_eq!(err.path, "addr.type");
        assert!(validate_crypto_address(None, "addr").is_err());
    }

    #[test]
    fn prevout_shape() {
        assert!(validate_prevout(&json!({ "txid": TXID, "vout": 0 }), "p").is_ok());
        assert!(validate_prevout(
            &json!({ "txid": TXID, "vout": 1, "_satoshis": 1000, "_scriptPubKey": "76a914", "_address": NORMAL }),
            "p"
        )
        .is_ok());
        assert!(validate_prevout(&json!({ "txid": TXID, "vout": -1 }), "p").is_err());
        assert!(validate_prevout(&json!({ "txid": TXID, "vout": 4294967296u64 }), "p").is_err());
        assert!(validate_prevout(&json!({ "txid": "abc", "vout": 0 }), "p").is_err());
        assert!(validate_prevout(&json!({ "vout": 0 }), "p").is_err());
        assert!(validate_prevout(&json!("txid:0"), "p").is_err());
    }

    #[test]
    fn blind_prevout_requires_blind_factor() {
        let ok = json!({ "txid": TXID, "vout": 0, "blindFactor": "7a".repeat(32) });
        assert!(validate_blind_prevout(&ok, "p").is_ok());
        let missing = json!({ "txid": TXID, "vout": 0 });
        assert_eq!(
            validate_blind_prevout(&missing, "p").unwrap_err().path,
            "p.blindFactor"
        );
        let short = json!({ "txid": TXID, "vout": 0, "blindFactor": "7a" });
        assert!(validate_blind_prevout(&short, "p").is_err());
    }

    #[test]
    fn signature_object_shape() {
        let ok = json!({ "pubKey": "02aabb", "signature": "3044" });
        assert!(validate_signature_object(&ok, "s").is_ok());
        let not_hex = json!({ "pubKey": "02aabb", "signature": "IHKl4Fdz=" });
        assert!(validate_signature_object(&not_hex, "s").is_err());
        let missing = json!({ "signature": "3044" });
        assert_eq!(
            validate_signature_object(&missing, "s").unwrap_err().path,
            "s.pubKey"
        );
    }
}
