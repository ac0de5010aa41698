//! Escrow payment validators.
//!
//! Each supported scheme is a unit struct implementing [`EscrowValidator`].
//! The `validate_*_payment` entry points select the handler for a scheme and
//! run the check for one trade step. Schemes without a handler (MAD, FE) are
//! rejected as unsupported.

mod mad_ct;
mod multisig;

pub use mad_ct::MadCt;
pub use multisig::Multisig;

use crate::error::FormatError;
use crate::node::Node;
use crate::primitives;
use omp_types::{ErrorKind, EscrowType};
use serde_json::Value;

/// Root path of the buyer payment in bid and lock messages.
pub const BID_PATH: &str = "action.buyer.payment";
/// Root path of the seller payment in accept messages.
pub const ACCEPT_PATH: &str = "action.seller.payment";
/// Root path of the buyer payment in lock messages.
pub const LOCK_PATH: &str = "action.buyer.payment";

/// Payment checks of one escrow scheme, per trade step.
pub trait EscrowValidator: Send + Sync {
    fn escrow_type(&self) -> EscrowType;

    /// Buyer payment data of a bid.
    fn validate_bid(&self, payment: &Value) -> Result<(), FormatError>;

    /// Seller payment data of an accept.
    fn validate_accept(&self, payment: &Value) -> Result<(), FormatError>;

    /// Buyer payment data of a lock.
    fn validate_lock(&self, payment: &Value) -> Result<(), FormatError>;
}

static MULTISIG: Multisig = Multisig;
static MAD_CT: MadCt = MadCt;

/// The handler for `scheme`, or `MalformedPayment` if it has none.
pub fn validator_for(
    scheme: EscrowType,
    path: &str,
) -> Result<&'static dyn EscrowValidator, FormatError> {
    match scheme {
        EscrowType::Multisig => Ok(&MULTISIG),
        EscrowType::MadCt => Ok(&MAD_CT),
        EscrowType::Mad | EscrowType::Fe => Err(FormatError::payment(
            format!("{path}.escrow"),
            format!("escrow type not supported: {scheme}"),
        )),
    }
}

pub fn validate_bid_payment(payment: &Value, scheme: EscrowType) -> Result<(), FormatError> {
    validator_for(scheme, BID_PATH)?.validate_bid(payment)
}

pub fn validate_accept_payment(payment: &Value, scheme: EscrowType) -> Result<(), FormatError> {
    validator_for(scheme, ACCEPT_PATH)?.validate_accept(payment)
}

pub fn validate_lock_payment(payment: &Value, scheme: EscrowType) -> Result<(), FormatError> {
    validator_for(scheme, LOCK_PATH)?.validate_lock(payment)
}

/// The payment object at `key` of `parent` and the scheme its `escrow` tag names.
pub(crate) fn payment_with_scheme<'a>(
    parent: &Node<'a>,
    key: &str,
) -> Result<(&'a Value, EscrowType), FormatError> {
    let node = parent.object_as(key, ErrorKind::MalformedPayment)?;
    let scheme = node.tag("escrow")?;
    match parent.get(key) {
        Some(payment) => Ok((payment, scheme)),
        None => Err(parent.error(key, "missing or not an object")),
    }
}

fn payment_node<'a>(payment: &'a Value, path: &str) -> Result<Node<'a>, FormatError> {
    Node::new(Some(payment), path, ErrorKind::MalformedPayment)
}

/// The `escrow` tag must name the scheme whose handler is running.
fn expect_escrow(node: &Node<'_>, expected: EscrowType) -> Result<(), FormatError> {
    let received: EscrowType = node.tag("escrow")?;
    if received != expected {
        return Err(node.error("escrow", format!("expected {expected}, received={received}")));
    }
    Ok(())
}

/// Non-empty prevout array, each element checked by `check`. Returns the count.
fn validate_prevouts(
    node: &Node<'_>,
    check: fn(&Value, &str) -> Result<(), FormatError>,
) -> Result<usize, FormatError> {
    let prevouts = node.array("prevouts")?;
    let path = node.child_path("prevouts");
    for (i, prevout) in prevouts.iter().enumerate() {
        check(prevout, &format!("{path}[{i}]"))?;
    }
    Ok(prevouts.len())
}

/// Non-empty `signatures` array of valid signature objects. Returns the count.
fn validate_signatures(node: &Node<'_>) -> Result<usize, FormatError> {
    let signatures = node.array("signatures")?;
    let path = node.child_path("signatures");
    for (i, signature) in signatures.iter().enumerate() {
        primitives::validate_signature_object(signature, &format!("{path}[{i}]"))?;
    }
    Ok(signatures.len())
}

/// A `{ signatures: [one] }` set such as `release`, `refund` or `destroy`.
fn validate_single_signature(node: &Node<'_>, key: &str) -> Result<(), FormatError> {
    let set = node.object(key)?;
    if validate_signatures(&set)? != 1 {
        return Err(set.error("signatures", "amount of signatures does not equal 1"));
    }
    Ok(())
}

/// One signature per spent prevout.
fn expect_signature_per_prevout(
    node: &Node<'_>,
    signatures: usize,
    prevouts: usize,
) -> Result<(), FormatError> {
    if signatures != prevouts {
        return Err(node.error(
            "signatures",
            "amount of signatures does not match amount of prevouts",
        ));
    }
    Ok(())
}

/// Accept fee: a non-negative integer greater than zero.
fn validate_fee(node: &Node<'_>) -> Result<u64, FormatError> {
    match node.integer("fee") {
        Ok(fee) if fee > 0 => Ok(fee),
        _ => Err(node.error("fee", "not a non negative number or > 0")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn selects_handler_by_scheme() {
        assert_eq!(
            validator_for(EscrowType::Multisig, BID_PATH).unwrap().escrow_type(),
            EscrowType::Multisig
        );
        assert_eq!(
            validator_for(EscrowType::MadCt, BID_PATH).unwrap().escrow_type(),
            EscrowType::MadCt
        );
    }

    #[test]
    fn mad_and_fe_are_unsupported() {
        let payment = json!({ "escrow": "MAD" });
        for scheme in [EscrowType::Mad, EscrowType::Fe] {
            let err = validate_bid_payment(&payment, scheme).unwrap_err();
            assert_eq!(err.kind, ErrorKind::MalformedPayment);
            assert!(err.reason.starts_with("escrow type not supported"));
            assert!(validate_accept_payment(&payment, scheme).is_err());
            assert!(validate_lock_payment(&payment, scheme).is_err());
        }
    }

    #[test]
    fn single_signature_set_needs_exactly_one() {
        let sig = json!({ "pubKey": "02aa", "signature": "3044" });
        let value = json!({
            "one": { "signatures": [sig.clone()] },
            "two": { "signatures": [sig.clone(), sig] },
            "none": { "signatures": [] }
        });
        let node = payment_node(&value, ACCEPT_PATH).unwrap();
        assert!(validate_single_signature(&node, "one").is_ok());

        let err = validate_single_signature(&node, "two").unwrap_err();
        assert_eq!(err.path, "action.seller.payment.two.signatures");
        assert_eq!(err.reason, "amount of signatures does not equal 1");

        assert!(validate_single_signature(&node, "none").is_err());
        assert!(validate_single_signature(&node, "missing").is_err());
    }

    #[test]
    fn fee_must_be_positive() {
        let fee = |v: Value| {
            let node = payment_node(&v, ACCEPT_PATH).unwrap();
            validate_fee(&node)
        };
        assert_eq!(fee(json!({ "fee": 1 })).unwrap(), 1);
        assert!(fee(json!({ "fee": 0 })).is_err());
        assert!(fee(json!({ "fee": -5 })).is_err());
        assert_eq!(
            fee(json!({})).unwrap_err().path,
            "action.seller.payment.fee"
        );
    }
}
