use super::{
    expect_escrow, expect_signature_per_prevout, payment_node, validate_fee, validate_prevouts,
    validate_signatures, validate_single_signature, EscrowValidator, ACCEPT_PATH, BID_PATH,
    LOCK_PATH,
};
use crate::error::FormatError;
use crate::node::Node;
use crate::primitives;
use omp_types::{CryptoAddressType, Cryptocurrency, EscrowType};
use serde_json::Value;

/// Mutually assured destruction over confidential transactions.
#[derive(Clone, Copy, Debug, Default)]
pub struct MadCt;

impl MadCt {
    /// Fields shared by the bid and accept payments. Returns the prevout count.
    pub(crate) fn validate_bid_fields(node: &Node<'_>) -> Result<usize, FormatError> {
        expect_escrow(node, EscrowType::MadCt)?;
        node.tag::<Cryptocurrency>("cryptocurrency")?;
        let prevouts = validate_prevouts(node, primitives::validate_blind_prevout)?;
        validate_stealth_address(node, "changeAddress")?;
        validate_stealth_address(node, "releaseAddress")?;
        Ok(prevouts)
    }
}

fn validate_stealth_address(node: &Node<'_>, key: &str) -> Result<(), FormatError> {
    if node.is_unset(key) {
        return Err(node.error(key, "missing"));
    }
    let path = node.child_path(key);
    match primitives::validate_crypto_address(node.get(key), &path)? {
        CryptoAddressType::Stealth => Ok(()),
        CryptoAddressType::Normal => Err(FormatError::shape(
            format!("{path}.type"),
            "expected STEALTH address",
        )),
    }
}

impl EscrowValidator for MadCt {
    fn escrow_type(&self) -> EscrowType {
        EscrowType::MadCt
    }

    fn validate_bid(&self, payment: &Value) -> Result<(), FormatError> {
        let node = payment_node(payment, BID_PATH)?;
        Self::validate_bid_fields(&node)?;
        Ok(())
    }

    fn validate_accept(&self, payment: &Value) -> Result<(), FormatError> {
        let node = payment_node(payment, ACCEPT_PATH)?;
        let prevouts = Self::validate_bid_fields(&node)?;
        validate_fee(&node)?;
        let signatures = validate_signatures(&node)?;
        expect_signature_per_prevout(&node, signatures, prevouts)?;
        validate_single_signature(&node, "release")?;
        validate_single_signature(&node, "destroy")
    }

    fn validate_lock(&self, payment: &Value) -> Result<(), FormatError> {
        let node = payment_node(payment, LOCK_PATH)?;
        expect_escrow(&node, EscrowType::MadCt)?;
        validate_signatures(&node)?;
        validate_single_signature(&node, "refund")?;
        validate_single_signature(&node, "destroy")
    }
}
