use super::{
    expect_escrow, expect_signature_per_prevout, payment_node, validate_fee, validate_prevouts,
    validate_signatures, validate_single_signature, EscrowValidator, ACCEPT_PATH, BID_PATH,
    LOCK_PATH,
};
use crate::error::FormatError;
use crate::node::Node;
use crate::primitives;
use omp_types::{Cryptocurrency, EscrowType};
use serde_json::Value;

/// 2-of-2 multisignature escrow.
#[derive(Clone, Copy, Debug, Default)]
pub struct Multisig;

impl Multisig {
    /// Fields shared by the bid and accept payments. Returns the prevout count.
    pub(crate) fn validate_bid_fields(node: &Node<'_>) -> Result<usize, FormatError> {
        expect_escrow(node, EscrowType::Multisig)?;
        node.tag::<Cryptocurrency>("cryptocurrency")?;
        node.string("pubKey")?;
        let prevouts = validate_prevouts(node, primitives::validate_prevout)?;
        if node.is_unset("changeAddress") {
            return Err(node.error("changeAddress", "missing"));
        }
        primitives::validate_crypto_address(
            node.get("changeAddress"),
            &node.child_path("changeAddress"),
        )?;
        Ok(prevouts)
    }
}

impl EscrowValidator for Multisig {
    fn escrow_type(&self) -> EscrowType {
        EscrowType::Multisig
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
        validate_single_signature(&node, "release")
    }

    fn validate_lock(&self, payment: &Value) -> Result<(), FormatError> {
        let node = payment_node(payment, LOCK_PATH)?;
        expect_escrow(&node, EscrowType::Multisig)?;
        validate_signatures(&node)?;
        validate_single_signature(&node, "refund")
    }
}
