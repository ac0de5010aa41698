//! Signature objects attached to accept and lock payments.

use serde::{Deserialize, Serialize};

/// A signature together with the public key that produced it.
///
/// Only the shape is checked by this workspace; verifying the signature
/// against the escrow transaction is the wallet's job.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureObject {
    pub pub_key: String,
    pub signature: String,
}

/// A `{ signatures: [...] }` sub-object (release, refund, destroy).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignatureSet {
    pub signatures: Vec<SignatureObject>,
}
