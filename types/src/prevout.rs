//! References to unspent outputs consumed by the escrow transaction.

use serde::{Deserialize, Serialize};

/// A previous-output reference.
///
/// The underscore-prefixed fields are optional wallet metadata; they do not
/// identify the output.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Prevout {
    pub txid: String,
    pub vout: u32,
    #[serde(
        rename = "_scriptPubKey",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub script_pub_key: Option<String>,
    #[serde(rename = "_address", default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "_satoshis", default, skip_serializing_if = "Option::is_none")]
    pub satoshis: Option<u64>,
}

/// A prevout whose amount is hidden behind a Pedersen commitment.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlindPrevout {
    #[serde(flatten)]
    pub prevout: Prevout,
    pub blind_factor: String,
}
