//! Deterministic content hashing over a configured subset of message fields.

use crate::canonical::write_canonical;
use crate::config::HashableConfig;
use crate::error::HashError;
use crate::hash::sha256;
use omp_types::{ActionType, ContentHash};
use serde_json::Value;

/// Hashes the identity-bearing fields of a message payload.
///
/// The hasher does not validate the payload; it only requires that every
/// configured field can be reached.
pub struct ConfigurableHasher;

impl ConfigurableHasher {
    /// Derive the content hash of `payload` under `config`.
    ///
    /// Same payload and config always give the same digest, independent of
    /// the key order the payload was parsed with.
    pub fn hash(payload: &Value, config: &HashableConfig) -> Result<ContentHash, HashError> {
        let bytes = Self::hashable_bytes(payload, config)?;
        Ok(ContentHash::from_digest(&sha256(&bytes)))
    }

    /// Hash an action payload with the built-in configuration for its type.
    pub fn hash_action(payload: &Value, action_type: ActionType) -> Result<ContentHash, HashError> {
        Self::hash(payload, &HashableConfig::for_action(action_type))
    }

    /// The exact bytes that get hashed: `{"to":value,...}` in config order.
    pub fn hashable_bytes(payload: &Value, config: &HashableConfig) -> Result<Vec<u8>, HashError> {
        if config.fields.is_empty() {
            return Err(HashError::EmptyConfig);
        }

        let mut out = Vec::with_capacity(256);
        out.push(b'{');
        for (i, field) in config.fields.iter().enumerate() {
            let value = resolve(payload, &field.from).ok_or_else(|| HashError::MissingField {
                path: field.from.clone(),
            })?;
            if i > 0 {
                out.push(b',');
            }
            write_canonical(&field.to, &mut out)?;
            out.push(b':');
            write_canonical(value, &mut out)?;
        }
        out.push(b'}');
        Ok(out)
    }
}

/// Follow a dot path through nested objects.
fn resolve<'a>(payload: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(payload, |value, segment| value.as_object()?.get(segment))
}
