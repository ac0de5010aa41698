//! Canonical JSON encoding (RFC 8785, JSON Canonicalization Scheme).
//!
//! Object keys are sorted at every depth, no insignificant whitespace is
//! emitted, and numbers are written in their shortest ECMAScript form, so
//! `1`, `1.0` and `1e0` all encode as `1`.

use crate::error::HashError;
use serde::Serialize;
use serde_json::Value;

/// Append the canonical encoding of `value` to `out`.
pub fn write_canonical<T: Serialize>(value: &T, out: &mut Vec<u8>) -> Result<(), HashError> {
    let bytes = serde_jcs::to_vec(value).map_err(|e| HashError::Canonical(e.to_string()))?;
    out.extend_from_slice(&bytes);
    Ok(())
}

/// Canonical encoding of `value` as a fresh buffer.
pub fn canonical_bytes(value: &Value) -> Result<Vec<u8>, HashError> {
    serde_jcs::to_vec(value).map_err(|e| HashError::Canonical(e.to_string()))
}
