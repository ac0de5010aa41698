//! Envelope checks and per-action dispatch.

use crate::error::FormatError;
use crate::node::Node;
use crate::{accept, bid, cancel, listing, lock, reject};
use omp_types::{ActionType, Envelope, ErrorKind};
use serde_json::Value;

/// Header check: `version` is a non-empty string and `action.type` names a
/// known action. The action body is not inspected.
pub fn validate_envelope(message: &Value) -> Result<ActionType, FormatError> {
    let root = Node::new(Some(message), "", ErrorKind::MalformedEnvelope)?;
    root.string("version")?;
    let action = root.object("action")?;
    action.tag("type")
}

/// Header check followed by the full format check of the action body.
pub fn validate_format(message: &Value) -> Result<ActionType, FormatError> {
    let action_type = validate_envelope(message)?;
    let action = message.get("action").unwrap_or(&Value::Null);
    match action_type {
        ActionType::ListingAdd => listing::validate(action)?,
        ActionType::Bid => bid::validate(action)?,
        ActionType::Accept => accept::validate(action)?,
        ActionType::Reject => reject::validate(action)?,
        ActionType::Cancel => cancel::validate(action)?,
        ActionType::Lock => lock::validate(action)?,
    }
    Ok(action_type)
}

/// Format-check `message` and lift it into a typed [`Envelope`].
pub fn decode_envelope(message: &Value) -> Result<Envelope, FormatError> {
    validate_format(message)?;
    serde_json::from_value(message.clone())
        .map_err(|e| FormatError::envelope("action", format!("cannot decode: {e}")))
}

/// Parse one serialized message, refusing input over `max_bytes`.
pub fn parse_envelope(text: &str, max_bytes: usize) -> Result<Value, FormatError> {
    if text.len() > max_bytes {
        return Err(FormatError::envelope(
            "message",
            format!("too large: {} > {max_bytes}", text.len()),
        ));
    }
    serde_json::from_str(text)
        .map_err(|e| FormatError::envelope("message", format!("invalid JSON: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use omp_types::Action;
    use serde_json::json;

    const HASH: &str = "a90b35ef3d3a77ef2496bb00e6e5009e6267840add627341d79cae0241316a36";

    #[test]
    fn minimal_envelope_passes_header_check() {
        let message = json!({ "version": "0.1.0", "action": { "type": "MPA_LISTING_ADD" } });
        assert_eq!(validate_envelope(&message).unwrap(), ActionType::ListingAdd);
        assert!(validate_format(&message).is_err());
    }

    #[test]
    fn missing_or_unknown_type_fails() {
        let missing = json!({ "version": "0.1.0", "action": { "generated": 1 } });
        let err = validate_envelope(&missing).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedEnvelope);
        assert_eq!(err.path, "action.type");

        let unknown = json!({ "version": "0.1.0", "action": { "type": "MPA_GAWGD_WFTF" } });
        let err = validate_format(&unknown).unwrap_err();
        assert_eq!(err.reason, "unknown value: MPA_GAWGD_WFTF");
    }

    #[test]
    fn version_is_required() {
        let empty = json!({ "version": "", "action": { "type": "MPA_CANCEL" } });
        assert_eq!(validate_envelope(&empty).unwrap_err().path, "version");
        let missing = json!({ "action": { "type": "MPA_CANCEL" } });
        assert_eq!(validate_envelope(&missing).unwrap_err().path, "version");
    }

    #[test]
    fn non_object_message() {
        let err = validate_envelope(&json!("MPA_BID")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedEnvelope);
        assert!(validate_envelope(&json!({ "version": "1", "action": [] })).is_err());
    }

    #[test]
    fn dispatches_to_action_validator() {
        let cancel = json!({
            "version": "0.1.0",
            "action": { "type": "MPA_CANCEL", "generated": 1, "bid": HASH }
        });
        assert_eq!(validate_format(&cancel).unwrap(), ActionType::Cancel);

        let envelope = decode_envelope(&cancel).unwrap();
        assert_eq!(envelope.version, "0.1.0");
        assert!(matches!(envelope.action, Action::Cancel(_)));
    }

    #[test]
    fn parse_rejects_oversized_and_invalid_input() {
        let text = r#"{"version":"0.1.0","action":{"type":"MPA_CANCEL"}}"#;
        assert!(parse_envelope(text, 1024).is_ok());

        let err = parse_envelope(text, 8).unwrap_err();
        assert!(err.reason.starts_with("too large"));

        let err = parse_envelope("{not json", 1024).unwrap_err();
        assert_eq!(err.path, "message");
        assert!(err.reason.starts_with("invalid JSON"));
    }
}
