//! Path-tracking accessor over a JSON object under validation.
//!
//! A [`Node`] wraps one object of the message tree together with its field
//! path and the [`ErrorKind`] its failures are reported as, so validators read
//! fields without building paths or error values by hand.

use crate::error::FormatError;
use crate::primitives;
use omp_types::ErrorKind;
use serde_json::{Map, Value};
use std::str::FromStr;

/// Path of the action object inside an envelope.
pub const ACTION_PATH: &str = "action";

#[derive(Clone, Debug)]
pub struct Node<'a> {
    map: &'a Map<String, Value>,
    path: String,
    kind: ErrorKind,
}

impl<'a> Node<'a> {
    /// Wrap `value`, which must be an object.
    pub fn new(
        value: Option<&'a Value>,
        path: impl Into<String>,
        kind: ErrorKind,
    ) -> Result<Self, FormatError> {
        let path = path.into();
        match value {
            Some(Value::Object(map)) => Ok(Self { map, path, kind }),
            _ => Err(FormatError::new(kind, path, "missing or not an object")),
        }
    }

    /// Wrap the `action` object of an envelope.
    pub fn action(value: &'a Value) -> Result<Self, FormatError> {
        Self::new(Some(value), ACTION_PATH, ErrorKind::MalformedEnvelope)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Path of a field of this object.
    pub fn child_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key)
    }

    /// Whether `key` is absent or explicitly `null`.
    pub fn is_unset(&self, key: &str) -> bool {
        matches!(self.map.get(key), None | Some(Value::Null))
    }

    /// An error at `key` carrying this node's kind.
    pub fn error(&self, key: &str, reason: impl Into<String>) -> FormatError {
        FormatError::new(self.kind, self.child_path(key), reason)
    }

    /// Required nested object, reported with this node's kind.
    pub fn object(&self, key: &str) -> Result<Node<'a>, FormatError> {
        Node::new(self.get(key), self.child_path(key), self.kind)
    }

    /// Required nested object, reported with a different kind.
    pub fn object_as(&self, key: &str, kind: ErrorKind) -> Result<Node<'a>, FormatError> {
        Node::new(self.get(key), self.child_path(key), kind)
    }

    /// Nested object that may be absent or `null`.
    pub fn optional_object(&self, key: &str) -> Result<Option<Node<'a>>, FormatError> {
        if self.is_unset(key) {
            return Ok(None);
        }
        self.object(key).map(Some)
    }

    pub fn string(&self, key: &str) -> Result<&'a str, FormatError> {
        match self.get(key) {
            Some(Value::String(s)) if !s.is_empty() => Ok(s.as_str()),
            _ => Err(self.error(key, "missing or not a string")),
        }
    }

    /// String that may be absent or `null`; when present it may be empty.
    pub fn optional_string(&self, key: &str) -> Result<Option<&'a str>, FormatError> {
        match self.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(self.error(key, "not a string")),
        }
    }

    pub fn integer(&self, key: &str) -> Result<u64, FormatError> {
        self.get(key)
            .and_then(Value::as_u64)
            .ok_or_else(|| self.error(key, "missing or not a non negative integer"))
    }

    pub fn optional_integer(&self, key: &str) -> Result<Option<u64>, FormatError> {
        if self.is_unset(key) {
            return Ok(None);
        }
        self.integer(key).map(Some)
    }

    /// Non-negative finite number (integer or decimal).
    pub fn number(&self, key: &str) -> Result<f64, FormatError> {
        self.get(key)
            .and_then(Value::as_f64)
            .filter(|n| n.is_finite() && *n >= 0.0)
            .ok_or_else(|| self.error(key, "missing or not a non negative number"))
    }

    /// Required array with at least one element.
    pub fn array(&self, key: &str) -> Result<&'a [Value], FormatError> {
        match self.get(key) {
            Some(Value::Array(items)) if !items.is_empty() => Ok(items.as_slice()),
            _ => Err(self.error(key, "missing or not an array")),
        }
    }

    /// Array that may be absent (but not `null`); may be empty.
    pub fn optional_array(&self, key: &str) -> Result<&'a [Value], FormatError> {
        match self.get(key) {
            None => Ok(&[]),
            Some(Value::Array(items)) => Ok(items.as_slice()),
            Some(_) => Err(self.error(key, "not an array")),
        }
    }

    /// Member of a closed wire enumeration.
    pub fn tag<T: FromStr>(&self, key: &str) -> Result<T, FormatError> {
        let raw = match self.get(key) {
            Some(Value::String(s)) => s,
            _ => return Err(self.error(key, "missing or not a string")),
        };
        raw.parse()
            .map_err(|_| self.error(key, format!("unknown value: {raw}")))
    }

    pub fn optional_tag<T: FromStr>(&self, key: &str) -> Result<Option<T>, FormatError> {
        if self.is_unset(key) {
            return Ok(None);
        }
        self.tag(key).map(Some)
    }

    /// Required derived-hash reference to an earlier message.
    pub fn content_hash(&self, key: &str) -> Result<&'a str, FormatError> {
        let s = self.string(key)?;
        if !primitives::is_content_hash(s) {
            return Err(self.error(key, "not a valid hash"));
        }
        Ok(s)
    }
}
