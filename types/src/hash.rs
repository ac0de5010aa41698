//! Derived content hash used to link messages in a trade sequence.

use crate::error::TypeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A SHA-256 content hash, carried as 64 lower-case hex characters.
///
/// Opaque: it is only ever compared for equality, never decoded.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContentHash(String);

impl ContentHash {
    /// Number of hex characters in a well-formed hash.
    pub const HEX_LEN: usize = 64;

    /// Build a hash from raw digest bytes.
    pub fn from_digest(bytes: &[u8; 32]) -> Self {
        Self(hex::encode(bytes))
    }

    /// Parse a hash, rejecting anything but 64 lower-case hex characters.
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        if Self::is_well_formed(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(TypeError::InvalidHash(s.to_string()))
        }
    }

    /// Whether `s` has the shape of a content hash.
    pub fn is_well_formed(s: &str) -> bool {
        s.len() == Self::HEX_LEN
            && s.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ContentHash {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if Self::is_well_formed(&s) {
            Ok(Self(s))
        } else {
            Err(TypeError::InvalidHash(s))
        }
    }
}

impl From<ContentHash> for String {
    fn from(h: ContentHash) -> Self {
        h.0
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentHash({})", &self.0[..8.min(self.0.len())])
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
