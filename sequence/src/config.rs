//! Verifier configuration with TOML file support.

use omp_utils::LogFormat;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Configuration for a [`SequenceVerifier`](crate::SequenceVerifier).
///
/// Every field has a default, so an empty TOML document is a valid config.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifierConfig {
    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Format-check the messages of a sequence on the rayon pool.
    #[serde(default)]
    pub parallel_format_checks: bool,

    /// Largest serialized message accepted by `validate_json`, in bytes.
    #[serde(default = "default_max_message_bytes")]
    pub max_message_bytes: usize,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_message_bytes() -> usize {
    1024 * 1024
}

impl VerifierConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Install the global tracing subscriber described by this config.
    pub fn init_logging(&self) -> Result<(), ConfigError> {
        omp_utils::init_logging(self.log_format, &self.log_level)?;
        Ok(())
    }
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::default(),
            log_level: default_log_level(),
            parallel_format_checks: false,
            max_message_bytes: default_max_message_bytes(),
        }
    }
}
