//! Configuration loading for the aggregator.
//!
//! All recap settings are loaded from a TOML configuration file; every
//! field has a default so a missing file or empty table works.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Complete recap configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecapConfig {
    /// Scoring-run detection settings
    #[serde(default)]
    pub runs: RunConfig,
    /// Narrative generation settings
    #[serde(default)]
    pub narrative: NarrativeConfig,
}

impl RecapConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_str(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::Toml)
    }

    /// Serializes the configuration as a TOML string.
    pub fn to_toml(&self) -> Result<String, TomlSerializeError> {
        toml::to_string_pretty(self).map_err(TomlSerializeError)
    }
}

/// Scoring-run detection configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Minimum unanswered points before a streak counts as a run.
    pub point_threshold: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { point_threshold: 8 }
    }
}

/// Narrative generation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrativeConfig {
    /// Append one clause per detected scoring run.
    pub include_runs: bool,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self { include_runs: true }
    }
}

/// Errors that can occur loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading the config file
    #[error("I/O error: {0}")]
    Io(#[source] std::io::Error),
    /// Error parsing TOML
    #[error("TOML parse error: {0}")]
    Toml(#[source] toml::de::Error),
}

/// Error serializing configuration to TOML.
#[derive(Debug, Error)]
#[error("TOML serialize error: {0}")]
pub struct TomlSerializeError(#[source] pub toml::ser::Error);

/// Returns the default configuration as a TOML string.
pub fn default_config_toml() -> String {
    r#"# Recap configuration

[runs]
# Minimum unanswered points before a streak counts as a scoring run
point_threshold = 8

[narrative]
# Append one clause per detected scoring run
include_runs = true
"#
    .to_string()
}
