//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Comparison configuration
    #[serde(default)]
    pub comparison: ComparisonConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Comparison-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ComparisonConfig {
    /// Mode used when `--mode` is not given
    pub default_mode: String,

    /// Substring length used when `--length` is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub substring_length: Option<i64>,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            default_mode: overlap_core::api::defaults::MODE.to_string(),
            substring_length: None,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format used when `--format` is not given
    pub format: String,

    /// CSS class put on highlight spans
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight_class: Option<String>,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            highlight_class: None,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = toml::from_str(&content).map_err(|e| {
            CliError::ConfigError(format!("{}: {}", path.display(), e.message()))
        })?;

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Serialize as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}
