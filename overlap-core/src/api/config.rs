//! Configuration API for document comparison

use crate::api::{Error, Mode};
use crate::domain::Marker;

/// Default configuration constants
pub mod defaults {
    /// Default comparison granularity
    pub const MODE: &str = "lines";
}

/// Comparison configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub(crate) mode: Mode,
    pub(crate) marker: Marker,
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Configuration for a mode with the default marker
    pub fn for_mode(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Comparison granularity
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Delimiters used when rendering highlighted regions
    pub fn marker(&self) -> &Marker {
        &self.marker
    }
}

/// Fluent builder for configuration
///
/// Mode and length are kept as raw strings until [`ConfigBuilder::build`] so a
/// transport can pass form values through unchanged and get precise errors.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    mode: Option<String>,
    length: Option<String>,
    highlight_class: Option<String>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the granularity selector (`lines`, `sentences` or `substrings`)
    pub fn mode(mut self, name: impl Into<String>) -> Self {
        self.mode = Some(name.into());
        self
    }

    /// Set the substring length
    pub fn length(mut self, length: impl ToString) -> Self {
        self.length = Some(length.to_string());
        self
    }

    /// Render highlights as `<span class="...">`
    pub fn highlight_class(mut self, class: impl Into<String>) -> Self {
        self.highlight_class = Some(class.into());
        self
    }

    /// Build the configuration, validating mode and length
    pub fn build(self) -> Result<Config, Error> {
        let mode = Mode::from_selector(self.mode.as_deref(), self.length.as_deref())?;

        let marker = match self.highlight_class.as_deref() {
            Some(class) if !class.trim().is_empty() => Marker::with_class(class.trim()),
            _ => Marker::span(),
        };

        Ok(Config { mode, marker })
    }
}
