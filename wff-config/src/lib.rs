//! Shared configuration loader for the wff tools.
//!
//! `defaults/wff.default.toml` is embedded into every binary so that the documented
//! defaults and runtime behavior stay in sync. Applications layer user-specific files on
//! top of those defaults via [`Loader`] before deserializing into [`WffConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/wff.default.toml");

/// Top-level configuration consumed by wff applications.
#[derive(Debug, Clone, Deserialize)]
pub struct WffConfig {
    pub output: OutputConfig,
    pub debug: DebugConfig,
}

/// Controls how batch results are printed.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub valid_label: String,
    pub invalid_label: String,
    pub format: OutputFormat,
}

impl OutputConfig {
    pub fn label(&self, valid: bool) -> &str {
        if valid {
            &self.valid_label
        } else {
            &self.invalid_label
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// One label line per expression.
    Plain,
    /// Token trace line, then the label.
    Tokens,
    /// Tree rendering of each valid formula, then the label.
    Tree,
    /// A single JSON array describing every expression.
    Json,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Plain,
        OutputFormat::Tokens,
        OutputFormat::Tree,
        OutputFormat::Json,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Plain => "plain",
            OutputFormat::Tokens => "tokens",
            OutputFormat::Tree => "tree",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Knobs for `--debug` runs.
#[derive(Debug, Clone, Deserialize)]
pub struct DebugConfig {
    pub show_tokens: bool,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (used for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<WffConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<WffConfig, ConfigError> {
    Loader::new().build()
}
