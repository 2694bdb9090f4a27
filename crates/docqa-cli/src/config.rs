//! Configuration settings
//!
//! Settings come from `docqa.toml`. Every section and field is optional;
//! missing values fall back to their defaults.
//!
//! ```toml
//! [corpus]
//! valid = "jsons-safe"
//! invalid = "jsons-unsafe"
//!
//! [output]
//! format = "json"
//! show_valid = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE: &str = "docqa.toml";

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for tool consumption
    Json,
}

/// Top-level settings structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixture corpus locations
    pub corpus: CorpusSettings,
    /// Report output
    pub output: OutputSettings,
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load settings
    ///
    /// An explicit path must exist and parse. Without one, `docqa.toml` in
    /// the working directory is used when present, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file not found: {}", path.display());
                }
                Self::read(path)
            }
            None => {
                let candidate = Path::new(CONFIG_FILE);
                if candidate.is_file() {
                    Self::read(candidate)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let settings = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        debug!(file = %path.display(), "loaded settings");
        Ok(settings)
    }
}

/// Fixture corpus directories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusSettings {
    /// Directory of documents expected to be valid
    pub valid: PathBuf,
    /// Directory of documents expected to be invalid
    pub invalid: PathBuf,
}

impl Default for CorpusSettings {
    fn default() -> Self {
        Self {
            valid: PathBuf::from("jsons-safe"),
            invalid: PathBuf::from("jsons-unsafe"),
        }
    }
}

/// Report output settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
    /// Print valid reports too, not only invalid ones
    pub show_valid: bool,
}
