//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use textstats_core::{OtherRunes, UnresolvedPolicy};

/// CLI configuration file (TOML)
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Analysis configuration
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Analysis-related configuration
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Rule table file replacing the embedded English rules
    pub rules: Option<PathBuf>,

    /// JSON syllable dictionary
    pub dictionary: Option<PathBuf>,

    /// Common-word list replacing the embedded Dale-Chall list
    pub word_list: Option<PathBuf>,

    /// Syllable count for words no rule resolves
    pub fallback: UnresolvedPolicy,

    /// Track capitalized words separately
    pub proper_nouns: bool,

    /// Treatment of digits and symbols inside words
    pub other_runes: OtherRunes,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Include the per-word table
    pub words: bool,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            words: false,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config = toml::from_str(&content).map_err(|e| {
            CliError::ConfigError(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        log::debug!("loaded CLI configuration from {}", path.display());
        Ok(config)
    }
}
