//! TOML schema for syllable rule tables

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root rule table configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesConfig {
    pub metadata: Metadata,
    pub vowels: Vowels,
    #[serde(default)]
    pub problem_words: BTreeMap<String, i32>,
    pub patterns: Patterns,
    #[serde(default)]
    pub tie_break: TieBreak,
}

/// Rule table metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Vowel group configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vowels {
    /// Pattern matching the separators between vowel groups
    pub splitter: String,
}

/// Ordered pattern lists
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patterns {
    #[serde(default)]
    pub prefix_suffix: Vec<String>,
    #[serde(default)]
    pub subtract: Vec<String>,
    #[serde(default)]
    pub add: Vec<String>,
    pub plural_stem: String,
}

/// Statistical tie-break table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TieBreak {
    /// Ordered (heuristic, alternative) pairs resolved in favour of the heuristic
    #[serde(default)]
    pub prefer_heuristic: Vec<(i32, i32)>,
}

impl RulesConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> CoreResult<Self> {
        toml::from_str(content)
            .map_err(|e| CoreError::Configuration(format!("Failed to parse rule table: {e}")))
    }

    /// Validate configuration
    pub(crate) fn validate(&self) -> CoreResult<()> {
        if self.metadata.code.trim().is_empty() {
            return Err(CoreError::Configuration(
                "metadata.code must not be empty".to_string(),
            ));
        }

        if self.vowels.splitter.is_empty() {
            return Err(CoreError::Configuration(
                "vowels.splitter must not be empty".to_string(),
            ));
        }

        if self.patterns.plural_stem.is_empty() {
            return Err(CoreError::Configuration(
                "patterns.plural_stem must not be empty".to_string(),
            ));
        }

        for (word, count) in &self.problem_words {
            if word.is_empty() || word.chars().any(char::is_uppercase) {
                return Err(CoreError::Configuration(format!(
                    "problem word '{word}' must be a non-empty lowercase word"
                )));
            }
            if *count < 1 {
                return Err(CoreError::Configuration(format!(
                    "problem word '{word}' has syllable count {count}, expected at least 1"
                )));
            }
        }

        for &(heuristic, alternative) in &self.tie_break.prefer_heuristic {
            if heuristic == alternative {
                return Err(CoreError::Configuration(format!(
                    "tie-break pair ({heuristic}, {alternative}) never applies: counts are equal"
                )));
            }
        }

        Ok(())
    }
}
