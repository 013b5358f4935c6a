//! Analyzer configuration

use crate::error::{CoreError, CoreResult};
use crate::syllables::UnresolvedPolicy;
use crate::tokenizer::OtherRunes;
use std::path::{Path, PathBuf};

/// Default configuration constants
pub mod defaults {
    /// Read size for streamed input in bytes
    pub const CHUNK_SIZE: usize = crate::tokenizer::stream::DEFAULT_CHUNK_SIZE;

    /// Smallest accepted chunk size, enough for one UTF-8 sequence
    pub const MIN_CHUNK_SIZE: usize = 4;
}

/// Analysis configuration.
///
/// Paths are only checked when a [`TextAnalyzer`](crate::api::TextAnalyzer)
/// is built from the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub(crate) rules_path: Option<PathBuf>,
    pub(crate) dictionary_path: Option<PathBuf>,
    pub(crate) word_list_path: Option<PathBuf>,
    pub(crate) unresolved_policy: UnresolvedPolicy,
    pub(crate) track_proper_nouns: bool,
    pub(crate) other_runes: OtherRunes,
    pub(crate) chunk_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rules_path: None,
            dictionary_path: None,
            word_list_path: None,
            unresolved_policy: UnresolvedPolicy::default(),
            track_proper_nouns: false,
            other_runes: OtherRunes::default(),
            chunk_size: defaults::CHUNK_SIZE,
        }
    }
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Rule table file, `None` for the embedded English tables
    pub fn rules_path(&self) -> Option<&Path> {
        self.rules_path.as_deref()
    }

    /// Syllable dictionary file, `None` for no dictionary
    pub fn dictionary_path(&self) -> Option<&Path> {
        self.dictionary_path.as_deref()
    }

    /// Common-word list file, `None` for the embedded Dale-Chall list
    pub fn word_list_path(&self) -> Option<&Path> {
        self.word_list_path.as_deref()
    }

    pub fn unresolved_policy(&self) -> UnresolvedPolicy {
        self.unresolved_policy
    }

    pub fn track_proper_nouns(&self) -> bool {
        self.track_proper_nouns
    }

    pub fn other_runes(&self) -> OtherRunes {
        self.other_runes
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub(crate) fn validate(&self) -> CoreResult<()> {
        if self.chunk_size < defaults::MIN_CHUNK_SIZE {
            return Err(CoreError::Configuration(format!(
                "chunk_size must be at least {} bytes",
                defaults::MIN_CHUNK_SIZE
            )));
        }

        for (name, path) in [
            ("rules", &self.rules_path),
            ("dictionary", &self.dictionary_path),
            ("word list", &self.word_list_path),
        ] {
            if path.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
                return Err(CoreError::Configuration(format!(
                    "{name} path must not be empty"
                )));
            }
        }

        Ok(())
    }
}

/// Fluent builder for [`Config`]
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load rule tables from a TOML file instead of the embedded ones
    pub fn rules_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.rules_path = Some(path.into());
        self
    }

    /// Load a JSON syllable dictionary (`{"word": count, ...}`)
    pub fn dictionary_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.dictionary_path = Some(path.into());
        self
    }

    /// Replace the embedded Dale-Chall list with a word list file
    pub fn word_list_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.word_list_path = Some(path.into());
        self
    }

    pub fn unresolved_policy(mut self, policy: UnresolvedPolicy) -> Self {
        self.config.unresolved_policy = policy;
        self
    }

    /// Keep a separate histogram of capitalized words
    pub fn track_proper_nouns(mut self, enabled: bool) -> Self {
        self.config.track_proper_nouns = enabled;
        self
    }

    pub fn other_runes(mut self, mode: OtherRunes) -> Self {
        self.config.other_runes = mode;
        self
    }

    /// Set the read size for streamed input in bytes
    pub fn chunk_size(mut self, bytes: usize) -> Self {
        self.config.chunk_size = bytes;
        self
    }

    pub fn build(self) -> CoreResult<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.rules_path().is_none());
        assert_eq!(config.unresolved_policy(), UnresolvedPolicy::Zero);
        assert!(!config.track_proper_nouns());
        assert_eq!(config.other_runes(), OtherRunes::Ignore);
        assert_eq!(config.chunk_size(), defaults::CHUNK_SIZE);
    }

    #[test]
    fn test_builder() {
        let config = Config::builder()
            .dictionary_file("cmu.json")
            .unresolved_policy(UnresolvedPolicy::Alternative)
            .track_proper_nouns(true)
            .other_runes(OtherRunes::Split)
            .chunk_size(1024)
            .build()
            .unwrap();

        assert_eq!(config.dictionary_path(), Some(Path::new("cmu.json")));
        assert_eq!(config.unresolved_policy(), UnresolvedPolicy::Alternative);
        assert!(config.track_proper_nouns());
        assert_eq!(config.other_runes(), OtherRunes::Split);
        assert_eq!(config.chunk_size(), 1024);
    }

    #[test]
    fn test_invalid_config() {
        assert!(Config::builder().chunk_size(0).build().is_err());
        assert!(Config::builder().rules_file("").build().is_err());
    }
}
