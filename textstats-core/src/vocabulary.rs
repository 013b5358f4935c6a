//! Dale-Chall common-word list
//!
//! A word is "difficult" when neither its exact spelling nor its
//! plural-stripped stem appears in the list. Lookups are case-sensitive:
//! the list stores words the way they are written in running text.

use crate::error::{CoreError, CoreResult};
use crate::rules::RuleTables;
use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, OnceLock};

/// Source of the embedded Dale-Chall list (whitespace separated)
pub const DALE_CHALL_WORDS: &str = include_str!("../data/dale_chall_words.txt");

static EMBEDDED_DALE_CHALL: OnceLock<Arc<CommonWords>> = OnceLock::new();

/// Set of familiar words used by the Dale-Chall formula
#[derive(Debug, Clone, Default)]
pub struct CommonWords {
    words: HashSet<String>,
}

impl CommonWords {
    /// Parse a whitespace-separated word list. Lines starting with `#` are comments.
    pub fn parse(content: &str) -> Self {
        let words = content
            .lines()
            .filter(|line| !line.trim_start().starts_with('#'))
            .flat_map(str::split_whitespace)
            .map(str::to_string)
            .collect();

        Self { words }
    }

    /// The embedded Dale-Chall list, shared process-wide
    pub fn dale_chall() -> Arc<CommonWords> {
        EMBEDDED_DALE_CHALL
            .get_or_init(|| Arc::new(Self::parse(DALE_CHALL_WORDS)))
            .clone()
    }

    /// Load a word list from a file
    pub fn from_file(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Configuration(format!(
                "Failed to read word list '{}': {}",
                path.display(),
                e
            ))
        })?;

        let list = Self::parse(&content);
        if list.is_empty() {
            return Err(CoreError::Configuration(format!(
                "Word list '{}' contains no words",
                path.display()
            )));
        }

        log::debug!("loaded {} common words from {}", list.len(), path.display());
        Ok(list)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether `word` counts as difficult: the word is unlisted and so is its
    /// plural-stripped stem (or no stem can be derived)
    pub fn is_difficult(&self, word: &str, rules: &RuleTables) -> bool {
        if self.contains(word) {
            return false;
        }

        match rules.plural_stem(word) {
            Some(stem) => !self.contains(stem),
            None => true,
        }
    }
}
