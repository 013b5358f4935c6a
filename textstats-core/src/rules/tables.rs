//! Compiled runtime rule tables
//!
//! Patterns are compiled once and evaluated as ordered lists. A combined
//! alternation would not preserve the one-effect-per-pattern counting.

use super::config::RulesConfig;
use crate::error::{CoreError, CoreResult};
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Immutable, shareable rule tables for syllable estimation
#[derive(Debug, Clone)]
pub struct RuleTables {
    code: String,
    name: String,
    problem_words: HashMap<String, i32>,
    prefix_suffix: Vec<Regex>,
    vowel_splitter: Regex,
    subtract: Vec<Regex>,
    add: Vec<Regex>,
    plural_stem: Regex,
    tie_break: HashSet<(i32, i32)>,
}

fn compile(pattern: &str) -> CoreResult<Regex> {
    Regex::new(pattern).map_err(|source| CoreError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

fn compile_all(patterns: &[String]) -> CoreResult<Vec<Regex>> {
    patterns.iter().map(|p| compile(p)).collect()
}

impl RuleTables {
    /// Compile rule tables from a parsed configuration
    pub fn from_config(config: &RulesConfig) -> CoreResult<Self> {
        config.validate()?;

        let tables = Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            problem_words: config
                .problem_words
                .iter()
                .map(|(word, count)| (word.clone(), *count))
                .collect(),
            prefix_suffix: compile_all(&config.patterns.prefix_suffix)?,
            vowel_splitter: compile(&config.vowels.splitter)?,
            subtract: compile_all(&config.patterns.subtract)?,
            add: compile_all(&config.patterns.add)?,
            plural_stem: compile(&config.patterns.plural_stem)?,
            tie_break: config.tie_break.prefer_heuristic.iter().copied().collect(),
        };

        log::debug!(
            "compiled rule tables '{}': {} problem words, {} prefix/suffix, {} subtract, {} add, {} tie-break pairs",
            tables.code,
            tables.problem_words.len(),
            tables.prefix_suffix.len(),
            tables.subtract.len(),
            tables.add.len(),
            tables.tie_break.len()
        );

        Ok(tables)
    }

    /// Parse and compile rule tables from TOML text
    pub fn from_toml_str(content: &str) -> CoreResult<Self> {
        Self::from_config(&RulesConfig::from_toml_str(content)?)
    }

    /// Load rule tables from an external TOML file
    pub fn from_file(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Configuration(format!(
                "Failed to read file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config = RulesConfig::from_toml_str(&content).map_err(|e| match e {
            CoreError::Configuration(msg) => {
                CoreError::Configuration(format!("{} ({})", msg, path.display()))
            }
            other => other,
        })?;

        Self::from_config(&config)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fixed syllable count for an exception word
    #[inline]
    pub fn problem_word(&self, lowercase_word: &str) -> Option<i32> {
        self.problem_words.get(lowercase_word).copied()
    }

    /// Prefix/suffix patterns in evaluation order
    pub fn prefix_suffix_patterns(&self) -> &[Regex] {
        &self.prefix_suffix
    }

    /// Subtract patterns in evaluation order
    pub fn subtract_patterns(&self) -> &[Regex] {
        &self.subtract
    }

    /// Add patterns in evaluation order
    pub fn add_patterns(&self) -> &[Regex] {
        &self.add
    }

    /// Number of non-empty fragments left after splitting on the separator
    pub fn vowel_group_count(&self, word: &str) -> usize {
        self.vowel_splitter
            .split(word)
            .filter(|part| !part.is_empty())
            .count()
    }

    /// Whether the ordered pair is resolved in favour of the heuristic count
    #[inline]
    pub fn prefers_heuristic(&self, heuristic: i32, alternative: i32) -> bool {
        self.tie_break.contains(&(heuristic, alternative))
    }

    /// Plural-stripped stem of a word, if the stem pattern matches
    pub fn plural_stem<'a>(&self, word: &'a str) -> Option<&'a str> {
        self.plural_stem
            .captures(word)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> RuleTables {
        RuleTables::from_toml_str(include_str!("../../configs/rules/english.toml")).unwrap()
    }

    #[test]
    fn test_embedded_tables_compile() {
        let tables = english();
        assert_eq!(tables.code(), "en");
        assert_eq!(tables.name(), "English");
        assert_eq!(tables.prefix_suffix_patterns().len(), 7);
        assert_eq!(tables.subtract_patterns().len(), 17);
        assert_eq!(tables.add_patterns().len(), 18);
    }

    #[test]
    fn test_problem_words() {
        let tables = english();
        assert_eq!(tables.problem_word("simile"), Some(3));
        assert_eq!(tables.problem_word("forest"), Some(2));
        assert_eq!(tables.problem_word("tree"), None);
    }

    #[test]
    fn test_vowel_group_count() {
        let tables = english();
        assert_eq!(tables.vowel_group_count("cat"), 1);
        assert_eq!(tables.vowel_group_count("beautiful"), 3);
        assert_eq!(tables.vowel_group_count("rhythm"), 1);
        assert_eq!(tables.vowel_group_count("xyz"), 1);
        assert_eq!(tables.vowel_group_count("psst"), 0);
        assert_eq!(tables.vowel_group_count(""), 0);
    }

    #[test]
    fn test_tie_break_is_ordered() {
        let tables = english();
        assert!(tables.prefers_heuristic(2, 3));
        assert!(!tables.prefers_heuristic(3, 2));
        assert!(tables.prefers_heuristic(5, 4));
        assert!(!tables.prefers_heuristic(1, 2));
    }

    #[test]
    fn test_plural_stem() {
        let tables = english();
        assert_eq!(tables.plural_stem("cats"), Some("cat"));
        assert_eq!(tables.plural_stem("ham"), Some("ham"));
        assert_eq!(tables.plural_stem("Dogs"), Some("Dog"));
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let content = include_str!("../../configs/rules/english.toml")
            .replace("'^un',", "'^un(',");
        match RuleTables::from_toml_str(&content) {
            Err(CoreError::InvalidPattern { pattern, .. }) => assert_eq!(pattern, "^un("),
            other => panic!("Expected InvalidPattern, got {other:?}"),
        }
    }

    #[test]
    fn test_from_file_missing() {
        let result = RuleTables::from_file(Path::new("/nonexistent/rules.toml"));
        match result {
            Err(CoreError::Configuration(msg)) => assert!(msg.contains("Failed to read file")),
            other => panic!("Expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_file_roundtrip() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", include_str!("../../configs/rules/english.toml")).unwrap();

        let tables = RuleTables::from_file(file.path()).unwrap();
        assert_eq!(tables.problem_word("forever"), Some(3));
    }
}
