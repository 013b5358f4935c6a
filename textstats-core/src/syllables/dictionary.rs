//! Reference syllable dictionaries
//!
//! A dictionary supplies authoritative counts for the words it lists and
//! nothing for the rest. The bundled [`SyllableTable`] reads the JSON
//! object produced from a pronunciation corpus (`{"WORD": count, ...}`).

use crate::error::{CoreError, CoreResult};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// Lookup of authoritative syllable counts
pub trait SyllableDictionary: Send + Sync {
    /// Count for `word`, or `None` when the word is not listed
    fn lookup(&self, word: &str) -> Option<i32>;

    /// Number of listed words
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Dictionary with no entries
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDictionary;

impl SyllableDictionary for NoDictionary {
    fn lookup(&self, _word: &str) -> Option<i32> {
        None
    }

    fn len(&self) -> usize {
        0
    }
}

/// In-memory syllable table keyed by lowercase spelling
#[derive(Debug, Clone, Default)]
pub struct SyllableTable {
    entries: HashMap<String, i32>,
}

impl SyllableTable {
    /// Build a table from (word, count) pairs.
    ///
    /// Keys are folded to lowercase. Entries with a count below one carry no
    /// usable pronunciation and are skipped.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, i32)>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .filter(|(_, count)| *count > 0)
            .map(|(word, count)| (word.as_ref().to_lowercase(), count))
            .collect();

        Self { entries }
    }

    /// Read a JSON object of word to count
    pub fn from_json_reader<R: Read>(reader: R) -> CoreResult<Self> {
        let raw: HashMap<String, i32> = serde_json::from_reader(reader)
            .map_err(|e| CoreError::Dictionary(format!("Invalid syllable table JSON: {e}")))?;

        let table = Self::from_entries(raw);
        log::debug!("loaded syllable table with {} entries", table.len());
        Ok(table)
    }

    /// Read a JSON syllable table from a file
    pub fn from_json_file(path: &Path) -> CoreResult<Self> {
        let file = std::fs::File::open(path).map_err(|e| {
            CoreError::Dictionary(format!(
                "Failed to open syllable table '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_json_reader(std::io::BufReader::new(file))
    }
}

impl SyllableDictionary for SyllableTable {
    fn lookup(&self, word: &str) -> Option<i32> {
        if word.chars().any(char::is_uppercase) {
            self.entries.get(&word.to_lowercase()).copied()
        } else {
            self.entries.get(word).copied()
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
