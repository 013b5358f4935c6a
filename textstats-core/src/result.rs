//! Analysis result record
//!
//! Field names serialize in PascalCase (`TotalWords`, `WordList`, ...) so the
//! record can be exchanged with tools that use those names.

use crate::syllables::SyllableAnalysis;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Word count per syllable count
pub type SyllableHistogram = BTreeMap<i32, usize>;

/// A distinct word seen during analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Word {
    /// Spelling as first tokenized, case preserved
    pub word: String,
    /// Number of times this exact spelling occurred
    pub occurrences: usize,
    pub syllable_analysis: SyllableAnalysis,
}

/// Statistics accumulated over one analysis pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AnalysisResult {
    /// Word occurrences
    pub total_words: usize,
    /// Distinct spellings
    pub unique_words: usize,
    pub sentences: usize,
    pub letters: usize,
    pub punctuation: usize,
    pub spaces: usize,
    /// Sum of the reconciled syllable count over every occurrence
    pub syllables: i64,
    pub difficult_words: usize,
    /// Occurrence-weighted histogram
    pub word_count_per_syllable_count: SyllableHistogram,
    /// One entry per distinct word
    pub unique_word_count_per_syllable_count: SyllableHistogram,
    /// Occurrences of capitalized words, tracked only when enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proper_noun_word_count_per_syllable_count: Option<SyllableHistogram>,
    pub word_list: BTreeMap<String, Word>,
}

impl AnalysisResult {
    /// Empty result at the start of a pass
    pub fn new(track_proper_nouns: bool) -> Self {
        Self {
            total_words: 0,
            unique_words: 0,
            sentences: 0,
            letters: 0,
            punctuation: 0,
            spaces: 0,
            syllables: 0,
            difficult_words: 0,
            word_count_per_syllable_count: SyllableHistogram::new(),
            unique_word_count_per_syllable_count: SyllableHistogram::new(),
            proper_noun_word_count_per_syllable_count: track_proper_nouns
                .then(SyllableHistogram::new),
            word_list: BTreeMap::new(),
        }
    }

    /// Look up a word by exact spelling
    pub fn word(&self, spelling: &str) -> Option<&Word> {
        self.word_list.get(spelling)
    }

    /// Whether the histogram and word-list invariants hold
    pub fn invariants_hold(&self) -> bool {
        let weighted: usize = self.word_count_per_syllable_count.values().sum();
        let unique: usize = self.unique_word_count_per_syllable_count.values().sum();
        let occurrences: usize = self.word_list.values().map(|w| w.occurrences).sum();

        weighted == self.total_words
            && unique == self.unique_words
            && self.unique_words == self.word_list.len()
            && occurrences == self.total_words
    }
}

impl Default for AnalysisResult {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_result_is_empty() {
        let result = AnalysisResult::new(false);
        assert_eq!(result.total_words, 0);
        assert_eq!(result.syllables, 0);
        assert!(result.word_list.is_empty());
        assert!(result.proper_noun_word_count_per_syllable_count.is_none());
        assert!(result.invariants_hold());

        let tracking = AnalysisResult::new(true);
        assert_eq!(
            tracking.proper_noun_word_count_per_syllable_count,
            Some(SyllableHistogram::new())
        );
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(AnalysisResult::default()).unwrap();
        let object = json.as_object().unwrap();
        for key in [
            "TotalWords",
            "UniqueWords",
            "Sentences",
            "Letters",
            "Punctuation",
            "Spaces",
            "Syllables",
            "DifficultWords",
            "WordCountPerSyllableCount",
            "UniqueWordCountPerSyllableCount",
            "WordList",
        ] {
            assert!(object.contains_key(key), "missing {key}");
        }
        assert!(!object.contains_key("ProperNounWordCountPerSyllableCount"));
    }

    #[test]
    fn test_invariants_detect_inconsistency() {
        let mut result = AnalysisResult::default();
        result.total_words = 1;
        assert!(!result.invariants_hold());

        result.word_count_per_syllable_count.insert(1, 1);
        assert!(!result.invariants_hold());
    }
}
