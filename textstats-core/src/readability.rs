//! Readability formulas over a finished [`AnalysisResult`]
//!
//! Average words per sentence treats a text without sentence terminators as
//! one sentence-equivalent of `TotalWords` words. Every other formula with a
//! sentence denominator uses `max(Sentences, 1)` instead. Divisions by a zero
//! word count follow IEEE semantics and produce NaN.

use crate::result::AnalysisResult;
use serde::{Deserialize, Serialize};

impl AnalysisResult {
    fn words_f64(&self) -> f64 {
        self.total_words as f64
    }

    fn sentence_denominator(&self) -> f64 {
        self.sentences.max(1) as f64
    }

    pub fn avg_words_per_sentence(&self) -> f64 {
        if self.sentences == 0 {
            return self.words_f64();
        }
        self.words_f64() / self.sentences as f64
    }

    pub fn avg_letters_per_word(&self) -> f64 {
        self.letters as f64 / self.words_f64()
    }

    pub fn avg_syllables_per_word(&self) -> f64 {
        self.syllables as f64 / self.words_f64()
    }

    /// Word occurrences with at least `n` syllables, proper nouns included
    pub fn words_with_at_least_n_syllables(&self, n: i32) -> usize {
        self.word_count_per_syllable_count
            .range(n..)
            .map(|(_, count)| count)
            .sum()
    }

    /// Like [`Self::words_with_at_least_n_syllables`] but without capitalized
    /// words when proper nouns are tracked
    pub fn words_with_at_least_n_syllables_excluding_proper_nouns(&self, n: i32) -> usize {
        let all = self.words_with_at_least_n_syllables(n);
        match &self.proper_noun_word_count_per_syllable_count {
            Some(proper) => {
                let proper_nouns: usize = proper.range(n..).map(|(_, count)| count).sum();
                all.saturating_sub(proper_nouns)
            }
            None => all,
        }
    }

    pub fn pct_words_with_at_least_n_syllables(&self, n: i32) -> f64 {
        self.words_with_at_least_n_syllables(n) as f64 / self.words_f64() * 100.0
    }

    pub fn flesch_kincaid_reading_ease(&self) -> f64 {
        206.835 - 1.015 * self.avg_words_per_sentence() - 84.6 * self.avg_syllables_per_word()
    }

    pub fn flesch_kincaid_grade_level(&self) -> f64 {
        0.39 * self.avg_words_per_sentence() + 11.8 * self.avg_syllables_per_word() - 15.59
    }

    /// Gunning fog index. Complex words exclude proper nouns when they are tracked.
    pub fn gunning_fog(&self) -> f64 {
        let complex = self.words_with_at_least_n_syllables_excluding_proper_nouns(3) as f64;
        let pct_complex = complex / self.words_f64() * 100.0;
        (self.avg_words_per_sentence() + pct_complex) * 0.4
    }

    pub fn coleman_liau(&self) -> f64 {
        let words = self.words_f64();
        5.89 * (self.letters as f64 / words) - 0.3 * (self.sentence_denominator() / words) - 15.8
    }

    pub fn smog(&self) -> f64 {
        let polysyllables = self.words_with_at_least_n_syllables(3) as f64;
        1.0430 * (polysyllables * (30.0 / self.sentence_denominator()) + 3.1291).sqrt()
    }

    pub fn automated_readability_index(&self) -> f64 {
        let words = self.words_f64();
        4.71 * (self.letters as f64 / words) + 0.5 * (words / self.sentence_denominator())
            - 21.43
    }

    pub fn dale_chall(&self) -> f64 {
        let pct_difficult = self.difficult_words as f64 / self.words_f64() * 100.0;
        let score = 0.1579 * pct_difficult + 0.0496 * (self.words_f64() / self.sentence_denominator());
        if pct_difficult > 5.0 {
            score + 3.6365
        } else {
            score
        }
    }

    /// Every derived score in one value
    pub fn readability(&self) -> ReadabilityScores {
        ReadabilityScores::from(self)
    }
}

/// All derived readability values of a result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReadabilityScores {
    pub avg_words_per_sentence: f64,
    pub avg_letters_per_word: f64,
    pub avg_syllables_per_word: f64,
    pub pct_words_with_at_least_three_syllables: f64,
    pub flesch_kincaid_reading_ease: f64,
    pub flesch_kincaid_grade_level: f64,
    pub gunning_fog: f64,
    pub coleman_liau: f64,
    #[serde(rename = "SMOG")]
    pub smog: f64,
    pub automated_readability_index: f64,
    pub dale_chall: f64,
}

impl From<&AnalysisResult> for ReadabilityScores {
    fn from(result: &AnalysisResult) -> Self {
        Self {
            avg_words_per_sentence: result.avg_words_per_sentence(),
            avg_letters_per_word: result.avg_letters_per_word(),
            avg_syllables_per_word: result.avg_syllables_per_word(),
            pct_words_with_at_least_three_syllables: result
                .pct_words_with_at_least_n_syllables(3),
            flesch_kincaid_reading_ease: result.flesch_kincaid_reading_ease(),
            flesch_kincaid_grade_level: result.flesch_kincaid_grade_level(),
            gunning_fog: result.gunning_fog(),
            coleman_liau: result.coleman_liau(),
            smog: result.smog(),
            automated_readability_index: result.automated_readability_index(),
            dale_chall: result.dale_chall(),
        }
    }
}
