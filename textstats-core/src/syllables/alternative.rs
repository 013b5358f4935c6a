//! Vowel-pair syllable estimator
//!
//! An independent heuristic used as the second opinion during
//! reconciliation: drop common silent endings, then count runs of one or
//! two vowels.

use super::SyllableEstimator;
use regex::Regex;
use std::sync::OnceLock;

static SILENT_ENDING: OnceLock<Regex> = OnceLock::new();
static LEADING_Y: OnceLock<Regex> = OnceLock::new();
static VOWEL_PAIR: OnceLock<Regex> = OnceLock::new();

fn silent_ending() -> &'static Regex {
    SILENT_ENDING.get_or_init(|| {
        Regex::new(r"(?:[^laeiouy]es|ed|[^laeiouy]e)$").expect("silent ending pattern is valid")
    })
}

fn leading_y() -> &'static Regex {
    LEADING_Y.get_or_init(|| Regex::new(r"^y").expect("leading y pattern is valid"))
}

fn vowel_pair() -> &'static Regex {
    VOWEL_PAIR.get_or_init(|| Regex::new(r"[aeiouy]{1,2}").expect("vowel pair pattern is valid"))
}

/// Alternative estimator counting one- and two-vowel runs
#[derive(Debug, Clone, Copy, Default)]
pub struct VowelPairEstimator;

impl VowelPairEstimator {
    pub fn new() -> Self {
        Self
    }
}

impl SyllableEstimator for VowelPairEstimator {
    fn estimate(&self, word: &str) -> i32 {
        let letters: String = word
            .chars()
            .filter(|ch| ch.is_alphabetic())
            .flat_map(char::to_lowercase)
            .collect();

        if letters.is_empty() {
            return 0;
        }
        if letters.chars().count() <= 3 {
            return 1;
        }

        let stripped = silent_ending().replace(&letters, "");
        let stripped = leading_y().replace(&stripped, "");

        let count = vowel_pair().find_iter(&stripped).count() as i32;
        count.max(1)
    }

    fn name(&self) -> &'static str {
        "vowel-pair"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_words_are_one_syllable() {
        let estimator = VowelPairEstimator::new();
        assert_eq!(estimator.estimate("a"), 1);
        assert_eq!(estimator.estimate("Cat"), 1);
        assert_eq!(estimator.estimate("the"), 1);
        assert_eq!(estimator.estimate("shh"), 1);
    }

    #[test]
    fn test_words_without_letters() {
        let estimator = VowelPairEstimator::new();
        assert_eq!(estimator.estimate(""), 0);
        assert_eq!(estimator.estimate("123"), 0);
    }

    #[test]
    fn test_silent_endings() {
        let estimator = VowelPairEstimator::new();
        assert_eq!(estimator.estimate("make"), 1);
        assert_eq!(estimator.estimate("table"), 2);
        assert_eq!(estimator.estimate("jumped"), 1);
        assert_eq!(estimator.estimate("boxes"), 1);
    }

    #[test]
    fn test_multi_syllable_words() {
        let estimator = VowelPairEstimator::new();
        assert_eq!(estimator.estimate("simile"), 3);
        assert_eq!(estimator.estimate("nation"), 2);
        assert_eq!(estimator.estimate("yellow"), 2);
        assert_eq!(estimator.estimate("computer"), 3);
    }

    #[test]
    fn test_deterministic() {
        let estimator = VowelPairEstimator::new();
        for word in ["readability", "Cat", "rhythm", "queue"] {
            assert_eq!(estimator.estimate(word), estimator.estimate(word));
        }
    }
}
