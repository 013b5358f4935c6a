//! Rule-table syllable estimator

use super::SyllableEstimator;
use crate::rules::RuleTables;
use std::sync::Arc;

/// Primary syllable estimator driven by [`RuleTables`].
///
/// The count is not clamped: short words can come out at zero or below once
/// affixes are stripped and subtract patterns applied.
#[derive(Debug, Clone)]
pub struct HeuristicEstimator {
    rules: Arc<RuleTables>,
}

impl HeuristicEstimator {
    pub fn new(rules: Arc<RuleTables>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleTables {
        &self.rules
    }
}

impl SyllableEstimator for HeuristicEstimator {
    fn estimate(&self, word: &str) -> i32 {
        let mut word = word.to_lowercase();

        if let Some(count) = self.rules.problem_word(&word) {
            return count;
        }

        // Stripping is cumulative; each pattern sees the word left by the previous ones
        let mut prefix_suffix_count = 0;
        for pattern in self.rules.prefix_suffix_patterns() {
            if pattern.is_match(&word) {
                word = pattern.replace_all(&word, "").into_owned();
                prefix_suffix_count += 1;
            }
        }

        let mut count = self.rules.vowel_group_count(&word) as i32 + prefix_suffix_count;

        for pattern in self.rules.subtract_patterns() {
            if pattern.is_match(&word) {
                count -= 1;
            }
        }

        for pattern in self.rules.add_patterns() {
            if pattern.is_match(&word) {
                count += 1;
            }
        }

        count
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::english_rules;

    fn estimator() -> HeuristicEstimator {
        HeuristicEstimator::new(english_rules().unwrap())
    }

    #[test]
    fn test_single_syllable_words() {
        let estimator = estimator();
        for word in ["cat", "sat", "ham", "the", "make", "tree"] {
            assert_eq!(estimator.estimate(word), 1, "word {word}");
        }
    }

    #[test]
    fn test_case_is_folded() {
        let estimator = estimator();
        assert_eq!(estimator.estimate("Cat"), estimator.estimate("cat"));
        assert_eq!(estimator.estimate("NATION"), estimator.estimate("nation"));
    }

    #[test]
    fn test_problem_words_override_rules() {
        let estimator = estimator();
        assert_eq!(estimator.estimate("simile"), 3);
        assert_eq!(estimator.estimate("Simile"), 3);
        assert_eq!(estimator.estimate("forever"), 3);
        assert_eq!(estimator.estimate("shoreline"), 2);
        assert_eq!(estimator.estimate("forest"), 2);
    }

    #[test]
    fn test_prefix_and_suffix_stripping() {
        let estimator = estimator();
        // un + happy
        assert_eq!(estimator.estimate("unhappy"), 3);
        // runn + ing
        assert_eq!(estimator.estimate("running"), 2);
        // happi + ly
        assert_eq!(estimator.estimate("happily"), 3);
        // hope + less, silent e subtracted
        assert_eq!(estimator.estimate("hopeless"), 2);
    }

    #[test]
    fn test_subtract_and_add_patterns() {
        let estimator = estimator();
        // "ion" subtracts, "io" adds back
        assert_eq!(estimator.estimate("nation"), 2);
        assert_eq!(estimator.estimate("table"), 2);
    }

    #[test]
    fn test_count_is_not_clamped() {
        let estimator = estimator();
        assert_eq!(estimator.estimate("shed"), 0);
        assert_eq!(estimator.estimate("sched"), -1);
    }

    #[test]
    fn test_empty_word() {
        assert_eq!(estimator().estimate(""), 0);
    }
}
