//! Reconciliation of candidate syllable counts
//!
//! Policy, first match wins:
//! 1. a dictionary entry is authoritative;
//! 2. agreeing estimators are trusted;
//! 3. a (heuristic, alternative) pair listed in the tie-break table selects
//!    the heuristic count;
//! 4. otherwise no count is selected and [`UnresolvedPolicy`] decides.

use super::{SyllableAnalysis, SyllableDictionary};
use crate::rules::RuleTables;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

/// Reconciliation step that produced a count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    Dictionary,
    Agreement,
    TieBreak,
    Unresolved,
}

/// Count used when no reconciliation step selects a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnresolvedPolicy {
    /// Select nothing; the word counts zero syllables
    #[default]
    Zero,
    /// Fall back to the alternative estimator's count
    Alternative,
}

impl FromStr for UnresolvedPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "zero" => Ok(UnresolvedPolicy::Zero),
            "alternative" => Ok(UnresolvedPolicy::Alternative),
            other => Err(format!(
                "Unknown fallback policy '{other}' (expected 'zero' or 'alternative')"
            )),
        }
    }
}

/// Merges estimator results and the dictionary into one count per word
#[derive(Clone)]
pub struct Reconciler {
    rules: Arc<RuleTables>,
    dictionary: Arc<dyn SyllableDictionary>,
    unresolved: UnresolvedPolicy,
}

impl Reconciler {
    pub fn new(rules: Arc<RuleTables>, dictionary: Arc<dyn SyllableDictionary>) -> Self {
        Self {
            rules,
            dictionary,
            unresolved: UnresolvedPolicy::default(),
        }
    }

    /// Set the policy for counts no step resolves
    pub fn with_unresolved_policy(mut self, policy: UnresolvedPolicy) -> Self {
        self.unresolved = policy;
        self
    }

    pub fn unresolved_policy(&self) -> UnresolvedPolicy {
        self.unresolved
    }

    /// Reconcile the candidate counts for `word`
    pub fn reconcile(&self, word: &str, heuristic: i32, alternative: i32) -> SyllableAnalysis {
        let dictionary_count = self.dictionary.lookup(word);

        let (most_likely_count, resolution) = match dictionary_count {
            Some(count) => (count, Resolution::Dictionary),
            None if heuristic == alternative => (heuristic, Resolution::Agreement),
            None if self.rules.prefers_heuristic(heuristic, alternative) => {
                (heuristic, Resolution::TieBreak)
            }
            None => {
                log::trace!(
                    "unresolved syllable count for '{word}': heuristic={heuristic}, alternative={alternative}"
                );
                let fallback = match self.unresolved {
                    UnresolvedPolicy::Zero => 0,
                    UnresolvedPolicy::Alternative => alternative,
                };
                (fallback, Resolution::Unresolved)
            }
        };

        SyllableAnalysis {
            dictionary_count,
            heuristic_count: heuristic,
            alternative_count: alternative,
            most_likely_count,
            resolution,
        }
    }
}

impl std::fmt::Debug for Reconciler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reconciler")
            .field("rules", &self.rules.code())
            .field("dictionary_entries", &self.dictionary.len())
            .field("unresolved", &self.unresolved)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::english_rules;
    use crate::syllables::{NoDictionary, SyllableTable};

    fn reconciler() -> Reconciler {
        Reconciler::new(english_rules().unwrap(), Arc::new(NoDictionary))
    }

    #[test]
    fn test_dictionary_overrides_everything() {
        let dictionary = SyllableTable::from_entries([("FIRE", 2)]);
        let reconciler = Reconciler::new(english_rules().unwrap(), Arc::new(dictionary));

        let analysis = reconciler.reconcile("fire", 1, 1);
        assert_eq!(analysis.dictionary_count, Some(2));
        assert_eq!(analysis.most_likely_count, 2);
        assert_eq!(analysis.resolution, Resolution::Dictionary);

        // Even a tie-break pair loses to the dictionary
        let analysis = reconciler.reconcile("fire", 2, 3);
        assert_eq!(analysis.most_likely_count, 2);
        assert_eq!(analysis.resolution, Resolution::Dictionary);
    }

    #[test]
    fn test_agreement() {
        let analysis = reconciler().reconcile("cat", 1, 1);
        assert_eq!(analysis.most_likely_count, 1);
        assert_eq!(analysis.resolution, Resolution::Agreement);
    }

    #[test]
    fn test_agreement_on_non_positive_counts() {
        let analysis = reconciler().reconcile("shh", 0, 0);
        assert_eq!(analysis.most_likely_count, 0);
        assert_eq!(analysis.resolution, Resolution::Agreement);
    }

    #[test]
    fn test_tie_break_pairs_pick_heuristic() {
        let reconciler = reconciler();
        for (heuristic, alternative) in [(2, 3), (3, 4), (4, 5), (5, 4), (6, 5), (6, 7), (7, 6)] {
            let analysis = reconciler.reconcile("word", heuristic, alternative);
            assert_eq!(analysis.most_likely_count, heuristic);
            assert_eq!(analysis.resolution, Resolution::TieBreak);
        }
    }

    // Known divergence point: a disagreement outside the tie-break table
    // selects no count, so the word contributes zero syllables.
    #[test]
    fn test_unresolved_pair_defaults_to_zero() {
        let analysis = reconciler().reconcile("word", 3, 2);
        assert_eq!(analysis.heuristic_count, 3);
        assert_eq!(analysis.alternative_count, 2);
        assert_eq!(analysis.most_likely_count, 0);
        assert_eq!(analysis.resolution, Resolution::Unresolved);
    }

    #[test]
    fn test_unresolved_pair_with_alternative_fallback() {
        let reconciler = reconciler().with_unresolved_policy(UnresolvedPolicy::Alternative);
        let analysis = reconciler.reconcile("word", 3, 2);
        assert_eq!(analysis.most_likely_count, 2);
        assert_eq!(analysis.resolution, Resolution::Unresolved);

        // Resolved cases are unaffected by the fallback
        assert_eq!(reconciler.reconcile("word", 2, 3).most_likely_count, 2);
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let reconciler = reconciler();
        for (h, a) in [(1, 1), (2, 3), (3, 2), (-1, 1), (0, 4)] {
            let first = reconciler.reconcile("word", h, a);
            let second = reconciler.reconcile("word", h, a);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("zero".parse(), Ok(UnresolvedPolicy::Zero));
        assert_eq!("Alternative".parse(), Ok(UnresolvedPolicy::Alternative));
        assert!("heuristic".parse::<UnresolvedPolicy>().is_err());
    }
}
