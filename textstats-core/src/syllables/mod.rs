//! Syllable estimation and reconciliation
//!
//! Two independent estimators produce candidate counts for a word, an
//! optional dictionary may supply an authoritative count, and the
//! [`Reconciler`] merges them into the count used by every statistic.

pub mod alternative;
pub mod dictionary;
pub mod heuristic;
pub mod reconciler;

pub use alternative::VowelPairEstimator;
pub use dictionary::{NoDictionary, SyllableDictionary, SyllableTable};
pub use heuristic::HeuristicEstimator;
pub use reconciler::{Reconciler, Resolution, UnresolvedPolicy};

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A word-to-syllable-count estimator.
///
/// Implementations must be total and deterministic: the same word always
/// yields the same count and no input makes them fail.
pub trait SyllableEstimator: Send + Sync {
    /// Estimate the number of syllables in a single word
    fn estimate(&self, word: &str) -> i32;

    /// Short name used in logs and diagnostics
    fn name(&self) -> &'static str;
}

/// Every candidate count for a word and the reconciled result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SyllableAnalysis {
    /// Authoritative count from the reference dictionary, when listed
    pub dictionary_count: Option<i32>,
    /// Count from the rule-table estimator
    pub heuristic_count: i32,
    /// Count from the alternative estimator
    pub alternative_count: i32,
    /// Reconciled count used for all statistics
    pub most_likely_count: i32,
    /// Which reconciliation step produced `most_likely_count`
    pub resolution: Resolution,
}

/// Runs both estimators for a word and reconciles their results
#[derive(Clone)]
pub struct SyllableCounter {
    heuristic: Arc<dyn SyllableEstimator>,
    alternative: Arc<dyn SyllableEstimator>,
    reconciler: Reconciler,
}

impl SyllableCounter {
    pub fn new(
        heuristic: Arc<dyn SyllableEstimator>,
        alternative: Arc<dyn SyllableEstimator>,
        reconciler: Reconciler,
    ) -> Self {
        Self {
            heuristic,
            alternative,
            reconciler,
        }
    }

    /// Estimate and reconcile the syllable count of one word
    pub fn analyze(&self, word: &str) -> SyllableAnalysis {
        let heuristic_count = self.heuristic.estimate(word);
        let alternative_count = self.alternative.estimate(word);
        self.reconciler
            .reconcile(word, heuristic_count, alternative_count)
    }

    pub fn reconciler(&self) -> &Reconciler {
        &self.reconciler
    }
}

impl std::fmt::Debug for SyllableCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyllableCounter")
            .field("heuristic", &self.heuristic.name())
            .field("alternative", &self.alternative.name())
            .field("reconciler", &self.reconciler)
            .finish()
    }
}
