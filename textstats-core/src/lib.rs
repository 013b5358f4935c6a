//! English readability analysis
//!
//! A single streaming pass tokenizes text into letters, spaces, punctuation
//! and words. Every word gets a syllable count reconciled from two
//! independent estimators and an optional reference dictionary, and is
//! checked against the Dale-Chall common-word list. The accumulated
//! [`AnalysisResult`] feeds the classic readability formulas
//! (Flesch-Kincaid, Gunning fog, Coleman-Liau, SMOG, ARI and Dale-Chall).
//!
//! # Architecture
//!
//! - **rules**: syllable rule tables defined in TOML and compiled to regexes
//! - **syllables**: estimators, dictionary lookup and reconciliation
//! - **tokenizer**: rune classification state machine and stream decoding
//! - **aggregator** / **readability**: statistics and the formulas over them
//! - **api**: the [`TextAnalyzer`] entry point
//!
//! # Example
//!
//! ```rust
//! use textstats_core::{Input, TextAnalyzer};
//!
//! let analyzer = TextAnalyzer::new();
//! let report = analyzer.analyze(Input::from_text("Cat sat.")).unwrap();
//!
//! assert_eq!(report.result.total_words, 2);
//! assert_eq!(report.result.sentences, 1);
//! assert_eq!(report.result.syllables, 2);
//! assert_eq!(report.readability.avg_syllables_per_word, 1.0);
//! ```

pub mod aggregator;
pub mod api;
pub mod error;
pub mod readability;
pub mod result;
pub mod rules;
pub mod syllables;
pub mod tokenizer;
pub mod vocabulary;

pub use api::{Config, ConfigBuilder, Input, Report, ReportMetadata, TextAnalyzer};
pub use error::{AnalysisError, CoreError, CoreResult};
pub use readability::ReadabilityScores;
pub use result::{AnalysisResult, SyllableHistogram, Word};
pub use rules::RuleTables;
pub use syllables::{
    Resolution, SyllableAnalysis, SyllableCounter, SyllableDictionary, SyllableEstimator,
    SyllableTable, UnresolvedPolicy,
};
pub use tokenizer::OtherRunes;
pub use vocabulary::CommonWords;
