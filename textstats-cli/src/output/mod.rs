//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use textstats_core::Report;

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format the report for one input
    fn format_report(&mut self, source: &str, report: &Report) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned statistics, one block per input
    #[default]
    Text,
    /// JSON array with one record per input
    Json,
    /// One Markdown table per input
    Markdown,
}

/// Options shared by every formatter
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Include the per-word table
    pub words: bool,
    /// Pretty print JSON
    pub pretty_json: bool,
}

/// Build the formatter for `format` writing to `writer`
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
    options: FormatOptions,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, options.words)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, options)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer, options.words)),
    }
}

/// Labelled statistics shown by the text and markdown formatters
pub(crate) fn statistic_rows(report: &Report) -> Vec<(&'static str, String)> {
    let result = &report.result;
    let scores = &report.readability;

    vec![
        ("Words", result.total_words.to_string()),
        ("Unique words", result.unique_words.to_string()),
        ("Sentences", result.sentences.to_string()),
        ("Letters", result.letters.to_string()),
        ("Punctuation", result.punctuation.to_string()),
        ("Spaces", result.spaces.to_string()),
        ("Syllables", result.syllables.to_string()),
        ("Difficult words", result.difficult_words.to_string()),
        ("Words per sentence", score(scores.avg_words_per_sentence)),
        ("Letters per word", score(scores.avg_letters_per_word)),
        ("Syllables per word", score(scores.avg_syllables_per_word)),
        (
            "Words with 3+ syllables (%)",
            score(scores.pct_words_with_at_least_three_syllables),
        ),
        ("Flesch reading ease", score(scores.flesch_kincaid_reading_ease)),
        ("Flesch-Kincaid grade", score(scores.flesch_kincaid_grade_level)),
        ("Gunning fog", score(scores.gunning_fog)),
        ("Coleman-Liau", score(scores.coleman_liau)),
        ("SMOG", score(scores.smog)),
        ("Automated readability", score(scores.automated_readability_index)),
        ("Dale-Chall", score(scores.dale_chall)),
    ]
}

/// Two decimals, or `n/a` when the value is undefined (no words)
pub(crate) fn score(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.2}")
    } else {
        "n/a".to_string()
    }
}
