//! Error types for rule loading and text analysis

use crate::result::AnalysisResult;
use thiserror::Error;

/// Errors raised while building the analysis components
#[derive(Debug, Error)]
pub enum CoreError {
    /// Rule table or configuration could not be parsed or failed validation
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A rule table pattern is not a valid regular expression
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The offending pattern source
        pattern: String,
        /// Compilation error reported by the regex engine
        #[source]
        source: regex::Error,
    },

    /// Syllable dictionary could not be loaded
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// I/O failure while reading reference data
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by an analysis pass
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The input stream failed mid-pass.
    ///
    /// The statistics accumulated before the failure are kept so callers can
    /// decide whether a partial result is usable.
    #[error("Stream error after {} words: {source}", .partial.total_words)]
    Stream {
        /// Result accumulated up to the failure
        partial: Box<AnalysisResult>,
        /// The underlying read error
        #[source]
        source: std::io::Error,
    },

    /// The input could not be opened before the pass started
    #[error("Invalid input: {0}")]
    Input(String),

    /// Component construction failed
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl AnalysisError {
    /// The partial result carried by a stream failure, if any
    pub fn partial_result(&self) -> Option<&AnalysisResult> {
        match self {
            AnalysisError::Stream { partial, .. } => Some(partial),
            _ => None,
        }
    }

    /// Consume the error and take the partial result, if any
    pub fn into_partial_result(self) -> Option<AnalysisResult> {
        match self {
            AnalysisError::Stream { partial, .. } => Some(*partial),
            _ => None,
        }
    }
}

/// Result type for component construction
pub type CoreResult<T> = std::result::Result<T, CoreError>;
