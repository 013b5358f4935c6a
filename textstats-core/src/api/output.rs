//! Analysis report

use crate::readability::ReadabilityScores;
use crate::result::AnalysisResult;
use serde::Serialize;
use std::time::Duration;

/// Result of one analysis pass with its derived scores.
///
/// Serializes as one flat record: the result fields, the readability scores
/// and `BytesRead`.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    #[serde(flatten)]
    pub result: AnalysisResult,
    #[serde(flatten)]
    pub readability: ReadabilityScores,
    #[serde(flatten)]
    pub metadata: ReportMetadata,
}

/// Facts about the pass itself
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReportMetadata {
    /// Wall-clock time of the pass
    #[serde(skip)]
    pub duration: Duration,
    /// Bytes consumed from the input
    pub bytes_read: u64,
}

impl Report {
    pub(crate) fn new(result: AnalysisResult, metadata: ReportMetadata) -> Self {
        let readability = result.readability();
        Self {
            result,
            readability,
            metadata,
        }
    }
}
