//! Plain text output formatter

use super::{statistic_rows, OutputFormatter};
use anyhow::Result;
use std::io::Write;
use textstats_core::Report;

const LABEL_WIDTH: usize = 30;

/// Plain text formatter - one block of aligned statistics per input
pub struct TextFormatter<W: Write> {
    writer: W,
    words: bool,
    reports: usize,
}

impl<W: Write> TextFormatter<W> {
    pub fn new(writer: W, words: bool) -> Self {
        Self {
            writer,
            words,
            reports: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_report(&mut self, source: &str, report: &Report) -> Result<()> {
        if self.reports > 0 {
            writeln!(self.writer)?;
        }
        self.reports += 1;

        writeln!(self.writer, "== {source} ==")?;
        for (label, value) in statistic_rows(report) {
            writeln!(self.writer, "{:<width$}{}", format!("{label}:"), value, width = LABEL_WIDTH)?;
        }

        if self.words {
            writeln!(self.writer)?;
            for word in report.result.word_list.values() {
                writeln!(
                    self.writer,
                    "  {:<24}{:>6} x {} syllables",
                    word.word, word.occurrences, word.syllable_analysis.most_likely_count
                )?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use textstats_core::TextAnalyzer;

    fn render(words: bool) -> String {
        let report = TextAnalyzer::new().analyze_str("ham ham.");
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer, words);
            formatter.format_report("sample.txt", &report).unwrap();
            formatter.finish().unwrap();
        }
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_text_output() {
        let output = render(false);
        assert!(output.starts_with("== sample.txt =="));
        assert!(output.contains("Words:"));
        assert!(output.contains("Unique words:"));
        assert!(!output.contains("syllables\n"));
    }

    #[test]
    fn test_text_output_with_words() {
        let output = render(true);
        assert!(output.contains("ham"));
        assert!(output.contains("2 x 1 syllables"));
    }
}
