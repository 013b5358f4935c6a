//! Markdown output formatter

use super::{statistic_rows, OutputFormatter};
use anyhow::Result;
use std::io::Write;
use textstats_core::Report;

/// Markdown formatter - outputs one statistics table per input
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    words: bool,
    report_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    pub fn new(writer: W, words: bool) -> Self {
        Self {
            writer,
            words,
            report_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_report(&mut self, source: &str, report: &Report) -> Result<()> {
        self.report_count += 1;

        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Statistic | Value |")?;
        writeln!(self.writer, "|---|---:|")?;
        for (label, value) in statistic_rows(report) {
            writeln!(self.writer, "| {label} | {value} |")?;
        }
        writeln!(self.writer)?;

        if self.words {
            writeln!(self.writer, "| Word | Occurrences | Syllables |")?;
            writeln!(self.writer, "|---|---:|---:|")?;
            for word in report.result.word_list.values() {
                writeln!(
                    self.writer,
                    "| {} | {} | {} |",
                    word.word, word.occurrences, word.syllable_analysis.most_likely_count
                )?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Files analyzed: {}*", self.report_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use textstats_core::TextAnalyzer;

    #[test]
    fn test_markdown_output() {
        let report = TextAnalyzer::new().analyze_str("Cat sat.");
        let mut buffer = Vec::new();
        {
            let mut formatter = MarkdownFormatter::new(&mut buffer, true);
            formatter.format_report("cat.txt", &report).unwrap();
            formatter.finish().unwrap();
        }
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.starts_with("## cat.txt"));
        assert!(output.contains("| Words | 2 |"));
        assert!(output.contains("| Cat | 1 | 1 |"));
        assert!(output.contains("*Files analyzed: 1*"));
    }
}
