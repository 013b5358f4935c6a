//! JSON output formatter

use super::{FormatOptions, OutputFormatter};
use anyhow::Result;
use serde_json::Value;
use std::io::Write;
use textstats_core::Report;

/// JSON formatter - outputs one record per input as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    options: FormatOptions,
    records: Vec<Value>,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self {
            writer,
            options,
            records: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_report(&mut self, source: &str, report: &Report) -> Result<()> {
        let mut record = serde_json::to_value(report)?;
        if let Some(fields) = record.as_object_mut() {
            if !self.options.words {
                fields.remove("WordList");
            }
            fields.insert("File".to_string(), Value::String(source.to_string()));
        }
        self.records.push(record);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.options.pretty_json {
            serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.records)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
