//! Process command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, InputSource};
use crate::output::{create_formatter, FormatOptions};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use textstats_core::{AnalysisError, Config, OtherRunes, Report, TextAnalyzer, UnresolvedPolicy};

pub use crate::output::OutputFormat;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Syllable rule table file (TOML) replacing the built-in English rules
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Syllable dictionary (JSON object of word to count)
    #[arg(long, value_name = "FILE")]
    pub dictionary: Option<PathBuf>,

    /// Common-word list replacing the built-in Dale-Chall list
    #[arg(long, value_name = "FILE")]
    pub word_list: Option<PathBuf>,

    /// Syllable count for words no rule resolves: zero or alternative
    #[arg(long, value_name = "POLICY")]
    pub fallback: Option<UnresolvedPolicy>,

    /// Digits and symbols inside words: ignore or split
    #[arg(long, value_name = "MODE")]
    pub other_runes: Option<OtherRunes>,

    /// Track capitalized words separately (excluded from Gunning fog)
    #[arg(long)]
    pub proper_nouns: bool,

    /// Include the per-word table in the output
    #[arg(short, long)]
    pub words: bool,

    /// Analyze multiple inputs in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "TEXTSTATS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting readability analysis");
        log::debug!("Arguments: {:?}", self);

        let file_config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        let analyzer = TextAnalyzer::with_config(self.analyzer_config(&file_config)?)
            .context("Failed to set up the analyzer")?;
        let sources = resolve_patterns(&self.input)?;
        log::info!("Analyzing {} input(s)", sources.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(sources.len() as u64);

        let analyze = |source: &InputSource| {
            let report = analyze_source(&analyzer, source);
            progress.file_completed(&source.display_name());
            report
        };
        let reports: Vec<Result<Report>> = if self.parallel && sources.len() > 1 {
            sources.par_iter().map(analyze).collect()
        } else {
            sources.iter().map(analyze).collect()
        };
        progress.finish();

        let options = FormatOptions {
            words: self.words || file_config.output.words,
            pretty_json: file_config.output.pretty_json,
        };
        let format = self.format.unwrap_or(file_config.output.format);
        let mut formatter = create_formatter(format, self.open_output()?, options);

        for (source, report) in sources.iter().zip(reports) {
            formatter.format_report(&source.display_name(), &report?)?;
        }
        formatter.finish()?;

        Ok(())
    }

    /// Core configuration from the flags, falling back to the config file
    pub fn analyzer_config(&self, file_config: &CliConfig) -> Result<Config> {
        let analysis = &file_config.analysis;

        let mut builder = Config::builder()
            .unresolved_policy(self.fallback.unwrap_or(analysis.fallback))
            .other_runes(self.other_runes.unwrap_or(analysis.other_runes))
            .track_proper_nouns(self.proper_nouns || analysis.proper_nouns);

        if let Some(path) = self.rules.as_ref().or(analysis.rules.as_ref()) {
            builder = builder.rules_file(path.clone());
        }
        if let Some(path) = self.dictionary.as_ref().or(analysis.dictionary.as_ref()) {
            builder = builder.dictionary_file(path.clone());
        }
        if let Some(path) = self.word_list.as_ref().or(analysis.word_list.as_ref()) {
            builder = builder.word_list_file(path.clone());
        }

        builder
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    fn open_output(&self) -> Result<Box<dyn Write + Send + Sync>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout())),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

fn analyze_source(analyzer: &TextAnalyzer, source: &InputSource) -> Result<Report> {
    let name = source.display_name();

    analyzer.analyze(source.to_input()).map_err(|e| {
        if let AnalysisError::Stream { partial, .. } = &e {
            log::warn!(
                "{}: read failed after {} words, partial result discarded",
                name,
                partial.total_words
            );
        }
        CliError::AnalysisError(format!("{name}: {e}")).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(input: Vec<String>) -> ProcessArgs {
        ProcessArgs {
            input,
            output: None,
            format: None,
            rules: None,
            dictionary: None,
            word_list: None,
            fallback: None,
            other_runes: None,
            proper_nouns: false,
            words: false,
            parallel: false,
            config: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file_config = CliConfig::default();
        file_config.analysis.fallback = UnresolvedPolicy::Alternative;
        file_config.analysis.dictionary = Some(PathBuf::from("from-file.json"));

        let mut process = args(vec!["a.txt".to_string()]);
        process.dictionary = Some(PathBuf::from("from-flag.json"));
        let config = process.analyzer_config(&file_config).unwrap();

        assert_eq!(config.unresolved_policy(), UnresolvedPolicy::Alternative);
        assert_eq!(
            config.dictionary_path(),
            Some(PathBuf::from("from-flag.json").as_path())
        );

        process.fallback = Some(UnresolvedPolicy::Zero);
        let config = process.analyzer_config(&file_config).unwrap();
        assert_eq!(config.unresolved_policy(), UnresolvedPolicy::Zero);
    }

    #[test]
    fn test_execute_writes_json_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("sample.txt");
        let output = dir.path().join("out.json");
        fs::write(&input, "Cat sat. ham ham.").unwrap();

        let mut process = args(vec![input.display().to_string()]);
        process.output = Some(output.clone());
        process.format = Some(OutputFormat::Json);
        process.execute().unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(json[0]["TotalWords"], 4);
        assert_eq!(json[0]["Sentences"], 2);
    }

    #[test]
    fn test_execute_parallel_preserves_order() {
        let dir = TempDir::new().unwrap();
        for (name, text) in [("a.txt", "one"), ("b.txt", "one two"), ("c.txt", "one two three")] {
            fs::write(dir.path().join(name), text).unwrap();
        }
        let output = dir.path().join("out.json");

        let mut process = args(vec![dir.path().join("*.txt").display().to_string()]);
        process.output = Some(output.clone());
        process.format = Some(OutputFormat::Json);
        process.parallel = true;
        process.execute().unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        let words: Vec<u64> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["TotalWords"].as_u64().unwrap())
            .collect();
        assert_eq!(words, vec![1, 2, 3]);
    }

    #[test]
    fn test_execute_missing_input() {
        let process = args(vec!["/nonexistent/*.txt".to_string()]);
        assert!(process.execute().is_err());
    }
}
