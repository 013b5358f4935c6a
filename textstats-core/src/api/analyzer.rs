//! Text analyzer

use std::io::Read;
use std::sync::Arc;
use std::time::Instant;

use crate::aggregator::Aggregator;
use crate::api::{Config, Input, Report, ReportMetadata};
use crate::error::{AnalysisError, CoreResult};
use crate::rules::{english_rules, RuleTables};
use crate::syllables::{
    HeuristicEstimator, NoDictionary, Reconciler, SyllableCounter, SyllableDictionary,
    SyllableEstimator, SyllableTable, VowelPairEstimator,
};
use crate::tokenizer::{RuneReader, Tokenizer};
use crate::vocabulary::CommonWords;

/// Readability analyzer.
///
/// All reference data is shared read-only, so an analyzer is cheap to clone
/// and can run analyses of different texts concurrently.
#[derive(Clone)]
pub struct TextAnalyzer {
    config: Config,
    rules: Arc<RuleTables>,
    heuristic: Arc<dyn SyllableEstimator>,
    alternative: Arc<dyn SyllableEstimator>,
    dictionary: Arc<dyn SyllableDictionary>,
    common_words: Arc<CommonWords>,
    counter: SyllableCounter,
}

impl TextAnalyzer {
    /// Analyzer with the embedded English rules and no dictionary
    pub fn new() -> Self {
        Self::with_config(Config::default()).expect("Default config should always be valid")
    }

    /// Build an analyzer, loading every file the configuration names
    pub fn with_config(config: Config) -> CoreResult<Self> {
        config.validate()?;

        let rules = match config.rules_path() {
            Some(path) => Arc::new(RuleTables::from_file(path)?),
            None => english_rules()?,
        };

        let dictionary: Arc<dyn SyllableDictionary> = match config.dictionary_path() {
            Some(path) => Arc::new(SyllableTable::from_json_file(path)?),
            None => Arc::new(NoDictionary),
        };

        let common_words = match config.word_list_path() {
            Some(path) => Arc::new(CommonWords::from_file(path)?),
            None => CommonWords::dale_chall(),
        };

        let heuristic: Arc<dyn SyllableEstimator> =
            Arc::new(HeuristicEstimator::new(rules.clone()));
        let alternative: Arc<dyn SyllableEstimator> = Arc::new(VowelPairEstimator::new());
        let counter = Self::build_counter(&config, &rules, &heuristic, &alternative, &dictionary);

        log::debug!(
            "analyzer ready: rules={}, dictionary entries={}, common words={}",
            rules.code(),
            dictionary.len(),
            common_words.len()
        );

        Ok(Self {
            config,
            rules,
            heuristic,
            alternative,
            dictionary,
            common_words,
            counter,
        })
    }

    /// Replace the alternative estimator
    pub fn with_estimator(mut self, estimator: Arc<dyn SyllableEstimator>) -> Self {
        self.alternative = estimator;
        self.rebuild_counter();
        self
    }

    /// Replace the reference dictionary
    pub fn with_dictionary(mut self, dictionary: Arc<dyn SyllableDictionary>) -> Self {
        self.dictionary = dictionary;
        self.rebuild_counter();
        self
    }

    fn build_counter(
        config: &Config,
        rules: &Arc<RuleTables>,
        heuristic: &Arc<dyn SyllableEstimator>,
        alternative: &Arc<dyn SyllableEstimator>,
        dictionary: &Arc<dyn SyllableDictionary>,
    ) -> SyllableCounter {
        let reconciler = Reconciler::new(rules.clone(), dictionary.clone())
            .with_unresolved_policy(config.unresolved_policy());
        SyllableCounter::new(heuristic.clone(), alternative.clone(), reconciler)
    }

    fn rebuild_counter(&mut self) {
        self.counter = Self::build_counter(
            &self.config,
            &self.rules,
            &self.heuristic,
            &self.alternative,
            &self.dictionary,
        );
    }

    /// Analyze one input
    pub fn analyze(&self, input: Input) -> Result<Report, AnalysisError> {
        match input {
            Input::Text(text) => Ok(self.analyze_str(&text)),
            Input::Bytes(bytes) => self.analyze_reader(bytes.as_slice()),
            Input::File(path) => {
                let file = std::fs::File::open(&path).map_err(|e| {
                    AnalysisError::Input(format!("Failed to open {}: {}", path.display(), e))
                })?;
                self.analyze_reader(file)
            }
            Input::Reader(reader) => self.analyze_reader(reader),
        }
    }

    /// Analyze in-memory text
    pub fn analyze_str(&self, text: &str) -> Report {
        let start = Instant::now();
        let mut aggregator = self.aggregator();
        self.tokenizer().tokenize_str(text, &mut aggregator);

        Report::new(
            aggregator.into_result(),
            ReportMetadata {
                duration: start.elapsed(),
                bytes_read: text.len() as u64,
            },
        )
    }

    /// Analyze a byte stream in one forward pass.
    ///
    /// A read error aborts the pass. The word being built when the error hit
    /// is still counted, and the partial result travels in
    /// [`AnalysisError::Stream`].
    pub fn analyze_reader<R: Read>(&self, reader: R) -> Result<Report, AnalysisError> {
        let start = Instant::now();
        let mut aggregator = self.aggregator();
        let mut tokenizer = self.tokenizer();
        let mut runes = RuneReader::with_chunk_size(reader, self.config.chunk_size());

        let outcome = runes.for_each_rune(|ch| tokenizer.feed(ch, &mut aggregator));
        tokenizer.finish(&mut aggregator);
        let result = aggregator.into_result();

        if let Err(source) = outcome {
            log::warn!(
                "input stream failed after {} bytes: {}",
                runes.bytes_read(),
                source
            );
            return Err(AnalysisError::Stream {
                partial: Box::new(result),
                source,
            });
        }

        Ok(Report::new(
            result,
            ReportMetadata {
                duration: start.elapsed(),
                bytes_read: runes.bytes_read(),
            },
        ))
    }

    /// Analyze independent inputs, each with its own result, in input order
    #[cfg(feature = "parallel")]
    pub fn analyze_many(&self, inputs: Vec<Input>) -> Vec<Result<Report, AnalysisError>> {
        use rayon::prelude::*;

        inputs
            .into_par_iter()
            .map(|input| self.analyze(input))
            .collect()
    }

    /// Analyze independent inputs, each with its own result, in input order
    #[cfg(not(feature = "parallel"))]
    pub fn analyze_many(&self, inputs: Vec<Input>) -> Vec<Result<Report, AnalysisError>> {
        inputs.into_iter().map(|input| self.analyze(input)).collect()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn rules(&self) -> &RuleTables {
        &self.rules
    }

    /// The counter used for every word, also usable on its own
    pub fn syllable_counter(&self) -> &SyllableCounter {
        &self.counter
    }

    fn aggregator(&self) -> Aggregator<'_> {
        Aggregator::new(
            &self.counter,
            &self.common_words,
            &self.rules,
            self.config.track_proper_nouns(),
        )
    }

    fn tokenizer(&self) -> Tokenizer<'static> {
        Tokenizer::new().with_other_runes(self.config.other_runes())
    }
}

impl std::fmt::Debug for TextAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextAnalyzer")
            .field("config", &self.config)
            .field("rules", &self.rules.code())
            .field("counter", &self.counter)
            .field("dictionary_entries", &self.dictionary.len())
            .field("common_words", &self.common_words.len())
            .finish()
    }
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
