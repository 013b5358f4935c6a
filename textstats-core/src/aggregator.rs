//! Statistics aggregation over tokenizer events

use crate::result::AnalysisResult;
use crate::rules::RuleTables;
use crate::syllables::SyllableCounter;
use crate::tokenizer::{TokenEvent, TokenSink};
use crate::vocabulary::CommonWords;

/// Accumulates an [`AnalysisResult`] from the events of one tokenizer pass.
///
/// Owns the result exclusively; shared reference data is borrowed.
pub struct Aggregator<'a> {
    counter: &'a SyllableCounter,
    common_words: &'a CommonWords,
    rules: &'a RuleTables,
    result: AnalysisResult,
}

impl<'a> Aggregator<'a> {
    pub fn new(
        counter: &'a SyllableCounter,
        common_words: &'a CommonWords,
        rules: &'a RuleTables,
        track_proper_nouns: bool,
    ) -> Self {
        Self {
            counter,
            common_words,
            rules,
            result: AnalysisResult::new(track_proper_nouns),
        }
    }

    /// Record one word occurrence
    pub fn ingest(&mut self, word: &str) {
        let result = &mut self.result;
        result.total_words += 1;

        let analysis = self.counter.analyze(word);
        let most_likely = analysis.most_likely_count;

        match result.word_list.get_mut(word) {
            Some(entry) => entry.occurrences += 1,
            None => {
                result.word_list.insert(
                    word.to_string(),
                    crate::result::Word {
                        word: word.to_string(),
                        occurrences: 1,
                        syllable_analysis: analysis,
                    },
                );
                result.unique_words += 1;
                *result
                    .unique_word_count_per_syllable_count
                    .entry(most_likely)
                    .or_insert(0) += 1;
            }
        }

        result.syllables += i64::from(most_likely);
        *result
            .word_count_per_syllable_count
            .entry(most_likely)
            .or_insert(0) += 1;

        if let Some(proper_nouns) = result.proper_noun_word_count_per_syllable_count.as_mut() {
            if word.chars().next().is_some_and(char::is_uppercase) {
                *proper_nouns.entry(most_likely).or_insert(0) += 1;
            }
        }

        if self.common_words.is_difficult(word, self.rules) {
            result.difficult_words += 1;
        }

        log::trace!(
            "word '{}': {} syllables ({:?})",
            word,
            most_likely,
            analysis.resolution
        );
    }

    pub fn result(&self) -> &AnalysisResult {
        &self.result
    }

    pub fn into_result(self) -> AnalysisResult {
        self.result
    }
}

impl TokenSink for Aggregator<'_> {
    fn on_event(&mut self, event: TokenEvent<'_>) {
        match event {
            TokenEvent::Letter => self.result.letters += 1,
            TokenEvent::Space => self.result.spaces += 1,
            TokenEvent::Punctuation { sentence_end } => {
                self.result.punctuation += 1;
                if sentence_end {
                    self.result.sentences += 1;
                }
            }
            TokenEvent::Word(word) => self.ingest(word),
        }
    }
}

impl std::fmt::Debug for Aggregator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Aggregator")
            .field("total_words", &self.result.total_words)
            .field("rules", &self.rules.code())
            .finish()
    }
}
