//! Word and sentence tokenizer
//!
//! A single forward pass over runes. Each rune is classified as a letter,
//! space, punctuation or other; letters accumulate into a word buffer, and
//! spaces or punctuation end the current word. Other runes (digits, symbols)
//! never touch a counter. By default they do not end the word either, so
//! `a1b` is the word `ab`; with [`OtherRunes::Split`] they act as silent
//! separators and `a1b` yields `a` and `b`.

pub mod classifier;
pub mod stream;

pub use classifier::{RuneClass, RuneClassifier, UnicodeClassifier};
pub use stream::RuneReader;

/// Event produced by the tokenizer for each classified rune or finished word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenEvent<'a> {
    Letter,
    Space,
    Punctuation {
        /// The rune is `.`, `!` or `?`
        sentence_end: bool,
    },
    Word(&'a str),
}

/// Treatment of runes classified as [`RuneClass::Other`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OtherRunes {
    /// Drop the rune; the current word continues
    #[default]
    Ignore,
    /// Drop the rune and end the current word
    Split,
}

impl std::str::FromStr for OtherRunes {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ignore" => Ok(OtherRunes::Ignore),
            "split" => Ok(OtherRunes::Split),
            other => Err(format!(
                "Unknown other-rune mode '{other}' (expected 'ignore' or 'split')"
            )),
        }
    }
}

/// Consumer of tokenizer events
pub trait TokenSink {
    fn on_event(&mut self, event: TokenEvent<'_>);
}

/// Rune-classification state machine
pub struct Tokenizer<'c> {
    classifier: &'c dyn RuneClassifier,
    other_runes: OtherRunes,
    word: String,
    end_of_word: bool,
}

impl Tokenizer<'static> {
    /// Tokenizer using the shared Unicode classifier
    pub fn new() -> Self {
        Self::with_classifier(UnicodeClassifier::shared())
    }
}

impl Default for Tokenizer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'c> Tokenizer<'c> {
    pub fn with_classifier(classifier: &'c dyn RuneClassifier) -> Self {
        Self {
            classifier,
            other_runes: OtherRunes::default(),
            word: String::new(),
            end_of_word: false,
        }
    }

    pub fn with_other_runes(mut self, other_runes: OtherRunes) -> Self {
        self.other_runes = other_runes;
        self
    }

    /// Process one rune
    pub fn feed<S: TokenSink + ?Sized>(&mut self, ch: char, sink: &mut S) {
        match self.classifier.classify(ch) {
            RuneClass::Letter => {
                self.word.push(ch);
                self.end_of_word = false;
                sink.on_event(TokenEvent::Letter);
            }
            RuneClass::Space => {
                self.end_of_word = true;
                sink.on_event(TokenEvent::Space);
            }
            RuneClass::Punctuation => {
                self.end_of_word = true;
                sink.on_event(TokenEvent::Punctuation {
                    sentence_end: matches!(ch, '.' | '!' | '?'),
                });
            }
            RuneClass::Other => {
                if self.other_runes == OtherRunes::Split {
                    self.end_of_word = true;
                }
            }
        }

        if self.end_of_word && !self.word.is_empty() {
            sink.on_event(TokenEvent::Word(&self.word));
            self.word.clear();
            self.end_of_word = false;
        }
    }

    /// Flush a word left in the buffer at end of input
    pub fn finish<S: TokenSink + ?Sized>(&mut self, sink: &mut S) {
        if !self.word.is_empty() {
            sink.on_event(TokenEvent::Word(&self.word));
            self.word.clear();
        }
        self.end_of_word = false;
    }

    /// Tokenize a complete string
    pub fn tokenize_str<S: TokenSink + ?Sized>(&mut self, text: &str, sink: &mut S) {
        for ch in text.chars() {
            self.feed(ch, sink);
        }
        self.finish(sink);
    }

    /// Letters buffered for the word in progress
    pub fn pending_word(&self) -> &str {
        &self.word
    }
}

/// Collects emitted words; handy for inspecting tokenization
impl TokenSink for Vec<String> {
    fn on_event(&mut self, event: TokenEvent<'_>) {
        if let TokenEvent::Word(word) = event {
            self.push(word.to_string());
        }
    }
}
