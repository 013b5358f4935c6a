//! Rune classification for the tokenizer

use regex::Regex;
use std::sync::OnceLock;

/// Classification of a single rune
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuneClass {
    /// Alphabetic character, part of a word
    Letter,
    /// Whitespace, ends a word
    Space,
    /// Unicode punctuation (categories Pc, Pd, Ps, Pe, Pi, Pf, Po), ends a word
    Punctuation,
    /// Digits, symbols and everything else; ignored
    Other,
}

/// Pure rune classification logic
pub trait RuneClassifier: Send + Sync {
    /// Classify a rune
    fn classify(&self, ch: char) -> RuneClass;

    /// Check if rune is part of a word
    fn is_letter(&self, ch: char) -> bool {
        matches!(self.classify(ch), RuneClass::Letter)
    }

    /// Check if rune ends a word without being counted as punctuation
    fn is_space(&self, ch: char) -> bool {
        matches!(self.classify(ch), RuneClass::Space)
    }

    /// Check if rune is punctuation
    fn is_punctuation(&self, ch: char) -> bool {
        matches!(self.classify(ch), RuneClass::Punctuation)
    }

    /// Check if rune is punctuation that ends a sentence
    fn is_sentence_terminator(&self, ch: char) -> bool {
        matches!(ch, '.' | '!' | '?') && self.is_punctuation(ch)
    }
}

/// ASCII characters in a Unicode punctuation category
const ASCII_PUNCTUATION: &str = "!\"#%&'()*,-./:;?@[\\]_{}";

/// Unicode-aware classifier with an ASCII lookup table
#[derive(Debug, Clone)]
pub struct UnicodeClassifier {
    /// Precomputed classes for chars 0-127
    ascii_table: [RuneClass; 128],
    /// Punctuation test for non-ASCII runes
    punctuation: Regex,
}

static SHARED: OnceLock<UnicodeClassifier> = OnceLock::new();

impl UnicodeClassifier {
    pub fn new() -> Self {
        let mut ascii_table = [RuneClass::Other; 128];
        for (byte, class) in ascii_table.iter_mut().enumerate() {
            let ch = byte as u8 as char;
            *class = if ch.is_alphabetic() {
                RuneClass::Letter
            } else if ch.is_whitespace() {
                RuneClass::Space
            } else if ASCII_PUNCTUATION.contains(ch) {
                RuneClass::Punctuation
            } else {
                RuneClass::Other
            };
        }

        Self {
            ascii_table,
            punctuation: Regex::new(r"\A\p{P}\z").expect("punctuation class is valid"),
        }
    }

    /// Process-wide classifier instance
    pub fn shared() -> &'static UnicodeClassifier {
        SHARED.get_or_init(UnicodeClassifier::new)
    }

    fn classify_non_ascii(&self, ch: char) -> RuneClass {
        if ch.is_alphabetic() {
            return RuneClass::Letter;
        }
        if ch.is_whitespace() {
            return RuneClass::Space;
        }

        let mut buf = [0u8; 4];
        if self.punctuation.is_match(ch.encode_utf8(&mut buf)) {
            RuneClass::Punctuation
        } else {
            RuneClass::Other
        }
    }
}

impl Default for UnicodeClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl RuneClassifier for UnicodeClassifier {
    #[inline]
    fn classify(&self, ch: char) -> RuneClass {
        if ch.is_ascii() {
            // Fast path: direct array lookup
            self.ascii_table[ch as usize]
        } else {
            self.classify_non_ascii(ch)
        }
    }
}
