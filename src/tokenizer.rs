use crate::error::{Error, Result};
use regex::Regex;

/// Characters dropped from words and sentences: anything that is not a letter,
/// an underscore or a separator. Digits of every kind, marks and other
/// connector punctuation all go.
const STRIP_PATTERN: &str = r"[^\p{L}_\s\x1C-\x1F]";
const SENTENCE_BOUNDARY_PATTERN: &str = r"[.!?][\s\x1C-\x1F]*";

/// Unicode whitespace plus the ASCII information separators (file, group,
/// record and unit separator), which also split words.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1C'..='\x1F').contains(&c)
}

pub struct Tokenizer {
    strip: Regex,
    sentence_boundary: Regex,
}

impl Tokenizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            strip: Regex::new(STRIP_PATTERN)
                .map_err(|e| Error::Generic(format!("Failed to compile regex: {e}")))?,
            sentence_boundary: Regex::new(SENTENCE_BOUNDARY_PATTERN)
                .map_err(|e| Error::Generic(format!("Failed to compile regex: {e}")))?,
        })
    }

    /// Lowercases, strips punctuation and digits, then splits on whitespace.
    /// Document order and repetitions are kept.
    pub fn tokenize_words(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();

        self.strip
            .replace_all(&lowered, "")
            .split(is_separator)
            .filter(|word| !word.is_empty())
            .map(String::from)
            .collect()
    }

    /// Splits on `.`, `!` or `?` (plus any trailing whitespace) and cleans each
    /// fragment the same way words are cleaned. Interior whitespace is left
    /// alone, so a removed number leaves a double space behind.
    pub fn tokenize_sentences(&self, text: &str) -> Vec<String> {
        self.sentence_boundary
            .split(text)
            .filter_map(|fragment| {
                let cleaned = self.strip.replace_all(fragment, "");
                let trimmed = cleaned.trim_matches(is_separator);

                (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
            })
            .collect()
    }
}
