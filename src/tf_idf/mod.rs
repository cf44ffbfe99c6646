//! Single-document TF-IDF.
//!
//! The document's own sentences stand in for a corpus when computing IDF, so a
//! word that shows up in few sentences ranks above one that is everywhere.

pub mod constants;
pub mod frequency;
pub mod row;

use std::collections::HashSet;

use tracing::debug;

use self::{
    constants::{IDF_DECIMALS, MAX_ROWS},
    frequency::{inverse_document_frequency, round_to, term_frequency},
    row::{RankedTable, Row},
};
use crate::{error::Result, tokenizer::Tokenizer};

/// How a sentence is judged to contain a word when counting document frequency.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFrequency {
    /// The word occurs anywhere in the sentence text, including inside longer words.
    #[default]
    Substring,
    /// The word is one of the sentence's whitespace-separated tokens.
    Token,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub document_frequency: DocumentFrequency,
    pub max_rows: usize,
    pub idf_decimals: i32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            document_frequency: DocumentFrequency::default(),
            max_rows: MAX_ROWS,
            idf_decimals: IDF_DECIMALS,
        }
    }
}

pub struct TfIdf {
    tokenizer: Tokenizer,
    options: Options,
}

impl TfIdf {
    pub fn new() -> Result<Self> {
        Self::with_options(Options::default())
    }

    pub fn with_options(options: Options) -> Result<Self> {
        Ok(Self {
            tokenizer: Tokenizer::new()?,
            options,
        })
    }

    pub fn tokenize_words(&self, text: &str) -> Vec<String> {
        self.tokenizer.tokenize_words(text)
    }

    pub fn tokenize_sentences(&self, text: &str) -> Vec<String> {
        self.tokenizer.tokenize_sentences(text)
    }

    /// Rows for the highest-IDF words, IDF rounded for display.
    ///
    /// Returns an empty table when the text has no words.
    pub fn compute(&self, text: &str) -> RankedTable {
        let mut rows = self.rank_all(text);
        rows.truncate(self.options.max_rows);

        for row in &mut rows {
            row.idf = round_to(row.idf, self.options.idf_decimals);
        }

        rows
    }

    /// Every distinct word, highest IDF first, without truncation.
    ///
    /// Rows are ordered by IDF rounded to `idf_decimals` but keep the unrounded
    /// value. Ties keep the order in which the words first appear in the text.
    pub fn rank_all(&self, text: &str) -> RankedTable {
        let words = self.tokenizer.tokenize_words(text);
        if words.is_empty() {
            debug!("No words in document, returning an empty table");
            return RankedTable::new();
        }

        let mut seen = HashSet::new();
        let distinct = words
            .iter()
            .map(String::as_str)
            .filter(|word| seen.insert(*word))
            .collect::<Vec<_>>();

        let sentences = self.tokenizer.tokenize_sentences(text);

        debug!(
            words = words.len(),
            distinct = distinct.len(),
            sentences = sentences.len(),
            "Computing tf-idf"
        );

        let tf = term_frequency(&words);
        let idf = inverse_document_frequency(
            &distinct,
            &sentences,
            self.options.document_frequency,
        );

        let mut rows = distinct
            .iter()
            .map(|word| {
                Row::new(
                    (*word).to_string(),
                    tf.get(*word).copied().unwrap_or_default(),
                    idf.get(*word).copied().unwrap_or_default(),
                )
            })
            .collect::<Vec<_>>();

        sort_by_idf(&mut rows, self.options.idf_decimals);

        rows
    }
}

/// Stable sort, highest rounded IDF first.
///
/// Keys are compared after rounding so that words whose IDF differs only past
/// the displayed precision keep their first-seen order.
fn sort_by_idf(rows: &mut [Row], decimals: i32) {
    rows.sort_by(|a, b| {
        round_to(b.idf, decimals)
            .partial_cmp(&round_to(a.idf, decimals))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
