use std::collections::{HashMap, HashSet};

use super::{
    row::{IdfMap, TfMap, IDF},
    DocumentFrequency,
};

/// `count(word) / total` for every distinct word. Empty input gives an empty map.
#[allow(clippy::cast_precision_loss)]
pub fn term_frequency(words: &[String]) -> TfMap {
    let total = words.len() as f64;

    let mut word_count: HashMap<&str, u32> = HashMap::new();
    for word in words {
        *word_count.entry(word.as_str()).or_insert(0) += 1;
    }

    word_count
        .into_iter()
        .map(|(word, count)| (word.to_string(), f64::from(count) / total))
        .collect()
}

/// Treats every sentence as its own document: `ln(M / (1 + df))`.
///
/// With [`DocumentFrequency::Substring`] a sentence counts toward `df` when the
/// word occurs anywhere inside it, so `cat` is found in `category`. The result
/// is negative whenever `1 + df > M`. No sentences means an empty map.
pub fn inverse_document_frequency(
    words: &[&str],
    sentences: &[String],
    document_frequency: DocumentFrequency,
) -> IdfMap {
    if sentences.is_empty() {
        return IdfMap::new();
    }

    let num_docs = sentences.len();

    match document_frequency {
        DocumentFrequency::Substring => words
            .iter()
            .map(|word| {
                let df = sentences
                    .iter()
                    .filter(|sentence| sentence.contains(*word))
                    .count();

                ((*word).to_string(), calculate_idf(df, num_docs))
            })
            .collect(),
        DocumentFrequency::Token => {
            let token_sets = sentences
                .iter()
                .map(|sentence| sentence.split_whitespace().collect::<HashSet<_>>())
                .collect::<Vec<_>>();

            words
                .iter()
                .map(|word| {
                    let df = token_sets.iter().filter(|set| set.contains(word)).count();

                    ((*word).to_string(), calculate_idf(df, num_docs))
                })
                .collect()
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn calculate_idf(df: usize, num_docs: usize) -> IDF {
    (num_docs as f64 / (1 + df) as f64).ln()
}

/// Rounds half to even at the given number of decimal places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    (value * scale).round_ties_even() / scale
}
