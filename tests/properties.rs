use std::collections::HashSet;

use proptest::prelude::*;
use tfidf_summary::{tf_idf::constants::MAX_ROWS, TfIdf};

fn kernel() -> TfIdf {
    TfIdf::new().expect("Failed to create kernel")
}

/// Word-ish text with sentence terminators, digits and punctuation mixed in.
/// Words draw on accented letters, a combining acute, `‿`, `²` and `½` so that
/// non-letters have to be stripped. Long enough to usually exceed the row limit.
fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            4 => "[a-zA-Z_\u{c0}\u{c9}\u{ce}\u{f5}\u{fc}\u{df}\u{301}\u{203f}\u{b2}\u{bd}]{1,8}",
            1 => "[0-9]{1,3}",
            1 => "[.!?,;:'\"-]",
            1 => "[ \t\n]{1,2}",
        ],
        0..300,
    )
    .prop_map(|parts| parts.join(" "))
}

proptest! {
    #[test]
    fn one_row_per_distinct_word_up_to_fifty(text in document()) {
        let kernel = kernel();
        let distinct = kernel.tokenize_words(&text).into_iter().collect::<HashSet<_>>();
        let table = kernel.compute(&text);

        prop_assert!(table.len() <= MAX_ROWS);
        prop_assert_eq!(table.len(), distinct.len().min(MAX_ROWS));
    }

    #[test]
    fn tf_sums_to_one(text in document()) {
        let all = kernel().rank_all(&text);
        prop_assume!(!all.is_empty());

        let sum: f64 = all.iter().map(|row| row.tf).sum();
        prop_assert!((sum - 1.0).abs() < 1e-9, "tf sum was {}", sum);
    }

    #[test]
    fn deterministic(text in document()) {
        let kernel = kernel();

        prop_assert_eq!(kernel.compute(&text), kernel.compute(&text));
    }

    #[test]
    fn sorted_by_idf_descending(text in document()) {
        let table = kernel().compute(&text);

        for pair in table.windows(2) {
            prop_assert!(pair[0].idf >= pair[1].idf);
        }
    }

    #[test]
    fn equal_idf_keeps_first_seen_order(text in document()) {
        let kernel = kernel();
        let words = kernel.tokenize_words(&text);
        let first_seen = |word: &str| words.iter().position(|w| w == word);

        let table = kernel.compute(&text);
        for pair in table.windows(2) {
            if pair[0].idf == pair[1].idf {
                prop_assert!(first_seen(&pair[0].word) < first_seen(&pair[1].word));
            }
        }
    }

    #[test]
    fn words_are_lowercase_letters_or_underscore(text in document()) {
        let kernel = kernel();
        let words = kernel.tokenize_words(&text);

        for row in kernel.compute(&text) {
            prop_assert!(!row.word.is_empty());
            prop_assert!(
                row.word.chars().all(|c| c == '_' || (c.is_alphabetic() && !c.is_uppercase())),
                "{:?}",
                row.word
            );
            prop_assert!(words.contains(&row.word));
        }
    }

    #[test]
    fn lowercasing_input_changes_nothing(text in document()) {
        let kernel = kernel();

        prop_assert_eq!(kernel.compute(&text), kernel.compute(&text.to_lowercase()));
    }
}

#[test]
fn hello_scenario() {
    let table = kernel().compute("Hello.");

    assert_eq!(table.len(), 1);
    assert_eq!(table[0].word, "hello");
    assert!((table[0].tf - 1.0).abs() < f64::EPSILON);
    assert!((table[0].idf - -0.6931).abs() < 1e-12);
}

#[test]
fn truncation_keeps_fifty_of_many_distinct_words() {
    let text = (0..80)
        .map(|i| format!("w{}{}", char::from(b'a' + i / 26), char::from(b'a' + i % 26)))
        .collect::<Vec<_>>()
        .join(" ");

    assert_eq!(kernel().compute(&text).len(), MAX_ROWS);
}

#[test]
fn empty_scenario() {
    assert!(kernel().compute("").is_empty());
}
