// tests/unit_count.rs
//! Dispatch and accumulation tests, run against a stub tokenizer so the
//! expected totals are obvious from the input.

use serde_json::json;
use tokcount_core::count::{count_document, count_message, count_messages, Tally};
use tokcount_core::tokens::{BpeTokenizer, TokenId, Tokenizer};

/// One token per whitespace-separated word.
struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    fn encode(&self, text: &str) -> Vec<TokenId> {
        (0..text.split_whitespace().count())
            .map(|i| u32::try_from(i).unwrap())
            .collect()
    }
}

#[test]
fn test_empty_array_is_zero() {
    let tally = count_document(&WordTokenizer, &json!([]));
    assert!(tally.is_empty());
    assert_eq!(tally.total(), 0);
}

#[test]
fn test_scalar_roots_are_zero() {
    for root in [json!(42), json!("some words here"), json!(true), json!(null)] {
        assert_eq!(count_document(&WordTokenizer, &root), Tally::default());
    }
}

#[test]
fn test_object_root_is_single_message() {
    let tally = count_document(&WordTokenizer, &json!({"content": "hi there"}));
    assert_eq!(tally.per_message, vec![2]);
    assert_eq!(tally.total(), 2);
}

#[test]
fn test_array_total_is_sum_of_messages() {
    let root = json!([
        {"role": "system", "content": "be brief"},
        {"role": "user", "content": [{"type": "text", "text": "one two "}, {"text": "three"}]},
        {"role": "assistant"},
        "loose words count too",
        7,
        {"content": {"role": "tool", "ok": true}}
    ]);
    let tally = count_document(&WordTokenizer, &root);
    // {'role': 'tool', 'ok': True}
    assert_eq!(tally.per_message, vec![2, 3, 0, 4, 1, 4]);
    assert_eq!(tally.total(), 14);
}

#[test]
fn test_count_messages_matches_per_message_counts() {
    let messages = vec![json!({"content": "a b"}), json!({"content": "c"})];
    let tally = count_messages(&WordTokenizer, &messages);
    let expected: usize = messages
        .iter()
        .map(|m| count_message(&WordTokenizer, m))
        .sum();
    assert_eq!(tally.total(), expected);
}

#[test]
fn test_document_with_real_tokenizer() {
    let tok = BpeTokenizer::default_model().unwrap();
    let root = json!([{"content": "Hello, world!"}]);
    assert_eq!(count_document(&tok, &root).total(), 4);
    assert_eq!(count_document(&tok, &json!({"content": "Hello, world!"})).total(), 4);
}
