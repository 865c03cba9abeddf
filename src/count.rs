// src/count.rs
//! Token totals for whole documents.

use serde_json::Value;

use crate::message;
use crate::tokens::Tokenizer;

/// Per-message token counts, in message order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    pub per_message: Vec<usize>,
}

impl Tally {
    #[must_use]
    pub fn total(&self) -> usize {
        self.per_message.iter().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.per_message.is_empty()
    }
}

/// Tokens in a single message.
pub fn count_message(tokenizer: &dyn Tokenizer, message: &Value) -> usize {
    tokenizer.count(&message::normalize(message))
}

/// Counts every message independently.
pub fn count_messages(tokenizer: &dyn Tokenizer, messages: &[Value]) -> Tally {
    Tally {
        per_message: messages
            .iter()
            .map(|m| count_message(tokenizer, m))
            .collect(),
    }
}

/// Counts a parsed document.
///
/// An array is a list of messages and an object is one message. Any other
/// root holds no messages and tallies to zero.
pub fn count_document(tokenizer: &dyn Tokenizer, root: &Value) -> Tally {
    match root {
        Value::Array(messages) => count_messages(tokenizer, messages),
        Value::Object(_) => Tally {
            per_message: vec![count_message(tokenizer, root)],
        },
        _ => Tally::default(),
    }
}
