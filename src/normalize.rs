//! Response normalization for structured completion results
//!
//! Array-shaped extraction results keep only entries carrying their
//! required fields, in order. An absent upstream result degrades to an
//! empty list so handlers always return well-formed JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::services::CompletionResult;

/// One question/answer study card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
}

/// Extract topic strings from an array of `{topic}` objects.
///
/// Entries without a usable `topic` field are dropped, order preserved.
pub fn topics(result: CompletionResult) -> Vec<String> {
    array_items(result)
        .into_iter()
        .filter_map(|item| {
            item.get("topic")
                .and_then(Value::as_str)
                .filter(|topic| !topic.is_empty())
                .map(str::to_string)
        })
        .collect()
}

/// Extract flashcards from an array of `{front, back}` objects.
pub fn flashcards(result: CompletionResult) -> Vec<Flashcard> {
    array_items(result)
        .into_iter()
        .filter_map(|item| {
            let front = item.get("front").and_then(Value::as_str)?;
            let back = item.get("back").and_then(Value::as_str)?;
            Some(Flashcard {
                front: front.to_string(),
                back: back.to_string(),
            })
        })
        .collect()
}

/// Extract question strings from an array of strings.
pub fn questions(result: CompletionResult) -> Vec<String> {
    array_items(result)
        .into_iter()
        .filter_map(|item| {
            item.as_str()
                .filter(|question| !question.is_empty())
                .map(str::to_string)
        })
        .collect()
}

fn array_items(result: CompletionResult) -> Vec<Value> {
    match result {
        CompletionResult::Structured(Value::Array(items)) => items,
        _ => Vec::new(),
    }
}
