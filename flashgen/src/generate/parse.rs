//! Parsing of the model's response into card drafts.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::deck::{CardDraft, Difficulty};
use crate::error::{FlashgenError, Result};

/// First fenced block tagged as JSON.
static JSON_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```json\s*(.*?)\s*```").unwrap());

/// A candidate card as the model emitted it, before validation.
#[derive(Debug, Deserialize)]
struct CardCandidate {
    #[serde(default)]
    question: Option<String>,
    #[serde(default)]
    answer: Option<String>,
    #[serde(default)]
    difficulty: Option<String>,
    #[serde(default)]
    topic: Option<String>,
}

/// Parse the raw response text into validated card drafts.
///
/// The JSON payload is the first ```json fenced block if present, otherwise
/// the entire response. The top level may be a map with a `flashcards` key
/// or a bare list; anything else yields zero cards. Candidates missing a
/// non-empty question or answer are dropped silently. Accepted cards are
/// renumbered by output position starting at 1.
pub fn parse_response(response_text: &str) -> Result<Vec<CardDraft>> {
    let json_str = JSON_FENCE
        .captures(response_text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(response_text);

    let parsed: Value = serde_json::from_str(json_str)
        .map_err(|e| FlashgenError::GenerationFailed(format!("Malformed JSON response: {}", e)))?;

    let candidates = match parsed {
        Value::Object(mut map) => match map.remove("flashcards") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        Value::Array(items) => items,
        _ => Vec::new(),
    };

    let dropped = candidates.len();
    let drafts: Vec<CardDraft> = candidates
        .into_iter()
        .filter_map(|item| serde_json::from_value::<CardCandidate>(item).ok())
        .filter_map(validate_candidate)
        .enumerate()
        .map(|(i, (question, answer, difficulty, topic))| CardDraft {
            id: Some((i + 1).to_string()),
            question: ensure_terminal_punctuation(question),
            answer,
            difficulty,
            topic,
            subject: None,
        })
        .collect();

    let dropped = dropped - drafts.len();
    if dropped > 0 {
        log::warn!("Dropped {} invalid card candidate(s)", dropped);
    }

    Ok(drafts)
}

/// Keep a candidate only if both question and answer are non-empty after
/// trimming. Returns the trimmed fields plus defaults for the rest.
fn validate_candidate(
    candidate: CardCandidate,
) -> Option<(String, String, Difficulty, String)> {
    let question = candidate.question.as_deref().map(str::trim)?;
    let answer = candidate.answer.as_deref().map(str::trim)?;
    if question.is_empty() || answer.is_empty() {
        return None;
    }

    let difficulty = candidate
        .difficulty
        .as_deref()
        .and_then(Difficulty::parse)
        .unwrap_or_default();
    let topic = candidate.topic.as_deref().unwrap_or("").trim().to_string();

    Some((question.to_string(), answer.to_string(), difficulty, topic))
}

/// Questions end with `?`, `:`, or `.`; append `?` if missing.
fn ensure_terminal_punctuation(question: String) -> String {
    if question.ends_with(['?', ':', '.']) {
        question
    } else {
        format!("{}?", question)
    }
}
