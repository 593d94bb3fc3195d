//! Content cleaning for flashcard generation.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Characters outside word characters, whitespace, and basic punctuation
/// are replaced with a space.
static DISALLOWED_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[^\w\s.,!?;:()\-'"]+"#).unwrap());

static MULTIPLE_SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r" +").unwrap());

/// Clean raw content for prompt building.
///
/// This function:
/// - Collapses all whitespace runs to a single space
/// - Strips characters outside the allowed punctuation set
/// - Collapses any spaces introduced by stripping
/// - Trims leading/trailing whitespace
///
/// Cleaning is idempotent: applying it twice yields the same string.
pub fn clean_content(content: &str) -> String {
    if content.is_empty() {
        return String::new();
    }

    let content = WHITESPACE_RUNS.replace_all(content, " ");
    let content = DISALLOWED_CHARS.replace_all(&content, " ");
    let content = MULTIPLE_SPACES.replace_all(&content, " ");
    content.trim().to_string()
}
