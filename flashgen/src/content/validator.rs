//! Content validation ahead of flashcard generation.

/// Minimum word count for usable content.
pub const DEFAULT_MIN_WORDS: usize = 50;

/// Keywords whose presence suggests educational structure.
const EDUCATIONAL_KEYWORDS: &[&str] = &[
    "define",
    "explain",
    "concept",
    "theory",
    "principle",
    "method",
    "process",
    "example",
];

/// Outcome of validating cleaned content.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Validate cleaned content against the minimum word threshold and scan for
/// educational structure.
///
/// The keyword scan never affects validity; it only appends a suggestion.
pub fn validate_content(content: &str, min_words: usize) -> ValidationReport {
    let word_count = content.split_whitespace().count();
    let mut report = ValidationReport {
        is_valid: true,
        warnings: Vec::new(),
        suggestions: Vec::new(),
    };

    if word_count < min_words {
        report.is_valid = false;
        report.warnings.push(format!(
            "Content too short ({} words). Minimum {} words required.",
            word_count, min_words
        ));
        report
            .suggestions
            .push("Add more detailed content for better flashcard generation.".to_string());
    }

    if content.trim().is_empty() {
        report.is_valid = false;
        report.warnings.push("Content is empty.".to_string());
    }

    let lowered = content.to_lowercase();
    let has_educational_content = EDUCATIONAL_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword));

    if !has_educational_content {
        report.suggestions.push(
            "Content might benefit from more educational structure (definitions, explanations, examples)."
                .to_string(),
        );
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_educational_content() -> String {
        std::iter::repeat("The process of photosynthesis is an example concept.")
            .take(10)
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_short_content_invalid() {
        let report = validate_content("Too short.", DEFAULT_MIN_WORDS);
        assert!(!report.is_valid);
        assert!(!report.warnings.is_empty());
        assert!(report.warnings[0].contains("too short"));
    }

    #[test]
    fn test_empty_content_invalid_with_both_warnings() {
        let report = validate_content("", DEFAULT_MIN_WORDS);
        assert!(!report.is_valid);
        // Short-content and empty-content warnings co-occur
        assert_eq!(report.warnings.len(), 2);
    }

    #[test]
    fn test_long_educational_content_valid() {
        let report = validate_content(&long_educational_content(), DEFAULT_MIN_WORDS);
        assert!(report.is_valid);
        assert!(report.warnings.is_empty());
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn test_keyword_scan_is_case_insensitive() {
        let content = std::iter::repeat("PROCESS and THEORY words repeated here")
            .take(10)
            .collect::<Vec<_>>()
            .join(" ");
        let report = validate_content(&content, DEFAULT_MIN_WORDS);
        assert!(report.is_valid);
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn test_missing_keywords_only_suggests() {
        let content = std::iter::repeat("plain words without any structure markers at all")
            .take(10)
            .collect::<Vec<_>>()
            .join(" ");
        let report = validate_content(&content, DEFAULT_MIN_WORDS);
        assert!(report.is_valid);
        assert!(report.warnings.is_empty());
        assert_eq!(report.suggestions.len(), 1);
    }
}
