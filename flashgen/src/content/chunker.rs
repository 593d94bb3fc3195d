//! Section chunking for content accounting.

/// Default maximum section length in characters.
pub const DEFAULT_MAX_SECTION_LENGTH: usize = 2000;

/// Split cleaned content into word-aligned sections.
///
/// Words are packed greedily left to right; a section is closed when adding
/// the next word would exceed `max_section_length`. No word is ever split
/// across sections, so a single word longer than the bound still becomes its
/// own section.
pub fn split_sections(content: &str, max_section_length: usize) -> Vec<String> {
    if content.len() <= max_section_length {
        return vec![content.to_string()];
    }

    let mut sections = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_length = 0;

    for word in content.split_whitespace() {
        let word_length = word.len() + 1;
        if current_length + word_length > max_section_length && !current.is_empty() {
            sections.push(current.join(" "));
            current = vec![word];
            current_length = word_length;
        } else {
            current.push(word);
            current_length += word_length;
        }
    }

    if !current.is_empty() {
        sections.push(current.join(" "));
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_content_single_section() {
        let content = "A short piece of content.";
        let sections = split_sections(content, 2000);
        assert_eq!(sections, vec![content.to_string()]);
    }

    #[test]
    fn test_sections_respect_bound() {
        let content = std::iter::repeat("word")
            .take(200)
            .collect::<Vec<_>>()
            .join(" ");
        let sections = split_sections(&content, 100);
        assert!(sections.len() > 1);
        for section in &sections {
            assert!(section.len() <= 100, "section too long: {}", section.len());
        }
    }

    #[test]
    fn test_word_sequence_preserved() {
        let content = (0..300)
            .map(|i| format!("word{}", i))
            .collect::<Vec<_>>()
            .join(" ");
        let sections = split_sections(&content, 120);

        let rejoined: Vec<&str> = sections
            .iter()
            .flat_map(|s| s.split_whitespace())
            .collect();
        let original: Vec<&str> = content.split_whitespace().collect();
        assert_eq!(rejoined, original);
    }

    #[test]
    fn test_oversized_single_word_gets_own_section() {
        let long_word = "x".repeat(50);
        let content = format!("{} small words after", long_word);
        let sections = split_sections(&content, 20);
        assert_eq!(sections[0], long_word);
        for section in &sections[1..] {
            assert!(section.len() <= 20);
        }
    }
}
