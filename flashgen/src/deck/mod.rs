//! Flashcard set model: validated cards, filtering, and aggregate statistics.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Card difficulty level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Parse case-insensitively. Unknown strings yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

/// A validated flashcard. Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Flashcard {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub difficulty: Difficulty,
    pub topic: String,
    pub subject: String,
}

/// An unvalidated card on its way into a set. Missing fields are filled in
/// by [`FlashcardSet::add_card`].
#[derive(Debug, Clone, Default)]
pub struct CardDraft {
    pub id: Option<String>,
    pub question: String,
    pub answer: String,
    pub difficulty: Difficulty,
    pub topic: String,
    pub subject: Option<String>,
}

/// Provenance metadata recorded on a generated set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetMetadata {
    pub source: String,
    pub generation_method: String,
    pub content_sections: usize,
    pub original_content_length: usize,
}

/// Aggregate statistics over a flashcard set.
#[derive(Debug, Clone, Serialize)]
pub struct SetStatistics {
    pub total_cards: usize,
    pub difficulties: HashMap<String, usize>,
    pub topics: Vec<String>,
    pub subjects: Vec<String>,
}

/// An ordered collection of flashcards. Insertion order is generation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashcardSet {
    pub name: String,
    pub subject: String,
    pub description: String,
    pub metadata: SetMetadata,
    flashcards: Vec<Flashcard>,
}

impl FlashcardSet {
    pub fn new(name: &str, subject: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            subject: subject.to_string(),
            description: description.to_string(),
            metadata: SetMetadata::default(),
            flashcards: Vec::new(),
        }
    }

    /// Append a card, assigning a fresh short id when none is given and
    /// inheriting the set's subject when none is given.
    pub fn add_card(&mut self, draft: CardDraft) {
        let id = draft
            .id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(short_id);
        let subject = draft.subject.unwrap_or_else(|| self.subject.clone());

        self.flashcards.push(Flashcard {
            id,
            question: draft.question,
            answer: draft.answer,
            difficulty: draft.difficulty,
            topic: draft.topic,
            subject,
        });
    }

    /// Append cards in input order.
    pub fn add_cards(&mut self, drafts: Vec<CardDraft>) {
        for draft in drafts {
            self.add_card(draft);
        }
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.flashcards
    }

    /// Cards whose difficulty matches, case-insensitively. An unrecognized
    /// difficulty string matches nothing.
    pub fn by_difficulty(&self, difficulty: &str) -> Vec<&Flashcard> {
        match Difficulty::parse(difficulty) {
            Some(level) => self
                .flashcards
                .iter()
                .filter(|card| card.difficulty == level)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Cards whose topic contains the given substring, case-insensitively.
    pub fn by_topic(&self, topic: &str) -> Vec<&Flashcard> {
        let needle = topic.to_lowercase();
        self.flashcards
            .iter()
            .filter(|card| card.topic.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn statistics(&self) -> SetStatistics {
        let mut difficulties: HashMap<String, usize> = HashMap::new();
        let mut topics = BTreeSet::new();
        let mut subjects = BTreeSet::new();

        for card in &self.flashcards {
            *difficulties
                .entry(card.difficulty.label().to_string())
                .or_insert(0) += 1;
            if !card.topic.is_empty() {
                topics.insert(card.topic.clone());
            }
            subjects.insert(card.subject.clone());
        }

        SetStatistics {
            total_cards: self.flashcards.len(),
            difficulties,
            topics: topics.into_iter().collect(),
            subjects: subjects.into_iter().collect(),
        }
    }
}

/// Short unique card token.
fn short_id() -> String {
    uuid::Uuid::new_v4().to_string()[..8].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_set() -> FlashcardSet {
        let mut set = FlashcardSet::new("Bio Set", "Biology", "Test set");
        set.add_cards(vec![
            CardDraft {
                id: Some("1".to_string()),
                question: "What is osmosis?".to_string(),
                answer: "Movement of water across a membrane.".to_string(),
                difficulty: Difficulty::Easy,
                topic: "Cell Transport".to_string(),
                subject: None,
            },
            CardDraft {
                id: Some("2".to_string()),
                question: "Explain active transport.".to_string(),
                answer: "Movement against a gradient using energy.".to_string(),
                difficulty: Difficulty::Hard,
                topic: "Cell Transport".to_string(),
                subject: None,
            },
            CardDraft {
                id: Some("3".to_string()),
                question: "What is a chloroplast?".to_string(),
                answer: "The organelle where photosynthesis happens.".to_string(),
                difficulty: Difficulty::Easy,
                topic: "Organelles".to_string(),
                subject: Some("Botany".to_string()),
            },
        ]);
        set
    }

    #[test]
    fn test_add_card_inherits_subject() {
        let set = sample_set();
        assert_eq!(set.cards()[0].subject, "Biology");
        assert_eq!(set.cards()[2].subject, "Botany");
    }

    #[test]
    fn test_add_card_assigns_id_when_missing() {
        let mut set = FlashcardSet::new("Set", "General", "");
        set.add_card(CardDraft {
            question: "Q?".to_string(),
            answer: "A.".to_string(),
            ..Default::default()
        });
        assert_eq!(set.cards()[0].id.len(), 8);
    }

    #[test]
    fn test_by_difficulty_case_insensitive() {
        let set = sample_set();
        let easy = set.by_difficulty("easy");
        assert_eq!(easy.len(), 2);
        assert!(easy.iter().all(|c| c.difficulty == Difficulty::Easy));
        assert_eq!(set.by_difficulty("HARD").len(), 1);
        assert!(set.by_difficulty("impossible").is_empty());
    }

    #[test]
    fn test_by_topic_substring_case_insensitive() {
        let set = sample_set();
        assert_eq!(set.by_topic("transport").len(), 2);
        assert_eq!(set.by_topic("ORGAN").len(), 1);
        assert!(set.by_topic("history").is_empty());
    }

    #[test]
    fn test_statistics() {
        let set = sample_set();
        let stats = set.statistics();
        assert_eq!(stats.total_cards, 3);
        assert_eq!(stats.difficulties.get("Easy"), Some(&2));
        assert_eq!(stats.difficulties.get("Hard"), Some(&1));
        assert_eq!(stats.difficulties.get("Medium"), None);
        assert_eq!(stats.topics, vec!["Cell Transport", "Organelles"]);
        assert_eq!(stats.subjects, vec!["Biology", "Botany"]);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let set = sample_set();
        let ids: Vec<&str> = set.cards().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }
}
