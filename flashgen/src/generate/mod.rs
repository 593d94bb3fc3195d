//! Card generation: prompt building, the external LLM call, and response
//! parsing.

mod parse;
mod prompt;

use llm_client::{LlmProvider, LlmRequest};

use crate::deck::CardDraft;
use crate::error::Result;

pub use parse::parse_response;
pub use prompt::build_prompt;

// Fixed sampling configuration for flashcard generation.
const TEMPERATURE: f32 = 0.7;
const TOP_P: f32 = 0.8;
const TOP_K: u32 = 40;
const MAX_OUTPUT_TOKENS: u32 = 2048;

/// Adapter around an injected LLM provider. Does not retry or back off.
pub struct CardGenerator {
    provider: Box<dyn LlmProvider>,
}

impl CardGenerator {
    pub fn new(provider: Box<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// Generate card drafts for the given content.
    ///
    /// Provider and parse failures both surface as error values; a response
    /// without usable candidates yields an empty draft list, not an error.
    pub async fn generate(
        &self,
        content: &str,
        subject: &str,
        min_cards: usize,
        max_cards: usize,
    ) -> Result<Vec<CardDraft>> {
        let prompt = build_prompt(content, subject, min_cards, max_cards);
        log::debug!(
            "Requesting {}-{} cards from {} ({} prompt chars)",
            min_cards,
            max_cards,
            self.provider.name(),
            prompt.len()
        );

        let request = LlmRequest {
            prompt,
            max_tokens: Some(MAX_OUTPUT_TOKENS),
            temperature: Some(TEMPERATURE),
            top_p: Some(TOP_P),
            top_k: Some(TOP_K),
        };

        let response = self.provider.complete(request).await?;
        log::debug!("Received {} response chars", response.content.len());

        parse_response(&response.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use llm_client::{LlmError, MockProvider};

    #[tokio::test]
    async fn test_generate_parses_cards() {
        let response = r#"```json
{"flashcards": [{"question": "What is DNA", "answer": "Genetic material."}]}
```"#;
        let generator = CardGenerator::new(Box::new(MockProvider::always_succeeds(response)));

        let drafts = generator.generate("content", "Biology", 2, 3).await.unwrap();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].question, "What is DNA?");
    }

    #[tokio::test]
    async fn test_generate_sends_full_prompt() {
        let mock = MockProvider::always_succeeds(r#"{"flashcards": []}"#);
        // Keep a handle on the mock to inspect the captured prompt
        let mock = std::sync::Arc::new(mock);
        struct Shared(std::sync::Arc<MockProvider>);

        #[async_trait::async_trait]
        impl LlmProvider for Shared {
            async fn complete(
                &self,
                request: LlmRequest,
            ) -> llm_client::Result<llm_client::LlmResponse> {
                self.0.complete(request).await
            }
            fn name(&self) -> &'static str {
                self.0.name()
            }
            fn is_available(&self) -> llm_client::Result<()> {
                self.0.is_available()
            }
        }

        let generator = CardGenerator::new(Box::new(Shared(mock.clone())));
        generator
            .generate("The cell is the unit of life.", "Biology", 2, 3)
            .await
            .unwrap();

        let prompt = mock.last_prompt().unwrap();
        assert!(prompt.contains("between 2 and 3 flashcards"));
        assert!(prompt.contains("The cell is the unit of life."));
    }

    #[tokio::test]
    async fn test_provider_error_surfaces_as_error_value() {
        let generator = CardGenerator::new(Box::new(MockProvider::always_fails(
            LlmError::ServerOverloaded {
                message: "busy".to_string(),
            },
        )));

        let result = generator.generate("content", "Biology", 2, 3).await;
        assert!(result.is_err());
    }
}
