//! End-to-end pipeline: normalize, validate, chunk for accounting, generate,
//! and assemble the owned flashcard set.

use std::path::{Path, PathBuf};

use llm_client::LlmProvider;

use crate::content::{self, NormalizedContent, chunker, validator};
use crate::deck::{FlashcardSet, SetMetadata, SetStatistics};
use crate::error::{FlashgenError, Result};
use crate::export::{self, ExportFormat};
use crate::generate::CardGenerator;

/// Parameters for a generation request.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub subject: String,
    pub min_cards: usize,
    pub max_cards: usize,
    pub set_name: String,
    pub description: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            subject: "General".to_string(),
            min_cards: 10,
            max_cards: 15,
            set_name: "Flashcard Set".to_string(),
            description: "Generated flashcard set".to_string(),
        }
    }
}

/// Result of a successful generation: the caller owns the set.
#[derive(Debug)]
pub struct GenerationOutcome {
    pub set: FlashcardSet,
    pub statistics: SetStatistics,
}

/// Owns the generator and the export directory. Each successful run returns
/// a fresh [`FlashcardSet`] to the caller; there is no shared current-set
/// slot.
pub struct Pipeline {
    generator: CardGenerator,
    export_dir: PathBuf,
}

impl Pipeline {
    pub fn new(provider: Box<dyn LlmProvider>, export_dir: impl Into<PathBuf>) -> Self {
        Self {
            generator: CardGenerator::new(provider),
            export_dir: export_dir.into(),
        }
    }

    /// Generate a flashcard set from inline text.
    pub async fn generate_from_text(
        &self,
        text: &str,
        options: &GenerateOptions,
    ) -> Result<GenerationOutcome> {
        let normalized = content::normalize_text(text);
        self.generate_from_content(normalized, "Text Input", options)
            .await
    }

    /// Generate a flashcard set from a source file.
    pub async fn generate_from_file(
        &self,
        path: &Path,
        options: &GenerateOptions,
    ) -> Result<GenerationOutcome> {
        let normalized = content::normalize_file(path)?;
        let source = path.display().to_string();
        self.generate_from_content(normalized, &source, options)
            .await
    }

    async fn generate_from_content(
        &self,
        normalized: NormalizedContent,
        source: &str,
        options: &GenerateOptions,
    ) -> Result<GenerationOutcome> {
        let report =
            validator::validate_content(&normalized.content, validator::DEFAULT_MIN_WORDS);
        for suggestion in &report.suggestions {
            log::warn!("{}", suggestion);
        }
        if !report.is_valid {
            return Err(FlashgenError::ValidationFailed {
                warnings: report.warnings,
            });
        }

        // Sections are computed for set metadata only; the full cleaned
        // content is sent in a single generation call.
        let sections = chunker::split_sections(
            &normalized.content,
            chunker::DEFAULT_MAX_SECTION_LENGTH,
        );
        log::info!(
            "Generating cards from {} ({} words, {} section(s))",
            source,
            normalized.metadata.word_count,
            sections.len()
        );

        let drafts = self
            .generator
            .generate(
                &normalized.content,
                &options.subject,
                options.min_cards,
                options.max_cards,
            )
            .await?;

        let mut set = FlashcardSet::new(&options.set_name, &options.subject, &options.description);
        set.add_cards(drafts);
        set.metadata = SetMetadata {
            source: source.to_string(),
            generation_method: "llm".to_string(),
            content_sections: sections.len(),
            original_content_length: normalized.content.chars().count(),
        };

        let statistics = set.statistics();
        log::info!("Generated {} card(s)", statistics.total_cards);

        Ok(GenerationOutcome { set, statistics })
    }

    /// Export a set into the configured export directory.
    pub fn export(&self, set: &FlashcardSet, format: ExportFormat) -> Result<PathBuf> {
        export::export_set(set, format, &self.export_dir)
    }
}
