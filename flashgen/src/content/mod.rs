//! Content ingestion: extraction, cleaning, validation, and chunking.

pub mod chunker;
pub mod cleaner;
mod extract;
pub mod validator;

use serde::Serialize;
use std::path::Path;

use crate::error::{FlashgenError, Result};
use cleaner::clean_content;
use extract::{read_csv_file, read_pdf_file, read_text_file};

/// Where the content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Text,
    File,
}

/// Metadata describing normalized content.
#[derive(Debug, Clone, Serialize)]
pub struct ContentMetadata {
    pub source_type: SourceKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_format: Option<String>,
    pub word_count: usize,
    pub char_count: usize,
}

/// Cleaned content plus its metadata.
#[derive(Debug, Clone)]
pub struct NormalizedContent {
    pub content: String,
    pub metadata: ContentMetadata,
}

/// Normalize inline text input.
pub fn normalize_text(raw: &str) -> NormalizedContent {
    let content = clean_content(raw);
    let metadata = ContentMetadata {
        source_type: SourceKind::Text,
        file_path: None,
        file_format: None,
        word_count: content.split_whitespace().count(),
        char_count: content.chars().count(),
    };

    NormalizedContent { content, metadata }
}

/// Normalize a source file: resolve its extension, extract raw text, and
/// clean it.
///
/// Supports exactly `.txt`, `.pdf`, and `.csv`.
pub fn normalize_file(path: &Path) -> Result<NormalizedContent> {
    if !path.exists() {
        return Err(FlashgenError::NotFound(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();

    let raw = match extension.as_str() {
        "txt" => read_text_file(path)?,
        "pdf" => read_pdf_file(path)?,
        "csv" => read_csv_file(path)?,
        other => {
            return Err(FlashgenError::UnsupportedFormat(format!(".{}", other)));
        }
    };

    let content = clean_content(&raw);
    let metadata = ContentMetadata {
        source_type: SourceKind::File,
        file_path: Some(path.display().to_string()),
        file_format: Some(format!(".{}", extension)),
        word_count: content.split_whitespace().count(),
        char_count: content.chars().count(),
    };

    Ok(NormalizedContent { content, metadata })
}
