//! Unified error type for the flashcard pipeline.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlashgenError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Unsupported export format: {0}")]
    UnsupportedExportFormat(String),

    #[error("Could not decode file with any supported encoding")]
    DecodeError,

    #[error("Content validation failed: {}", warnings.join("; "))]
    ValidationFailed { warnings: Vec<String> },

    #[error("Flashcard generation failed: {0}")]
    GenerationFailed(String),

    #[error("PDF extraction failed: {0}")]
    PdfExtraction(String),

    #[error("LLM error: {0}")]
    Llm(#[from] llm_client::LlmError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, FlashgenError>;
