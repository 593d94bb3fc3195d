//! Raw text extraction from supported source files.

use encoding_rs::WINDOWS_1252;
use std::path::Path;

use crate::error::{FlashgenError, Result};

/// Read raw text from a `.txt` file.
///
/// Decoding order: UTF-8, then latin-1, then cp1252. Latin-1 maps every byte
/// to a code point, so in practice the chain always yields text; the
/// [`FlashgenError::DecodeError`] kind is kept for the contract.
pub fn read_text_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;

    if let Ok(content) = String::from_utf8(bytes.clone()) {
        return Ok(content);
    }

    // Latin-1: every byte maps directly to U+0000..U+00FF
    let latin1: String = bytes.iter().map(|&b| b as char).collect();
    if !latin1.is_empty() {
        return Ok(latin1);
    }

    let (content, _, had_errors) = WINDOWS_1252.decode(&bytes);
    if !had_errors {
        return Ok(content.into_owned());
    }

    Err(FlashgenError::DecodeError)
}

/// Extract text from a `.pdf` file.
///
/// Extraction is best-effort: pages without extractable text contribute
/// nothing to the output.
pub fn read_pdf_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    pdf_extract::extract_text_from_mem(&bytes)
        .map_err(|e| FlashgenError::PdfExtraction(e.to_string()))
}

/// Read a `.csv` file: fields within a row joined by a single space, rows
/// joined by newline. An empty file yields an empty string.
pub fn read_csv_file(path: &Path) -> Result<String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut lines = Vec::new();
    for record in reader.records() {
        let record = record?;
        lines.push(record.iter().collect::<Vec<_>>().join(" "));
    }

    Ok(lines.join("\n"))
}
