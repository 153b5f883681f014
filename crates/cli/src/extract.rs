//! Document-to-text extraction.
//!
//! Extraction is a collaborator of the pipeline, not part of it: the core
//! receives one plain-text string and never validates its semantic
//! correctness, so garbled PDF text passes through unchanged. PDFs go
//! through pdf-extract; everything else is decoded as UTF-8 with a lossy
//! fallback.

use condense_core::{AppError, AppResult};
use std::path::Path;

/// Extract the plain text of a document file.
pub fn extract_text(path: &Path) -> AppResult<String> {
    let bytes = std::fs::read(path)
        .map_err(|e| AppError::Extract(format!("Failed to read {:?}: {}", path, e)))?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => extract_pdf(&bytes),
        _ => Ok(extract_plain(&bytes)),
    }
}

/// Extract text from PDF bytes, pages joined with newlines.
fn extract_pdf(bytes: &[u8]) -> AppResult<String> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::Extract(format!("Failed to extract PDF text: {}", e)))?;

    // pdf-extract returns all text as one string; form feed characters
    // separate pages
    let joined = text
        .split('\x0C')
        .map(str::trim)
        .filter(|page| !page.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    Ok(joined)
}

/// Decode plain text, falling back to lossy conversion.
fn extract_plain(bytes: &[u8]) -> String {
    String::from_utf8(bytes.to_vec())
        .unwrap_or_else(|_| String::from_utf8_lossy(bytes).into_owned())
        .trim()
        .to_string()
}
