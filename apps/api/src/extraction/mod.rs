//! Document text extraction: turns uploaded PDF / DOCX bytes into one newline-joined text blob.
//!
//! Format detection happens before any decoding so unsupported uploads are rejected
//! without touching the bytes. Decoding is synchronous and CPU-bound; callers on the
//! async runtime run [`extract_text`] inside `tokio::task::spawn_blocking`.

pub mod docx;
pub mod pdf;

use std::fmt::Display;

use thiserror::Error;
use tracing::warn;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const MSWORD_MIME: &str = "application/msword";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported media type")]
    UnsupportedMediaType,

    #[error("{0}")]
    Pdf(String),

    #[error("{0}")]
    Docx(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Picks the decoder for an upload.
    ///
    /// A filename extension decides on its own: `.pdf` and `.docx` (any case) are accepted,
    /// every other extension is rejected whatever the declared content type says.
    /// Only an extension-less filename falls back to the content type.
    pub fn detect(filename: &str, content_type: Option<&str>) -> Result<Self, ExtractError> {
        if let Some(ext) = extension(filename) {
            return match ext.to_ascii_lowercase().as_str() {
                "pdf" => Ok(DocumentFormat::Pdf),
                "docx" => Ok(DocumentFormat::Docx),
                _ => Err(ExtractError::UnsupportedMediaType),
            };
        }

        let essence = content_type
            .map(|ct| ct.split(';').next().unwrap_or_default().trim().to_ascii_lowercase())
            .unwrap_or_default();
        match essence.as_str() {
            PDF_MIME => Ok(DocumentFormat::Pdf),
            DOCX_MIME | MSWORD_MIME => Ok(DocumentFormat::Docx),
            _ => Err(ExtractError::UnsupportedMediaType),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
        }
    }
}

/// Extracts the document's text: PDF pages or DOCX paragraphs, in order, joined by `\n`.
pub fn extract_text(format: DocumentFormat, bytes: &[u8]) -> Result<String, ExtractError> {
    match format {
        DocumentFormat::Pdf => pdf::extract_pdf_text(bytes),
        DocumentFormat::Docx => docx::extract_docx_text(bytes),
    }
}

/// Joins per-unit extraction results with `\n`.
/// A failed unit contributes an empty string, so the join keeps its position.
pub(crate) fn join_units<I, E>(units: I) -> String
where
    I: IntoIterator<Item = Result<String, E>>,
    E: Display,
{
    units
        .into_iter()
        .enumerate()
        .map(|(idx, unit)| {
            unit.unwrap_or_else(|e| {
                warn!(unit = idx + 1, "Text extraction failed, treating unit as empty: {e}");
                String::new()
            })
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Extension of the last path component, if it has one.
/// `".pdf"` counts as an extension, `"resume"` and `"resume."` do not.
fn extension(filename: &str) -> Option<&str> {
    let base = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    match base.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => Some(ext),
        _ => None,
    }
}
