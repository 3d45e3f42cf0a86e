//! Bytes in, `ResumePayload` out. Synchronous; run it on a blocking thread.

use tracing::debug;

use crate::errors::AppError;
use crate::extraction::{extract_text, DocumentFormat};
use crate::parsing::basics::extract_basics;
use crate::parsing::skills::{extract_skills, SkillsOptions};
use crate::parsing::truncate_chars;
use crate::resume::models::{ResumePayload, RAW_TEXT_PREVIEW_CHARS};

#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    pub skills: SkillsOptions,
}

/// Extracts the document's text and runs the field heuristics over it.
///
/// Fails with `Parse` when the document cannot be decoded and with
/// `UnprocessableEntity` when it decodes to nothing but whitespace.
pub fn parse_document(
    format: DocumentFormat,
    bytes: &[u8],
    options: ParseOptions,
) -> Result<ResumePayload, AppError> {
    let text = extract_text(format, bytes)?;
    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::UnprocessableEntity("No text extracted".to_string()));
    }
    debug!(chars = text.chars().count(), "Extracted text");

    Ok(build_payload(text, options))
}

/// Runs the heuristics over non-empty, trimmed text.
pub fn build_payload(text: &str, options: ParseOptions) -> ResumePayload {
    let basics = extract_basics(text);
    let skills = extract_skills(text, options.skills);
    ResumePayload::new(
        basics,
        skills,
        truncate_chars(text, RAW_TEXT_PREVIEW_CHARS).to_string(),
    )
}
