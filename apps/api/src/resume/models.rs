use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::parsing::basics::Basics;

/// Marker telling the consumer which extractor produced the payload.
pub const PARSE_NOTE: &str = "heuristic_parse_v0";

/// Characters of extracted text echoed back in `rawTextPreview`.
pub const RAW_TEXT_PREVIEW_CHARS: usize = 2000;

/// Response body of `POST /parse_resume`.
///
/// Every field is always serialized. `experience`, `education`, `certifications`
/// and `keywords` are never filled by this service but stay present because
/// the front-end's fallback schema expects them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumePayload {
    pub basics: Basics,
    pub headline: String,
    pub skills: Vec<String>,
    pub experience: Vec<Value>,
    pub education: Vec<Value>,
    pub certifications: Vec<Value>,
    pub keywords: Vec<Value>,
    pub note: String,
    #[serde(rename = "rawTextPreview")]
    pub raw_text_preview: String,
}

impl ResumePayload {
    pub fn new(basics: Basics, skills: Vec<String>, raw_text_preview: String) -> Self {
        Self {
            basics,
            headline: String::new(),
            skills,
            experience: Vec::new(),
            education: Vec::new(),
            certifications: Vec::new(),
            keywords: Vec::new(),
            note: PARSE_NOTE.to_string(),
            raw_text_preview,
        }
    }
}
