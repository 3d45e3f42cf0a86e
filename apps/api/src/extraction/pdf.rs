use lopdf::Document;
use tracing::debug;

use super::{join_units, ExtractError};

/// Extracts text page by page, in page-number order.
///
/// Failing to load the document at all is an error. A page whose content stream
/// cannot be decoded contributes an empty string instead.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let doc = Document::load_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))?;

    // BTreeMap keyed by page number, so iteration is document order.
    let pages = doc.get_pages();
    debug!(page_count = pages.len(), "PDF loaded");

    Ok(join_units(
        pages.keys().map(|&page_num| doc.extract_text(&[page_num])),
    ))
}
