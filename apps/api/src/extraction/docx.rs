use docx_rs::{read_docx, DocumentChild, Paragraph, ParagraphChild, Run, RunChild};
use tracing::debug;

use super::ExtractError;

/// Extracts the body paragraphs in document order, trimmed, with blank paragraphs dropped.
pub fn extract_docx_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let docx = read_docx(bytes).map_err(|e| ExtractError::Docx(e.to_string()))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(p) => Some(paragraph_text(p)),
            _ => None,
        })
        .filter_map(|text| {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .collect();

    debug!(paragraphs = paragraphs.len(), "DOCX paragraphs extracted");
    Ok(paragraphs.join("\n"))
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut out = String::new();
    push_paragraph_children(&paragraph.children, &mut out);
    out
}

fn push_paragraph_children(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run(run, out),
            ParagraphChild::Hyperlink(link) => push_paragraph_children(&link.children, out),
            _ => {}
        }
    }
}

fn push_run(run: &Run, out: &mut String) {
    for child in &run.children {
        match child {
            RunChild::Text(t) => out.push_str(&t.text),
            RunChild::Tab(_) => out.push('\t'),
            RunChild::Break(_) => out.push('\n'),
            _ => {}
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::io::Cursor;

    use docx_rs::{BreakType, Docx, Hyperlink, HyperlinkType};

    use super::*;

    /// Builds an in-memory .docx with one run per paragraph.
    pub(crate) fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
        let docx = paragraphs.iter().fold(Docx::new(), |docx, text| {
            let paragraph = if text.is_empty() {
                Paragraph::new()
            } else {
                Paragraph::new().add_run(Run::new().add_text(*text))
            };
            docx.add_paragraph(paragraph)
        });
        let mut cursor = Cursor::new(Vec::new());
        docx.build().pack(&mut cursor).unwrap();
        cursor.into_inner()
    }

    #[test]
    fn test_paragraphs_joined_in_order() {
        let bytes = docx_bytes(&["Jane Doe", "jane@example.com", "Skills"]);
        let text = extract_docx_text(&bytes).unwrap();
        assert_eq!(text, "Jane Doe\njane@example.com\nSkills");
    }

    #[test]
    fn test_blank_paragraphs_are_omitted() {
        let bytes = docx_bytes(&["Jane Doe", "", "   ", "Engineer"]);
        let text = extract_docx_text(&bytes).unwrap();
        assert_eq!(text, "Jane Doe\nEngineer");
    }

    #[test]
    fn test_paragraph_text_is_trimmed() {
        let bytes = docx_bytes(&["  Jane Doe  "]);
        assert_eq!(extract_docx_text(&bytes).unwrap(), "Jane Doe");
    }

    #[test]
    fn test_runs_concatenate_with_tabs() {
        let paragraph = Paragraph::new()
            .add_run(Run::new().add_text("Python"))
            .add_run(Run::new().add_tab().add_text("Go"));
        assert_eq!(paragraph_text(&paragraph), "Python\tGo");
    }

    #[test]
    fn test_hyperlink_text_is_kept() {
        let paragraph = Paragraph::new()
            .add_run(Run::new().add_text("Portfolio: "))
            .add_hyperlink(
                Hyperlink::new("https://janedoe.dev", HyperlinkType::External)
                    .add_run(Run::new().add_text("janedoe.dev")),
            );
        assert_eq!(paragraph_text(&paragraph), "Portfolio: janedoe.dev");
    }

    #[test]
    fn test_break_becomes_newline() {
        let paragraph = Paragraph::new().add_run(
            Run::new()
                .add_text("Jane Doe")
                .add_break(BreakType::TextWrapping)
                .add_text("Engineer"),
        );
        assert_eq!(paragraph_text(&paragraph), "Jane Doe\nEngineer");
    }

    #[test]
    fn test_not_a_zip_fails() {
        let err = extract_docx_text(b"plain text pretending to be docx").unwrap_err();
        assert!(matches!(err, ExtractError::Docx(_)));
    }
}
