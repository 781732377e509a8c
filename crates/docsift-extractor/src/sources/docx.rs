//! Word (DOCX) documents

use super::read_bytes;
use crate::error::ExtractError;
use docsift_domain::{InputReference, TextExtractor};
use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild};

/// Extracts body paragraphs of a DOCX file, one line per paragraph
#[derive(Debug, Default, Clone, Copy)]
pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    type Error = ExtractError;

    fn extract(&self, source: &InputReference) -> Result<String, Self::Error> {
        let path = source.as_path();
        let bytes = read_bytes(path)?;

        let docx = docx_rs::read_docx(&bytes).map_err(|e| ExtractError::Docx {
            path: path.to_path_buf(),
            message: format!("{:?}", e),
        })?;

        // Tables, images and section properties carry no paragraph text
        let paragraphs: Vec<String> = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
                _ => None,
            })
            .collect();

        Ok(paragraphs.join("\n"))
    }
}

/// Concatenate the text runs of one paragraph
fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();

    for child in &para.children {
        if let ParagraphChild::Run(run) = child {
            for rc in &run.children {
                match rc {
                    RunChild::Text(t) => text.push_str(&t.text),
                    RunChild::Tab(_) => text.push('\t'),
                    _ => {}
                }
            }
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Run};

    #[test]
    fn test_paragraphs_joined_by_newline() {
        let file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        Docx::new()
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Quarterly report")))
            .add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text("Revenue"))
                    .add_run(Run::new().add_text("Growth")),
            )
            .build()
            .pack(file.reopen().unwrap())
            .unwrap();

        let reference = InputReference::new(file.path().to_string_lossy());
        let text = DocxExtractor.extract(&reference).unwrap();
        assert_eq!(text, "Quarterly report\nRevenueGrowth");
    }

    #[test]
    fn test_corrupt_docx_is_error() {
        let file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        std::fs::write(file.path(), b"PK not really a zip").unwrap();
        let reference = InputReference::new(file.path().to_string_lossy());

        let err = DocxExtractor.extract(&reference).unwrap_err();
        assert!(matches!(err, ExtractError::Docx { .. }));
    }
}
