//! PDF documents

use super::read_bytes;
use crate::error::ExtractError;
use docsift_domain::{InputReference, TextExtractor};
use std::panic;
use tracing::debug;

/// Extracts the text layer of a PDF, page after page
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    type Error = ExtractError;

    fn extract(&self, source: &InputReference) -> Result<String, Self::Error> {
        let path = source.as_path();
        let bytes = read_bytes(path)?;
        let pdf_error = |message: String| ExtractError::Pdf {
            path: path.to_path_buf(),
            message,
        };

        // pdf-extract panics on some malformed documents
        match panic::catch_unwind(|| pdf_extract::extract_text_from_mem(&bytes)) {
            Ok(Ok(text)) => {
                debug!(path = %path.display(), chars = text.chars().count(), "PDF text extracted");
                Ok(text)
            }
            Ok(Err(e)) => Err(pdf_error(format!("{:?}", e))),
            Err(_) => Err(pdf_error("parser panicked on malformed document".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_garbage_is_pdf_error() {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(b"this is not a pdf").unwrap();
        let reference = InputReference::new(file.path().to_string_lossy());

        let err = PdfExtractor.extract(&reference).unwrap_err();
        assert!(matches!(err, ExtractError::Pdf { .. }));
    }

    #[test]
    fn test_missing_pdf_is_io_error() {
        let reference = InputReference::new("/no/such/file.pdf");
        let err = PdfExtractor.extract(&reference).unwrap_err();
        assert!(matches!(err, ExtractError::Io { .. }));
    }
}
