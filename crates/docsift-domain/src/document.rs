//! Extracted documents and the combined corpus

use crate::source::InputReference;

/// Banner placed between every adjacent pair of documents in a corpus
pub const DOCUMENT_SEPARATOR: &str =
    "\n\n------------------------------ DOCUMENT SEPARATOR ------------------------------\n\n";

/// Text produced by an extractor for one input reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDocument {
    /// Where the text came from
    pub source: InputReference,

    /// Extracted text
    pub text: String,
}

impl ExtractedDocument {
    /// Create a new extracted document
    pub fn new(source: InputReference, text: impl Into<String>) -> Self {
        Self {
            source,
            text: text.into(),
        }
    }

    /// Length of the text in characters
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Every successfully extracted document, joined in input order
///
/// Documents are separated by [`DOCUMENT_SEPARATOR`]; no banner precedes the
/// first document or follows the last one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    text: String,
    document_count: usize,
}

impl Corpus {
    /// Combine documents in the order given
    pub fn combine(documents: &[ExtractedDocument]) -> Self {
        let text = documents
            .iter()
            .map(|doc| doc.text.as_str())
            .collect::<Vec<_>>()
            .join(DOCUMENT_SEPARATOR);

        Self {
            text,
            document_count: documents.len(),
        }
    }

    /// The combined text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of documents joined into this corpus
    pub fn document_count(&self) -> usize {
        self.document_count
    }

    /// Length of the combined text in characters
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// True when no text was combined
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(name: &str, text: &str) -> ExtractedDocument {
        ExtractedDocument::new(InputReference::new(name), text)
    }

    #[test]
    fn test_single_document_has_no_banner() {
        let corpus = Corpus::combine(&[doc("a.txt", "alpha")]);
        assert_eq!(corpus.text(), "alpha");
        assert_eq!(corpus.document_count(), 1);
    }

    #[test]
    fn test_banner_between_every_pair() {
        let corpus = Corpus::combine(&[doc("a", "one"), doc("b", "two"), doc("c", "three")]);
        let expected = format!("one{0}two{0}three", DOCUMENT_SEPARATOR);
        assert_eq!(corpus.text(), expected);
        assert_eq!(corpus.text().matches("DOCUMENT SEPARATOR").count(), 2);
    }

    #[test]
    fn test_char_count_counts_characters() {
        let corpus = Corpus::combine(&[doc("a", "héllo")]);
        assert_eq!(corpus.char_count(), 5);
        assert_eq!(corpus.text().len(), 6);
    }

    #[test]
    fn test_empty_corpus() {
        let corpus = Corpus::combine(&[]);
        assert!(corpus.is_empty());
        assert_eq!(corpus.document_count(), 0);
    }
}
