//! Dispatch of input references to the extractor for their kind

use crate::config::ExtractorConfig;
use crate::error::ExtractError;
use crate::sources::{CsvExtractor, DocxExtractor, PdfExtractor, PlainTextExtractor, UrlExtractor};
use docsift_domain::{ExtractedDocument, InputReference, SourceKind, TextExtractor};
use tracing::{info, warn};

/// Boxed extractor as held by the router
pub type BoxedExtractor = Box<dyn TextExtractor<Error = ExtractError>>;

/// Where a reference will be sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    /// Extractor kind chosen for the reference
    pub kind: SourceKind,

    /// False when an unknown extension fell back to plain text
    pub recognized: bool,
}

/// Routes each input reference to one of five extractors
pub struct SourceRouter {
    url: BoxedExtractor,
    pdf: BoxedExtractor,
    docx: BoxedExtractor,
    csv: BoxedExtractor,
    text: BoxedExtractor,
}

impl SourceRouter {
    /// Create a router backed by the real extractors
    pub fn new(config: &ExtractorConfig) -> Result<Self, ExtractError> {
        Ok(Self {
            url: Box::new(UrlExtractor::new(config.fetch_timeout())?),
            pdf: Box::new(PdfExtractor),
            docx: Box::new(DocxExtractor),
            csv: Box::new(CsvExtractor),
            text: Box::new(PlainTextExtractor),
        })
    }

    /// Create a router from explicit extractors, one per kind
    pub fn with_extractors(
        url: BoxedExtractor,
        pdf: BoxedExtractor,
        docx: BoxedExtractor,
        csv: BoxedExtractor,
        text: BoxedExtractor,
    ) -> Self {
        Self {
            url,
            pdf,
            docx,
            csv,
            text,
        }
    }

    /// Decide which extractor handles `reference`, without touching I/O
    pub fn classify(reference: &InputReference) -> Route {
        if reference.is_url() {
            return Route {
                kind: SourceKind::Url,
                recognized: true,
            };
        }

        match reference.extension().as_deref().and_then(SourceKind::from_extension) {
            Some(kind) => Route {
                kind,
                recognized: true,
            },
            None => Route {
                kind: SourceKind::PlainText,
                recognized: false,
            },
        }
    }

    fn extractor(&self, kind: SourceKind) -> &dyn TextExtractor<Error = ExtractError> {
        match kind {
            SourceKind::Url => self.url.as_ref(),
            SourceKind::Pdf => self.pdf.as_ref(),
            SourceKind::Docx => self.docx.as_ref(),
            SourceKind::Csv => self.csv.as_ref(),
            SourceKind::PlainText => self.text.as_ref(),
        }
    }

    /// Extract the text of one reference
    ///
    /// Local paths must exist. Whitespace-only output is reported as
    /// [`ExtractError::Empty`].
    pub fn route(&self, reference: &InputReference) -> Result<ExtractedDocument, ExtractError> {
        let route = Self::classify(reference);

        if route.kind == SourceKind::Url {
            info!(url = %reference, "Processing URL");
        } else {
            let path = reference.as_path();
            if !path.exists() {
                return Err(ExtractError::NotFound(path.to_path_buf()));
            }
            info!(file = %reference, kind = %route.kind, "Processing file");
            if !route.recognized {
                warn!(
                    file = %reference,
                    "Unrecognized file extension, trying as text file"
                );
            }
        }

        let text = self.extractor(route.kind).extract(reference)?;
        if text.trim().is_empty() {
            return Err(ExtractError::Empty(reference.to_string()));
        }

        Ok(ExtractedDocument::new(reference.clone(), text))
    }
}
