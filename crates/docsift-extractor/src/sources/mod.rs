//! One extractor per source kind
//!
//! Every extractor implements [`TextExtractor`](docsift_domain::TextExtractor)
//! with [`ExtractError`](crate::ExtractError) as its error type.

mod csv;
mod docx;
mod pdf;
mod text;
mod url;

pub use self::csv::CsvExtractor;
pub use self::docx::DocxExtractor;
pub use self::pdf::PdfExtractor;
pub use self::text::{decode_text, PlainTextExtractor};
pub use self::url::{clean_text, html_to_text, UrlExtractor};

use crate::error::ExtractError;
use std::path::Path;

/// Read a whole file, tagging failures with the path
fn read_bytes(path: &Path) -> Result<Vec<u8>, ExtractError> {
    std::fs::read(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })
}
