//! Input references and the source kinds they resolve to

use std::fmt;
use std::path::Path;

/// URL scheme prefixes that route a reference to the web extractor
pub const URL_SCHEMES: [&str; 2] = ["http://", "https://"];

/// A file path or URL supplied by the caller
///
/// References are immutable; the router decides how to read them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InputReference(String);

impl InputReference {
    /// Wrap a raw reference string
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// The reference exactly as supplied
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the reference starts with `http://` or `https://`
    pub fn is_url(&self) -> bool {
        URL_SCHEMES.iter().any(|scheme| self.0.starts_with(scheme))
    }

    /// The reference interpreted as a filesystem path
    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    /// Lower-cased file extension, if the reference has one
    pub fn extension(&self) -> Option<String> {
        self.as_path()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
    }
}

impl fmt::Display for InputReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for InputReference {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for InputReference {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// The kind of source a reference resolves to
///
/// Each kind is served by exactly one extractor. `PlainText` doubles as the
/// fallback for extensions that are not recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Remote web page fetched over HTTP(S)
    Url,
    /// PDF document, read page by page
    Pdf,
    /// Word document, read paragraph by paragraph
    Docx,
    /// Comma-separated values, read row by row
    Csv,
    /// Text, markdown, JSON, HTML or anything unrecognised
    PlainText,
}

impl SourceKind {
    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Url => "url",
            SourceKind::Pdf => "pdf",
            SourceKind::Docx => "docx",
            SourceKind::Csv => "csv",
            SourceKind::PlainText => "text",
        }
    }

    /// Map a lower-cased file extension to its kind
    ///
    /// Returns `None` for extensions with no dedicated mapping; callers fall
    /// back to [`SourceKind::PlainText`].
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => Some(SourceKind::Pdf),
            "docx" => Some(SourceKind::Docx),
            "csv" => Some(SourceKind::Csv),
            "txt" | "md" | "json" | "html" | "htm" => Some(SourceKind::PlainText),
            _ => None,
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
