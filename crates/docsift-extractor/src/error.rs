//! Error types for extraction and chunking

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while extracting text from one source
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Local path does not exist
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Reading a local file failed
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Request could not be sent or the body could not be read
    #[error("HTTP error for {url}: {message}")]
    Http {
        /// Requested URL
        url: String,
        /// Transport error description
        message: String,
    },

    /// Server answered with a non-success status
    #[error("HTTP status {status} for {url}")]
    HttpStatus {
        /// Requested URL
        url: String,
        /// Status code returned
        status: u16,
    },

    /// PDF could not be parsed
    #[error("PDF error in {}: {message}", path.display())]
    Pdf {
        /// Offending file
        path: PathBuf,
        /// Parser error description
        message: String,
    },

    /// DOCX could not be parsed
    #[error("DOCX error in {}: {message}", path.display())]
    Docx {
        /// Offending file
        path: PathBuf,
        /// Parser error description
        message: String,
    },

    /// CSV could not be parsed
    #[error("CSV error in {}: {message}", path.display())]
    Csv {
        /// Offending file
        path: PathBuf,
        /// Parser error description
        message: String,
    },

    /// Extraction succeeded but produced no text
    #[error("No text extracted from {0}")]
    Empty(String),

    /// Extractor could not be constructed
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Errors from invalid chunking parameters
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChunkError {
    /// Maximum chunk size must be positive
    #[error("max_chunk_size must be greater than 0")]
    ZeroChunkSize,

    /// Overlap must be strictly smaller than the chunk size
    #[error("chunk_overlap ({overlap}) must be smaller than max_chunk_size ({max})")]
    OverlapTooLarge {
        /// Requested overlap
        overlap: usize,
        /// Requested maximum chunk size
        max: usize,
    },
}
