//! docsift Extractor
//!
//! Turns input references (local files and web pages) into plain text, and
//! splits long text into bounded, overlapping chunks.
//!
//! # Architecture
//!
//! ```text
//! InputReference → SourceRouter → {Url, Pdf, Docx, Csv, PlainText}Extractor → ExtractedDocument
//! Corpus text → TextChunker → Vec<Chunk>
//! ```
//!
//! # Key Features
//!
//! - **Explicit dispatch**: a fixed extension table with a plain-text fallback
//! - **Explicit failures**: every extractor returns [`ExtractError`] rather than
//!   an empty value, so callers decide whether to skip or abort
//! - **Boundary-aware chunking**: cuts prefer paragraphs, then lines, then words
//!
//! # Example Usage
//!
//! ```no_run
//! use docsift_domain::InputReference;
//! use docsift_extractor::{ExtractorConfig, SourceRouter, TextChunker};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ExtractorConfig::default();
//! let router = SourceRouter::new(&config)?;
//!
//! let doc = router.route(&InputReference::new("report.pdf"))?;
//! let chunks = TextChunker::from_config(&config)?.chunk(&doc.text);
//! println!("{} chunks", chunks.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod chunking;
mod config;
mod error;
mod router;
pub mod sources;


pub use chunking::{Chunk, TextChunker};
pub use config::ExtractorConfig;
pub use error::{ChunkError, ExtractError};
pub use router::{BoxedExtractor, Route, SourceRouter};
