//! docsift Domain Layer
//!
//! Shared vocabulary for the docsift workspace. This crate defines the value
//! types that flow through the pipeline and the trait seams that the
//! infrastructure crates implement.
//!
//! ## Key Concepts
//!
//! - **InputReference**: a file path or URL supplied by the caller
//! - **SourceKind**: which extractor handles a reference
//! - **ExtractedDocument**: text produced from one reference
//! - **Corpus**: every extracted document joined in input order
//! - **CompletionRequest**: one prompt sent to a completion backend
//!
//! ## Architecture
//!
//! ```text
//! InputReference → TextExtractor → ExtractedDocument → Corpus → CompletionProvider
//! ```
//!
//! Extractor implementations live in `docsift-extractor`, completion
//! providers in `docsift-llm`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod source;
pub mod traits;

// Re-exports for convenience
pub use document::{Corpus, ExtractedDocument, DOCUMENT_SEPARATOR};
pub use source::{InputReference, SourceKind};
pub use traits::{CompletionProvider, CompletionRequest, TextExtractor};
