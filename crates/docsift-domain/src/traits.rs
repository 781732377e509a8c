//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the pipeline and the
//! infrastructure that reads documents or talks to a model.

use crate::source::InputReference;

/// Trait for turning one source into plain text
///
/// Implemented by the infrastructure layer (docsift-extractor), one
/// implementation per [`SourceKind`](crate::SourceKind).
pub trait TextExtractor {
    /// Error type for extraction operations
    type Error;

    /// Produce the text content of `source`
    fn extract(&self, source: &InputReference) -> Result<String, Self::Error>;
}

/// A single prompt for a completion backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    /// System instruction framing the assistant's role
    pub system: String,

    /// User prompt: instruction followed by the content
    pub prompt: String,

    /// Upper bound on generated tokens
    pub max_tokens: u32,
}

/// Trait for LLM completion backends
///
/// Implemented by the infrastructure layer (docsift-llm)
pub trait CompletionProvider {
    /// Error type for completion operations
    type Error;

    /// Generate a completion for one request
    fn complete(&self, request: &CompletionRequest) -> Result<String, Self::Error>;
}
