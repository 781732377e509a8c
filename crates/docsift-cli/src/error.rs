//! Error types for the CLI application.

use docsift_extractor::{ChunkError, ExtractError};
use docsift_llm::LlmError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// No API key in the environment, `.env` or config file
    #[error(
        "OpenAI API key not found. Please set the OPENAI_API_KEY environment variable.\n\
         Create a .env file in the current directory with: OPENAI_API_KEY=your_key_here"
    )]
    MissingCredential,

    /// Every input failed to extract
    #[error("No content could be extracted from the provided inputs.")]
    NoContent,

    /// Extractor setup error
    #[error("Extractor error: {0}")]
    Extract(#[from] ExtractError),

    /// Invalid chunking parameters
    #[error("Chunking error: {0}")]
    Chunk(#[from] ChunkError),

    /// Completion backend error
    #[error("Error calling LLM API: {0}")]
    Llm(#[from] LlmError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
