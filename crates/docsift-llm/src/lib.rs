//! docsift LLM Provider Layer
//!
//! Completion providers and the client that turns content plus an optional
//! instruction into a single completion request.
//!
//! # Architecture
//!
//! This crate provides implementations of the `CompletionProvider` trait from
//! `docsift-domain`, and [`CompletionClient`], which owns prompt construction.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `OpenAiProvider`: OpenAI-compatible chat completions API
//!
//! # Examples
//!
//! ```
//! use docsift_llm::{CompletionClient, MockProvider};
//!
//! let provider = MockProvider::new("A short summary.");
//! let client = CompletionClient::new(provider.clone());
//! let result = client.process("Some long text", None).unwrap();
//! assert_eq!(result, "A short summary.");
//! assert_eq!(provider.call_count(), 1);
//! ```

#![warn(missing_docs)]

pub mod client;
pub mod openai;
pub mod prompt;

use docsift_domain::traits::{CompletionProvider, CompletionRequest};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;

pub use client::CompletionClient;
pub use openai::OpenAiProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Credential rejected by the backend
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit or quota exceeded
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Mock LLM provider for deterministic testing
///
/// This provider returns pre-configured responses without making any network
/// calls and records every request it receives.
///
/// # Examples
///
/// ```
/// use docsift_llm::MockProvider;
/// use docsift_domain::{CompletionProvider, CompletionRequest};
///
/// let mut provider = MockProvider::new("fallback");
/// provider.add_prefix_response("Combine", "merged");
///
/// let request = |prompt: &str| CompletionRequest {
///     system: String::new(),
///     prompt: prompt.to_string(),
///     max_tokens: 10,
/// };
/// assert_eq!(provider.complete(&request("Combine these")).unwrap(), "merged");
/// assert_eq!(provider.complete(&request("Summarize")).unwrap(), "fallback");
/// assert_eq!(provider.call_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, String>>>,
    prefix_responses: Arc<Mutex<Vec<(String, String)>>>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

/// Marker stored as a response to make the mock fail for that prompt
const MOCK_ERROR: &str = "ERROR";

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            prefix_responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a specific response for an exact prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(prompt.into(), response.into());
    }

    /// Add a response for every prompt starting with `prefix`
    ///
    /// Prefixes are checked in insertion order after exact matches.
    pub fn add_prefix_response(&mut self, prefix: impl Into<String>, response: impl Into<String>) {
        self.prefix_responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((prefix.into(), response.into()));
    }

    /// Configure to return an error for a specific prompt
    pub fn add_error(&mut self, prompt: impl Into<String>) {
        self.add_response(prompt, MOCK_ERROR);
    }

    /// Get the number of times complete was called
    pub fn call_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Every request received so far, in call order
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Forget recorded requests
    pub fn reset(&self) {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn lookup(&self, prompt: &str) -> String {
        let responses = self.responses.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(response) = responses.get(prompt) {
            return response.clone();
        }

        let prefixes = self
            .prefix_responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        prefixes
            .iter()
            .find(|(prefix, _)| prompt.starts_with(prefix.as_str()))
            .map(|(_, response)| response.clone())
            .unwrap_or_else(|| self.default_response.clone())
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl CompletionProvider for MockProvider {
    type Error = LlmError;

    fn complete(&self, request: &CompletionRequest) -> Result<String, Self::Error> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());

        let response = self.lookup(&request.prompt);
        if response == MOCK_ERROR {
            return Err(LlmError::Other("Mock error".to_string()));
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(prompt: &str) -> CompletionRequest {
        CompletionRequest {
            system: "system".to_string(),
            prompt: prompt.to_string(),
            max_tokens: 100,
        }
    }

    #[test]
    fn test_mock_provider_default() {
        let provider = MockProvider::new("Test response");
        let result = provider.complete(&request("any prompt"));
        assert_eq!(result.unwrap(), "Test response");
    }

    #[test]
    fn test_mock_provider_specific_responses() {
        let mut provider = MockProvider::default();
        provider.add_response("hello", "world");
        provider.add_prefix_response("Combine", "merged");

        assert_eq!(provider.complete(&request("hello")).unwrap(), "world");
        assert_eq!(provider.complete(&request("Combine a and b")).unwrap(), "merged");
        assert_eq!(
            provider.complete(&request("unknown")).unwrap(),
            "Default mock response"
        );
    }

    #[test]
    fn test_mock_provider_records_requests() {
        let provider = MockProvider::new("test");
        assert_eq!(provider.call_count(), 0);

        provider.complete(&request("first")).unwrap();
        provider.complete(&request("second")).unwrap();

        let prompts: Vec<_> = provider.requests().into_iter().map(|r| r.prompt).collect();
        assert_eq!(prompts, vec!["first", "second"]);

        provider.reset();
        assert_eq!(provider.call_count(), 0);
    }

    #[test]
    fn test_mock_provider_error() {
        let mut provider = MockProvider::default();
        provider.add_error("bad prompt");

        let result = provider.complete(&request("bad prompt"));
        assert!(matches!(result.unwrap_err(), LlmError::Other(_)));
    }

    #[test]
    fn test_mock_provider_clone_shares_state() {
        let provider1 = MockProvider::new("test");
        let provider2 = provider1.clone();

        provider1.complete(&request("test")).unwrap();

        assert_eq!(provider1.call_count(), 1);
        assert_eq!(provider2.call_count(), 1);
    }
}
