//! Completion client: one prompt in, one completion out

use crate::prompt::{build_prompt, DEFAULT_MAX_TOKENS, DEFAULT_SYSTEM_PROMPT};
use crate::LlmError;
use docsift_domain::traits::{CompletionProvider, CompletionRequest};
use tracing::debug;

/// Wraps a provider with prompt construction and fixed request limits
///
/// Every call issues exactly one request. Errors are returned to the caller
/// untouched; there is no retry.
pub struct CompletionClient<P> {
    provider: P,
    system_prompt: String,
    max_tokens: u32,
}

impl<P> CompletionClient<P>
where
    P: CompletionProvider<Error = LlmError>,
{
    /// Create a client with the default system prompt and token limit
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Override the system prompt
    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = system_prompt.into();
        self
    }

    /// Override the maximum number of generated tokens
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// The wrapped provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Process `content` with an optional instruction
    ///
    /// With no instruction the content is summarised.
    pub fn process(&self, content: &str, instruction: Option<&str>) -> Result<String, LlmError> {
        let request = CompletionRequest {
            system: self.system_prompt.clone(),
            prompt: build_prompt(content, instruction),
            max_tokens: self.max_tokens,
        };

        debug!(
            prompt_chars = request.prompt.chars().count(),
            max_tokens = request.max_tokens,
            "Sending completion request"
        );

        self.provider.complete(&request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::DEFAULT_INSTRUCTION;
    use crate::MockProvider;

    #[test]
    fn test_process_builds_default_request() {
        let provider = MockProvider::new("summary");
        let client = CompletionClient::new(provider.clone());

        assert_eq!(client.process("text", None).unwrap(), "summary");

        let requests = provider.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].system, DEFAULT_SYSTEM_PROMPT);
        assert_eq!(requests[0].max_tokens, DEFAULT_MAX_TOKENS);
        assert!(requests[0].prompt.starts_with(DEFAULT_INSTRUCTION));
    }

    #[test]
    fn test_process_with_overrides() {
        let provider = MockProvider::new("answer");
        let client = CompletionClient::new(provider.clone())
            .with_system_prompt("Be terse.")
            .with_max_tokens(50);

        client.process("text", Some("What is this?")).unwrap();

        let request = &provider.requests()[0];
        assert_eq!(request.system, "Be terse.");
        assert_eq!(request.max_tokens, 50);
        assert_eq!(request.prompt, "What is this?\n\nContent:\ntext");
    }

    #[test]
    fn test_process_propagates_errors() {
        let mut provider = MockProvider::default();
        provider.add_error(format!("{DEFAULT_INSTRUCTION}\n\nboom"));
        let client = CompletionClient::new(provider);

        assert!(client.process("boom", None).is_err());
    }
}
