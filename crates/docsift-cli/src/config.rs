//! Configuration management for the CLI.
//!
//! Settings come from an optional TOML file; the API key may also come from
//! the `OPENAI_API_KEY` environment variable (populated from `.env` by the
//! binary), which takes precedence over the file.

use crate::error::{CliError, Result};
use docsift_extractor::ExtractorConfig;
use docsift_llm::openai::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use docsift_llm::prompt::{DEFAULT_MAX_TOKENS, DEFAULT_SYSTEM_PROMPT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Completion backend settings
    pub llm: LlmSettings,

    /// Extraction and chunking settings
    pub extractor: ExtractorConfig,
}

/// Completion backend settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    /// API key; overridden by `OPENAI_API_KEY`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Chat model name
    pub model: String,

    /// Base URL of an OpenAI-compatible API
    pub base_url: String,

    /// Maximum generated tokens per request
    pub max_tokens: u32,

    /// System message sent with every request
    pub system_prompt: String,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }
}

impl Config {
    /// Parse configuration from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&contents)
    }

    /// Load the file if given, apply the environment key, and validate.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        let config = config.with_env_api_key(std::env::var(API_KEY_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    /// Replace the API key with `env_value` when it is set and non-blank.
    pub fn with_env_api_key(mut self, env_value: Option<String>) -> Self {
        if let Some(key) = env_value.filter(|k| !k.trim().is_empty()) {
            self.llm.api_key = Some(key);
        }
        self
    }

    /// The API key, or [`CliError::MissingCredential`].
    pub fn api_key(&self) -> Result<&str> {
        self.llm
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(CliError::MissingCredential)
    }

    /// Validate the configuration, including presence of the API key.
    pub fn validate(&self) -> Result<()> {
        self.api_key()?;
        if self.llm.model.trim().is_empty() {
            return Err(CliError::Config("llm.model must not be empty".to_string()));
        }
        if self.llm.max_tokens == 0 {
            return Err(CliError::Config("llm.max_tokens must be greater than 0".to_string()));
        }
        self.extractor.validate().map_err(CliError::Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.llm.model, "gpt-3.5-turbo");
        assert_eq!(config.llm.max_tokens, 1000);
        assert_eq!(config.extractor.max_chunk_size, 2000);
        assert_eq!(config.extractor.chunk_threshold, 4000);
    }

    #[test]
    fn test_missing_api_key() {
        let config = Config::default().with_env_api_key(None);
        assert!(matches!(config.api_key(), Err(CliError::MissingCredential)));
        assert!(matches!(config.validate(), Err(CliError::MissingCredential)));
    }

    #[test]
    fn test_blank_env_key_is_ignored() {
        let config = Config::default().with_env_api_key(Some("  ".to_string()));
        assert!(config.api_key().is_err());
    }

    #[test]
    fn test_env_key_overrides_file() {
        let config = Config::from_toml("[llm]\napi_key = \"from-file\"\n").unwrap();
        assert_eq!(config.api_key().unwrap(), "from-file");

        let config = config.with_env_api_key(Some("from-env".to_string()));
        assert_eq!(config.api_key().unwrap(), "from-env");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_toml(
            "[llm]\nmodel = \"gpt-4o-mini\"\n\n[extractor]\nchunk_threshold = 8000\n",
        )
        .unwrap();
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.llm.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.extractor.chunk_threshold, 8000);
        assert_eq!(config.extractor.chunk_overlap, 200);
    }

    #[test]
    fn test_invalid_extractor_settings_rejected() {
        let config = Config::from_toml("[extractor]\nmax_chunk_size = 100\nchunk_overlap = 100\n")
            .unwrap()
            .with_env_api_key(Some("key".to_string()));
        assert!(matches!(config.validate(), Err(CliError::Config(_))));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docsift.toml");
        fs::write(&path, "[llm]\nmax_tokens = 500\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.llm.max_tokens, 500);

        assert!(matches!(
            Config::from_file(&dir.path().join("missing.toml")),
            Err(CliError::Config(_))
        ));
    }
}
