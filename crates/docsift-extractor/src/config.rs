//! Configuration for extraction and chunking

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the extractor and chunker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Timeout for fetching a web page (seconds)
    pub fetch_timeout_secs: u64,

    /// Maximum chunk size (characters)
    pub max_chunk_size: usize,

    /// Characters carried over from the end of one chunk into the next
    pub chunk_overlap: usize,

    /// Corpora longer than this (characters) are chunked
    pub chunk_threshold: usize,
}

impl ExtractorConfig {
    /// Get the fetch timeout as a Duration
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.fetch_timeout_secs == 0 {
            return Err("fetch_timeout_secs must be greater than 0".to_string());
        }
        if self.max_chunk_size == 0 {
            return Err("max_chunk_size must be greater than 0".to_string());
        }
        if self.chunk_overlap >= self.max_chunk_size {
            return Err("chunk_overlap must be smaller than max_chunk_size".to_string());
        }
        if self.chunk_threshold == 0 {
            return Err("chunk_threshold must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_secs: 10,
            max_chunk_size: 2000,
            chunk_overlap: 200,
            chunk_threshold: 4000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExtractorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.fetch_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_invalid_overlap() {
        let config = ExtractorConfig {
            chunk_overlap: 2000,
            ..ExtractorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_zero_values() {
        let mut config = ExtractorConfig::default();
        config.fetch_timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = ExtractorConfig::default();
        config.chunk_threshold = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ExtractorConfig::from_toml("max_chunk_size = 500\nchunk_overlap = 50").unwrap();
        assert_eq!(config.max_chunk_size, 500);
        assert_eq!(config.chunk_overlap, 50);
        assert_eq!(config.chunk_threshold, 4000);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ExtractorConfig::default();
        let parsed = ExtractorConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(config, parsed);
    }
}
