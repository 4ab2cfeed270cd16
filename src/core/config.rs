//! Configuration management for the sema retrieval engine.
//!
//! Loads configuration from a TOML file and environment variables,
//! with sensible defaults for all settings.

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SemaError};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub chunking: ChunkingConfig,
    #[serde(default)]
    pub embedding: EmbeddingConfig,
    #[serde(default)]
    pub retrieval: RetrievalConfig,
}

/// Chunking configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChunkingConfig {
    /// Maximum characters per chunk (not bytes). A single sentence
    /// longer than this still becomes one oversized chunk.
    #[serde(default = "default_max_chunk_chars")]
    pub max_chunk_chars: usize,
}

/// Embedding provider configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmbeddingConfig {
    /// Vector dimensionality the provider produces
    #[serde(default = "default_dimension")]
    pub dimension: usize,

    /// Model identifier sent to the provider
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of an OpenAI-compatible embeddings endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Retrieval configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RetrievalConfig {
    /// Default number of chunks to retrieve
    #[serde(default = "default_k")]
    pub default_k: usize,

    /// Maximum chunks per query
    #[serde(default = "default_max_k")]
    pub max_k: usize,
}

// Default value functions
fn default_max_chunk_chars() -> usize {
    800
}

fn default_dimension() -> usize {
    384
}

fn default_model() -> String {
    "all-MiniLM-L6-v2".to_string()
}

fn default_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_k() -> usize {
    5
}

fn default_max_k() -> usize {
    50
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            max_chunk_chars: default_max_chunk_chars(),
        }
    }
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            dimension: default_dimension(),
            model: default_model(),
            base_url: default_base_url(),
        }
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            default_k: default_k(),
            max_k: default_max_k(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| SemaError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// The TOML file is taken from `SEMA_CONFIG` if set, otherwise
    /// `./sema.toml` if present, otherwise defaults apply.
    pub fn load() -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("SEMA_CONFIG") {
            Self::from_file(config_path)?
        } else if Path::new("sema.toml").exists() {
            Self::from_file("sema.toml")?
        } else {
            Self::default()
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(max_chars) = env::var("SEMA_MAX_CHUNK_CHARS") {
            if let Ok(n) = max_chars.parse() {
                self.chunking.max_chunk_chars = n;
            }
        }
        if let Ok(dimension) = env::var("SEMA_EMBED_DIMENSION") {
            if let Ok(d) = dimension.parse() {
                self.embedding.dimension = d;
            }
        }
        if let Ok(model) = env::var("SEMA_EMBED_MODEL") {
            self.embedding.model = model;
        }
        if let Ok(base_url) = env::var("SEMA_EMBED_BASE_URL") {
            self.embedding.base_url = base_url;
        }
        if let Ok(default_k) = env::var("SEMA_DEFAULT_K") {
            if let Ok(k) = default_k.parse() {
                self.retrieval.default_k = k;
            }
        }
        if let Ok(max_k) = env::var("SEMA_MAX_K") {
            if let Ok(k) = max_k.parse() {
                self.retrieval.max_k = k;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.chunking.max_chunk_chars == 0 {
            return Err(SemaError::ConfigError(
                "Max chunk chars must be non-zero".to_string(),
            ));
        }

        if self.embedding.dimension == 0 {
            return Err(SemaError::ConfigError(
                "Embedding dimension must be non-zero".to_string(),
            ));
        }

        if self.retrieval.default_k == 0 {
            return Err(SemaError::ConfigError(
                "Default k must be non-zero".to_string(),
            ));
        }

        if self.retrieval.default_k > self.retrieval.max_k {
            return Err(SemaError::ConfigError(
                "Default k cannot exceed max k".to_string(),
            ));
        }

        Ok(())
    }

    /// Log the effective configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Max chunk chars: {}", self.chunking.max_chunk_chars);
        tracing::info!("  Embedding model: {}", self.embedding.model);
        tracing::info!("  Embedding dimension: {}", self.embedding.dimension);
        tracing::info!("  Embedding endpoint: {}", self.embedding.base_url);
        tracing::info!("  Default k: {}", self.retrieval.default_k);
        tracing::info!("  Max k: {}", self.retrieval.max_k);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.chunking.max_chunk_chars, 800);
        assert_eq!(config.embedding.dimension, 384);
        assert_eq!(config.retrieval.default_k, 5);
        assert_eq!(config.retrieval.max_k, 50);
    }

    #[test]
    fn test_config_validation_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_zero_chunk_chars() {
        let mut config = Config::default();
        config.chunking.max_chunk_chars = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_k_exceeds_max() {
        let mut config = Config::default();
        config.retrieval.default_k = 100;
        config.retrieval.max_k = 10;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_deserialization() {
        let toml = r#"
            [chunking]
            max_chunk_chars = 400

            [embedding]
            dimension = 768
            model = "bge-base-en"
            base_url = "http://embedder:9000"

            [retrieval]
            default_k = 3
            max_k = 20
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.chunking.max_chunk_chars, 400);
        assert_eq!(config.embedding.dimension, 768);
        assert_eq!(config.embedding.model, "bge-base-en");
        assert_eq!(config.retrieval.default_k, 3);
        assert_eq!(config.retrieval.max_k, 20);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("[chunking]\nmax_chunk_chars = 200\n").unwrap();
        assert_eq!(config.chunking.max_chunk_chars, 200);
        assert_eq!(config.embedding.dimension, 384);
        assert_eq!(config.retrieval.default_k, 5);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[retrieval]\ndefault_k = 7\nmax_k = 30").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.retrieval.default_k, 7);
        assert_eq!(config.retrieval.max_k, 30);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = Config::from_file("/nonexistent/sema.toml").unwrap_err();
        assert!(err.is_bad_request());
    }
}
