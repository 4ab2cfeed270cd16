//! Error types and error handling for the sema retrieval engine.
//!
//! This module defines the error types used throughout the crate.
//! Retrieval-time degradation (empty corpus, stale index positions)
//! is deliberately *not* represented here: those conditions degrade
//! to an empty result at the engine boundary instead of erroring.

use thiserror::Error;

/// Result type alias for sema operations
pub type Result<T> = std::result::Result<T, SemaError>;

/// Main error type for the sema retrieval engine
#[derive(Error, Debug)]
pub enum SemaError {
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("Text extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("Embedding failed: {0}")]
    EmbeddingFailed(String),

    #[error("Vector dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Document store error: {0}")]
    StoreError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl SemaError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a bad request error (invalid caller input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            SemaError::UnsupportedFormat(_)
                | SemaError::ExtractionFailed(_)
                | SemaError::ConfigError(_)
        )
    }

    /// Check if this is a capability error (an external collaborator
    /// failed; ingestion must be rolled back, nothing committed)
    pub fn is_capability_error(&self) -> bool {
        matches!(
            self,
            SemaError::EmbeddingFailed(_) | SemaError::StoreError(_)
        )
    }

    /// Check if this is a structural contract violation (fail fast,
    /// but never corrupt already-committed state)
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            SemaError::DimensionMismatch { .. } | SemaError::Internal(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_is_bad_request() {
        let err = SemaError::UnsupportedFormat("application/zip".to_string());
        assert!(err.is_bad_request());
        assert!(!err.is_capability_error());
        assert!(!err.is_contract_violation());
    }

    #[test]
    fn test_embedding_failure_is_capability_error() {
        let err = SemaError::EmbeddingFailed("connection refused".to_string());
        assert!(err.is_capability_error());
        assert!(!err.is_bad_request());
    }

    #[test]
    fn test_dimension_mismatch_is_contract_violation() {
        let err = SemaError::DimensionMismatch {
            expected: 384,
            actual: 512,
        };
        assert!(err.is_contract_violation());
        assert!(err.message().contains("384"));
        assert!(err.message().contains("512"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = SemaError::from(io_err);
        assert!(!err.is_bad_request());
    }

    #[test]
    fn test_error_message() {
        let err = SemaError::StoreError("write timed out".to_string());
        assert!(err.message().contains("write timed out"));
    }
}
