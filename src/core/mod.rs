//! Core domain logic (transport-agnostic)
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **extract**: Document formats and the text-extraction seam
//! - **text**: Sanitizing, sentence segmentation, chunk assembly
//! - **embed**: Embedding provider seam and normalization
//! - **index**: Flat vector index and the paired corpus structure
//! - **store**: Durable document/chunk store seam
//! - **engine**: Ingestion and retrieval orchestration
//! - **answer**: Answer-generation seam for the conversation layer
//! - **services**: Unified service container

pub mod answer;
pub mod config;
pub mod embed;
pub mod engine;
pub mod error;
pub mod extract;
pub mod index;
pub mod services;
pub mod store;
pub mod text;
pub mod types;

// Re-export key types for convenience
pub use config::Config;
pub use engine::RetrievalEngine;
pub use error::{Result, SemaError};
pub use services::Services;
