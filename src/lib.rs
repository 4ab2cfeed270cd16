//! sema - Semantic Retrieval Engine for Document Question Answering
//!
//! Splits ingested documents into bounded chunks, embeds them through
//! a provider-agnostic trait, maintains a flat in-memory vector index
//! paired with provenance metadata, and returns the top-k most
//! relevant chunks for a query.
//!
//! # Architecture
//!
//! Everything lives under the protocol-agnostic **core** module:
//! config, error, types, text (sanitize/segment/assemble), embed
//! (provider seam + normalization), index (flat k-NN + paired
//! corpus), store (durable record seam), engine (ingest/retrieve
//! orchestration), and services (container).
//!
//! # Entry points
//!
//! The conversation layer builds on exactly two operations:
//!
//! - [`RetrievalEngine::ingest`] — chunk, embed, and index one
//!   document's text
//! - [`RetrievalEngine::retrieve`] — ranked context plus provenance
//!   for a query; degrades to empty context instead of failing
//!
//! # Key properties
//!
//! - Chunk boundaries are deterministic and character-budgeted
//! - Index and provenance records always have equal length (a single
//!   type owns both)
//! - Query and corpus vectors are L2-normalized in the same space
//!
//! [`RetrievalEngine::ingest`]: crate::core::engine::RetrievalEngine::ingest
//! [`RetrievalEngine::retrieve`]: crate::core::engine::RetrievalEngine::retrieve

pub mod core;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::embed::{EmbeddingProvider, OpenAiEmbeddings};
pub use crate::core::engine::RetrievalEngine;
pub use crate::core::error::{Result, SemaError};
pub use crate::core::services::Services;
pub use crate::core::store::{DocumentStore, MemoryDocumentStore};
pub use crate::core::types::*;
