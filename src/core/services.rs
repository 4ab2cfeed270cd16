//! Unified service container for sema
//!
//! Provides shared access to the engine and configuration.

use std::sync::Arc;

use crate::core::config::Config;
use crate::core::embed::EmbeddingProvider;
use crate::core::engine::RetrievalEngine;
use crate::core::store::{DocumentStore, MemoryDocumentStore};

/// Unified services container
///
/// The process hosting the engine constructs this once and passes it
/// by reference; there is no hidden global state.
#[derive(Clone)]
pub struct Services {
    /// The retrieval engine (ingest + retrieve entry points)
    pub engine: Arc<RetrievalEngine>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services with an in-memory document store
    pub fn new(config: Config, embedder: Arc<dyn EmbeddingProvider>) -> Self {
        let store = Arc::new(MemoryDocumentStore::new());
        Self::with_store(config, embedder, store)
    }

    /// Create services with an explicit document store (e.g. a
    /// database-backed implementation)
    pub fn with_store(
        config: Config,
        embedder: Arc<dyn EmbeddingProvider>,
        store: Arc<dyn DocumentStore>,
    ) -> Self {
        let engine = Arc::new(RetrievalEngine::new(&config, embedder, store));

        Self {
            engine,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Result;
    use async_trait::async_trait;

    struct NullEmbedder;

    #[async_trait]
    impl EmbeddingProvider for NullEmbedder {
        async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
            Ok(texts.iter().map(|_| vec![0.0; 4]).collect())
        }

        fn dimension(&self) -> usize {
            4
        }

        fn model_name(&self) -> &str {
            "null"
        }
    }

    #[test]
    fn test_services_creation() {
        let services = Services::new(Config::default(), Arc::new(NullEmbedder));
        assert!(services.engine.is_empty());
        assert_eq!(services.config.retrieval.default_k, 5);
    }

    #[test]
    fn test_services_clone_shares_engine() {
        let services = Services::new(Config::default(), Arc::new(NullEmbedder));
        let cloned = services.clone();

        assert!(Arc::ptr_eq(&services.engine, &cloned.engine));
        assert!(Arc::ptr_eq(&services.config, &cloned.config));
    }
}
