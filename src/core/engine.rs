//! Retrieval engine: ingestion and query orchestration.
//!
//! `ingest` runs the chunking pipeline, embeds the batch, writes the
//! durable records, and only then advances the in-memory corpus in a
//! single critical section. `retrieve` embeds the query in the same
//! normalized space, searches the corpus, and joins survivors against
//! their provenance records. Retrieval never surfaces an error: every
//! failure degrades to the empty-context result so the caller can
//! still invoke answer generation.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Instant;

use chrono::Utc;

use crate::core::config::Config;
use crate::core::embed::{l2_normalize, EmbeddingProvider};
use crate::core::error::{Result, SemaError};
use crate::core::index::CorpusIndex;
use crate::core::store::DocumentStore;
use crate::core::text;
use crate::core::types::{
    ChunkRecord, DocumentMeta, DocumentStats, IngestReceipt, RetrievedChunk,
};

/// Semantic retrieval engine over an in-memory corpus
pub struct RetrievalEngine {
    embedder: Arc<dyn EmbeddingProvider>,
    store: Arc<dyn DocumentStore>,

    /// The paired index/provenance structure; one lock guards both
    /// so a search can never observe them at different lengths
    corpus: RwLock<CorpusIndex>,

    max_chunk_chars: usize,
    default_k: usize,
    max_k: usize,
}

impl RetrievalEngine {
    /// Create an engine wired to its collaborators.
    ///
    /// The corpus dimension is taken from the embedding provider:
    /// query and corpus vectors must live in the same space.
    pub fn new(
        config: &Config,
        embedder: Arc<dyn EmbeddingProvider>,
        store: Arc<dyn DocumentStore>,
    ) -> Self {
        let dimension = embedder.dimension();
        Self {
            embedder,
            store,
            corpus: RwLock::new(CorpusIndex::new(dimension)),
            max_chunk_chars: config.chunking.max_chunk_chars,
            default_k: config.retrieval.default_k,
            max_k: config.retrieval.max_k,
        }
    }

    /// Ingest one document's extracted text.
    ///
    /// Chunking that produces nothing (empty or punctuation-free
    /// whitespace input) is a no-op success. On any embedding or
    /// durable-store failure, the in-memory corpus is left exactly as
    /// it was.
    pub async fn ingest(&self, document_text: &str, meta: DocumentMeta) -> Result<IngestReceipt> {
        let start = Instant::now();

        let chunks = text::chunk_text(document_text, self.max_chunk_chars);
        if chunks.is_empty() {
            tracing::debug!(filename = %meta.filename, "document produced no chunks");
            return Ok(IngestReceipt {
                document_id: None,
                chunks_added: 0,
                duration_ms: start.elapsed().as_millis() as u64,
            });
        }

        // One batch call; the provider must return vectors in input
        // order
        let mut embeddings = self.embedder.embed(&chunks).await?;
        if embeddings.len() != chunks.len() {
            return Err(SemaError::EmbeddingFailed(format!(
                "provider returned {} vectors for {} chunks",
                embeddings.len(),
                chunks.len()
            )));
        }

        // Validate dimensions before any write, durable or in-memory,
        // so a bad batch cannot leave the two sides disagreeing
        let dimension = self.read_corpus()?.dimension();
        for embedding in &embeddings {
            if embedding.len() != dimension {
                return Err(SemaError::DimensionMismatch {
                    expected: dimension,
                    actual: embedding.len(),
                });
            }
        }
        for embedding in &mut embeddings {
            l2_normalize(embedding);
        }

        // Durable writes first; the in-memory corpus must never run
        // ahead of the store
        let document_id = self.store.store_document(&meta).await?;

        let now = Utc::now();
        let total_chunks = chunks.len();
        let records: Vec<ChunkRecord> = chunks
            .into_iter()
            .enumerate()
            .map(|(chunk_index, chunk)| ChunkRecord {
                document_id,
                filename: meta.filename.clone(),
                chunk_index,
                total_chunks,
                chunk_size: chunk.chars().count(),
                added_at: now,
                text: chunk,
            })
            .collect();

        self.store.store_chunks(document_id, &records).await?;

        // Single critical section over the pair; extend is
        // both-or-neither
        self.write_corpus()?.extend(&embeddings, records)?;

        let duration_ms = start.elapsed().as_millis() as u64;
        tracing::info!(
            document_id = %document_id,
            filename = %meta.filename,
            chunks = total_chunks,
            duration_ms,
            "ingested document"
        );

        Ok(IngestReceipt {
            document_id: Some(document_id),
            chunks_added: total_chunks,
            duration_ms,
        })
    }

    /// Retrieve the top-`k` most relevant chunks for a query.
    ///
    /// Returns the formatted context string and the parallel ranked
    /// result list. An empty corpus yields `("", [])`, and so does any
    /// internal failure — logged, never propagated.
    pub async fn retrieve(&self, query: &str, k: Option<usize>) -> (String, Vec<RetrievedChunk>) {
        match self.retrieve_inner(query, k).await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(error = %e, "retrieval failed, degrading to empty context");
                (String::new(), Vec::new())
            }
        }
    }

    async fn retrieve_inner(
        &self,
        query: &str,
        k: Option<usize>,
    ) -> Result<(String, Vec<RetrievedChunk>)> {
        // Empty-corpus short-circuit, before spending an embedding
        // call
        if self.read_corpus()?.is_empty() {
            tracing::debug!("retrieve on empty corpus");
            return Ok((String::new(), Vec::new()));
        }

        let k_limit = k.unwrap_or(self.default_k).clamp(1, self.max_k);

        // Same provider and normalization as ingestion
        let mut batch = self.embedder.embed(&[query.to_string()]).await?;
        let mut query_vector = batch
            .pop()
            .ok_or_else(|| SemaError::EmbeddingFailed("provider returned no vector".to_string()))?;
        l2_normalize(&mut query_vector);

        let corpus = self.read_corpus()?;
        let hits = corpus.search(&query_vector, k_limit)?;

        let mut items = Vec::with_capacity(hits.len());
        for (position, distance) in hits {
            // Defensive join: a position past the record sequence is
            // stale, skip it
            match corpus.record(position) {
                Some(record) => items.push(RetrievedChunk {
                    text: record.text.clone(),
                    distance,
                    filename: record.filename.clone(),
                    document_id: record.document_id,
                    chunk_index: record.chunk_index,
                }),
                None => {
                    tracing::warn!(position, "index returned stale position, skipping");
                }
            }
        }
        drop(corpus);

        let formatted_context = items
            .iter()
            .map(|item| format!("From {}:\n{}", item.filename, item.text))
            .collect::<Vec<_>>()
            .join("\n\n");

        tracing::debug!(results = items.len(), k = k_limit, "retrieval complete");
        Ok((formatted_context, items))
    }

    /// Number of chunks currently indexed
    pub fn chunk_count(&self) -> usize {
        self.read_corpus().map(|c| c.len()).unwrap_or(0)
    }

    /// Whether anything has been ingested yet
    pub fn is_empty(&self) -> bool {
        self.chunk_count() == 0
    }

    /// Aggregate statistics from the document store
    pub async fn stats(&self) -> Result<DocumentStats> {
        self.store.document_stats().await
    }

    fn read_corpus(&self) -> Result<RwLockReadGuard<'_, CorpusIndex>> {
        self.corpus
            .read()
            .map_err(|_| SemaError::Internal("corpus lock poisoned".to_string()))
    }

    fn write_corpus(&self) -> Result<RwLockWriteGuard<'_, CorpusIndex>> {
        self.corpus
            .write()
            .map_err(|_| SemaError::Internal("corpus lock poisoned".to_string()))
    }
}
