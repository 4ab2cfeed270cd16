//! Durable document/chunk store seam.
//!
//! The retrieval core treats durable persistence as an external
//! collaborator: ingestion writes document and chunk records through
//! [`DocumentStore`] before advancing the in-memory index.
//! [`MemoryDocumentStore`] is the in-process implementation — an
//! explicitly constructed service object owned by whoever hosts the
//! engine, not a hidden module-level singleton.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use crate::core::error::{Result, SemaError};
use crate::core::types::{
    ChunkId, ChunkRecord, DocumentId, DocumentMeta, DocumentRecord, DocumentStats,
};

/// Durable metadata/document store consumed at ingestion time
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Record a new document; returns its assigned id
    async fn store_document(&self, meta: &DocumentMeta) -> Result<DocumentId>;

    /// Record a document's chunk batch; returns assigned chunk ids in
    /// input order
    async fn store_chunks(
        &self,
        document_id: DocumentId,
        chunks: &[ChunkRecord],
    ) -> Result<Vec<ChunkId>>;

    /// Aggregate statistics over everything stored
    async fn document_stats(&self) -> Result<DocumentStats>;

    /// Look up a document by id
    async fn document(&self, id: DocumentId) -> Result<Option<DocumentRecord>>;

    /// All chunk records belonging to a document, in chunk order.
    /// Unknown ids yield an empty vector.
    async fn chunks_for_document(&self, id: DocumentId) -> Result<Vec<ChunkRecord>>;
}

/// In-memory document store
#[derive(Default)]
pub struct MemoryDocumentStore {
    inner: RwLock<StoreState>,
}

#[derive(Default)]
struct StoreState {
    documents: HashMap<DocumentId, DocumentRecord>,
    chunks: HashMap<ChunkId, ChunkRecord>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, StoreState>> {
        self.inner
            .read()
            .map_err(|_| SemaError::Internal("document store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, StoreState>> {
        self.inner
            .write()
            .map_err(|_| SemaError::Internal("document store lock poisoned".to_string()))
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn store_document(&self, meta: &DocumentMeta) -> Result<DocumentId> {
        let id = DocumentId::new();
        let record = DocumentRecord {
            id,
            meta: meta.clone(),
            uploaded_at: Utc::now(),
        };

        self.write()?.documents.insert(id, record);
        tracing::info!(document_id = %id, filename = %meta.filename, "stored document");
        Ok(id)
    }

    async fn store_chunks(
        &self,
        document_id: DocumentId,
        chunks: &[ChunkRecord],
    ) -> Result<Vec<ChunkId>> {
        let mut state = self.write()?;
        let mut ids = Vec::with_capacity(chunks.len());
        for chunk in chunks {
            let id = ChunkId::new();
            state.chunks.insert(id, chunk.clone());
            ids.push(id);
        }

        tracing::info!(
            document_id = %document_id,
            count = ids.len(),
            "stored chunk records"
        );
        Ok(ids)
    }

    async fn document_stats(&self) -> Result<DocumentStats> {
        let state = self.read()?;

        let total_size_bytes = state.documents.values().map(|d| d.meta.size_bytes).sum();
        let mut formats: Vec<String> = state
            .documents
            .values()
            .map(|d| d.meta.format.as_str().to_string())
            .collect::<std::collections::HashSet<_>>()
            .into_iter()
            .collect();
        formats.sort();

        Ok(DocumentStats {
            total_documents: state.documents.len(),
            total_chunks: state.chunks.len(),
            total_size_bytes,
            formats,
        })
    }

    async fn document(&self, id: DocumentId) -> Result<Option<DocumentRecord>> {
        Ok(self.read()?.documents.get(&id).cloned())
    }

    async fn chunks_for_document(&self, id: DocumentId) -> Result<Vec<ChunkRecord>> {
        let state = self.read()?;
        let mut chunks: Vec<ChunkRecord> = state
            .chunks
            .values()
            .filter(|c| c.document_id == id)
            .cloned()
            .collect();
        chunks.sort_by_key(|c| c.chunk_index);
        Ok(chunks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::extract::DocumentFormat;

    fn meta(filename: &str, format: DocumentFormat, size: u64) -> DocumentMeta {
        DocumentMeta {
            filename: filename.to_string(),
            format,
            size_bytes: size,
            units: None,
        }
    }

    fn chunk(document_id: DocumentId, index: usize, text: &str) -> ChunkRecord {
        ChunkRecord {
            document_id,
            filename: "doc.txt".to_string(),
            chunk_index: index,
            total_chunks: 2,
            chunk_size: text.chars().count(),
            added_at: Utc::now(),
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn test_store_and_fetch_document() {
        let store = MemoryDocumentStore::new();
        let id = store
            .store_document(&meta("a.txt", DocumentFormat::PlainText, 100))
            .await
            .unwrap();

        let record = store.document(id).await.unwrap().unwrap();
        assert_eq!(record.meta.filename, "a.txt");
    }

    #[tokio::test]
    async fn test_unknown_document_is_none() {
        let store = MemoryDocumentStore::new();
        assert!(store.document(DocumentId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_chunks_sorted_by_index() {
        let store = MemoryDocumentStore::new();
        let id = store
            .store_document(&meta("a.txt", DocumentFormat::PlainText, 10))
            .await
            .unwrap();

        store
            .store_chunks(id, &[chunk(id, 1, "second"), chunk(id, 0, "first")])
            .await
            .unwrap();

        let chunks = store.chunks_for_document(id).await.unwrap();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].text, "first");
        assert_eq!(chunks[1].text, "second");
    }

    #[tokio::test]
    async fn test_chunks_for_unknown_document_empty() {
        let store = MemoryDocumentStore::new();
        let chunks = store.chunks_for_document(DocumentId::new()).await.unwrap();
        assert!(chunks.is_empty());
    }

    #[tokio::test]
    async fn test_stats_aggregation() {
        let store = MemoryDocumentStore::new();
        let a = store
            .store_document(&meta("a.txt", DocumentFormat::PlainText, 100))
            .await
            .unwrap();
        let b = store
            .store_document(&meta("b.csv", DocumentFormat::Csv, 50))
            .await
            .unwrap();

        store.store_chunks(a, &[chunk(a, 0, "x")]).await.unwrap();
        store
            .store_chunks(b, &[chunk(b, 0, "y"), chunk(b, 1, "z")])
            .await
            .unwrap();

        let stats = store.document_stats().await.unwrap();
        assert_eq!(stats.total_documents, 2);
        assert_eq!(stats.total_chunks, 3);
        assert_eq!(stats.total_size_bytes, 150);
        assert_eq!(stats.formats, vec!["csv".to_string(), "text".to_string()]);
    }
}
