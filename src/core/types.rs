//! Core data types for the sema retrieval engine.
//!
//! This module defines the data structures shared across the crate:
//! document metadata, per-chunk provenance records, retrieval results,
//! and corpus statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::extract::DocumentFormat;

/// Opaque document identifier, assigned by the document store at
/// ingestion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub Uuid);

impl DocumentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Opaque chunk identifier, assigned by the document store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkId(pub Uuid);

impl ChunkId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ChunkId {
    fn default() -> Self {
        Self::new()
    }
}

/// Caller-supplied metadata describing a document at upload time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMeta {
    /// Original filename as uploaded
    pub filename: String,

    /// Declared document format
    pub format: DocumentFormat,

    /// Size of the uploaded payload in bytes
    pub size_bytes: u64,

    /// Format-dependent unit count (pages for PDF, paragraphs for
    /// DOCX, rows for CSV), when the extractor reports one
    pub units: Option<usize>,
}

/// A document as recorded by the document store. Immutable after
/// creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Identifier assigned at ingestion
    pub id: DocumentId,

    /// Caller-supplied metadata
    pub meta: DocumentMeta,

    /// Ingestion timestamp
    pub uploaded_at: DateTime<Utc>,
}

/// Provenance record for one indexed chunk.
///
/// Stored positionally parallel to the vector index: the record at
/// position `i` describes the vector at position `i`. The chunk text
/// is kept inline so retrieval never needs a second lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkRecord {
    /// Owning document
    pub document_id: DocumentId,

    /// Owning document's filename, denormalized for provenance display
    pub filename: String,

    /// Zero-based position of this chunk within its document
    pub chunk_index: usize,

    /// Total number of chunks the document produced
    pub total_chunks: usize,

    /// Chunk length in characters
    pub chunk_size: usize,

    /// When the chunk was indexed
    pub added_at: DateTime<Utc>,

    /// The chunk text itself
    pub text: String,
}

/// A single ranked retrieval result: chunk text, score, and
/// denormalized provenance. Read-only projection, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievedChunk {
    /// Chunk text
    pub text: String,

    /// Squared Euclidean distance to the query vector
    /// (lower = more similar; vectors are L2-normalized)
    pub distance: f32,

    /// Source document filename
    pub filename: String,

    /// Source document id
    pub document_id: DocumentId,

    /// Chunk position within its document
    pub chunk_index: usize,
}

/// Outcome of a successful ingestion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestReceipt {
    /// Identifier the document store assigned. `None` when the
    /// document produced no chunks (no-op success).
    pub document_id: Option<DocumentId>,

    /// Number of chunks indexed
    pub chunks_added: usize,

    /// Ingestion duration in milliseconds
    pub duration_ms: u64,
}

/// Aggregate statistics over the document store
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentStats {
    /// Total documents stored
    pub total_documents: usize,

    /// Total chunks stored
    pub total_chunks: usize,

    /// Sum of document payload sizes in bytes
    pub total_size_bytes: u64,

    /// Distinct document formats seen
    pub formats: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_ids_are_distinct() {
        assert_ne!(DocumentId::new(), DocumentId::new());
    }

    #[test]
    fn test_chunk_record_roundtrip() {
        let record = ChunkRecord {
            document_id: DocumentId::new(),
            filename: "report.pdf".to_string(),
            chunk_index: 2,
            total_chunks: 5,
            chunk_size: 640,
            added_at: Utc::now(),
            text: "Quarterly revenue grew by 12 percent.".to_string(),
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: ChunkRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.filename, "report.pdf");
        assert_eq!(back.chunk_index, 2);
        assert_eq!(back.text, record.text);
    }

    #[test]
    fn test_ingest_receipt_noop() {
        let receipt = IngestReceipt {
            document_id: None,
            chunks_added: 0,
            duration_ms: 0,
        };
        assert!(receipt.document_id.is_none());
        assert_eq!(receipt.chunks_added, 0);
    }

    #[test]
    fn test_document_stats_default() {
        let stats = DocumentStats::default();
        assert_eq!(stats.total_documents, 0);
        assert!(stats.formats.is_empty());
    }
}
