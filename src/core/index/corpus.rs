//! Paired vector index and provenance records.
//!
//! [`CorpusIndex`] owns the flat vector index and the parallel chunk
//! record sequence as one unit: `extend` is the only mutation, and it
//! validates the whole batch before touching either side. That makes
//! `vectors.len() == records.len()` a structural invariant the type
//! itself enforces, instead of a convention two independently mutable
//! structures have to honor.

use crate::core::error::{Result, SemaError};
use crate::core::index::FlatIndex;
use crate::core::types::ChunkRecord;

/// The in-memory corpus: vectors plus positionally aligned provenance
#[derive(Debug, Clone)]
pub struct CorpusIndex {
    index: FlatIndex,
    records: Vec<ChunkRecord>,
}

impl CorpusIndex {
    /// Create an empty corpus for `dimension`-sized vectors
    pub fn new(dimension: usize) -> Self {
        Self {
            index: FlatIndex::new(dimension),
            records: Vec::new(),
        }
    }

    pub fn dimension(&self) -> usize {
        self.index.dimension()
    }

    /// Number of indexed chunks
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append one document's batch of vectors and records.
    ///
    /// Both-or-neither: a count or dimension problem anywhere in the
    /// batch leaves both structures unchanged.
    pub fn extend(&mut self, vectors: &[Vec<f32>], records: Vec<ChunkRecord>) -> Result<()> {
        if vectors.len() != records.len() {
            return Err(SemaError::Internal(format!(
                "batch has {} vectors but {} records",
                vectors.len(),
                records.len()
            )));
        }

        // insert_batch validates every dimension before appending
        self.index.insert_batch(vectors)?;
        self.records.extend(records);

        debug_assert_eq!(self.index.len(), self.records.len());
        Ok(())
    }

    /// Nearest-neighbor search, delegated to the flat index
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<(usize, f32)>> {
        self.index.search(query, k)
    }

    /// Bounds-checked positional join into the record sequence.
    ///
    /// A position the index reported but the records don't cover is
    /// stale; callers skip it rather than crash.
    pub fn record(&self, position: usize) -> Option<&ChunkRecord> {
        self.records.get(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::DocumentId;
    use chrono::Utc;

    fn record(text: &str) -> ChunkRecord {
        ChunkRecord {
            document_id: DocumentId::new(),
            filename: "doc.txt".to_string(),
            chunk_index: 0,
            total_chunks: 1,
            chunk_size: text.chars().count(),
            added_at: Utc::now(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_extend_keeps_lengths_aligned() {
        let mut corpus = CorpusIndex::new(2);
        corpus
            .extend(&[vec![1.0, 0.0], vec![0.0, 1.0]], vec![record("a"), record("b")])
            .unwrap();
        assert_eq!(corpus.len(), 2);
    }

    #[test]
    fn test_count_mismatch_rejected() {
        let mut corpus = CorpusIndex::new(2);
        let err = corpus
            .extend(&[vec![1.0, 0.0]], vec![record("a"), record("b")])
            .unwrap_err();
        assert!(err.is_contract_violation());
        assert_eq!(corpus.len(), 0);
    }

    #[test]
    fn test_dimension_mismatch_leaves_both_sides_untouched() {
        let mut corpus = CorpusIndex::new(2);
        corpus
            .extend(&[vec![1.0, 0.0]], vec![record("a")])
            .unwrap();

        let err = corpus
            .extend(
                &[vec![0.0, 1.0], vec![0.0, 1.0, 2.0]],
                vec![record("b"), record("c")],
            )
            .unwrap_err();
        assert!(matches!(err, SemaError::DimensionMismatch { .. }));

        // Earlier committed state intact, nothing partial added
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.record(0).unwrap().text, "a");
        assert!(corpus.record(1).is_none());
    }

    #[test]
    fn test_search_and_join() {
        let mut corpus = CorpusIndex::new(2);
        corpus
            .extend(
                &[vec![1.0, 0.0], vec![0.0, 1.0]],
                vec![record("east"), record("north")],
            )
            .unwrap();

        let hits = corpus.search(&[0.0, 0.9], 1).unwrap();
        assert_eq!(hits.len(), 1);
        let rec = corpus.record(hits[0].0).unwrap();
        assert_eq!(rec.text, "north");
    }

    #[test]
    fn test_out_of_range_position_is_none() {
        let corpus = CorpusIndex::new(2);
        assert!(corpus.record(0).is_none());
        assert!(corpus.record(42).is_none());
    }
}
