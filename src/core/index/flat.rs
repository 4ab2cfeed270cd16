//! Flat (exhaustive) vector index.
//!
//! Stores vectors in a contiguous row-major buffer and answers
//! k-nearest-neighbor queries by scanning every row under squared
//! Euclidean distance. For L2-normalized vectors this ranks
//! identically to cosine similarity. Exhaustive search is the
//! mandated variant: corpora here are document collections, not
//! web-scale, and insertion stays O(1) amortized per vector.
//!
//! The index performs no normalization and attaches no meaning to
//! positions beyond insertion order; callers own both concerns.

use crate::core::error::{Result, SemaError};

/// Exhaustive squared-L2 nearest-neighbor index
#[derive(Debug, Clone)]
pub struct FlatIndex {
    /// Fixed vector dimensionality
    dimension: usize,

    /// Row-major vector storage, `len() * dimension` floats
    data: Vec<f32>,
}

impl FlatIndex {
    /// Create an empty index for `dimension`-sized vectors.
    ///
    /// # Panics
    ///
    /// Panics if `dimension` is 0.
    pub fn new(dimension: usize) -> Self {
        assert!(dimension > 0, "dimension must be > 0");
        Self {
            dimension,
            data: Vec::new(),
        }
    }

    /// Vector dimensionality this index accepts
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of stored vectors
    pub fn len(&self) -> usize {
        self.data.len() / self.dimension
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Append a batch of vectors in input order.
    ///
    /// Every vector's dimension is validated *before* anything is
    /// appended, so a mismatch anywhere in the batch leaves the index
    /// untouched. Mismatches are a programming-contract violation and
    /// fail fast; vectors are never truncated or padded.
    pub fn insert_batch(&mut self, vectors: &[Vec<f32>]) -> Result<()> {
        for vector in vectors {
            if vector.len() != self.dimension {
                return Err(SemaError::DimensionMismatch {
                    expected: self.dimension,
                    actual: vector.len(),
                });
            }
        }

        self.data.reserve(vectors.len() * self.dimension);
        for vector in vectors {
            self.data.extend_from_slice(vector);
        }
        Ok(())
    }

    /// Find the `k` nearest stored vectors to `query`.
    ///
    /// Returns `(position, squared_distance)` pairs in ascending
    /// distance order, `min(k, len)` of them. Ties keep insertion
    /// order (the sort is stable). An empty index yields an empty
    /// vector — callers treat that as "no context", not an error.
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<(usize, f32)>> {
        if query.len() != self.dimension {
            return Err(SemaError::DimensionMismatch {
                expected: self.dimension,
                actual: query.len(),
            });
        }

        let mut scored: Vec<(usize, f32)> = self
            .data
            .chunks_exact(self.dimension)
            .enumerate()
            .map(|(position, row)| (position, squared_distance(query, row)))
            .collect();

        // Stable sort keeps index order on ties; NaN distances (which
        // a degenerate provider could produce) sort as equal rather
        // than panicking
        scored.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(k);
        Ok(scored)
    }
}

fn squared_distance(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}
