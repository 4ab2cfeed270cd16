//! Embedding provider seam and vector normalization.
//!
//! The engine consumes embeddings through [`EmbeddingProvider`]; it
//! never computes them itself. The provider's dimension is fixed for
//! the lifetime of an index instance and is validated on every batch.
//!
//! Normalization is the *caller's* responsibility (the retrieval
//! engine applies it at the boundary); the index never normalizes, so
//! it stays testable with raw vectors.

pub mod openai;

use async_trait::async_trait;

use crate::core::error::Result;

pub use openai::OpenAiEmbeddings;

/// Maps text to fixed-dimension dense vectors.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a batch of texts. The output has the same length and
    /// order as the input, and every vector has [`dimension`] entries.
    ///
    /// [`dimension`]: EmbeddingProvider::dimension
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// Output dimensionality, fixed per provider instance
    fn dimension(&self) -> usize;

    /// Model identifier, for diagnostics
    fn model_name(&self) -> &str;
}

/// Scale a vector to unit L2 length in place.
///
/// Zero vectors are left untouched: there is no direction to
/// preserve, and downstream distance ranking still works.
pub fn l2_normalize(vector: &mut [f32]) {
    let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for x in vector.iter_mut() {
            *x /= norm;
        }
    }
}
