//! Answer generation seam.
//!
//! The engine produces ranked context; turning that context into a
//! natural-language answer is the conversation layer's job. This
//! trait is the contract it fulfills — the retrieval core never calls
//! it itself.

use async_trait::async_trait;

use crate::core::error::Result;

/// Black-box answer generator consumed by the conversation layer
#[async_trait]
pub trait AnswerGenerator: Send + Sync {
    /// Generate an answer for `query` grounded in `context` (the
    /// formatted context string from retrieval, possibly empty)
    async fn generate(&self, query: &str, context: &str) -> Result<String>;
}
