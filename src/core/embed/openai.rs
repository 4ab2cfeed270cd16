//! OpenAI-compatible embedding provider.
//!
//! Talks to a `/v1/embeddings` endpoint, which covers the OpenAI API
//! itself as well as local servers (llama.cpp, vLLM, LocalAI) that
//! expose the same shape.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::embed::EmbeddingProvider;
use crate::core::error::{Result, SemaError};

/// HTTP embedding provider for OpenAI-compatible endpoints
pub struct OpenAiEmbeddings {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
    dimension: usize,
}

impl OpenAiEmbeddings {
    /// Create a provider for the given endpoint, model, and output
    /// dimension.
    pub fn new(base_url: impl Into<String>, model: impl Into<String>, dimension: usize) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: None,
            model: model.into(),
            dimension,
        }
    }

    /// Attach a bearer token (required by hosted endpoints, usually
    /// not by local ones)
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

#[async_trait]
impl EmbeddingProvider for OpenAiEmbeddings {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let request = EmbeddingRequest {
            model: &self.model,
            input: texts,
        };

        let mut builder = self
            .client
            .post(format!("{}/v1/embeddings", self.base_url))
            .json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| SemaError::EmbeddingFailed(format!("request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SemaError::EmbeddingFailed(format!("endpoint returned error: {e}")))?
            .json::<EmbeddingResponse>()
            .await
            .map_err(|e| SemaError::EmbeddingFailed(format!("malformed response: {e}")))?;

        if response.data.len() != texts.len() {
            return Err(SemaError::EmbeddingFailed(format!(
                "endpoint returned {} embeddings for {} inputs",
                response.data.len(),
                texts.len()
            )));
        }

        Ok(response.data.into_iter().map(|d| d.embedding).collect())
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
