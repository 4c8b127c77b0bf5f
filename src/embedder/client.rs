// client.rs - the HTTP embedder
use crate::embedder::batcher::Batcher;
use crate::embedder::normalize::l2_normalize;
use crate::embedder::types::*;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Server returned error status {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Expected {expected} embeddings, got {actual}")]
    CountMismatch { expected: usize, actual: usize },

    #[error("Embedding {index} has {actual} dimensions, expected {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Embedding {0} is empty")]
    EmptyVector(usize),
}

pub struct EmbeddingClient {
    http: Client,
    endpoint: String,
    normalize: bool,
}

impl EmbeddingClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: trim_endpoint(endpoint.into()),
            normalize: true,
        }
    }

    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, EmbedError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            endpoint: trim_endpoint(endpoint.into()),
            normalize: true,
        })
    }

    /// Toggle L2 normalization of returned vectors
    pub fn normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Check if the embedding server is healthy
    pub async fn health_check(&self) -> Result<HealthResponse, EmbedError> {
        let response = self
            .http
            .get(format!("{}/health", self.endpoint))
            .send()
            .await?;

        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Embed one batch of texts in a single request
    pub async fn embed(&self, texts: Vec<String>) -> Result<Vec<Vec<f32>>, EmbedError> {
        if texts.is_empty() {
            return Ok(vec![]);
        }

        let expected = texts.len();
        let req = EmbeddingRequest {
            texts,
            normalize: self.normalize,
        };

        let response = self
            .http
            .post(format!("{}/embed", self.endpoint))
            .json(&req)
            .send()
            .await?;

        let res: EmbeddingResponse = check_status(response).await?.json().await?;

        if res.embeddings.len() != expected {
            return Err(EmbedError::CountMismatch {
                expected,
                actual: res.embeddings.len(),
            });
        }

        let mut embeddings = res.embeddings;
        check_dimensions(&embeddings)?;
        if self.normalize {
            embeddings.iter_mut().for_each(|v| l2_normalize(v));
        }

        Ok(embeddings)
    }

    /// Embed any number of texts, one request per batch, preserving order
    pub async fn embed_batched(
        &self,
        texts: &[String],
        batcher: &Batcher,
    ) -> Result<Vec<Vec<f32>>, EmbedError> {
        let mut all_embeddings = Vec::with_capacity(texts.len());

        for (i, batch) in batcher.split(texts).into_iter().enumerate() {
            tracing::debug!(batch = i, size = batch.len(), "embedding batch");
            let embeddings = self.embed(batch.to_vec()).await?;
            all_embeddings.extend(embeddings);
        }

        // Batches are checked one by one; they must also agree with each other
        check_dimensions(&all_embeddings)?;
        Ok(all_embeddings)
    }
}

/// All vectors must be non-empty and share one dimension
pub fn check_dimensions(embeddings: &[Vec<f32>]) -> Result<(), EmbedError> {
    let Some(first) = embeddings.first() else {
        return Ok(());
    };
    let expected = first.len();

    for (index, v) in embeddings.iter().enumerate() {
        if v.is_empty() {
            return Err(EmbedError::EmptyVector(index));
        }
        if v.len() != expected {
            return Err(EmbedError::DimensionMismatch {
                index,
                expected,
                actual: v.len(),
            });
        }
    }

    Ok(())
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, EmbedError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(EmbedError::ServerError {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}

fn trim_endpoint(endpoint: String) -> String {
    endpoint.trim_end_matches('/').to_string()
}
