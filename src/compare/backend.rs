use crate::embedder::{Batcher, EmbedError, EmbeddingClient};
use crate::summarizer::{DocumenterClient, SummarizerError};

/// Turns chunk texts into vectors, one per text, in order
#[allow(async_fn_in_trait)]
pub trait EmbedBackend {
    async fn embed_all(&self, texts: &[String], batcher: &Batcher) -> Result<Vec<Vec<f32>>, EmbedError>;
}

/// Writes a conclusion about two excerpt sets
#[allow(async_fn_in_trait)]
pub trait ConclusionBackend {
    async fn conclude(&self, excerpts_a: &[String], excerpts_b: &[String]) -> Result<String, SummarizerError>;
}

impl EmbedBackend for EmbeddingClient {
    async fn embed_all(&self, texts: &[String], batcher: &Batcher) -> Result<Vec<Vec<f32>>, EmbedError> {
        self.embed_batched(texts, batcher).await
    }
}

impl ConclusionBackend for DocumenterClient {
    async fn conclude(&self, excerpts_a: &[String], excerpts_b: &[String]) -> Result<String, SummarizerError> {
        self.generate_conclusion(excerpts_a, excerpts_b).await
    }
}
