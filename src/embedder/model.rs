// model.rs - metadata about the embedding model behind the server
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingModelInfo {
    pub dim: usize,
    pub name: String,
    pub max_batch: usize,
}

impl EmbeddingModelInfo {
    pub fn new(name: impl Into<String>, dim: usize, max_batch: usize) -> Self {
        Self {
            name: name.into(),
            dim,
            max_batch,
        }
    }

    pub fn bge_base_en() -> Self {
        Self::new("BAAI/bge-base-en-v1.5", 768, super::DEFAULT_BATCH_SIZE)
    }
}

impl Default for EmbeddingModelInfo {
    fn default() -> Self {
        Self::bge_base_en()
    }
}
