// the embedding server contract
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct EmbeddingRequest {
    pub texts: Vec<String>,
    pub normalize: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EmbeddingResponse {
    pub embeddings: Vec<Vec<f32>>,
}

/// `GET /health` body, shared by the embedding and generation servers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
    #[serde(default)]
    pub device: Option<String>,
}

impl HealthResponse {
    pub fn is_gpu(&self) -> bool {
        self.device.as_deref() == Some("cuda")
    }
}
