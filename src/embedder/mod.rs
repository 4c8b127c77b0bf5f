pub mod batcher;
pub mod client;
pub mod model;
pub mod normalize;
pub mod types;


pub use batcher::Batcher;
pub use client::{EmbedError, EmbeddingClient};
pub use model::EmbeddingModelInfo;
pub use normalize::l2_normalize;
pub use types::{EmbeddingRequest, EmbeddingResponse, HealthResponse};

/// Texts per embedding request
pub const DEFAULT_BATCH_SIZE: usize = 64;
