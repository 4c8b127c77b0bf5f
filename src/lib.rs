// Public API exports
pub mod chunker;
pub mod compare;
pub mod config;
pub mod embedder;
pub mod error;
pub mod loader;
pub mod report;
pub mod similarity;
pub mod summarizer;

// Re-export main types for convenience
pub use loader::{ArtifactMetadata, LoadError, TextArtifact, load_text};

pub use chunker::{Chunk, ChunkId, ChunkMetadata, DEFAULT_CHUNK_SIZE, chunk_text};

pub use embedder::{Batcher, EmbedError, EmbeddingClient, EmbeddingModelInfo, HealthResponse};

pub use similarity::{ChunkPair, SimilarityMatrix, cosine_similarity, top_pairs};

pub use summarizer::{DocumenterClient, GenerationParams, PromptLanguage, SummarizerError};

pub use compare::{Comparer, Comparison, ComparisonStats, RelevantPair};

pub use config::{CompareConfig, ConfigError};
pub use error::{CompareError, Side};
