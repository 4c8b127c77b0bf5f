use crate::config::ConfigError;
use crate::embedder::EmbedError;
use crate::loader::LoadError;
use crate::summarizer::SummarizerError;
use thiserror::Error;

/// Which of the two artifacts an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

#[derive(Error, Debug)]
pub enum CompareError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Artifact {side} has no non-blank chunks")]
    NoChunks { side: Side },

    #[error("Embedding failed: {0}")]
    Embed(#[from] EmbedError),

    #[error("Embeddings of A ({a}) and B ({b}) differ in dimension")]
    DimensionMismatch { a: usize, b: usize },

    #[error("Generation failed: {0}")]
    Generate(#[from] SummarizerError),
}
