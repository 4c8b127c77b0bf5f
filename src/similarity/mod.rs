mod cosine;
mod matrix;
mod ranking;
mod types;


pub use cosine::cosine_similarity;
pub use matrix::SimilarityMatrix;
pub use ranking::top_pairs;
pub use types::ChunkPair;

/// Pairs handed to the generator by default
pub const DEFAULT_TOP_K: usize = 6;
