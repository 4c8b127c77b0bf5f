use serde::{Deserialize, Serialize};

/// Outcome of comparing two artifacts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparison {
    /// Generated conclusion, empty when generation was skipped
    pub conclusion: String,
    /// Most similar pairs, best first
    pub pairs: Vec<RelevantPair>,
    pub stats: ComparisonStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelevantPair {
    pub score: f32,
    pub excerpt_a: String,
    pub excerpt_b: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComparisonStats {
    pub chunks_a: usize,
    pub chunks_b: usize,
    pub embedding_dim: usize,
}
