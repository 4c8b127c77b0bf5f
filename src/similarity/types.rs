use serde::Serialize;

/// A chunk of artifact A matched with its most similar chunk of artifact B
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChunkPair {
    pub a_index: usize,
    pub b_index: usize,
    pub score: f32,
}
