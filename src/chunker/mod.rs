mod splitter;


pub use splitter::{Chunk, ChunkMetadata, chunk_text};

/// Unique identifier for a chunk within one artifact
pub type ChunkId = u32;

/// Characters per chunk window (configurable)
pub const DEFAULT_CHUNK_SIZE: usize = 1200;
