mod backend;
mod pipeline;
mod types;


pub use backend::{ConclusionBackend, EmbedBackend};
pub use pipeline::{Comparer, truncate_chars};
pub use types::{Comparison, ComparisonStats, RelevantPair};
