use super::backend::{ConclusionBackend, EmbedBackend};
use super::types::{Comparison, ComparisonStats, RelevantPair};
use crate::chunker::{Chunk, chunk_text};
use crate::config::CompareConfig;
use crate::embedder::{Batcher, EmbedError};
use crate::error::{CompareError, Side};
use crate::loader::{TextArtifact, load_text};
use crate::similarity::{ChunkPair, SimilarityMatrix, top_pairs};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Runs the load → chunk → embed → rank → generate pipeline
pub struct Comparer<E, G> {
    pub(super) embedder: E,
    pub(super) generator: G,
    config: CompareConfig,
}

impl<E: EmbedBackend, G: ConclusionBackend> Comparer<E, G> {
    pub fn new(embedder: E, generator: G, config: CompareConfig) -> Result<Self, CompareError> {
        config.validate()?;
        Ok(Self {
            embedder,
            generator,
            config,
        })
    }

    pub fn config(&self) -> &CompareConfig {
        &self.config
    }

    pub async fn compare_files(
        &self,
        path_a: impl AsRef<Path>,
        path_b: impl AsRef<Path>,
    ) -> Result<Comparison, CompareError> {
        let step_start = Instant::now();
        let artifact_a = load_text(path_a)?;
        let artifact_b = load_text(path_b)?;
        info!(
            a_chars = artifact_a.metadata.char_count,
            b_chars = artifact_b.metadata.char_count,
            elapsed_ms = step_start.elapsed().as_millis() as u64,
            "loaded artifacts"
        );

        self.compare_artifacts(&artifact_a, &artifact_b).await
    }

    pub async fn compare_texts(&self, text_a: &str, text_b: &str) -> Result<Comparison, CompareError> {
        let artifact_a = TextArtifact::from_text("<a>", text_a);
        let artifact_b = TextArtifact::from_text("<b>", text_b);
        self.compare_artifacts(&artifact_a, &artifact_b).await
    }

    pub async fn compare_artifacts(
        &self,
        artifact_a: &TextArtifact,
        artifact_b: &TextArtifact,
    ) -> Result<Comparison, CompareError> {
        // Step 1: chunk
        let chunks_a = chunk_text(&artifact_a.text, self.config.chunk_size);
        let chunks_b = chunk_text(&artifact_b.text, self.config.chunk_size);
        if chunks_a.is_empty() {
            return Err(CompareError::NoChunks { side: Side::A });
        }
        if chunks_b.is_empty() {
            return Err(CompareError::NoChunks { side: Side::B });
        }
        info!(chunks_a = chunks_a.len(), chunks_b = chunks_b.len(), "chunked artifacts");

        // Step 2: embed
        let step_start = Instant::now();
        let batcher = Batcher::new(self.config.batch_size);
        let emb_a = self.embed_side(&chunks_a, &batcher).await?;
        let emb_b = self.embed_side(&chunks_b, &batcher).await?;

        let dim_a = emb_a.first().map(Vec::len).unwrap_or(0);
        let dim_b = emb_b.first().map(Vec::len).unwrap_or(0);
        if dim_a != dim_b {
            return Err(CompareError::DimensionMismatch { a: dim_a, b: dim_b });
        }
        info!(
            dim = dim_a,
            elapsed_ms = step_start.elapsed().as_millis() as u64,
            "embedded chunks"
        );

        // Step 3: rank
        let matrix = SimilarityMatrix::compute(&emb_a, &emb_b);
        let best = top_pairs(&matrix, self.config.top_k);
        for pair in &best {
            debug!(a = pair.a_index, b = pair.b_index, score = pair.score, "selected pair");
        }

        // Step 4: generate
        let conclusion = if self.config.skip_generation {
            info!("generation skipped");
            String::new()
        } else {
            let step_start = Instant::now();
            let limit = self.config.prompt_excerpt_chars;
            let (excerpts_a, excerpts_b) = excerpts(&best, &chunks_a, &chunks_b, limit);
            let conclusion = self.generator.conclude(&excerpts_a, &excerpts_b).await?;
            info!(
                conclusion_chars = conclusion.chars().count(),
                elapsed_ms = step_start.elapsed().as_millis() as u64,
                "generated conclusion"
            );
            conclusion
        };

        let limit = self.config.report_excerpt_chars;
        let pairs = best
            .iter()
            .map(|pair| RelevantPair {
                score: pair.score,
                excerpt_a: truncate_chars(&chunks_a[pair.a_index].text, limit).to_string(),
                excerpt_b: truncate_chars(&chunks_b[pair.b_index].text, limit).to_string(),
            })
            .collect();

        Ok(Comparison {
            conclusion,
            pairs,
            stats: ComparisonStats {
                chunks_a: chunks_a.len(),
                chunks_b: chunks_b.len(),
                embedding_dim: dim_a,
            },
        })
    }

    async fn embed_side(&self, chunks: &[Chunk], batcher: &Batcher) -> Result<Vec<Vec<f32>>, CompareError> {
        let texts: Vec<String> = chunks.iter().map(|c| c.text.clone()).collect();
        let embeddings = self.embedder.embed_all(&texts, batcher).await?;
        if embeddings.len() != texts.len() {
            return Err(EmbedError::CountMismatch {
                expected: texts.len(),
                actual: embeddings.len(),
            }
            .into());
        }
        Ok(embeddings)
    }
}

/// Prompt excerpts for the selected pairs, A and B in pair order
fn excerpts(
    pairs: &[ChunkPair],
    chunks_a: &[Chunk],
    chunks_b: &[Chunk],
    limit: usize,
) -> (Vec<String>, Vec<String>) {
    pairs
        .iter()
        .map(|pair| {
            (
                truncate_chars(&chunks_a[pair.a_index].text, limit).to_string(),
                truncate_chars(&chunks_b[pair.b_index].text, limit).to_string(),
            )
        })
        .unzip()
}

/// Longest prefix of `s` holding at most `max_chars` characters
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &s[..byte_idx],
        None => s,
    }
}
