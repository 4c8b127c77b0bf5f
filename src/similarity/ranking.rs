use super::matrix::SimilarityMatrix;
use super::types::ChunkPair;
use std::cmp::Ordering;

/// Pick the `top_k` rows with the highest row maximum and pair each with its best column.
///
/// Rows are ordered by score descending; equal scores put the higher row
/// index first. A column may be picked by several rows.
pub fn top_pairs(matrix: &SimilarityMatrix, top_k: usize) -> Vec<ChunkPair> {
    if matrix.is_empty() || top_k == 0 {
        return vec![];
    }

    let mut best: Vec<ChunkPair> = (0..matrix.rows())
        .filter_map(|row| {
            matrix.row_max(row).map(|(col, score)| ChunkPair {
                a_index: row,
                b_index: col,
                score,
            })
        })
        .collect();

    best.sort_by(|x, y| {
        descending(x.score, y.score).then_with(|| y.a_index.cmp(&x.a_index))
    });
    best.truncate(top_k);

    tracing::debug!(
        rows = matrix.rows(),
        cols = matrix.cols(),
        picked = best.len(),
        "ranked chunk pairs"
    );

    best
}

/// Higher scores first, NaN last
fn descending(a: f32, b: f32) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
