use super::cosine::cosine_similarity;

/// Dense cosine similarity matrix: row = chunk of A, column = chunk of B
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    rows: usize,
    cols: usize,
    /// Row-major scores
    values: Vec<f32>,
}

impl SimilarityMatrix {
    pub fn compute(emb_a: &[Vec<f32>], emb_b: &[Vec<f32>]) -> Self {
        let rows = emb_a.len();
        let cols = emb_b.len();
        let mut values = Vec::with_capacity(rows * cols);

        for a in emb_a {
            for b in emb_b {
                values.push(cosine_similarity(a, b));
            }
        }

        Self { rows, cols, values }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.values[row * self.cols + col])
    }

    pub fn row(&self, row: usize) -> Option<&[f32]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.values[start..start + self.cols])
    }

    /// Best column of a row and its score. First column wins ties; NaN never wins.
    pub fn row_max(&self, row: usize) -> Option<(usize, f32)> {
        let mut best: Option<(usize, f32)> = None;

        for (col, &score) in self.row(row)?.iter().enumerate() {
            match best {
                None => best = Some((col, score)),
                Some((_, current)) if current.is_nan() && !score.is_nan() => {
                    best = Some((col, score))
                }
                Some((_, current)) if score > current => best = Some((col, score)),
                _ => {}
            }
        }

        best
    }
}
