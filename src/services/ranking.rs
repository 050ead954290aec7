use std::cmp::Ordering;

use crate::error::{AppError, AppResult};

/// Square table of pairwise similarity scores, stored row-major.
///
/// Row `i` holds the similarity of every item to item `i`. Symmetry is
/// assumed but not checked.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    side: usize,
    scores: Vec<f64>,
}

/// One ranked neighbor of a query item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub position: usize,
    pub score: f64,
}

impl SimilarityMatrix {
    /// Builds a matrix from nested rows.
    ///
    /// Fails with `ShapeMismatch` if any row length differs from the row
    /// count, and with `InvalidArtifact` on a NaN or infinite score.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> AppResult<Self> {
        let side = rows.len();
        let mut scores = Vec::with_capacity(side * side);

        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != side {
                return Err(AppError::ShapeMismatch(format!(
                    "row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    side
                )));
            }
            if let Some(j) = row.iter().position(|score| !score.is_finite()) {
                return Err(AppError::InvalidArtifact(format!(
                    "non-finite similarity at ({}, {})",
                    i, j
                )));
            }
            scores.extend(row);
        }

        Ok(Self { side, scores })
    }

    /// Number of rows (and columns)
    pub fn side(&self) -> usize {
        self.side
    }

    /// Scores of every item against the item at `position`
    pub fn row(&self, position: usize) -> AppResult<&[f64]> {
        if position >= self.side {
            return Err(AppError::OutOfRange {
                position,
                len: self.side,
            });
        }
        let start = position * self.side;
        Ok(&self.scores[start..start + self.side])
    }
}

/// Returns the `k` items most similar to `query`, best first.
///
/// The query item itself is never returned, whatever its self score. Equal
/// scores are ordered by ascending position, so the result is fully
/// deterministic. Asking for more neighbors than exist yields all `N - 1`.
pub fn top_k(matrix: &SimilarityMatrix, query: usize, k: usize) -> AppResult<Vec<Neighbor>> {
    let row = matrix.row(query)?;

    let mut neighbors: Vec<Neighbor> = row
        .iter()
        .enumerate()
        .filter(|&(position, _)| position != query)
        .map(|(position, &score)| Neighbor { position, score })
        .collect();

    neighbors.sort_by(rank_order);
    neighbors.truncate(k);

    Ok(neighbors)
}

// Descending score, then ascending position.
fn rank_order(a: &Neighbor, b: &Neighbor) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.position.cmp(&b.position))
}
