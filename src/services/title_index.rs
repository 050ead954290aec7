use std::collections::HashMap;

use crate::error::{AppError, AppResult};

/// Name-to-position lookup over the precomputed title list.
///
/// Positions are the indices of the list the index was built from, so they
/// line up with the rows of the paired similarity matrix. Matching is exact:
/// no trimming, no case folding.
#[derive(Debug, Clone)]
pub struct TitleIndex {
    names: Vec<String>,
    positions: HashMap<String, usize>,
}

impl TitleIndex {
    /// Builds the index from titles in matrix order.
    ///
    /// A title that appears more than once keeps its first position.
    pub fn new(names: Vec<String>) -> Self {
        let mut positions = HashMap::with_capacity(names.len());
        let mut duplicates = 0usize;

        for (position, name) in names.iter().enumerate() {
            if positions.contains_key(name) {
                duplicates += 1;
                continue;
            }
            positions.insert(name.clone(), position);
        }

        if duplicates > 0 {
            tracing::warn!(
                duplicates,
                "Title list contains repeated names, first occurrence wins"
            );
        }

        Self { names, positions }
    }

    /// Returns the position of `name`, or `None` when the title is unknown
    pub fn resolve(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Returns the title stored at `position`
    pub fn name_of(&self, position: usize) -> AppResult<&str> {
        self.names
            .get(position)
            .map(String::as_str)
            .ok_or(AppError::OutOfRange {
                position,
                len: self.names.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Titles in position order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
