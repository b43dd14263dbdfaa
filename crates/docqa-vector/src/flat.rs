//! Exact in-memory k-nearest-neighbor index.
//!
//! A brute-force scan over all stored vectors under squared Euclidean
//! distance. The working set is one document session (hundreds of
//! passages, not millions), so exact search is both the simplest and
//! the fastest correct choice. No persistence, no incremental updates;
//! a build constructs a fresh index wholesale.

use anyhow::{bail, Result};

pub struct FlatIndex {
    dim: usize,
    vectors: Vec<Vec<f32>>,
}

impl FlatIndex {
    /// The dimension is fixed at construction and every vector added or
    /// queried must match it.
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            vectors: Vec::new(),
        }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn add(&mut self, vector: Vec<f32>) -> Result<()> {
        if vector.len() != self.dim {
            bail!(
                "vector dimension {} does not match index dimension {}",
                vector.len(),
                self.dim
            );
        }
        self.vectors.push(vector);
        Ok(())
    }

    /// Return up to `k` nearest vectors as `(insertion_index, distance)`
    /// pairs, ascending by squared Euclidean distance. The sort is
    /// stable, so ties keep insertion order.
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<(usize, f32)>> {
        if query.len() != self.dim {
            bail!(
                "query dimension {} does not match index dimension {}",
                query.len(),
                self.dim
            );
        }
        let mut hits: Vec<(usize, f32)> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(i, v)| (i, squared_l2(query, v)))
            .collect();
        hits.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
        hits.truncate(k);
        Ok(hits)
    }
}

fn squared_l2(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}
