#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

//! Deterministic offline embedder.
//!
//! The production embedding model is an external collaborator reached
//! through the `Embedder` trait. `HashEmbedder` is the self-contained
//! stand-in: a hashed bag-of-tokens vector that is deterministic,
//! script-agnostic (Arabic and English tokens hash into the same space)
//! and cheap enough to run on every build. It is not semantic; anything
//! that implements `Embedder` plugs in at the same seam.

use anyhow::{bail, Result};
use docqa_core::config::DEFAULT_EMBEDDING_DIM;
use docqa_core::traits::Embedder;
use std::hash::{Hash, Hasher};
use twox_hash::XxHash64;

pub struct HashEmbedder {
    dim: usize,
}

impl HashEmbedder {
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }

    fn embed_one(&self, text: &str) -> Vec<f32> {
        let mut v = vec![0f32; self.dim];
        for (i, token) in text.split_whitespace().enumerate() {
            let mut hasher = XxHash64::with_seed(0);
            token.hash(&mut hasher);
            let h = hasher.finish();
            let idx = (h as usize) % self.dim;
            let val = (((h >> 32) as u32) as f32) / (u32::MAX as f32);
            // small positional salt keeps repeated tokens from collapsing
            v[idx] += val + (i as f32 % 3.0) * 0.01;
        }
        let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt().max(1e-6);
        for x in &mut v {
            *x /= norm;
        }
        v
    }
}

impl Embedder for HashEmbedder {
    fn dim(&self) -> usize {
        self.dim
    }

    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            bail!("embed_batch requires a non-empty batch");
        }
        Ok(texts.iter().map(|t| self.embed_one(t)).collect())
    }
}

/// Default embedder construction with an explicit dimension.
pub fn default_embedder(dim: usize) -> Box<dyn Embedder> {
    tracing::debug!(dim, "using hash embedder");
    Box::new(HashEmbedder::new(dim))
}

/// Convenience constructor with the stock dimension.
pub fn get_default_embedder() -> Box<dyn Embedder> {
    default_embedder(DEFAULT_EMBEDDING_DIM)
}
