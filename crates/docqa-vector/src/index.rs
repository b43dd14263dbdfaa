//! Embedding index over one document build.
//!
//! Owns the active passage set, their embeddings and the flat kNN index.
//! A build is atomic from the caller's view: all passages embed in one
//! batch, and only a fully constructed index replaces the previous
//! state. Build-time embedding failures propagate and leave the
//! previously active index untouched; query-time failures are logged
//! and degrade to an empty result set so the conversation can continue.

use docqa_core::error::{Error, Result};
use docqa_core::traits::Embedder;
use docqa_core::types::{Passage, SearchResult};

use crate::flat::FlatIndex;

struct ActiveBuild {
    passages: Vec<Passage>,
    index: FlatIndex,
}

pub struct EmbeddingIndex {
    embedder: Box<dyn Embedder>,
    active: Option<ActiveBuild>,
    // pinned by the first successful build; later builds must agree
    dim: Option<usize>,
}

impl EmbeddingIndex {
    pub fn new(embedder: Box<dyn Embedder>) -> Self {
        Self {
            embedder,
            active: None,
            dim: None,
        }
    }

    /// Whether a successful non-empty build is currently active.
    pub fn is_built(&self) -> bool {
        self.active.is_some()
    }

    /// Number of passages in the active build.
    pub fn len(&self) -> usize {
        self.active.as_ref().map_or(0, |b| b.passages.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Embed and index a passage set, replacing the active build.
    ///
    /// Empty input returns `Ok(0)` and leaves the index in an explicit
    /// "no index" state. On embedding failure the previous build stays
    /// active and the error propagates.
    pub fn build(&mut self, passages: Vec<Passage>) -> Result<usize> {
        if passages.is_empty() {
            tracing::warn!("no passages to index");
            self.active = None;
            return Ok(0);
        }

        let texts: Vec<String> = passages.iter().map(|p| p.text.clone()).collect();
        let embeddings = self
            .embedder
            .embed_batch(&texts)
            .map_err(|e| Error::Embedding(e.to_string()))?;
        if embeddings.len() != passages.len() {
            return Err(Error::Embedding(format!(
                "embedder returned {} vectors for {} passages",
                embeddings.len(),
                passages.len()
            )));
        }

        let dim = embeddings.first().map_or(0, Vec::len);
        if let Some(pinned) = self.dim {
            if dim != pinned {
                return Err(Error::Embedding(format!(
                    "embedding dimension changed from {pinned} to {dim}"
                )));
            }
        }

        let mut index = FlatIndex::new(dim);
        for vector in embeddings {
            index
                .add(vector)
                .map_err(|e| Error::Embedding(e.to_string()))?;
        }

        let count = passages.len();
        self.dim = Some(dim);
        self.active = Some(ActiveBuild { passages, index });
        tracing::info!(passages = count, dim, "index built");
        Ok(count)
    }

    /// k-nearest-neighbor search over the active build.
    ///
    /// Returns an empty sequence when no build is active. Query-time
    /// embedding or lookup failures are logged and also yield an empty
    /// sequence; hits referring outside the passage set are filtered.
    pub fn search(&self, query: &str, k: usize) -> Vec<SearchResult> {
        let Some(build) = &self.active else {
            tracing::warn!("search before any successful build");
            return Vec::new();
        };

        let query_vec = match self.embedder.embed_batch(&[query.to_string()]) {
            Ok(mut vecs) if !vecs.is_empty() => vecs.remove(0),
            Ok(_) => {
                tracing::warn!("embedder returned no vector for query");
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(error = %e, "query embedding failed");
                return Vec::new();
            }
        };

        let hits = match build.index.search(&query_vec, k) {
            Ok(hits) => hits,
            Err(e) => {
                tracing::warn!(error = %e, "index search failed");
                return Vec::new();
            }
        };

        hits.into_iter()
            .filter_map(|(idx, score)| {
                build.passages.get(idx).map(|p| SearchResult {
                    passage: p.clone(),
                    score,
                })
            })
            .collect()
    }
}
