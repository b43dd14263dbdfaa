use std::path::Path;

/// The only interface to the embedding model. Implementations must be
/// deterministic and embed Arabic and English into the same vector
/// space. `embed_batch` must be called with a non-empty batch; the
/// output dimension is `dim()` for every vector.
pub trait Embedder: Send + Sync {
    fn dim(&self) -> usize;
    fn embed_batch(&self, texts: &[String]) -> anyhow::Result<Vec<Vec<f32>>>;
}

/// Seam for the per-format extraction collaborator. May return an empty
/// string for unextractable content (not an error) and should error only
/// on unreadable files.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, path: &Path) -> anyhow::Result<String>;
}
