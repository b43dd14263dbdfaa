use thiserror::Error;

/// Failure taxonomy of the retrieval pipeline. Every variant is recovered
/// at the boundary where it occurs and translated into a user-facing
/// message by the surrounding application; nothing here aborts the
/// process.
#[derive(Debug, Error)]
pub enum Error {
    /// The extraction collaborator produced no usable text.
    #[error("text extraction failed: {0}")]
    Extraction(String),

    /// Chunking yielded zero passages; the document is skipped and any
    /// previously built index stays active.
    #[error("document produced no passages")]
    EmptyDocument,

    /// Batch embedding failed during a build. The build fails as a whole
    /// and the previously active index is preserved.
    #[error("embedding failed: {0}")]
    Embedding(String),

    /// A query arrived before any successful build.
    #[error("no document has been indexed yet")]
    IndexUnavailable,

    /// Internal operation failure (task join, lock handoff).
    #[error("operation failed: {0}")]
    Operation(String),
}

pub type Result<T> = std::result::Result<T, Error>;
