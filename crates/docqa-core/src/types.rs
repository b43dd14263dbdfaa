//! Domain types shared by the text pipeline, the vector index and the
//! retrieval layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Document-level language, detected once per document and stamped on
/// every passage. Arabic and English share one embedding space; the tag
/// only drives separator selection during chunking and display hints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Arabic,
    English,
}

/// A retrievable unit of document text.
///
/// - `id`: dense index in emission order, `0..n-1` within one session
/// - `text`: non-empty normalized passage text
/// - `page`: 1-based page the passage came from
/// - `line`: 1-based line estimate within that page (best effort)
///
/// Immutable once created; a rebuild produces fresh passages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Passage {
    pub id: usize,
    pub text: String,
    pub page: usize,
    pub line: usize,
    pub language: Language,
}

/// A single ranked hit. `score` is squared Euclidean distance between
/// the query vector and the passage vector, so lower is more similar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub passage: Passage,
    pub score: f32,
}

/// Caller-facing provenance label for one result, 1-indexed in result
/// order. Labels are derived from passage metadata after ranking and are
/// never reordered afterwards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Citation {
    pub reference: usize,
    pub page: usize,
    pub line: usize,
}

impl fmt::Display for Citation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reference {}: page {}, line {}",
            self.reference, self.page, self.line
        )
    }
}
