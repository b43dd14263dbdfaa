#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

//! Session-scoped retrieval orchestration.
//!
//! One `RetrievalSession` per conversation, created at session start and
//! dropped at session end; never a process-wide singleton. The session
//! accumulates passages across every document ingested within it (a
//! second upload appends rather than silently replacing the first) and
//! rebuilds the embedding index wholesale after each ingest.
//!
//! Concurrency policy: ingest and query both run on the blocking thread
//! pool under one mutex, so builds within a session are serialized and a
//! query issued while a build is in flight waits for the build to
//! finish. A partially built index is never observable.

use std::sync::{Arc, Mutex, MutexGuard};

use docqa_core::error::{Error, Result};
use docqa_core::traits::Embedder;
use docqa_core::types::{Citation, Passage, SearchResult};
use docqa_text::{normalize, Chunker};
use docqa_vector::EmbeddingIndex;

/// Outcome of a query against the session.
#[derive(Debug)]
pub enum Answer {
    /// Ranked passages with citation labels in the same order,
    /// 1-indexed. Labels are assigned after ranking and never
    /// reordered.
    Found {
        results: Vec<SearchResult>,
        citations: Vec<Citation>,
    },
    /// The index holds passages but none were returned for this query.
    /// The caller must tell the user that no relevant passage exists;
    /// the core never fabricates a response.
    NoMatch,
}

struct SessionState {
    index: EmbeddingIndex,
    passages: Vec<Passage>,
    chunker: Chunker,
}

pub struct RetrievalSession {
    state: Arc<Mutex<SessionState>>,
}

impl RetrievalSession {
    pub fn new(embedder: Box<dyn Embedder>, chunker: Chunker) -> Self {
        Self {
            state: Arc::new(Mutex::new(SessionState {
                index: EmbeddingIndex::new(embedder),
                passages: Vec::new(),
                chunker,
            })),
        }
    }

    /// Normalize, chunk, append and rebuild for one uploaded document.
    ///
    /// Returns the number of passages the document contributed. Passage
    /// ids stay dense across the whole session: the new document's
    /// passages are re-based after the ones already indexed. A document
    /// that yields zero passages fails with `EmptyDocument` and leaves
    /// the previous build untouched, as does an embedding failure.
    pub async fn ingest(&self, raw_text: &str) -> Result<usize> {
        let state = Arc::clone(&self.state);
        let raw = raw_text.to_string();
        run_blocking(move || {
            let mut state = lock(&state);

            let normalized = normalize(&raw);
            let chunked = state.chunker.chunk(&normalized);
            if chunked.is_empty() {
                return Err(Error::EmptyDocument);
            }

            let mut combined = state.passages.clone();
            let base = combined.len();
            let added = chunked.len();
            for mut passage in chunked {
                passage.id = base + passage.id;
                combined.push(passage);
            }

            state.index.build(combined.clone())?;
            state.passages = combined;
            tracing::info!(added, total = state.passages.len(), "document ingested");
            Ok(added)
        })
        .await
    }

    /// Answer a user query with up to `k` ranked passages plus citation
    /// labels. Fails with `IndexUnavailable` before the first successful
    /// ingest.
    pub async fn answer(&self, query: &str, k: usize) -> Result<Answer> {
        let state = Arc::clone(&self.state);
        let query = query.to_string();
        run_blocking(move || {
            let state = lock(&state);
            if !state.index.is_built() {
                return Err(Error::IndexUnavailable);
            }

            let results = state.index.search(&query, k);
            if results.is_empty() {
                return Ok(Answer::NoMatch);
            }

            let citations = results
                .iter()
                .enumerate()
                .map(|(i, r)| Citation {
                    reference: i + 1,
                    page: r.passage.page,
                    line: r.passage.line,
                })
                .collect();
            Ok(Answer::Found { results, citations })
        })
        .await
    }

    /// Total passages accumulated across all ingests in this session.
    pub async fn passage_count(&self) -> usize {
        let state = Arc::clone(&self.state);
        tokio::task::spawn_blocking(move || lock(&state).passages.len())
            .await
            .unwrap_or(0)
    }
}

/// Render results and citations as a context block ready for prompt
/// interpolation: one `[label]: text` paragraph per passage.
pub fn format_context(results: &[SearchResult], citations: &[Citation]) -> String {
    results
        .iter()
        .zip(citations.iter())
        .map(|(r, c)| format!("[{c}]: {}", r.passage.text))
        .collect::<Vec<_>>()
        .join("\n\n")
}

async fn run_blocking<T, F>(f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| Error::Operation(format!("blocking task failed: {e}")))?
}

fn lock(state: &Arc<Mutex<SessionState>>) -> MutexGuard<'_, SessionState> {
    match state.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
