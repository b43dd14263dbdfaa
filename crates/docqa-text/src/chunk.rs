//! Passage chunking with positional metadata.
//!
//! A normalized document is first segmented into page-like blocks, then
//! each block is split recursively on an ordered separator list (coarse
//! to fine) into passages of roughly `chunk_size` characters with
//! `chunk_overlap` characters of shared context between neighbors. The
//! overlap is intentional: it keeps sentence context intact across
//! passage boundaries, which matters for retrieval recall.
//!
//! All sizes are `char` counts, not bytes; Arabic text is multibyte in
//! UTF-8 and byte budgets would halve the effective chunk size.

use docqa_core::config::{DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE};
use docqa_core::types::{Language, Passage};

use crate::normalize::detect_language;

/// Explicit page-break marker, emitted by some PDF extractors.
const PAGE_BREAK: char = '\u{0C}';
/// Segmentation guard: fewer segments than this means the blank-line
/// heuristic found nothing useful.
const MIN_PAGES: usize = 2;
/// Segmentation guard: more segments than this means the heuristic
/// over-split.
const MAX_PAGES: usize = 500;
/// How many leading chars of a passage are used to locate it within its
/// page for line estimation.
const LINE_PROBE_CHARS: usize = 50;
/// How many leading chars of the document feed language detection.
const LANGUAGE_SAMPLE_CHARS: usize = 500;

const ARABIC_SEPARATORS: &[&str] = &["\n\n", "\n", ".", "!", "?", "،", "؛", " ", ""];
const LATIN_SEPARATORS: &[&str] = &["\n\n", "\n", ".", "!", "?", ";", ":", " ", ""];

/// Splits normalized text into an ordered sequence of passages with
/// dense ids and page/line metadata.
#[derive(Debug, Clone)]
pub struct Chunker {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl Default for Chunker {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
        }
    }
}

impl Chunker {
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        Self {
            chunk_size,
            chunk_overlap,
        }
    }

    /// Chunk a normalized document. Empty or whitespace-only input
    /// yields an empty sequence; the caller treats that as "nothing to
    /// index", not as an error.
    pub fn chunk(&self, text: &str) -> Vec<Passage> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let sample: String = text.chars().take(LANGUAGE_SAMPLE_CHARS).collect();
        let language = detect_language(&sample);
        let separators = match language {
            Language::Arabic => ARABIC_SEPARATORS,
            Language::English => LATIN_SEPARATORS,
        };

        let pages = segment_pages(text);
        let mut passages = Vec::new();
        for (page_idx, page_text) in pages.iter().enumerate() {
            if page_text.trim().is_empty() {
                continue;
            }
            for piece in self.split_recursive(page_text, separators) {
                let line = estimate_line(page_text, &piece);
                passages.push(Passage {
                    id: passages.len(),
                    text: piece,
                    page: page_idx + 1,
                    line,
                    language,
                });
            }
        }

        // Non-blank input must always produce at least one passage.
        if passages.is_empty() {
            passages.push(Passage {
                id: 0,
                text: text.to_string(),
                page: 1,
                line: 1,
                language,
            });
        }

        tracing::info!(
            passages = passages.len(),
            pages = pages.len(),
            "document chunked"
        );
        passages
    }

    /// Recursive character splitting: split on the coarsest separator
    /// present, keep short splits for merging, and descend to finer
    /// separators only for splits that still exceed the target size.
    fn split_recursive(&self, text: &str, separators: &[&str]) -> Vec<String> {
        let mut separator: &str = separators.last().copied().unwrap_or("");
        let mut remaining: &[&str] = &[];
        for (i, &s) in separators.iter().enumerate() {
            if s.is_empty() {
                separator = "";
                remaining = &[];
                break;
            }
            if text.contains(s) {
                separator = s;
                remaining = &separators[i + 1..];
                break;
            }
        }

        let splits = split_keep_separator(text, separator);
        let mut chunks = Vec::new();
        let mut good: Vec<&str> = Vec::new();
        for s in splits {
            if char_len(s) < self.chunk_size {
                good.push(s);
            } else {
                if !good.is_empty() {
                    chunks.extend(self.merge_splits(&good));
                    good.clear();
                }
                if remaining.is_empty() {
                    chunks.push(s.to_string());
                } else {
                    chunks.extend(self.split_recursive(s, remaining));
                }
            }
        }
        if !good.is_empty() {
            chunks.extend(self.merge_splits(&good));
        }
        chunks
    }

    /// Greedy window merge with overlap carry-over: accumulate splits up
    /// to `chunk_size`, emit, then drop leading splits until at most
    /// `chunk_overlap` characters remain to seed the next window.
    fn merge_splits(&self, splits: &[&str]) -> Vec<String> {
        let mut docs = Vec::new();
        let mut window: Vec<&str> = Vec::new();
        let mut total = 0usize;

        for &piece in splits {
            let len = char_len(piece);
            if total + len > self.chunk_size && !window.is_empty() {
                if let Some(doc) = join_window(&window) {
                    docs.push(doc);
                }
                while total > self.chunk_overlap
                    || (total + len > self.chunk_size && total > 0)
                {
                    total -= char_len(window[0]);
                    window.remove(0);
                }
            }
            window.push(piece);
            total += len;
        }
        if let Some(doc) = join_window(&window) {
            docs.push(doc);
        }
        docs
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn join_window(parts: &[&str]) -> Option<String> {
    let joined: String = parts.concat();
    let trimmed = joined.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Split the document into page-like segments: explicit form feeds when
/// present, otherwise runs of 3+ newlines (blank lines possibly carrying
/// stray horizontal whitespace). When the heuristic produces an
/// implausible segment count the whole document is treated as one page.
fn segment_pages(text: &str) -> Vec<&str> {
    let segments: Vec<&str> = if text.contains(PAGE_BREAK) {
        text.split(PAGE_BREAK).collect()
    } else {
        split_blank_runs(text)
    };
    if segments.len() < MIN_PAGES || segments.len() > MAX_PAGES {
        vec![text]
    } else {
        segments
    }
}

/// Split on maximal whitespace runs that contain at least three newline
/// characters. The run itself is consumed.
fn split_blank_runs(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut seg_start = 0usize;
    let mut run_start: Option<usize> = None;
    let mut run_newlines = 0usize;

    for (i, ch) in text.char_indices() {
        if ch.is_whitespace() {
            if run_start.is_none() {
                run_start = Some(i);
                run_newlines = 0;
            }
            if ch == '\n' {
                run_newlines += 1;
            }
        } else if let Some(start) = run_start.take() {
            if run_newlines >= 3 {
                segments.push(&text[seg_start..start]);
                seg_start = i;
            }
        }
    }
    segments.push(&text[seg_start..]);
    segments
}

/// Split keeping each separator attached to the split that follows it,
/// so no characters are lost during merging. The empty separator splits
/// into single characters.
fn split_keep_separator<'a>(text: &'a str, sep: &str) -> Vec<&'a str> {
    if sep.is_empty() {
        let mut pieces = Vec::new();
        let mut prev = 0usize;
        for (i, _) in text.char_indices().skip(1) {
            pieces.push(&text[prev..i]);
            prev = i;
        }
        if prev < text.len() {
            pieces.push(&text[prev..]);
        }
        return pieces;
    }

    let mut cuts = vec![0usize];
    let mut from = 0usize;
    while let Some(p) = text[from..].find(sep) {
        let at = from + p;
        if at > 0 {
            cuts.push(at);
        }
        from = at + sep.len();
    }
    cuts.push(text.len());

    let mut pieces = Vec::new();
    for w in cuts.windows(2) {
        let s = &text[w[0]..w[1]];
        if !s.is_empty() {
            pieces.push(s);
        }
    }
    pieces
}

/// Best-effort line estimate: locate the passage's leading chars within
/// its page and count the newlines before the match. Overlap reuse or
/// repeated text can make the lookup miss or hit an earlier occurrence;
/// 1 is the documented fallback.
fn estimate_line(page: &str, piece: &str) -> usize {
    let probe: String = piece.chars().take(LINE_PROBE_CHARS).collect();
    if probe.is_empty() {
        return 1;
    }
    match page.find(&probe) {
        Some(pos) => page[..pos].matches('\n').count() + 1,
        None => 1,
    }
}
