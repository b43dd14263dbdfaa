//! Plain-text extraction.
//!
//! PDF/DOCX parsing lives with external collaborators behind the
//! `TextExtractor` trait; the only implementation shipped here reads
//! `.txt` files, falling back to lossy UTF-8 for files with unclear
//! encodings.

use crate::traits::TextExtractor;
use std::fs;
use std::path::Path;

#[derive(Debug, Default)]
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> anyhow::Result<String> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(content),
            Err(_) => Ok(String::from_utf8_lossy(&fs::read(path)?).to_string()),
        }
    }
}
