//! Text canonicalization and language detection.
//!
//! Extracted text, particularly from Arabic PDFs, arrives with uneven
//! whitespace and several interchangeable letter forms. `normalize`
//! folds those into one canonical shape so that chunking and embedding
//! see consistent input. The function is pure, total and idempotent.

use docqa_core::types::Language;

/// Fraction of Arabic-block characters above which a text counts as
/// Arabic.
const ARABIC_RATIO: f32 = 0.3;

/// Canonicalize raw extracted text:
/// - runs of spaces collapse to a single space
/// - runs of 3+ consecutive newlines collapse to exactly two
///   (paragraph breaks survive)
/// - the lam-alef ligature decomposes to its two letters
/// - alef variants map to bare alef, dotless yeh to yeh, teh marbuta
///   to heh
///
/// Empty input returns an empty string.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;
    let mut newline_run = 0usize;

    for ch in raw.chars() {
        match ch {
            ' ' => pending_space = true,
            '\n' => {
                // A space between newlines breaks the run, matching the
                // strict "consecutive newlines" rule.
                if pending_space {
                    flush_whitespace(&mut out, &mut newline_run, &mut pending_space);
                }
                newline_run += 1;
            }
            _ => {
                flush_whitespace(&mut out, &mut newline_run, &mut pending_space);
                push_normalized(&mut out, ch);
            }
        }
    }
    flush_whitespace(&mut out, &mut newline_run, &mut pending_space);
    out
}

fn flush_whitespace(out: &mut String, newline_run: &mut usize, pending_space: &mut bool) {
    for _ in 0..(*newline_run).min(2) {
        out.push('\n');
    }
    *newline_run = 0;
    if *pending_space {
        out.push(' ');
        *pending_space = false;
    }
}

fn push_normalized(out: &mut String, ch: char) {
    match ch {
        // lam-alef ligature as produced by some PDF extractors
        'ﻻ' => {
            out.push('ل');
            out.push('ا');
        }
        // alef with hamza above/below, alef madda
        'أ' | 'إ' | 'آ' => out.push('ا'),
        // alef maqsura to yeh
        'ى' => out.push('ي'),
        // teh marbuta to heh
        'ة' => out.push('ه'),
        _ => out.push(ch),
    }
}

/// Classify a text as Arabic or English by the share of characters in
/// the Arabic Unicode block. Empty text defaults to Arabic, matching
/// the primary audience of the system.
pub fn detect_language(text: &str) -> Language {
    let mut total = 0usize;
    let mut arabic = 0usize;
    for ch in text.chars() {
        total += 1;
        if ('\u{0600}'..='\u{06FF}').contains(&ch) {
            arabic += 1;
        }
    }
    if total == 0 {
        return Language::Arabic;
    }
    if (arabic as f32) > (total as f32) * ARABIC_RATIO {
        Language::Arabic
    } else {
        Language::English
    }
}
