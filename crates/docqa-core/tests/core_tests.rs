use std::fs;
use std::io::Write;
use tempfile::TempDir;

use docqa_core::error::Error;
use docqa_core::extract::PlainTextExtractor;
use docqa_core::traits::TextExtractor;
use docqa_core::types::{Citation, Language, Passage};

#[test]
fn citation_label_format() {
    let citation = Citation {
        reference: 2,
        page: 7,
        line: 13,
    };
    assert_eq!(citation.to_string(), "reference 2: page 7, line 13");
}

#[test]
fn error_messages_are_user_translatable() {
    assert_eq!(
        Error::EmptyDocument.to_string(),
        "document produced no passages"
    );
    assert_eq!(
        Error::IndexUnavailable.to_string(),
        "no document has been indexed yet"
    );
    assert!(Error::Embedding("boom".into()).to_string().contains("boom"));
    assert!(Error::Extraction("bad file".into())
        .to_string()
        .starts_with("text extraction failed"));
}

#[test]
fn passage_serde_round_trip() {
    let passage = Passage {
        id: 3,
        text: "النص العربي".to_string(),
        page: 2,
        line: 5,
        language: Language::Arabic,
    };
    let json = serde_json::to_string(&passage).expect("serialize");
    assert!(json.contains("\"arabic\""), "language serializes lowercase");
    let back: Passage = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back.id, 3);
    assert_eq!(back.text, passage.text);
    assert_eq!(back.language, Language::Arabic);
}

#[test]
fn plain_text_extractor_reads_utf8() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("doc.txt");
    let mut f = fs::File::create(&path).unwrap();
    writeln!(f, "hello world").unwrap();

    let extractor = PlainTextExtractor::new();
    let text = extractor.extract(&path).expect("extract");
    assert_eq!(text.trim(), "hello world");
}

#[test]
fn plain_text_extractor_falls_back_on_invalid_utf8() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("doc.txt");
    fs::write(&path, [b'o', b'k', 0xFF, b'!']).unwrap();

    let extractor = PlainTextExtractor::new();
    let text = extractor.extract(&path).expect("lossy extract");
    assert!(text.starts_with("ok"));
    assert!(text.ends_with('!'));
}
