use docqa_core::types::Language;
use docqa_text::{normalize, Chunker};

#[test]
fn empty_input_yields_no_passages() {
    let chunker = Chunker::default();
    assert!(chunker.chunk("").is_empty());
    assert!(chunker.chunk("   \n\n   ").is_empty());
}

#[test]
fn short_document_becomes_single_passage_on_page_one() {
    let chunker = Chunker::default();
    let text = normalize("Line one.\n\nLine two.\n\n\nLine three.");
    let passages = chunker.chunk(&text);

    assert_eq!(passages.len(), 1);
    assert_eq!(passages[0].id, 0);
    assert_eq!(passages[0].page, 1);
    assert_eq!(passages[0].line, 1);
    assert_eq!(passages[0].language, Language::English);
}

#[test]
fn form_feeds_segment_pages_in_order() {
    let chunker = Chunker::default();
    let text = "First page text.\u{0C}Second page text.\u{0C}Third page text.";
    let passages = chunker.chunk(text);

    assert_eq!(passages.len(), 3);
    let pages: Vec<usize> = passages.iter().map(|p| p.page).collect();
    assert_eq!(pages, vec![1, 2, 3]);
    let ids: Vec<usize> = passages.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![0, 1, 2]);
}

#[test]
fn implausible_segmentation_falls_back_to_single_page() {
    let chunker = Chunker::default();
    // 600 form-feed separated scraps exceed the 500-page guard
    let text = "word\u{0C}".repeat(600);
    let passages = chunker.chunk(&text);
    assert!(passages.iter().all(|p| p.page == 1));
}

#[test]
fn passage_ids_are_dense_in_emission_order() {
    let chunker = Chunker::default();
    let paragraphs: Vec<String> = (0..6)
        .map(|i| format!("Paragraph {i} {}", "filler text ".repeat(15)))
        .collect();
    let text = paragraphs.join("\n\n");
    let passages = chunker.chunk(&text);

    assert!(passages.len() > 1, "long document must split");
    for (i, p) in passages.iter().enumerate() {
        assert_eq!(p.id, i, "ids must be dense in emission order");
        assert!(p.page >= 1);
        assert!(p.line >= 1);
        assert!(!p.text.is_empty());
    }
}

#[test]
fn passages_respect_the_target_size() {
    let chunker = Chunker::default();
    let sentences: Vec<String> = (0..40)
        .map(|i| format!("Sentence number {i} talks about topic {i} at length."))
        .collect();
    let text = sentences.join(" ");
    let passages = chunker.chunk(&text);

    assert!(passages.len() > 1);
    for p in &passages {
        assert!(
            p.text.chars().count() <= 500,
            "passage of {} chars exceeds target",
            p.text.chars().count()
        );
    }
}

#[test]
fn consecutive_passages_share_overlap() {
    let chunker = Chunker::default();
    let sentences: Vec<String> = (0..12)
        .map(|i| format!("Unique sentence {i} with some additional padding words here."))
        .collect();
    let text = sentences.join(" ");
    let passages = chunker.chunk(&text);

    assert!(passages.len() >= 2, "need at least two passages");
    for pair in passages.windows(2) {
        let probe: String = pair[1].text.chars().take(25).collect();
        assert!(
            pair[0].text.contains(probe.trim_start_matches(['.', ' '])),
            "next passage must open with text carried over from the previous one"
        );
    }
}

#[test]
fn every_token_of_a_single_page_document_survives_chunking() {
    let chunker = Chunker::default();
    let paragraphs: Vec<String> = (0..5)
        .map(|i| format!("paragraph{i} alpha{i} bravo{i} charlie{i} {}", "pad ".repeat(60)))
        .collect();
    let text = normalize(&paragraphs.join("\n\n"));
    let passages = chunker.chunk(&text);

    for token in text.split_whitespace() {
        assert!(
            passages.iter().any(|p| p.text.contains(token)),
            "token {token:?} missing from all passages"
        );
    }
}

#[test]
fn later_passages_carry_larger_line_estimates() {
    let chunker = Chunker::default();
    // two distinct ~400-char paragraphs force two passages on one page
    let text = format!(
        "Opening paragraph about alpha. {}\n\nClosing paragraph about omega. {}",
        "first filler ".repeat(30),
        "second filler ".repeat(30)
    );
    let passages = chunker.chunk(&text);

    assert_eq!(passages.len(), 2);
    assert_eq!(passages[0].line, 1);
    assert!(
        passages[1].line > passages[0].line,
        "second passage starts after the paragraph break"
    );
}

#[test]
fn arabic_document_is_tagged_arabic() {
    let chunker = Chunker::default();
    let text = normalize("هذا مستند عربي. يتحدث عن المكتبه الوطنيه، ويشرح تاريخها بالتفصيل.");
    let passages = chunker.chunk(&text);

    assert!(!passages.is_empty());
    assert!(passages.iter().all(|p| p.language == Language::Arabic));
}
