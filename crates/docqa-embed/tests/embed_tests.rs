use docqa_embed::{default_embedder, get_default_embedder};

#[test]
fn hash_embedder_shapes_and_determinism() {
    let embedder = get_default_embedder();
    let texts = vec!["hello world".to_string(), "hello world".to_string()];
    let embs = embedder.embed_batch(&texts).expect("embed_batch");
    let v1 = &embs[0];
    let v2 = &embs[1];

    assert_eq!(v1.len(), embedder.dim());

    // Norm approximately 1.0
    let norm: f32 = v1.iter().map(|x| x * x).sum::<f32>().sqrt();
    assert!((norm - 1.0).abs() <= 1e-3, "vector is L2-normalized (norm={norm})");

    // Deterministic for same input
    for (a, b) in v1.iter().zip(v2.iter()) {
        assert!((a - b).abs() <= 1e-6);
    }
}

#[test]
fn different_texts_produce_different_vectors() {
    let embedder = get_default_embedder();
    let embs = embedder
        .embed_batch(&["water purification".to_string(), "stock market".to_string()])
        .expect("embed_batch");
    assert_ne!(embs[0], embs[1]);
}

#[test]
fn arabic_and_english_share_one_vector_space() {
    let embedder = default_embedder(128);
    let embs = embedder
        .embed_batch(&["library of books".to_string(), "مكتبه الكتب".to_string()])
        .expect("embed_batch");
    assert_eq!(embs[0].len(), 128);
    assert_eq!(embs[1].len(), 128);
}

#[test]
fn empty_batch_is_rejected() {
    let embedder = get_default_embedder();
    assert!(embedder.embed_batch(&[]).is_err());
}

#[test]
fn empty_text_embeds_without_panicking() {
    let embedder = get_default_embedder();
    let embs = embedder
        .embed_batch(&[String::new()])
        .expect("embed_batch");
    // all-zero input keeps a finite vector thanks to the norm floor
    assert!(embs[0].iter().all(|x| x.is_finite()));
}
