use std::env;
use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use docqa_core::config::{
    Config, DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE, DEFAULT_EMBEDDING_DIM, DEFAULT_TOP_K,
};
use docqa_core::error::Error;
use docqa_core::extract::PlainTextExtractor;
use docqa_core::traits::TextExtractor;
use docqa_embed::default_embedder;
use docqa_retrieval::{format_context, Answer, RetrievalSession};
use docqa_text::Chunker;

fn parse_args() -> (String, Vec<PathBuf>, Option<usize>) {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!(
            "Usage: {} \"<question>\" <file.txt> [more files...] [--top-k N]",
            args[0]
        );
        eprintln!(
            "Example: {} 'what is the warranty period?' manual.txt --top-k 5",
            args[0]
        );
        std::process::exit(1);
    }
    let question = args[1].clone();
    let mut files = Vec::new();
    let mut top_k = None;
    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--top-k" => {
                if let Some(n) = args.get(i + 1).and_then(|v| v.parse::<usize>().ok()) {
                    top_k = Some(n);
                    i += 1;
                } else {
                    eprintln!("Error: --top-k requires a number");
                    std::process::exit(1);
                }
            }
            _ if !args[i].starts_with('-') => files.push(PathBuf::from(&args[i])),
            other => eprintln!("Ignoring unknown flag: {other}"),
        }
        i += 1;
    }
    if files.is_empty() {
        eprintln!("Error: at least one document file is required");
        std::process::exit(1);
    }
    (question, files, top_k)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::load().map_err(|e| {
        eprintln!("Error loading config: {}", e);
        e
    })?;
    let (question, files, top_k_arg) = parse_args();

    let chunk_size: usize = config.get("chunking.chunk_size").unwrap_or(DEFAULT_CHUNK_SIZE);
    let chunk_overlap: usize = config
        .get("chunking.chunk_overlap")
        .unwrap_or(DEFAULT_CHUNK_OVERLAP);
    let dim: usize = config.get("embedding.dim").unwrap_or(DEFAULT_EMBEDDING_DIM);
    let top_k = top_k_arg
        .or_else(|| config.get("search.default_k").ok())
        .unwrap_or(DEFAULT_TOP_K);

    let session = RetrievalSession::new(
        default_embedder(dim),
        Chunker::new(chunk_size, chunk_overlap),
    );
    let extractor = PlainTextExtractor::new();

    println!("docqa\n=====");
    for file in &files {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::default_spinner());
        spinner.set_message(format!("Indexing {}", file.display()));
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));

        let raw = match extractor.extract(file) {
            Ok(text) => text,
            Err(e) => {
                spinner.finish_and_clear();
                // extraction failure means "no usable text", not a fatal error
                eprintln!("⚠️  {}: {}", file.display(), Error::Extraction(e.to_string()));
                continue;
            }
        };
        match session.ingest(&raw).await {
            Ok(count) => {
                spinner.finish_and_clear();
                println!("✅ {}: {} passages indexed", file.display(), count);
            }
            Err(Error::EmptyDocument) => {
                spinner.finish_and_clear();
                eprintln!("⚠️  {}: no extractable text, skipped", file.display());
            }
            Err(e) => {
                spinner.finish_and_clear();
                eprintln!("⚠️  {}: {}", file.display(), e);
            }
        }
    }

    println!("\n🔍 Question: {question}");
    match session.answer(&question, top_k).await {
        Ok(Answer::Found { results, citations }) => {
            println!("Found {} relevant passages:\n", results.len());
            for (result, citation) in results.iter().zip(citations.iter()) {
                println!("  [{citation}]  score={:.4}", result.score);
                println!("     📝 {}\n", result.passage.text);
            }
            println!("--- prompt context ---\n{}", format_context(&results, &citations));
        }
        Ok(Answer::NoMatch) => {
            println!("No relevant information was found in the indexed documents.");
        }
        Err(Error::IndexUnavailable) => {
            println!("Please provide a document first; nothing was indexed.");
        }
        Err(e) => {
            eprintln!("⚠️  Query failed: {e}");
        }
    }
    Ok(())
}
