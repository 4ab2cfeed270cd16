//! sema CLI entry point
//!
//! One-shot commands over a directory of text documents: preview the
//! chunking pipeline, or ingest everything and retrieve context for a
//! question through an OpenAI-compatible embedding endpoint.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use walkdir::WalkDir;

use sema::core::config::Config;
use sema::core::embed::OpenAiEmbeddings;
use sema::core::extract::{DocumentFormat, Extracted, PlainTextExtractor, TextExtractor};
use sema::core::services::Services;
use sema::core::types::DocumentMeta;

#[derive(Parser)]
#[command(name = "sema", version, about = "Semantic retrieval over document collections")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Preview chunk boundaries for the documents in a directory
    /// (no embedding endpoint needed)
    Chunks {
        /// Directory containing .txt/.md/.csv documents
        #[arg(long)]
        docs: PathBuf,
    },

    /// Ingest a directory of documents and retrieve context for a
    /// question
    Ask {
        /// The question to retrieve context for
        query: String,

        /// Directory containing .txt/.md/.csv documents
        #[arg(long)]
        docs: PathBuf,

        /// Number of chunks to retrieve
        #[arg(short)]
        k: Option<usize>,

        /// Print results as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sema=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Command::Chunks { docs } => run_chunks(&config, &docs),
        Command::Ask { query, docs, k, json } => run_ask(config, &query, &docs, k, json).await,
    }
}

fn run_chunks(config: &Config, docs: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let max = config.chunking.max_chunk_chars;

    for (meta, extracted) in collect_documents(docs)? {
        let chunks = sema::core::text::chunk_text(&extracted.text, max);
        println!(
            "{} ({} chunks)",
            meta.filename.bold(),
            chunks.len().to_string().cyan()
        );
        for (i, chunk) in chunks.iter().enumerate() {
            println!(
                "  {} [{} chars] {}",
                format!("#{i}").dimmed(),
                chunk.chars().count(),
                preview(chunk)
            );
        }
    }

    Ok(())
}

async fn run_ask(
    config: Config,
    query: &str,
    docs: &Path,
    k: Option<usize>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    config.log_config();

    let mut embedder = OpenAiEmbeddings::new(
        config.embedding.base_url.clone(),
        config.embedding.model.clone(),
        config.embedding.dimension,
    );
    if let Ok(api_key) = std::env::var("SEMA_EMBED_API_KEY") {
        embedder = embedder.with_api_key(api_key);
    }

    let services = Services::new(config, Arc::new(embedder));

    for (meta, extracted) in collect_documents(docs)? {
        let receipt = services.engine.ingest(&extracted.text, meta.clone()).await?;
        tracing::info!(
            filename = %meta.filename,
            chunks = receipt.chunks_added,
            "ingested"
        );
    }

    let (context, items) = services.engine.retrieve(query, k).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if items.is_empty() {
        println!("{}", "No relevant context found.".yellow());
        return Ok(());
    }

    for item in &items {
        println!(
            "📄 {} (chunk {}, distance {:.4})",
            item.filename.bold().blue(),
            item.chunk_index,
            item.distance
        );
        println!("{}\n", item.text);
    }

    println!("{}", "--- formatted context ---".dimmed());
    println!("{context}");

    Ok(())
}

/// Collect supported documents under `root`, extracting text through
/// the plain-text extractor.
fn collect_documents(
    root: &Path,
) -> Result<Vec<(DocumentMeta, Extracted)>, Box<dyn std::error::Error>> {
    let extractor = PlainTextExtractor;
    let mut documents = Vec::new();

    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let format = match path.extension().and_then(|e| e.to_str()) {
            Some("txt") | Some("md") => DocumentFormat::PlainText,
            Some("csv") => DocumentFormat::Csv,
            _ => continue,
        };

        let data = std::fs::read(path)?;
        let extracted = match extractor.extract(&data, format) {
            Ok(extracted) => extracted,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping document");
                continue;
            }
        };

        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        documents.push((
            DocumentMeta {
                filename,
                format,
                size_bytes: data.len() as u64,
                units: extracted.units,
            },
            extracted,
        ));
    }

    if documents.is_empty() {
        tracing::warn!(root = %root.display(), "no supported documents found");
    }

    Ok(documents)
}

fn preview(chunk: &str) -> String {
    let mut p: String = chunk.chars().take(60).collect();
    if chunk.chars().count() > 60 {
        p.push('…');
    }
    p
}
