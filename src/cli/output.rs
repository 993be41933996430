//! CLI output formatting utilities
//!
//! This module provides consistent output formatting for the ChromaQA CLI

use crate::config::AppConfig;
use crate::ingest::IngestStats;
use crate::rag::Answer;

/// Print ingestion summary
pub fn print_ingest_stats(stats: &IngestStats) {
    println!();
    println!("Ingestion complete!");
    println!("  Records processed: {}", stats.records);
    println!("  Chunks embedded: {}", stats.chunks_embedded);
    if stats.chunks_failed > 0 {
        println!("  Chunks skipped: {}", stats.chunks_failed);
    }
    println!("  Batches uploaded: {}", stats.batches_uploaded);
    if stats.batches_failed > 0 {
        println!("  Batches failed: {}", stats.batches_failed);
    }
    match stats.total_count {
        Some(count) => println!("Total vectors in collection: {count}"),
        None => println!("Total vectors in collection: unavailable"),
    }
}

/// Print query header and the selected answer (or a no-results message)
pub fn print_query_result(query: &str, total_records: u64, answer: Option<&Answer>) {
    println!("Total records in collection: {total_records}");
    println!();
    println!("🔍 Query: \"{query}\"");
    println!();

    match answer {
        Some(answer) => {
            println!("Answer:");
            println!("{}", answer.answer);
            println!();
            println!("Confidence: {:.2}%", answer.confidence * 100.0);
        }
        None => println!("No results found"),
    }
}

/// Print collection list
pub fn print_collections(names: &[String]) {
    println!("Available collections:");
    for name in names {
        println!("- {name}");
    }
}

/// Print configuration
pub fn print_config(config: &AppConfig) {
    println!("📋 ChromaQA Configuration:");
    println!();

    println!("🗄️  Chroma:");
    println!("  Host: {}", config.chroma_host());
    println!("  Port: {}", config.chroma_port());
    println!("  Collection: {}", config.collection_name());
    println!();

    println!("🧠 Ollama:");
    println!("  Base URL: {}", config.ollama_base_url());
    println!("  Embedding model: {}", config.embed_model());
    println!("  Temperature: {}", config.temperature());
    println!();

    println!("📝 Logging:");
    println!("  Level: {}", config.logging.level);
    println!("  Backtrace: {}", config.logging.backtrace);
}

/// Print colored output functions
pub fn print_info(msg: &str) {
    println!("ℹ️  {msg}");
}

pub fn print_success(msg: &str) {
    println!("✅ {msg}");
}

pub fn print_error(msg: &str) {
    println!("❌ {msg}");
}
