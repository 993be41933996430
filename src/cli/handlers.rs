//! CLI command handlers
//!
//! This module contains all the command handlers for the ChromaQA CLI

use std::path::Path;

use tracing::info;

use crate::chroma::ChromaClient;
use crate::cli::commands::CollectionCommands;
use crate::cli::output::*;
use crate::config::AppConfig;
use crate::embeddings::EmbeddingClient;
use crate::ingest::IngestPipeline;
use crate::models::load_qa_records;
use crate::rag::retriever::select_answer;
use crate::rag::Retriever;
use crate::rag::DEFAULT_QUERY;
use crate::Result;

/// Handle ingest command
pub async fn handle_ingest_command(
    config: &AppConfig,
    json_file: &Path,
    batch_size: usize,
) -> Result<()> {
    // Input file problems are fatal before anything touches the network
    let records = load_qa_records(json_file)?;
    print_info(&format!("Loaded {} Q&A pairs", records.len()));

    let chroma = ChromaClient::new(config.chroma_host(), config.chroma_port())?;
    let embeddings = EmbeddingClient::new(config.ollama_base_url(), config.embed_model())?;

    let collection = chroma.ensure_fresh(config.collection_name()).await?;

    print_info(&format!("Using embedding model: {}", config.embed_model()));
    let dimension = embeddings.verify_connection().await?;
    print_success(&format!(
        "Successfully connected to Ollama server (embedding dimensions: {dimension})"
    ));

    let pipeline = IngestPipeline::new(
        &embeddings,
        &collection,
        batch_size,
        config.collection_name(),
    );
    let stats = pipeline.run(&records).await?;

    print_ingest_stats(&stats);
    Ok(())
}

/// Handle query command
pub async fn handle_query_command(
    config: &AppConfig,
    words: Vec<String>,
    limit: usize,
) -> Result<()> {
    let query = if words.is_empty() {
        DEFAULT_QUERY.to_string()
    } else {
        words.join(" ")
    };

    let chroma = ChromaClient::new(config.chroma_host(), config.chroma_port())?;
    let embeddings = EmbeddingClient::new(config.ollama_base_url(), config.embed_model())?;

    // Retrieval only reads; a missing collection is a surfaced error
    let collection = chroma.get_collection(config.collection_name()).await?;
    let retriever = Retriever::new(collection, embeddings);

    let total_records = retriever.count().await?;
    let result = retriever.query(&query, limit).await?;

    print_query_result(&query, total_records, select_answer(&result).as_ref());
    Ok(())
}

/// Handle collections subcommands
pub async fn handle_collections_command(
    config: &AppConfig,
    command: CollectionCommands,
) -> Result<()> {
    let chroma = ChromaClient::new(config.chroma_host(), config.chroma_port())?;

    match command {
        CollectionCommands::List => {
            let names = chroma.list_collections().await?;
            print_collections(&names);
        }
        CollectionCommands::Delete { name } => {
            let existing = chroma.list_collections().await?;
            if !existing.iter().any(|c| c == &name) {
                print_error(&format!("Collection '{name}' does not exist."));
                return Ok(());
            }

            chroma.delete_collection(&name).await?;
            info!("Deleted collection {name}");
            print_success(&format!("Deleted collection: {name}"));
        }
    }
    Ok(())
}

/// Handle config command
pub fn handle_config_command(config: &AppConfig) {
    print_config(config);
}
