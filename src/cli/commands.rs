//! CLI command definitions and argument parsing

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(name = "chromaqa")]
#[command(about = "Q&A ingestion and similarity search for ChromaDB with Ollama embeddings")]
#[command(version)]
pub struct Cli {
    /// Enable verbose debug logging (default: info level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to the configuration file (default: config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ingest Q&A pairs from a JSON file into the collection
    Ingest {
        /// Path to the JSON file containing an array of {question, answer} objects
        json_file: PathBuf,
        /// Number of records per upsert batch
        #[arg(short, long, default_value_t = crate::ingest::DEFAULT_BATCH_SIZE)]
        batch_size: usize,
    },
    /// Run a similarity query against the collection
    Query {
        /// The question to ask (defaults to a sample question)
        query: Vec<String>,
        /// Number of nearest matches to request
        #[arg(short, long, default_value_t = crate::rag::DEFAULT_TOP_K)]
        limit: usize,
    },
    /// Collection management commands
    #[command(subcommand)]
    Collections(CollectionCommands),
    /// Show current configuration
    Config,
}

#[derive(Subcommand)]
pub enum CollectionCommands {
    /// List all collections on the Chroma server
    List,
    /// Delete a collection by name
    Delete {
        /// Name of the collection to delete
        name: String,
    },
}
