//! Embedding generation via an Ollama server
//!
//! One HTTP call per text; there is no network-level batching. The ingestion
//! pipeline decides what happens on failure (skip the chunk), the retrieval
//! path surfaces the error as-is.

pub mod client;

pub use client::EmbeddingClient;
pub use client::Embedder;
