pub mod chroma;
pub mod cli;
pub mod config;
pub mod embeddings;
pub mod errors;
pub mod ingest;
pub mod logging;
pub mod models;
pub mod rag;

#[cfg(test)]
mod config_tests;

pub use config::AppConfig;
pub use errors::*;
