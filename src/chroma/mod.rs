//! ChromaDB HTTP client
//!
//! Thin typed wrapper over the Chroma v1 REST API. Collection lifecycle
//! (list/create/delete/get) lives on [`ChromaClient`]; per-collection
//! operations (upsert/query/count) live on [`CollectionHandle`].

pub mod client;

pub use client::ChromaClient;
pub use client::CollectionHandle;

use crate::models::ChunkMetadata;
use crate::Result;

/// Write/readback surface of a vector collection.
///
/// The ingestion pipeline is generic over this so batch and error handling
/// can be tested against a stub store.
pub trait VectorStore {
    fn upsert(
        &self,
        ids: Vec<String>,
        embeddings: Vec<Vec<f32>>,
        metadatas: Vec<ChunkMetadata>,
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    fn count(&self) -> impl std::future::Future<Output = Result<u64>> + Send;
}
