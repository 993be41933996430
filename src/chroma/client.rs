//! Typed client for the Chroma v1 REST API

use reqwest::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;
use tracing::info;

use crate::chroma::VectorStore;
use crate::errors::ChromaQaError;
use crate::errors::Result;
use crate::models::ChunkMetadata;
use crate::models::QueryMatch;
use crate::models::QueryResult;

/// Fields requested alongside similarity matches
const QUERY_INCLUDE: [&str; 3] = ["metadatas", "documents", "distances"];

#[derive(Debug, Deserialize)]
struct CollectionInfo {
    id: String,
    name: String,
}

/// Client for a Chroma server
pub struct ChromaClient {
    base_url: String,
    http: Client,
}

impl ChromaClient {
    /// Create a client for the Chroma server at `host:port`
    pub fn new(host: &str, port: u16) -> Result<Self> {
        let http = Client::builder()
            .build()
            .map_err(|e| ChromaQaError::Http(e.to_string()))?;

        Ok(Self {
            base_url: format!("http://{host}:{port}/api/v1"),
            http,
        })
    }

    /// List the names of all collections on the server
    pub async fn list_collections(&self) -> Result<Vec<String>> {
        let url = format!("{}/collections", self.base_url);
        debug!("Listing collections: {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ChromaQaError::Http(e.to_string()))?;

        let response = check_status(response, "list collections").await?;

        let collections: Vec<CollectionInfo> = response
            .json()
            .await
            .map_err(|e| ChromaQaError::Collection(format!("Failed to parse response: {e}")))?;

        Ok(collections.into_iter().map(|c| c.name).collect())
    }

    /// Create a new empty collection
    pub async fn create_collection(&self, name: &str) -> Result<CollectionHandle> {
        #[derive(Serialize)]
        struct CreateRequest<'a> {
            name: &'a str,
            get_or_create: bool,
        }

        let url = format!("{}/collections", self.base_url);
        debug!("Creating collection {name}: {url}");

        let response = self
            .http
            .post(&url)
            .json(&CreateRequest {
                name,
                get_or_create: false,
            })
            .send()
            .await
            .map_err(|e| ChromaQaError::Http(e.to_string()))?;

        let response = check_status(response, "create collection").await?;

        let info: CollectionInfo = response
            .json()
            .await
            .map_err(|e| ChromaQaError::Collection(format!("Failed to parse response: {e}")))?;

        Ok(self.handle(info))
    }

    /// Delete a collection by name
    pub async fn delete_collection(&self, name: &str) -> Result<()> {
        let url = format!("{}/collections/{name}", self.base_url);
        debug!("Deleting collection {name}: {url}");

        let response = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(|e| ChromaQaError::Http(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ChromaQaError::CollectionNotFound(name.to_string()));
        }
        check_status(response, "delete collection").await?;
        Ok(())
    }

    /// Fetch a handle to an existing collection; fails if it does not exist.
    ///
    /// This is the retrieval path's accessor: retrieval never creates a
    /// collection.
    pub async fn get_collection(&self, name: &str) -> Result<CollectionHandle> {
        let url = format!("{}/collections/{name}", self.base_url);
        debug!("Fetching collection {name}: {url}");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ChromaQaError::Http(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ChromaQaError::CollectionNotFound(name.to_string()));
        }
        let response = check_status(response, "get collection").await?;

        let info: CollectionInfo = response
            .json()
            .await
            .map_err(|e| ChromaQaError::Collection(format!("Failed to parse response: {e}")))?;

        Ok(self.handle(info))
    }

    /// Recreate `name` as an empty collection, deleting any existing one.
    ///
    /// Ingestion is a full rebuild, not an incremental merge: dropping the
    /// old collection avoids stale vectors from runs with different chunking
    /// parameters.
    pub async fn ensure_fresh(&self, name: &str) -> Result<CollectionHandle> {
        let existing = self.list_collections().await?;
        if existing.iter().any(|c| c == name) {
            self.delete_collection(name).await?;
            info!("Deleted existing collection: {name}");
        }

        let handle = self.create_collection(name).await?;
        info!("Created new collection: {name}");
        Ok(handle)
    }

    fn handle(&self, info: CollectionInfo) -> CollectionHandle {
        CollectionHandle {
            id: info.id,
            name: info.name,
            base_url: self.base_url.clone(),
            http: self.http.clone(),
        }
    }
}

/// Handle to a single collection
pub struct CollectionHandle {
    id: String,
    name: String,
    base_url: String,
    http: Client,
}

impl CollectionHandle {
    /// Collection name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Upsert a batch of vectors in one call.
    ///
    /// The call is atomic at the server: it either lands the whole batch or
    /// none of it.
    pub async fn upsert(
        &self,
        ids: Vec<String>,
        embeddings: Vec<Vec<f32>>,
        metadatas: Vec<ChunkMetadata>,
    ) -> Result<()> {
        #[derive(Serialize)]
        struct UpsertRequest {
            ids: Vec<String>,
            embeddings: Vec<Vec<f32>>,
            metadatas: Vec<ChunkMetadata>,
        }

        let url = format!("{}/collections/{}/upsert", self.base_url, self.id);
        debug!("Upserting {} vectors: {}", ids.len(), url);

        let response = self
            .http
            .post(&url)
            .json(&UpsertRequest {
                ids,
                embeddings,
                metadatas,
            })
            .send()
            .await
            .map_err(|e| ChromaQaError::Http(e.to_string()))?;

        check_status(response, "upsert").await?;
        Ok(())
    }

    /// Query the `n_results` nearest vectors for one embedding
    pub async fn query(&self, embedding: Vec<f32>, n_results: usize) -> Result<QueryResult> {
        #[derive(Serialize)]
        struct QueryRequest {
            query_embeddings: Vec<Vec<f32>>,
            n_results: usize,
            include: Vec<&'static str>,
        }

        // Chroma nests results per query embedding; we only ever send one.
        #[derive(Deserialize)]
        struct QueryResponse {
            metadatas: Option<Vec<Vec<serde_json::Value>>>,
            documents: Option<Vec<Vec<Option<String>>>>,
            distances: Option<Vec<Vec<f32>>>,
        }

        let url = format!("{}/collections/{}/query", self.base_url, self.id);
        debug!("Querying {} nearest vectors: {}", n_results, url);

        let response = self
            .http
            .post(&url)
            .json(&QueryRequest {
                query_embeddings: vec![embedding],
                n_results,
                include: QUERY_INCLUDE.to_vec(),
            })
            .send()
            .await
            .map_err(|e| ChromaQaError::Http(e.to_string()))?;

        let response = check_status(response, "query").await?;

        let raw: QueryResponse = response
            .json()
            .await
            .map_err(|e| ChromaQaError::Collection(format!("Failed to parse response: {e}")))?;

        let metadatas = raw
            .metadatas
            .and_then(|mut m| (!m.is_empty()).then(|| m.swap_remove(0)))
            .unwrap_or_default();
        let mut documents = raw
            .documents
            .and_then(|mut d| (!d.is_empty()).then(|| d.swap_remove(0)))
            .unwrap_or_default();
        let distances = raw
            .distances
            .and_then(|mut d| (!d.is_empty()).then(|| d.swap_remove(0)))
            .unwrap_or_default();

        let mut matches = Vec::with_capacity(metadatas.len());
        for (i, (metadata, distance)) in metadatas.into_iter().zip(distances).enumerate() {
            let metadata: ChunkMetadata = serde_json::from_value(metadata)?;
            let document = documents.get_mut(i).and_then(Option::take);
            matches.push(QueryMatch {
                metadata,
                document,
                distance,
            });
        }

        Ok(QueryResult { matches })
    }

    /// Total number of vectors in the collection
    pub async fn count(&self) -> Result<u64> {
        let url = format!("{}/collections/{}/count", self.base_url, self.id);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ChromaQaError::Http(e.to_string()))?;

        let response = check_status(response, "count").await?;

        response
            .json()
            .await
            .map_err(|e| ChromaQaError::Collection(format!("Failed to parse response: {e}")))
    }
}

impl VectorStore for CollectionHandle {
    async fn upsert(
        &self,
        ids: Vec<String>,
        embeddings: Vec<Vec<f32>>,
        metadatas: Vec<ChunkMetadata>,
    ) -> Result<()> {
        CollectionHandle::upsert(self, ids, embeddings, metadatas).await
    }

    async fn count(&self) -> Result<u64> {
        CollectionHandle::count(self).await
    }
}

/// Map a non-2xx response to a collection error carrying the server's body
async fn check_status(response: reqwest::Response, operation: &str) -> Result<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(ChromaQaError::Collection(format!(
        "Chroma {operation} failed ({status}): {error_text}"
    )))
}
