//! Ollama embedding API client

use reqwest::Client;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::errors::ChromaQaError;
use crate::errors::Result;

/// Request timeout for embedding calls
const EMBED_TIMEOUT_SECS: u64 = 30;

/// Text used for the startup connectivity probe
const PROBE_TEXT: &str = "test connection";

/// Anything that can turn text into an embedding vector.
///
/// The pipeline and retriever are generic over this so tests can substitute
/// a stub without a running Ollama server.
pub trait Embedder {
    fn embed(&self, text: &str) -> impl std::future::Future<Output = Result<Vec<f32>>> + Send;
}

/// Client for generating embeddings from an Ollama server
pub struct EmbeddingClient {
    model: String,
    base_url: String,
    client: Client,
}

impl EmbeddingClient {
    /// Create a new embedding client
    ///
    /// # Errors
    /// - HTTP client build errors (invalid configuration)
    pub fn new(base_url: &str, model: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(EMBED_TIMEOUT_SECS))
            .build()
            .map_err(|e| ChromaQaError::Http(e.to_string()))?;

        Ok(Self {
            model: model.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Verify the Ollama server is reachable by embedding a probe string.
    ///
    /// Returns the embedding dimension on success. Ingestion calls this once
    /// before any real work so an unreachable server fails fast instead of
    /// producing a run where every chunk is skipped.
    pub async fn verify_connection(&self) -> Result<usize> {
        let embedding = self.generate(PROBE_TEXT).await.map_err(|e| {
            ChromaQaError::Embedding(format!(
                "Failed to connect to Ollama server at {}: {e}",
                self.base_url
            ))
        })?;
        Ok(embedding.len())
    }

    /// Generate an embedding for a single text
    ///
    /// # Errors
    /// - API request failures (network errors, timeouts)
    /// - Invalid API responses (non-2xx status, malformed JSON)
    pub async fn generate(&self, text: &str) -> Result<Vec<f32>> {
        #[derive(Serialize)]
        struct OllamaRequest<'a> {
            model: &'a str,
            prompt: &'a str,
        }

        #[derive(Deserialize)]
        struct OllamaResponse {
            embedding: Vec<f32>,
        }

        let url = format!("{}/api/embeddings", self.base_url);
        debug!("Calling Ollama embeddings API: {}", url);

        let request = OllamaRequest {
            model: &self.model,
            prompt: text,
        };

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| ChromaQaError::Http(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ChromaQaError::Embedding(format!(
                "Ollama API error ({status}): {error_text}"
            )));
        }

        let result: OllamaResponse = response
            .json()
            .await
            .map_err(|e| ChromaQaError::Embedding(format!("Failed to parse response: {e}")))?;

        Ok(result.embedding)
    }
}

impl Embedder for EmbeddingClient {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        self.generate(text).await
    }
}
