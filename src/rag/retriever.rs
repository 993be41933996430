//! Similarity query and result selection

use tracing::debug;

use crate::chroma::CollectionHandle;
use crate::embeddings::EmbeddingClient;
use crate::models::QueryResult;
use crate::rag::Answer;
use crate::Result;

/// Retriever over one collection.
///
/// Built once at startup from an existing collection handle; the retrieval
/// path never creates collections.
pub struct Retriever {
    collection: CollectionHandle,
    embeddings: EmbeddingClient,
}

impl Retriever {
    pub fn new(collection: CollectionHandle, embeddings: EmbeddingClient) -> Self {
        Self {
            collection,
            embeddings,
        }
    }

    /// Total number of stored vectors
    pub async fn count(&self) -> Result<u64> {
        self.collection.count().await
    }

    /// Embed `text` and fetch its `k` nearest stored vectors.
    ///
    /// A failed query embedding aborts here: there is no fallback for an
    /// unembeddable query.
    pub async fn query(&self, text: &str, k: usize) -> Result<QueryResult> {
        debug!("Retrieving top {k} matches for: {text}");

        let embedding = self.embeddings.generate(text).await?;
        self.collection.query(embedding, k).await
    }
}

/// Pick the single closest match's answer.
///
/// Returns `None` when there are no matches; the caller renders that as a
/// "no results" outcome rather than an error.
pub fn select_answer(result: &QueryResult) -> Option<Answer> {
    let closest = result.matches.first()?;
    Some(Answer {
        answer: closest.metadata.answer.clone(),
        confidence: 1.0 - closest.distance,
    })
}
