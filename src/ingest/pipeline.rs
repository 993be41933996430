//! Batched embed-and-upsert pipeline

use tracing::error;
use tracing::info;
use tracing::warn;

use crate::chroma::VectorStore;
use crate::embeddings::Embedder;
use crate::ingest::TextSplitter;
use crate::models::vector_id;
use crate::models::ChunkMetadata;
use crate::models::QaRecord;
use crate::Result;

/// Counters reported after an ingestion run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub records: usize,
    pub chunks_embedded: usize,
    pub chunks_failed: usize,
    pub batches_uploaded: usize,
    pub batches_failed: usize,
    /// Post-ingestion readback of the collection's vector count, if the
    /// readback itself succeeded. Verification only, not bookkeeping.
    pub total_count: Option<u64>,
}

/// Pipeline turning Q&A records into upserted vectors.
///
/// Generic over the embedder and store so error handling can be exercised in
/// tests without live services. Strictly sequential: one embedding call at a
/// time, one batch at a time.
pub struct IngestPipeline<'a, E, S> {
    embedder: &'a E,
    store: &'a S,
    splitter: TextSplitter,
    batch_size: usize,
    source: String,
}

impl<'a, E: Embedder, S: VectorStore> IngestPipeline<'a, E, S> {
    pub fn new(embedder: &'a E, store: &'a S, batch_size: usize, source: &str) -> Self {
        Self {
            embedder,
            store,
            splitter: TextSplitter::default(),
            batch_size,
            source: source.to_string(),
        }
    }

    /// Ingest all records, batch by batch.
    ///
    /// A failed embedding skips only that chunk; a failed upsert skips only
    /// that batch. Both are logged with enough context to find the input
    /// again. Record indices are global across the whole file so vector ids
    /// stay stable regardless of batch size.
    pub async fn run(&self, records: &[QaRecord]) -> Result<IngestStats> {
        let mut stats = IngestStats {
            records: records.len(),
            ..IngestStats::default()
        };

        for (batch_number, batch) in records.chunks(self.batch_size).enumerate() {
            let batch_offset = batch_number * self.batch_size;

            let mut ids = Vec::new();
            let mut embeddings = Vec::new();
            let mut metadatas = Vec::new();

            for (offset, record) in batch.iter().enumerate() {
                let record_index = batch_offset + offset;
                let combined = record.combined_text();

                for (chunk_index, chunk) in self.splitter.split(&combined).enumerate() {
                    match self.embedder.embed(chunk).await {
                        Ok(embedding) => {
                            ids.push(vector_id(record_index, chunk_index));
                            embeddings.push(embedding);
                            metadatas.push(ChunkMetadata::new(
                                chunk,
                                record,
                                chunk_index,
                                &self.source,
                            ));
                            stats.chunks_embedded += 1;
                        }
                        Err(e) => {
                            warn!(
                                "Error processing Q&A pair {record_index} chunk {chunk_index}: {e}"
                            );
                            stats.chunks_failed += 1;
                        }
                    }
                }
            }

            if ids.is_empty() {
                continue;
            }

            let uploaded = ids.len();
            match self.store.upsert(ids, embeddings, metadatas).await {
                Ok(()) => {
                    info!("Uploaded batch of {uploaded} vectors");
                    stats.batches_uploaded += 1;
                }
                Err(e) => {
                    error!("Error uploading batch {batch_number}: {e}");
                    stats.batches_failed += 1;
                }
            }
        }

        match self.store.count().await {
            Ok(count) => stats.total_count = Some(count),
            Err(e) => warn!("Could not read back collection count: {e}"),
        }

        Ok(stats)
    }
}
