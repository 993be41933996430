//! Data model for Q&A ingestion and retrieval

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

/// A single question/answer pair, the source unit of ingestion.
///
/// Loaded from a JSON array and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QaRecord {
    pub question: String,
    pub answer: String,
}

impl QaRecord {
    /// Combined text that gets chunked and embedded
    pub fn combined_text(&self) -> String {
        format!("Question: {}\nAnswer: {}", self.question, self.answer)
    }
}

/// Load Q&A records from a UTF-8 JSON file containing an array of
/// `{question, answer}` objects. An unreadable or malformed file is fatal.
pub fn load_qa_records<P: AsRef<Path>>(path: P) -> crate::Result<Vec<QaRecord>> {
    let content = std::fs::read_to_string(path)?;
    let records: Vec<QaRecord> = serde_json::from_str(&content)?;
    Ok(records)
}

/// Metadata stored alongside each vector in the collection.
///
/// `chunk_index` is a stringified integer for compatibility with collections
/// written by earlier ingestion tooling; `source` is the collection name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChunkMetadata {
    pub text: String,
    pub question: String,
    pub answer: String,
    pub chunk_index: String,
    pub source: String,
}

impl ChunkMetadata {
    pub fn new(chunk: &str, record: &QaRecord, chunk_index: usize, source: &str) -> Self {
        Self {
            text: chunk.to_string(),
            question: record.question.clone(),
            answer: record.answer.clone(),
            chunk_index: chunk_index.to_string(),
            source: source.to_string(),
        }
    }
}

/// Deterministic vector id: `qa_{record_index}_{chunk_index}`.
///
/// The record index is global across the input file, so re-ingesting the same
/// file produces the same ids and upserts overwrite instead of duplicating.
pub fn vector_id(record_index: usize, chunk_index: usize) -> String {
    format!("qa_{record_index}_{chunk_index}")
}

/// A single similarity match returned by the collection, closest-first
#[derive(Debug, Clone)]
pub struct QueryMatch {
    pub metadata: ChunkMetadata,
    pub document: Option<String>,
    pub distance: f32,
}

/// Ordered result of a similarity query
#[derive(Debug, Clone, Default)]
pub struct QueryResult {
    pub matches: Vec<QueryMatch>,
}

impl QueryResult {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
