//! Ingestion pipeline: chunk, embed, batch-upsert
//!
//! Turns a file of question/answer records into embedded vectors in a
//! freshly rebuilt collection. Steady-state failures are logged and skipped
//! at chunk or batch granularity; nothing here retries.

pub mod chunker;
pub mod pipeline;

pub use chunker::TextSplitter;
pub use pipeline::IngestPipeline;
pub use pipeline::IngestStats;

/// Records per upsert batch; bounds memory and paces progress reporting
pub const DEFAULT_BATCH_SIZE: usize = 50;
