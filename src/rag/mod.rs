//! Retrieval path: embed a query, find nearest vectors, pick an answer

pub mod retriever;

pub use retriever::Retriever;

/// Nearest neighbours requested per query
pub const DEFAULT_TOP_K: usize = 3;

/// Query used when the CLI is run without one
pub const DEFAULT_QUERY: &str = "What are the parking rules?";

/// Selected answer with its display confidence.
///
/// Confidence is `1 - distance`, a display heuristic rather than a
/// probability; it is only meaningful when the collection's distance metric
/// is normalized to `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    pub answer: String,
    pub confidence: f32,
}
