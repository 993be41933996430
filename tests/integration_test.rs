//! End-to-end tests against live Chroma and Ollama servers.
//!
//! These are ignored by default; run them with `cargo test -- --ignored`
//! against a local stack (Chroma on :8000, Ollama on :11434 with the
//! configured embedding model pulled).

use chromaqa::chroma::ChromaClient;
use chromaqa::embeddings::EmbeddingClient;
use chromaqa::ingest::IngestPipeline;
use chromaqa::models::QaRecord;
use chromaqa::rag::retriever::select_answer;
use chromaqa::rag::Retriever;
use chromaqa::AppConfig;
use chromaqa::Result;

const TEST_COLLECTION: &str = "chromaqa_integration_test";

fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.chroma.collection = TEST_COLLECTION.to_string();
    config
}

fn sample_records() -> Vec<QaRecord> {
    vec![
        QaRecord {
            question: "Where can I park downtown?".to_string(),
            answer: "Parking is permitted in marked zones only.".to_string(),
        },
        QaRecord {
            question: "When is garbage collected?".to_string(),
            answer: "Garbage is collected every Tuesday morning.".to_string(),
        },
    ]
}

#[tokio::test]
#[ignore = "Requires running Chroma and Ollama servers"]
async fn test_ingest_then_query_roundtrip() -> Result<()> {
    let config = test_config();

    let chroma = ChromaClient::new(config.chroma_host(), config.chroma_port())?;
    let embeddings = EmbeddingClient::new(config.ollama_base_url(), config.embed_model())?;
    embeddings.verify_connection().await?;

    let collection = chroma.ensure_fresh(TEST_COLLECTION).await?;
    let pipeline = IngestPipeline::new(&embeddings, &collection, 50, TEST_COLLECTION);
    let stats = pipeline.run(&sample_records()).await?;

    assert_eq!(stats.chunks_embedded, 2);
    assert_eq!(stats.batches_uploaded, 1);
    assert_eq!(stats.total_count, Some(2));

    // Query the freshly ingested data
    let embeddings = EmbeddingClient::new(config.ollama_base_url(), config.embed_model())?;
    let collection = chroma.get_collection(TEST_COLLECTION).await?;
    let retriever = Retriever::new(collection, embeddings);

    assert_eq!(retriever.count().await?, 2);

    let result = retriever.query("parking rules", 3).await?;
    let answer = select_answer(&result).expect("expected a match");
    assert_eq!(answer.answer, "Parking is permitted in marked zones only.");

    chroma.delete_collection(TEST_COLLECTION).await?;
    Ok(())
}

#[tokio::test]
#[ignore = "Requires running Chroma and Ollama servers"]
async fn test_reingest_produces_same_count() -> Result<()> {
    let config = test_config();

    let chroma = ChromaClient::new(config.chroma_host(), config.chroma_port())?;
    let embeddings = EmbeddingClient::new(config.ollama_base_url(), config.embed_model())?;

    let collection = chroma.ensure_fresh(TEST_COLLECTION).await?;
    let pipeline = IngestPipeline::new(&embeddings, &collection, 50, TEST_COLLECTION);
    let first = pipeline.run(&sample_records()).await?;

    // Full rebuild: a second run over the same file ends at the same count
    let collection = chroma.ensure_fresh(TEST_COLLECTION).await?;
    let pipeline = IngestPipeline::new(&embeddings, &collection, 50, TEST_COLLECTION);
    let second = pipeline.run(&sample_records()).await?;

    assert_eq!(first.total_count, second.total_count);

    chroma.delete_collection(TEST_COLLECTION).await?;
    Ok(())
}

#[tokio::test]
#[ignore = "Requires a running Chroma server"]
async fn test_query_missing_collection_is_not_found() -> Result<()> {
    let config = test_config();
    let chroma = ChromaClient::new(config.chroma_host(), config.chroma_port())?;

    let result = chroma.get_collection("chromaqa_no_such_collection").await;
    assert!(matches!(
        result,
        Err(chromaqa::ChromaQaError::CollectionNotFound(_))
    ));
    Ok(())
}
