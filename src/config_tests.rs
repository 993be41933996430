//! Unit tests for configuration module
//!
//! These tests validate configuration parsing, defaults, and validation.

#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::config::*;
    use crate::ChromaQaError;

    fn valid_config() -> AppConfig {
        AppConfig::default()
    }

    // ====== Default Value Tests ======

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();

        assert_eq!(config.chroma_host(), "localhost");
        assert_eq!(config.chroma_port(), 8000);
        assert_eq!(config.collection_name(), "qa_collection");
        assert_eq!(config.ollama_base_url(), "http://localhost:11434");
        assert_eq!(config.embed_model(), "nomic-embed-text");
        assert!((config.temperature() - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(valid_config().validate().is_ok());
    }

    // ====== Validation Tests ======

    #[test]
    fn test_empty_collection_is_config_error() {
        let mut config = valid_config();
        config.chroma.collection = String::new();

        match config.validate() {
            Err(ChromaQaError::Config(msg)) => assert!(msg.contains("chroma.collection")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_host_is_config_error() {
        let mut config = valid_config();
        config.chroma.host = "   ".to_string();
        assert!(matches!(config.validate(), Err(ChromaQaError::Config(_))));
    }

    #[test]
    fn test_empty_base_url_is_config_error() {
        let mut config = valid_config();
        config.ollama.base_url = String::new();
        assert!(matches!(config.validate(), Err(ChromaQaError::Config(_))));
    }

    #[test]
    fn test_empty_embed_model_is_config_error() {
        let mut config = valid_config();
        config.ollama.embed_model = String::new();
        assert!(matches!(config.validate(), Err(ChromaQaError::Config(_))));
    }

    // ====== File Parsing Tests ======

    #[test]
    fn test_from_file_parses_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[chroma]
host = "chroma.internal"
port = 9000
collection = "ottawa_qa"

[ollama]
base_url = "http://ollama.internal:11434"
embed_model = "mxbai-embed-large"

[logging]
level = "debug"
backtrace = false
"#
        )
        .unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.chroma_host(), "chroma.internal");
        assert_eq!(config.chroma_port(), 9000);
        assert_eq!(config.collection_name(), "ottawa_qa");
        assert_eq!(config.embed_model(), "mxbai-embed-large");
        // temperature falls back to its serde default
        assert!((config.temperature() - 0.7).abs() < f32::EPSILON);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_from_file_missing_section_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[chroma]
host = "localhost"
port = 8000
collection = "qa"
"#
        )
        .unwrap();

        assert!(matches!(
            AppConfig::from_file(file.path()),
            Err(ChromaQaError::TomlParsing(_))
        ));
    }

    #[test]
    fn test_from_file_missing_file_is_io_error() {
        assert!(matches!(
            AppConfig::from_file("/nonexistent/config.toml"),
            Err(ChromaQaError::Io(_))
        ));
    }
}
