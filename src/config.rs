use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChromaConfig {
    pub host: String,
    pub port: u16,
    pub collection: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaConfig {
    pub base_url: String,
    pub embed_model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_temperature() -> f32 {
    0.7
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub backtrace: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub chroma: ChromaConfig,
    pub ollama: OllamaConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(crate::ChromaQaError::Io)?;

        let config: AppConfig =
            toml::from_str(&content).map_err(crate::ChromaQaError::TomlParsing)?;

        Ok(config)
    }

    /// Load configuration from default config file path
    pub fn load() -> crate::Result<Self> {
        // Try to load from config.toml first, then fall back to config.example.toml
        if Path::new("config.toml").exists() {
            Self::from_file("config.toml")
        } else if Path::new("config.example.toml").exists() {
            println!(
                "Warning: Using config.example.toml. Please create config.toml for production use."
            );
            Self::from_file("config.example.toml")
        } else {
            Err(crate::ChromaQaError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "No config file found. Please create config.toml or config.example.toml",
            )))
        }
    }

    /// Validate required fields before anything touches the network.
    ///
    /// Required fields never get silent defaults: an empty collection name or
    /// model identifier is a configuration error, not something to guess.
    pub fn validate(&self) -> crate::Result<()> {
        if self.chroma.host.trim().is_empty() {
            return Err(crate::ChromaQaError::Config(
                "chroma.host is not set".to_string(),
            ));
        }
        if self.chroma.collection.trim().is_empty() {
            return Err(crate::ChromaQaError::Config(
                "chroma.collection is not set".to_string(),
            ));
        }
        if self.ollama.base_url.trim().is_empty() {
            return Err(crate::ChromaQaError::Config(
                "ollama.base_url is not set".to_string(),
            ));
        }
        if self.ollama.embed_model.trim().is_empty() {
            return Err(crate::ChromaQaError::Config(
                "ollama.embed_model is not set".to_string(),
            ));
        }
        Ok(())
    }

    /// Get Chroma server host
    pub fn chroma_host(&self) -> &str {
        &self.chroma.host
    }

    /// Get Chroma server port
    pub fn chroma_port(&self) -> u16 {
        self.chroma.port
    }

    /// Get Chroma collection name
    pub fn collection_name(&self) -> &str {
        &self.chroma.collection
    }

    /// Get Ollama base URL
    pub fn ollama_base_url(&self) -> &str {
        &self.ollama.base_url
    }

    /// Get Ollama embedding model name
    pub fn embed_model(&self) -> &str {
        &self.ollama.embed_model
    }

    /// Get LLM temperature setting
    pub fn temperature(&self) -> f32 {
        self.ollama.temperature
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            chroma: ChromaConfig {
                host: "localhost".to_string(),
                port: 8000,
                collection: "qa_collection".to_string(),
            },
            ollama: OllamaConfig {
                base_url: "http://localhost:11434".to_string(),
                embed_model: "nomic-embed-text".to_string(),
                temperature: 0.7,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                backtrace: true,
            },
        }
    }
}
