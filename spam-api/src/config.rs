//! Configuration for spam-api
//!
//! Layered with the `config` crate: built-in defaults, then an optional TOML
//! file, then `SPAM_API__*` environment variables (e.g.
//! `SPAM_API__SERVER__LISTEN_ADDR`). `MODEL_PATH` overrides `model.path`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ApiError, Result};

/// Environment variable naming the classifier artifact
pub const MODEL_PATH_ENV: &str = "MODEL_PATH";

/// Default classifier artifact location
pub const DEFAULT_MODEL_PATH: &str = "models/spam_classifier.json";

/// Main API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    pub server: ServerConfig,
    pub model: ModelConfig,
    pub embedding: EmbeddingConfig,
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Listen address (e.g., "0.0.0.0:8000")
    pub listen_addr: String,
}

/// Classifier configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelConfig {
    /// Path to the persisted classifier
    pub path: PathBuf,
}

/// Embedding backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingBackend {
    /// Ollama embedding endpoint
    Ollama,
    /// Deterministic in-process embedder, for offline runs
    Mock,
}

/// Embedding configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmbeddingConfig {
    pub backend: EmbeddingBackend,
    /// Ollama base URL
    pub base_url: String,
    /// Embedding model name
    pub model: String,
    /// Vector size produced by the mock backend
    pub mock_dimension: usize,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset
    pub level: String,
    /// "pretty" or "json"
    pub format: String,
}

impl ApiConfig {
    /// Load configuration from defaults, an optional file and the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder()
            .set_default("server.listen_addr", "0.0.0.0:8000")?
            .set_default("model.path", DEFAULT_MODEL_PATH)?
            .set_default("embedding.backend", "ollama")?
            .set_default("embedding.base_url", "http://localhost:11434")?
            .set_default("embedding.model", "all-minilm")?
            .set_default("embedding.mock_dimension", 384)?
            .set_default("embedding.timeout_seconds", 30)?
            .set_default("logging.level", "spam_api=info,tower_http=info")?
            .set_default("logging.format", "pretty")?;

        if let Some(path) = path {
            if !path.exists() {
                return Err(ApiError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            builder = builder.add_source(config::File::from(path));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("SPAM_API")
                .prefix_separator("__")
                .separator("__"),
        );

        if let Ok(model_path) = std::env::var(MODEL_PATH_ENV) {
            builder = builder.set_override("model.path", model_path)?;
        }

        let config: ApiConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.listen_addr.is_empty() {
            return Err(ApiError::Config("server.listen_addr is empty".to_string()));
        }
        if self.embedding.backend == EmbeddingBackend::Mock && self.embedding.mock_dimension == 0 {
            return Err(ApiError::Config(
                "embedding.mock_dimension must be at least 1".to_string(),
            ));
        }
        match self.logging.format.as_str() {
            "pretty" | "json" => Ok(()),
            other => Err(ApiError::Config(format!("Unknown log format '{}'", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_config_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            file,
            r#"
[server]
listen_addr = "127.0.0.1:9000"

[model]
path = "/opt/models/clf.json"

[embedding]
backend = "mock"
mock_dimension = 8
"#
        )
        .unwrap();

        let config = ApiConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.server.listen_addr, "127.0.0.1:9000");
        assert_eq!(config.embedding.backend, EmbeddingBackend::Mock);
        assert_eq!(config.embedding.mock_dimension, 8);
        assert_eq!(config.embedding.model, "all-minilm");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_missing_config_file() {
        let err = ApiConfig::load(Some(Path::new("/nonexistent/spam-api.toml"))).unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "[logging]\nformat = \"xml\"\n").unwrap();
        assert!(ApiConfig::load(Some(file.path())).is_err());
    }
}
