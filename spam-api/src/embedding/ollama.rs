//! Ollama embedding implementation
//!
//! Uses Ollama's `/api/embed` endpoint, which accepts a batch of inputs.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use super::Embedder;
use crate::config::EmbeddingConfig;
use crate::error::{ApiError, Result};

/// Ollama embedding client
pub struct OllamaEmbedder {
    model_name: String,
    base_url: String,
    client: reqwest::Client,
}

impl OllamaEmbedder {
    pub fn new(model_name: String) -> Self {
        Self {
            model_name,
            base_url: "http://localhost:11434".to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Build a client from configuration
    pub fn from_config(config: &EmbeddingConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            client,
            ..Self::new(config.model.clone()).with_base_url(config.base_url.clone())
        })
    }
}

/// Ollama embed request
#[derive(Debug, Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

/// Ollama embed response
#[derive(Debug, Deserialize)]
struct EmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

#[async_trait::async_trait]
impl Embedder for OllamaEmbedder {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        debug!("OllamaEmbedder: Embedding {} texts with model {}", texts.len(), self.model_name);

        let request = EmbedRequest {
            model: &self.model_name,
            input: texts,
        };

        let response = self
            .client
            .post(format!("{}/api/embed", self.base_url))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            warn!("OllamaEmbedder: Request failed with status {}: {}", status, error_text);
            return Err(ApiError::Embedding(format!(
                "Ollama request failed: {} - {}",
                status, error_text
            )));
        }

        let body: EmbedResponse = response.json().await?;

        if body.embeddings.len() != texts.len() {
            return Err(ApiError::Embedding(format!(
                "expected {} embeddings, got {}",
                texts.len(),
                body.embeddings.len()
            )));
        }

        Ok(body.embeddings)
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash() {
        let embedder = OllamaEmbedder::new("all-minilm".to_string())
            .with_base_url("http://ollama:11434/".to_string());
        assert_eq!(embedder.base_url, "http://ollama:11434");
        assert_eq!(embedder.model_name(), "all-minilm");
    }

    #[test]
    fn test_request_shape() {
        let input = vec!["hello".to_string()];
        let request = EmbedRequest {
            model: "all-minilm",
            input: &input,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"model": "all-minilm", "input": ["hello"]}));
    }

    #[tokio::test]
    #[ignore] // Requires a running Ollama instance
    async fn test_ollama_embed() {
        let embedder = OllamaEmbedder::new("all-minilm".to_string());
        let vectors = embedder
            .embed(&["WINNER!! Claim your prize now".to_string()])
            .await
            .unwrap();
        assert_eq!(vectors.len(), 1);
        assert!(!vectors[0].is_empty());
    }
}
