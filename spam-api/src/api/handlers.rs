//! API request handlers

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use sms_analytics::analytics::stats::round_to;
use std::sync::Arc;
use tracing::{debug, info, info_span, Instrument};
use uuid::Uuid;

use crate::classifier::{Classifier, LogisticClassifier, SPAM_THRESHOLD};
use crate::config::{ApiConfig, EmbeddingBackend};
use crate::embedding::{Embedder, MockEmbedder, OllamaEmbedder};
use crate::error::{ApiError, Result};

/// Shared application state
pub struct AppState {
    pub embedder: Arc<dyn Embedder>,
    pub classifier: Arc<dyn Classifier>,
}

impl AppState {
    pub fn new(embedder: Arc<dyn Embedder>, classifier: Arc<dyn Classifier>) -> Self {
        Self {
            embedder,
            classifier,
        }
    }

    /// Build the embedder and load the classifier named in the configuration
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let embedder: Arc<dyn Embedder> = match config.embedding.backend {
            EmbeddingBackend::Ollama => Arc::new(OllamaEmbedder::from_config(&config.embedding)?),
            EmbeddingBackend::Mock => Arc::new(MockEmbedder::new(config.embedding.mock_dimension)),
        };
        let classifier = Arc::new(LogisticClassifier::from_file(&config.model.path)?);

        info!(
            "Using embedder {} with classifier {}",
            embedder.model_name(),
            classifier.name()
        );
        Ok(Self::new(embedder, classifier))
    }
}

/// Health response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Predict request body
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictRequest {
    pub message: String,
}

/// Predict response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub message: String,
    /// Spam probability as a percentage, 2 decimals
    pub spam_probability: f64,
    pub is_spam: bool,
}

impl PredictResponse {
    pub fn from_probability(message: String, probability: f64) -> Self {
        Self {
            message,
            spam_probability: round_to(probability * 100.0, 2),
            is_spam: probability > SPAM_THRESHOLD,
        }
    }
}

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

/// Score a single message
pub async fn predict(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>> {
    let span = info_span!("predict", request_id = %Uuid::new_v4());
    async move {
        debug!("Scoring message of {} chars", request.message.chars().count());

        let embedding = state
            .embedder
            .embed(std::slice::from_ref(&request.message))
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::Embedding("embedder returned no vectors".to_string()))?;

        let probability = state.classifier.predict_proba(&embedding)?;
        if !(0.0..=1.0).contains(&probability) {
            return Err(ApiError::Classifier(format!(
                "probability {} outside [0, 1]",
                probability
            )));
        }

        let response = PredictResponse::from_probability(request.message, probability);
        info!(
            spam_probability = response.spam_probability,
            is_spam = response.is_spam,
            "Prediction complete"
        );
        Ok(Json(response))
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_probability() {
        let r = PredictResponse::from_probability("hi".to_string(), 0.87);
        assert_eq!(r.spam_probability, 87.0);
        assert!(r.is_spam);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let r = PredictResponse::from_probability("x".to_string(), 0.5);
        assert_eq!(r.spam_probability, 50.0);
        assert!(!r.is_spam);
    }

    #[test]
    fn test_probability_rounding() {
        let r = PredictResponse::from_probability("x".to_string(), 0.123456);
        assert_eq!(r.spam_probability, 12.35);
        assert!(!r.is_spam);
    }
}
