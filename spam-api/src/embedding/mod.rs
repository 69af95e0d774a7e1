//! Sentence embedding abstraction
//!
//! Turns raw message text into fixed-length vectors for the classifier.

use async_trait::async_trait;

use crate::error::Result;

pub mod mock;
pub mod ollama;

pub use mock::MockEmbedder;
pub use ollama::OllamaEmbedder;

/// Embedding backend trait
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Embed a batch of texts, one vector per input, in input order
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// Get model name
    fn model_name(&self) -> &str;
}
