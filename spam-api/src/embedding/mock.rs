//! Mock embedder for testing and offline runs
//!
//! Hashes character trigrams into a fixed number of buckets, then
//! L2-normalizes. Same text, same vector.

use tracing::debug;

use super::Embedder;
use crate::error::Result;

/// Deterministic embedder
pub struct MockEmbedder {
    model_name: String,
    dimension: usize,
}

impl MockEmbedder {
    pub fn new(dimension: usize) -> Self {
        Self {
            model_name: "mock-embedder-v1".to_string(),
            dimension,
        }
    }

    fn embed_one(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimension];
        if self.dimension == 0 {
            return vector;
        }

        let chars: Vec<char> = text.to_lowercase().chars().collect();
        for window in chars.windows(3) {
            vector[fnv1a(window) as usize % self.dimension] += 1.0;
        }

        let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            vector.iter_mut().for_each(|v| *v /= norm);
        }
        vector
    }
}

fn fnv1a(chars: &[char]) -> u64 {
    let mut hash: u64 = 0xcbf29ce484222325;
    for c in chars {
        for byte in (*c as u32).to_le_bytes() {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(0x100000001b3);
        }
    }
    hash
}

#[async_trait::async_trait]
impl Embedder for MockEmbedder {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        debug!("MockEmbedder: Embedding {} texts", texts.len());
        Ok(texts.iter().map(|t| self.embed_one(t)).collect())
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_deterministic() {
        let embedder = MockEmbedder::new(16);
        let texts = vec!["Free entry now".to_string(), "Free entry now".to_string()];
        let vectors = embedder.embed(&texts).await.unwrap();
        assert_eq!(vectors.len(), 2);
        assert_eq!(vectors[0], vectors[1]);
        assert_eq!(vectors[0].len(), 16);
    }

    #[tokio::test]
    async fn test_normalized() {
        let embedder = MockEmbedder::new(32);
        let vectors = embedder.embed(&["call me later".to_string()]).await.unwrap();
        let norm: f32 = vectors[0].iter().map(|v| v * v).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[tokio::test]
    async fn test_short_text_is_zero_vector() {
        let embedder = MockEmbedder::new(8);
        let vectors = embedder.embed(&["hi".to_string()]).await.unwrap();
        assert!(vectors[0].iter().all(|v| *v == 0.0));
    }
}
