//! Mock classifier for testing

use super::Classifier;
use crate::error::Result;

/// Returns the same probability for every input
pub struct MockClassifier {
    probability: f64,
}

impl MockClassifier {
    pub fn new(probability: f64) -> Self {
        Self { probability }
    }
}

impl Classifier for MockClassifier {
    fn predict_proba(&self, _embedding: &[f32]) -> Result<f64> {
        Ok(self.probability)
    }

    fn name(&self) -> &str {
        "mock-classifier"
    }
}
