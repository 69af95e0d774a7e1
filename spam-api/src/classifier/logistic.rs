//! Logistic regression classifier loaded from a JSON artifact
//!
//! Artifact format: `{"weights": [f32, ...], "intercept": f64}`.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use super::Classifier;
use crate::error::{ApiError, Result};

/// Linear model with a sigmoid link
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogisticClassifier {
    pub weights: Vec<f32>,
    pub intercept: f64,
}

impl LogisticClassifier {
    /// Load the model from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ApiError::ModelLoad(format!("{}: {}", path.display(), e)))?;
        let model: LogisticClassifier = serde_json::from_str(&content)
            .map_err(|e| ApiError::ModelLoad(format!("{}: {}", path.display(), e)))?;
        model.validate()?;

        info!(
            "Loaded logistic classifier from {} ({} features)",
            path.display(),
            model.weights.len()
        );
        Ok(model)
    }

    fn validate(&self) -> Result<()> {
        if self.weights.is_empty() {
            return Err(ApiError::ModelLoad("model has no weights".to_string()));
        }
        if !self.intercept.is_finite() || self.weights.iter().any(|w| !w.is_finite()) {
            return Err(ApiError::ModelLoad("model has non-finite parameters".to_string()));
        }
        Ok(())
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

impl Classifier for LogisticClassifier {
    fn predict_proba(&self, embedding: &[f32]) -> Result<f64> {
        if embedding.len() != self.weights.len() {
            return Err(ApiError::Classifier(format!(
                "embedding has {} dimensions, model expects {}",
                embedding.len(),
                self.weights.len()
            )));
        }

        let z = self
            .weights
            .iter()
            .zip(embedding)
            .map(|(w, x)| f64::from(*w) * f64::from(*x))
            .sum::<f64>()
            + self.intercept;

        Ok(sigmoid(z))
    }

    fn name(&self) -> &str {
        "logistic-regression"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn model() -> LogisticClassifier {
        LogisticClassifier {
            weights: vec![1.0, -1.0],
            intercept: 0.0,
        }
    }

    #[test]
    fn test_zero_logit_is_half() {
        let p = model().predict_proba(&[0.5, 0.5]).unwrap();
        assert!((p - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_probability_direction() {
        let m = model();
        assert!(m.predict_proba(&[3.0, 0.0]).unwrap() > 0.9);
        assert!(m.predict_proba(&[0.0, 3.0]).unwrap() < 0.1);
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = model().predict_proba(&[1.0]).unwrap_err();
        assert!(matches!(err, ApiError::Classifier(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"weights": [0.25, 0.5, -0.75], "intercept": -0.1}}"#).unwrap();

        let m = LogisticClassifier::from_file(file.path()).unwrap();
        assert_eq!(m.weights.len(), 3);
        assert_eq!(m.intercept, -0.1);
    }

    #[test]
    fn test_from_missing_file() {
        let err = LogisticClassifier::from_file("/nonexistent/model.json").unwrap_err();
        assert!(matches!(err, ApiError::ModelLoad(_)));
    }

    #[test]
    fn test_empty_weights_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"weights": [], "intercept": 0.0}}"#).unwrap();
        assert!(LogisticClassifier::from_file(file.path()).is_err());
    }
}
