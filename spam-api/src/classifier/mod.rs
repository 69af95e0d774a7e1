//! Spam classifier abstraction

use crate::error::Result;

pub mod logistic;
pub mod mock;

pub use logistic::LogisticClassifier;
pub use mock::MockClassifier;

/// Probability above which a message is flagged as spam
pub const SPAM_THRESHOLD: f64 = 0.5;

/// Binary spam classifier over embedding vectors
pub trait Classifier: Send + Sync {
    /// Probability that the embedded message is spam, in [0, 1]
    fn predict_proba(&self, embedding: &[f32]) -> Result<f64>;

    /// Get classifier name
    fn name(&self) -> &str;
}
