//! spam-api - HTTP spam scoring service
//!
//! Embeds an incoming SMS with a sentence-embedding backend and scores the
//! vector with a persisted binary classifier.
//!
//! # Endpoints
//!
//! - `GET /health` - liveness check
//! - `POST /predict` - `{"message": "..."}` to spam probability and verdict
//!
//! # Example
//!
//! ```no_run
//! use spam_api::{ApiConfig, ApiServer, AppState};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ApiConfig::load(None)?;
//!     let state = AppState::from_config(&config)?;
//!     ApiServer::new(state, config.server.listen_addr.clone()).run().await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod classifier;
pub mod config;
pub mod embedding;
pub mod error;

pub use api::{router, ApiServer, AppState, PredictRequest, PredictResponse};
pub use classifier::{Classifier, SPAM_THRESHOLD};
pub use config::ApiConfig;
pub use embedding::Embedder;
pub use error::{ApiError, Result};
