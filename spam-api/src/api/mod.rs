//! HTTP API

pub mod handlers;
pub mod server;

pub use handlers::{AppState, PredictRequest, PredictResponse};
pub use server::{router, ApiServer};
