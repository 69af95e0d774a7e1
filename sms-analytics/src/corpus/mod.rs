//! Corpus module
//!
//! Loads a labeled SMS corpus and derives per-message features.

pub mod features;
pub mod loader;
pub mod types;

pub use features::MessageFeatures;
pub use loader::{load_corpus, parse_corpus};
pub use types::*;
