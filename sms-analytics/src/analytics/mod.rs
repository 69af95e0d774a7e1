//! Analytics engine
//!
//! Independent, read-only views over a [`FeatureTable`](crate::corpus::FeatureTable).
//! None of them mutates the table, so running a view twice gives identical output.

pub mod basic;
pub mod comparison;
pub mod length;
pub mod percentiles;
pub mod stats;
pub mod summary;
pub mod types;
pub mod words;

pub use basic::basic_stats;
pub use comparison::feature_comparison;
pub use length::length_distribution;
pub use percentiles::{percentile_analysis, PERCENTILES};
pub use summary::summary;
pub use types::*;
pub use words::{word_frequency, STOP_WORDS};
