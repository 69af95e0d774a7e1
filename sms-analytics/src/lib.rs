//! sms-analytics: ham/spam statistics for labeled SMS corpora
//!
//! Loads a tab-separated `label<TAB>message` corpus, derives per-message
//! features and aggregates them into summary tables that contrast
//! legitimate ("ham") and spam messages.
//!
//! # Pipeline
//!
//! ```text
//! corpus file ──► corpus::load_corpus ──► FeatureTable ──► analytics views ──► report
//! ```
//!
//! # Example
//!
//! ```no_run
//! use sms_analytics::analytics;
//! use sms_analytics::corpus::{load_corpus, Label};
//!
//! fn main() -> sms_analytics::Result<()> {
//!     let table = load_corpus("data/SMSSpamCollection")?;
//!     let summary = analytics::summary(&table)?;
//!     println!("{}% spam", summary.spam_percentage);
//!
//!     for word in analytics::word_frequency(&table, Some(Label::Spam), 10) {
//!         println!("{} {}", word.word, word.count);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`corpus`]: loading and per-message features
//! - [`analytics`]: aggregation views
//! - [`report`]: ordered text/JSON report
//! - [`config`]: configuration management
//! - [`error`]: error types

pub mod analytics;
pub mod config;
pub mod corpus;
pub mod error;
pub mod report;

pub use config::AnalyticsConfig;
pub use corpus::{FeatureTable, Label, MessageRecord};
pub use error::{AnalyticsError, Result};
