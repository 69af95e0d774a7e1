//! Configuration for sms-analytics

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AnalyticsError, Result};

/// Main analytics configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AnalyticsConfig {
    /// Corpus location
    #[serde(default)]
    pub corpus: CorpusConfig,
    /// Report layout
    #[serde(default)]
    pub report: ReportConfig,
    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Corpus configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorpusConfig {
    /// Path to the tab-separated corpus
    #[serde(default = "default_corpus_path")]
    pub path: PathBuf,
}

/// Report configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Words listed per label in the word ranking sections
    #[serde(default = "default_top_words")]
    pub top_words: usize,
    /// Sample messages shown after loading
    #[serde(default = "default_sample_rows")]
    pub sample_rows: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,
    /// "pretty" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_corpus_path() -> PathBuf {
    PathBuf::from("data/SMSSpamCollection")
}

fn default_top_words() -> usize {
    15
}

fn default_sample_rows() -> usize {
    5
}

fn default_log_level() -> String {
    "sms_analytics=info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: default_corpus_path(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_words: default_top_words(),
            sample_rows: default_sample_rows(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl AnalyticsConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AnalyticsError::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| AnalyticsError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.report.top_words == 0 {
            return Err(AnalyticsError::Config("report.top_words must be at least 1".to_string()));
        }
        match self.logging.format.as_str() {
            "pretty" | "json" => Ok(()),
            other => Err(AnalyticsError::Config(format!("Unknown log format '{}'", other))),
        }
    }
}
