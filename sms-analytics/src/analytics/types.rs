//! Analytics result rows
//!
//! `None` fields are undefined statistics (empty or too-small subsets).

use serde::Serialize;

use crate::corpus::{Feature, Label};

/// Per-label summary row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelStats {
    pub label: Label,
    pub count: usize,
    pub avg_length: f64,
    pub avg_words: f64,
    pub avg_uppercase_ratio: f64,
    pub avg_exclamations: f64,
    /// Share of all records, in percent
    pub percentage: f64,
}

/// A ranked word
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Message length bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LengthBucket {
    #[serde(rename = "0-50")]
    UpTo50,
    #[serde(rename = "51-100")]
    UpTo100,
    #[serde(rename = "101-150")]
    UpTo150,
    #[serde(rename = "151-200")]
    UpTo200,
    #[serde(rename = "200+")]
    Over200,
}

impl LengthBucket {
    pub const ALL: [LengthBucket; 5] = [
        LengthBucket::UpTo50,
        LengthBucket::UpTo100,
        LengthBucket::UpTo150,
        LengthBucket::UpTo200,
        LengthBucket::Over200,
    ];

    /// Bucket for a message length. Zero-length messages land in the first bucket.
    pub fn for_length(length: usize) -> Self {
        match length {
            0..=50 => LengthBucket::UpTo50,
            51..=100 => LengthBucket::UpTo100,
            101..=150 => LengthBucket::UpTo150,
            151..=200 => LengthBucket::UpTo200,
            _ => LengthBucket::Over200,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LengthBucket::UpTo50 => "0-50",
            LengthBucket::UpTo100 => "51-100",
            LengthBucket::UpTo150 => "101-150",
            LengthBucket::UpTo200 => "151-200",
            LengthBucket::Over200 => "200+",
        }
    }
}

/// One row of the length distribution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LengthBucketRow {
    pub bucket: LengthBucket,
    pub ham: usize,
    pub spam: usize,
    pub total: usize,
    /// Spam share of the bucket in percent; `None` for an empty bucket
    pub spam_ratio: Option<f64>,
}

/// Ham vs spam statistics for one feature
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureComparison {
    pub feature: Feature,
    pub ham_mean: Option<f64>,
    pub ham_std: Option<f64>,
    pub spam_mean: Option<f64>,
    pub spam_std: Option<f64>,
    /// `spam_mean - ham_mean`, from unrounded means
    pub difference: Option<f64>,
}

/// Message length at one percentile, per label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PercentileRow {
    /// Display name, e.g. `P50`
    pub percentile: String,
    pub ham: Option<u64>,
    pub spam: Option<u64>,
}

impl PercentileRow {
    pub fn value(&self, label: Label) -> Option<u64> {
        match label {
            Label::Ham => self.ham,
            Label::Spam => self.spam,
        }
    }
}

/// Top-level corpus summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_messages: usize,
    pub spam_count: usize,
    pub ham_count: usize,
    pub spam_percentage: f64,
    pub avg_spam_length: Option<f64>,
    pub avg_ham_length: Option<f64>,
    pub max_message_length: usize,
    pub min_message_length: usize,
}
