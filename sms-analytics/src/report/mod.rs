//! Report driver
//!
//! Runs every analytics view over a loaded table and renders the results as
//! an ordered, human-readable text report (or JSON).

pub mod format;
pub mod insights;

use serde::Serialize;
use std::fmt::Write;
use tracing::info;

use crate::analytics::stats::round_to;
use crate::analytics::{
    self, FeatureComparison, LabelStats, LengthBucketRow, PercentileRow, Summary, WordCount,
};
use crate::config::ReportConfig;
use crate::corpus::{FeatureTable, Label, MessageRecord};
use crate::error::Result;
use format::{fixed, section, thousands, TextTable};
pub use insights::Insights;

/// Every analytics view, computed once
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub summary: Summary,
    pub basic_stats: Vec<LabelStats>,
    pub feature_comparison: Vec<FeatureComparison>,
    pub length_distribution: Vec<LengthBucketRow>,
    pub percentiles: Vec<PercentileRow>,
    pub top_spam_words: Vec<WordCount>,
    pub top_ham_words: Vec<WordCount>,
    pub insights: Insights,
}

impl Report {
    /// Compute all views. Fails only on an empty table.
    pub fn build(table: &FeatureTable, config: &ReportConfig) -> Result<Self> {
        let summary = analytics::summary(table)?;
        let feature_comparison = analytics::feature_comparison(table);
        let insights = Insights::derive(&summary, &feature_comparison);

        let report = Self {
            basic_stats: analytics::basic_stats(table),
            length_distribution: analytics::length_distribution(table),
            percentiles: analytics::percentile_analysis(table),
            top_spam_words: analytics::word_frequency(table, Some(Label::Spam), config.top_words),
            top_ham_words: analytics::word_frequency(table, Some(Label::Ham), config.top_words),
            summary,
            feature_comparison,
            insights,
        };

        info!("Report built for {} messages", table.len());
        Ok(report)
    }
}

/// Render the full text report
pub fn render(table: &FeatureTable, report: &Report, config: &ReportConfig) -> String {
    let mut out = String::new();

    out.push_str(&section("LOADING SMS SPAM COLLECTION DATASET"));
    let _ = writeln!(out, "Loaded {} messages", thousands(table.len()));
    let _ = writeln!(out, "\nSample messages:");
    out.push_str(&render_sample(table.records(), config.sample_rows));

    out.push_str(&section("DATASET SUMMARY"));
    out.push_str(&render_summary(&report.summary));

    out.push_str(&section("BASIC STATISTICS BY LABEL"));
    out.push_str(&render_basic_stats(&report.basic_stats));

    out.push_str(&section("FEATURE COMPARISON: HAM vs SPAM"));
    out.push_str(&render_comparison(&report.feature_comparison));

    out.push_str(&section("MESSAGE LENGTH DISTRIBUTION"));
    out.push_str(&render_length_distribution(&report.length_distribution));

    out.push_str(&section("PERCENTILE ANALYSIS (Message Length)"));
    out.push_str(&render_percentiles(&report.percentiles));

    out.push_str(&section(&format!("TOP {} WORDS IN SPAM MESSAGES", config.top_words)));
    out.push_str(&render_words(&report.top_spam_words));

    out.push_str(&section(&format!("TOP {} WORDS IN HAM MESSAGES", config.top_words)));
    out.push_str(&render_words(&report.top_ham_words));

    out.push_str(&section("KEY INSIGHTS"));
    for line in report.insights.lines() {
        let _ = writeln!(out, "{}", line);
    }

    out.push_str(&section("Analysis Complete!"));
    out
}

/// First `rows` records as a label/message table
pub fn render_sample(records: &[MessageRecord], rows: usize) -> String {
    let mut table = TextTable::new(["label", "message"]);
    for record in records.iter().take(rows) {
        table.push_row([record.label.to_string(), record.message.clone()]);
    }
    table.to_string()
}

pub fn render_summary(summary: &Summary) -> String {
    let ham_percentage = round_to(100.0 - summary.spam_percentage, 2);
    let mut out = String::new();
    let _ = writeln!(out, "Total Messages:     {}", thousands(summary.total_messages));
    let _ = writeln!(
        out,
        "Ham (legitimate):   {} ({}%)",
        thousands(summary.ham_count),
        ham_percentage
    );
    let _ = writeln!(
        out,
        "Spam:               {} ({}%)",
        thousands(summary.spam_count),
        summary.spam_percentage
    );
    let _ = writeln!(out, "Avg Spam Length:    {} characters", fixed(summary.avg_spam_length, 2));
    let _ = writeln!(out, "Avg Ham Length:     {} characters", fixed(summary.avg_ham_length, 2));
    let _ = writeln!(
        out,
        "Message Range:      {} - {} characters",
        summary.min_message_length, summary.max_message_length
    );
    out
}

pub fn render_basic_stats(rows: &[LabelStats]) -> String {
    let mut table = TextTable::new([
        "label",
        "count",
        "avg_length",
        "avg_words",
        "avg_uppercase_ratio",
        "avg_exclamations",
        "percentage",
    ]);
    for row in rows {
        table.push_row([
            row.label.to_string(),
            row.count.to_string(),
            format!("{:.2}", row.avg_length),
            format!("{:.2}", row.avg_words),
            format!("{:.2}", row.avg_uppercase_ratio),
            format!("{:.2}", row.avg_exclamations),
            format!("{:.2}", row.percentage),
        ]);
    }
    table.to_string()
}

pub fn render_comparison(rows: &[FeatureComparison]) -> String {
    let mut table = TextTable::new([
        "feature",
        "ham_mean",
        "ham_std",
        "spam_mean",
        "spam_std",
        "difference",
    ]);
    for row in rows {
        table.push_row([
            row.feature.to_string(),
            fixed(row.ham_mean, 3),
            fixed(row.ham_std, 3),
            fixed(row.spam_mean, 3),
            fixed(row.spam_std, 3),
            fixed(row.difference, 3),
        ]);
    }
    table.to_string()
}

pub fn render_length_distribution(rows: &[LengthBucketRow]) -> String {
    let mut table = TextTable::new(["length_bucket", "ham", "spam", "total", "spam_ratio"]);
    for row in rows {
        table.push_row([
            row.bucket.as_str().to_string(),
            row.ham.to_string(),
            row.spam.to_string(),
            row.total.to_string(),
            fixed(row.spam_ratio, 2),
        ]);
    }
    table.to_string()
}

pub fn render_percentiles(rows: &[PercentileRow]) -> String {
    let cell = |v: Option<u64>| v.map_or_else(|| format::UNDEFINED.to_string(), |v| v.to_string());
    let mut table = TextTable::new(["percentile", "ham", "spam"]);
    for row in rows {
        table.push_row([row.percentile.clone(), cell(row.ham), cell(row.spam)]);
    }
    table.to_string()
}

pub fn render_words(rows: &[WordCount]) -> String {
    let mut table = TextTable::new(["word", "count"]);
    for row in rows {
        table.push_row([row.word.clone(), row.count.to_string()]);
    }
    table.to_string()
}
