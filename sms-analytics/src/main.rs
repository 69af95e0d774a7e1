//! sms-analytics CLI
//!
//! # Usage
//!
//! ```bash
//! # Full report
//! sms-analytics --corpus data/SMSSpamCollection report
//!
//! # Top 20 spam words as JSON
//! sms-analytics --format json words --label spam --top 20
//!
//! # First rows, shape and label distribution
//! sms-analytics preview --rows 10
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sms_analytics::analytics;
use sms_analytics::corpus::{load_corpus, FeatureTable, Label};
use sms_analytics::report::{self, Report};
use sms_analytics::AnalyticsConfig;

#[derive(Parser)]
#[command(name = "sms-analytics")]
#[command(about = "Ham/spam statistics for a labeled SMS corpus", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Corpus path (overrides the configuration)
    #[arg(long)]
    corpus: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum LabelArg {
    Ham,
    Spam,
}

impl From<LabelArg> for Label {
    fn from(arg: LabelArg) -> Self {
        match arg {
            LabelArg::Ham => Label::Ham,
            LabelArg::Spam => Label::Spam,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Full ordered report
    Report,
    /// Totals, spam share and length range
    Summary,
    /// Per-label counts and averages
    Stats,
    /// Message length distribution by bucket
    Lengths,
    /// Ham vs spam feature comparison
    Compare,
    /// Message length percentiles
    Percentiles,
    /// Most frequent words
    Words {
        /// Restrict to one label
        #[arg(short, long, value_enum)]
        label: Option<LabelArg>,
        /// Number of words
        #[arg(short, long)]
        top: Option<usize>,
    },
    /// First rows, shape and label distribution
    Preview {
        /// Number of rows
        #[arg(short, long, default_value_t = 10)]
        rows: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AnalyticsConfig::from_file(path)?,
        None => AnalyticsConfig::default(),
    };
    if let Some(corpus) = &cli.corpus {
        config.corpus.path = corpus.clone();
    }
    config.validate()?;

    // Initialize logging; stdout carries the report, logs go to stderr
    let (pretty, json) = match config.logging.format.as_str() {
        "json" => (None, Some(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))),
        _ => (Some(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)), None),
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.level.clone().into()),
        )
        .with(pretty)
        .with(json)
        .init();

    info!("Starting sms-analytics v{}", env!("CARGO_PKG_VERSION"));

    let table = load_corpus(&config.corpus.path)
        .with_context(|| format!("loading corpus {}", config.corpus.path.display()))?;

    run(cli.command, cli.format, &table, &config)
}

fn run(
    command: Commands,
    format: OutputFormat,
    table: &FeatureTable,
    config: &AnalyticsConfig,
) -> anyhow::Result<()> {
    debug!("Running command on {} messages", table.len());

    match command {
        Commands::Report => {
            let built = Report::build(table, &config.report)?;
            emit(format, &built, || report::render(table, &built, &config.report))
        }
        Commands::Summary => {
            let summary = analytics::summary(table)?;
            emit(format, &summary, || report::render_summary(&summary))
        }
        Commands::Stats => {
            let rows = analytics::basic_stats(table);
            emit(format, &rows, || report::render_basic_stats(&rows))
        }
        Commands::Lengths => {
            let rows = analytics::length_distribution(table);
            emit(format, &rows, || report::render_length_distribution(&rows))
        }
        Commands::Compare => {
            let rows = analytics::feature_comparison(table);
            emit(format, &rows, || report::render_comparison(&rows))
        }
        Commands::Percentiles => {
            let rows = analytics::percentile_analysis(table);
            emit(format, &rows, || report::render_percentiles(&rows))
        }
        Commands::Words { label, top } => {
            let top = top.unwrap_or(config.report.top_words);
            let rows = analytics::word_frequency(table, label.map(Label::from), top);
            emit(format, &rows, || report::render_words(&rows))
        }
        Commands::Preview { rows } => {
            let preview = Preview::new(table, rows);
            emit(format, &preview, || {
                format!(
                    "{}\nShape: {} rows\n\nLabel distribution:\nham     {}\nspam    {}\n",
                    report::render_sample(table.records(), rows),
                    table.len(),
                    preview.ham,
                    preview.spam
                )
            })
        }
    }
}

/// Loader preview
#[derive(Serialize)]
struct Preview<'a> {
    rows: &'a [sms_analytics::MessageRecord],
    total: usize,
    ham: usize,
    spam: usize,
}

impl<'a> Preview<'a> {
    fn new(table: &'a FeatureTable, rows: usize) -> Self {
        let records = table.records();
        Self {
            rows: &records[..rows.min(records.len())],
            total: table.len(),
            ham: table.count(Label::Ham),
            spam: table.count(Label::Spam),
        }
    }
}

fn emit<T, F>(format: OutputFormat, value: &T, text: F) -> anyhow::Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce() -> String,
{
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Text => print!("{}", text()),
    }
    Ok(())
}
