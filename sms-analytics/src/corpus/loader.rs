//! Corpus loader
//!
//! Reads a tab-separated, header-less `label<TAB>message` file into a
//! [`FeatureTable`]. Quotes are literal message text. Blank lines are
//! skipped. Loading is all-or-nothing: the first bad row aborts.

use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use super::types::{FeatureTable, Label, MessageRecord};
use crate::error::{AnalyticsError, Result};

/// Load and featurize a corpus file
pub fn load_corpus(path: impl AsRef<Path>) -> Result<FeatureTable> {
    let path = path.as_ref();
    debug!("Reading corpus from {}", path.display());

    let bytes = std::fs::read(path).map_err(|source| AnalyticsError::CorpusNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let table = read_corpus(bytes.as_slice())?;
    info!("Loaded {} messages from {}", table.len(), path.display());
    Ok(table)
}

/// Parse corpus text that is already in memory
pub fn parse_corpus(text: &str) -> Result<FeatureTable> {
    read_corpus(text.as_bytes())
}

fn read_corpus<R: Read>(input: R) -> Result<FeatureTable> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(input);

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| csv_error(e, records.len() + 1))?;
        let line = record
            .position()
            .map_or(records.len() + 1, |pos| pos.line() as usize);
        records.push(parse_record(&record, line)?);
    }

    let table = FeatureTable::from_records(records);
    debug!(
        "Label distribution: ham={} spam={}",
        table.count(Label::Ham),
        table.count(Label::Spam)
    );
    Ok(table)
}

fn csv_error(err: csv::Error, fallback_line: usize) -> AnalyticsError {
    let line = err
        .position()
        .map_or(fallback_line, |pos| pos.line() as usize);
    let reason = match err.kind() {
        csv::ErrorKind::Utf8 { .. } => "invalid UTF-8".to_string(),
        _ => err.to_string(),
    };
    AnalyticsError::format(line, reason)
}

fn parse_record(record: &csv::StringRecord, line: usize) -> Result<MessageRecord> {
    if record.len() != 2 {
        return Err(AnalyticsError::format(
            line,
            format!("expected 2 tab-separated fields, found {}", record.len()),
        ));
    }

    let label: Label = record[0]
        .parse()
        .map_err(|reason: String| AnalyticsError::format(line, reason))?;

    Ok(MessageRecord::new(label, &record[1]))
}
