//! Message length percentiles per label

use super::stats::percentile;
use super::types::PercentileRow;
use crate::corpus::{FeatureTable, Label};

/// Percentiles reported, in row order
pub const PERCENTILES: [u8; 7] = [10, 25, 50, 75, 90, 95, 99];

/// Message length at each of [`PERCENTILES`] for ham and spam.
///
/// Values are interpolated then truncated to an integer; a label with no
/// records yields `None` in its column.
pub fn percentile_analysis(table: &FeatureTable) -> Vec<PercentileRow> {
    let sorted_lengths = |label: Label| -> Vec<f64> {
        let mut lengths: Vec<f64> = table
            .by_label(label)
            .map(|r| r.features.message_length as f64)
            .collect();
        lengths.sort_by(f64::total_cmp);
        lengths
    };
    let ham = sorted_lengths(Label::Ham);
    let spam = sorted_lengths(Label::Spam);

    PERCENTILES
        .iter()
        .map(|&p| PercentileRow {
            percentile: format!("P{}", p),
            ham: percentile(&ham, f64::from(p)).map(|v| v.trunc() as u64),
            spam: percentile(&spam, f64::from(p)).map(|v| v.trunc() as u64),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::MessageRecord;

    #[test]
    fn test_missing_label_gives_none() {
        let table = FeatureTable::from_records(vec![MessageRecord::new(Label::Ham, "hello")]);
        let rows = percentile_analysis(&table);
        assert_eq!(rows.len(), PERCENTILES.len());
        assert!(rows.iter().all(|r| r.spam.is_none()));
        assert!(rows.iter().all(|r| r.ham == Some(5)));
    }

    #[test]
    fn test_truncates_interpolated_value() {
        // lengths 10, 20, 30, 40: P10 = 13.0, P25 = 17.5, P99 = 39.7
        let table = FeatureTable::from_records(
            [10, 20, 30, 40]
                .iter()
                .map(|&n| MessageRecord::new(Label::Spam, "s".repeat(n)))
                .collect(),
        );
        let rows = percentile_analysis(&table);
        assert_eq!(rows[0].percentile, "P10");
        assert_eq!(rows[0].spam, Some(13));
        assert_eq!(rows[1].spam, Some(17));
        assert_eq!(rows[2].spam, Some(25));
        assert_eq!(rows[6].spam, Some(39));
    }
}
