//! Per-label basic statistics

use tracing::debug;

use super::stats::{mean, round_to};
use super::types::LabelStats;
use crate::corpus::{FeatureTable, MessageRecord};

/// Count, averages and share of each label present in the table.
///
/// Rows are ordered ham, spam. An empty table yields no rows.
pub fn basic_stats(table: &FeatureTable) -> Vec<LabelStats> {
    let total = table.len();
    if total == 0 {
        debug!("basic_stats: empty table");
        return Vec::new();
    }

    table
        .group_by_label()
        .into_iter()
        .map(|(label, records)| {
            let avg = |f: fn(&MessageRecord) -> f64| {
                let values: Vec<f64> = records.iter().map(|r| f(r)).collect();
                // Groups are never empty
                round_to(mean(&values).unwrap_or_default(), 2)
            };

            LabelStats {
                label,
                count: records.len(),
                avg_length: avg(|r| r.features.message_length as f64),
                avg_words: avg(|r| r.features.word_count as f64),
                avg_uppercase_ratio: avg(|r| r.features.uppercase_ratio),
                avg_exclamations: avg(|r| r.features.exclamation_count as f64),
                percentage: round_to(records.len() as f64 / total as f64 * 100.0, 2),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{Label, MessageRecord};

    fn table(rows: &[(Label, &str)]) -> FeatureTable {
        FeatureTable::from_records(rows.iter().map(|(l, m)| MessageRecord::new(*l, *m)).collect())
    }

    #[test]
    fn test_empty_table() {
        assert!(basic_stats(&FeatureTable::default()).is_empty());
    }

    #[test]
    fn test_counts_and_percentages() {
        let t = table(&[
            (Label::Ham, "Hi there"),
            (Label::Spam, "WIN CASH NOW!!!"),
            (Label::Ham, "See you at 5"),
        ]);
        let stats = basic_stats(&t);
        assert_eq!(stats.len(), 2);

        let ham = &stats[0];
        assert_eq!(ham.label, Label::Ham);
        assert_eq!(ham.count, 2);
        assert_eq!(ham.percentage, 66.67);
        // (8 + 12) / 2
        assert_eq!(ham.avg_length, 10.0);
        assert_eq!(ham.avg_words, 3.0);

        let spam = &stats[1];
        assert_eq!(spam.count, 1);
        assert_eq!(spam.percentage, 33.33);
        assert_eq!(spam.avg_exclamations, 3.0);
        assert_eq!(spam.avg_uppercase_ratio, 1.0);
    }

    #[test]
    fn test_single_label_only() {
        let t = table(&[(Label::Spam, "a"), (Label::Spam, "b")]);
        let stats = basic_stats(&t);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].percentage, 100.0);
    }
}
