//! Top-level corpus summary

use super::stats::{mean, round_opt, round_to};
use super::types::Summary;
use crate::corpus::{FeatureTable, Label};
use crate::error::{AnalyticsError, Result};

/// Totals, spam share, mean lengths per label and the length range.
///
/// Fails with [`AnalyticsError::EmptyCorpus`] on an empty table.
pub fn summary(table: &FeatureTable) -> Result<Summary> {
    let total = table.len();
    if total == 0 {
        return Err(AnalyticsError::EmptyCorpus);
    }

    let lengths = |label: Label| -> Vec<f64> {
        table
            .by_label(label)
            .map(|r| r.features.message_length as f64)
            .collect()
    };
    let spam_lengths = lengths(Label::Spam);
    let ham_lengths = lengths(Label::Ham);

    let all_lengths = table.records().iter().map(|r| r.features.message_length);
    let max_message_length = all_lengths.clone().max().unwrap_or_default();
    let min_message_length = all_lengths.min().unwrap_or_default();

    Ok(Summary {
        total_messages: total,
        spam_count: spam_lengths.len(),
        ham_count: ham_lengths.len(),
        spam_percentage: round_to(spam_lengths.len() as f64 / total as f64 * 100.0, 2),
        avg_spam_length: round_opt(mean(&spam_lengths), 2),
        avg_ham_length: round_opt(mean(&ham_lengths), 2),
        max_message_length,
        min_message_length,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::MessageRecord;

    #[test]
    fn test_empty_corpus_fails() {
        let err = summary(&FeatureTable::default()).unwrap_err();
        assert!(matches!(err, AnalyticsError::EmptyCorpus));
    }

    #[test]
    fn test_summary_values() {
        let table = FeatureTable::from_records(vec![
            MessageRecord::new(Label::Ham, "Hi there"),
            MessageRecord::new(Label::Spam, "WIN CASH NOW!!!"),
            MessageRecord::new(Label::Ham, "See you at 5"),
        ]);
        let s = summary(&table).unwrap();
        assert_eq!(s.total_messages, 3);
        assert_eq!(s.spam_count, 1);
        assert_eq!(s.ham_count, 2);
        assert_eq!(s.spam_percentage, 33.33);
        assert_eq!(s.avg_spam_length, Some(15.0));
        assert_eq!(s.avg_ham_length, Some(10.0));
        assert_eq!(s.max_message_length, 15);
        assert_eq!(s.min_message_length, 8);
    }

    #[test]
    fn test_missing_label_mean_is_none() {
        let table = FeatureTable::from_records(vec![MessageRecord::new(Label::Spam, "")]);
        let s = summary(&table).unwrap();
        assert_eq!(s.avg_ham_length, None);
        assert_eq!(s.avg_spam_length, Some(0.0));
        assert_eq!(s.spam_percentage, 100.0);
    }
}
