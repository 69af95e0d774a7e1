//! Message length distribution by bucket

use super::stats::round_to;
use super::types::{LengthBucket, LengthBucketRow};
use crate::corpus::{FeatureTable, Label};

/// Per-label counts for each length bucket.
///
/// Always returns all five buckets in ascending order; an empty bucket has
/// `spam_ratio == None`.
pub fn length_distribution(table: &FeatureTable) -> Vec<LengthBucketRow> {
    let mut rows: Vec<LengthBucketRow> = LengthBucket::ALL
        .iter()
        .map(|&bucket| LengthBucketRow {
            bucket,
            ham: 0,
            spam: 0,
            total: 0,
            spam_ratio: None,
        })
        .collect();

    for record in table.records() {
        let bucket = LengthBucket::for_length(record.features.message_length);
        // ALL is in declaration order, so the discriminant is the row index
        let row = &mut rows[bucket as usize];
        match record.label {
            Label::Ham => row.ham += 1,
            Label::Spam => row.spam += 1,
        }
        row.total += 1;
    }

    for row in &mut rows {
        if row.total > 0 {
            row.spam_ratio = Some(round_to(row.spam as f64 / row.total as f64 * 100.0, 2));
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::MessageRecord;

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(LengthBucket::for_length(0), LengthBucket::UpTo50);
        assert_eq!(LengthBucket::for_length(50), LengthBucket::UpTo50);
        assert_eq!(LengthBucket::for_length(51), LengthBucket::UpTo100);
        assert_eq!(LengthBucket::for_length(100), LengthBucket::UpTo100);
        assert_eq!(LengthBucket::for_length(150), LengthBucket::UpTo150);
        assert_eq!(LengthBucket::for_length(200), LengthBucket::UpTo200);
        assert_eq!(LengthBucket::for_length(201), LengthBucket::Over200);
    }

    #[test]
    fn test_empty_buckets_have_no_ratio() {
        let table = FeatureTable::from_records(vec![
            MessageRecord::new(Label::Ham, "short"),
            MessageRecord::new(Label::Spam, "x".repeat(120)),
            MessageRecord::new(Label::Ham, "y".repeat(130)),
            MessageRecord::new(Label::Spam, ""),
        ]);
        let rows = length_distribution(&table);
        assert_eq!(rows.len(), 5);

        assert_eq!((rows[0].ham, rows[0].spam, rows[0].total), (1, 1, 2));
        assert_eq!(rows[0].spam_ratio, Some(50.0));
        assert_eq!(rows[1].total, 0);
        assert_eq!(rows[1].spam_ratio, None);
        assert_eq!(rows[2].spam_ratio, Some(50.0));
        assert_eq!(rows[4].spam_ratio, None);

        let total: usize = rows.iter().map(|r| r.total).sum();
        assert_eq!(total, table.len());
    }
}
