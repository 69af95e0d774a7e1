//! Corpus types and data structures

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::features::MessageFeatures;

/// Message class
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Legitimate message
    Ham,
    /// Unsolicited message
    Spam,
}

impl Label {
    /// Both labels, in grouping order
    pub const ALL: [Label; 2] = [Label::Ham, Label::Spam];

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Ham => "ham",
            Label::Spam => "spam",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ham" => Ok(Label::Ham),
            "spam" => Ok(Label::Spam),
            other => Err(format!("unknown label '{}'", other)),
        }
    }
}

/// One corpus line with its derived features
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageRecord {
    pub label: Label,
    pub message: String,
    #[serde(flatten)]
    pub features: MessageFeatures,
}

impl MessageRecord {
    /// Build a record, deriving features from the message text
    pub fn new(label: Label, message: impl Into<String>) -> Self {
        let message = message.into();
        let features = MessageFeatures::extract(&message);
        Self {
            label,
            message,
            features,
        }
    }
}

/// The loaded corpus: records in input order, read-only after construction
#[derive(Debug, Clone, Default)]
pub struct FeatureTable {
    records: Vec<MessageRecord>,
}

impl FeatureTable {
    pub fn from_records(records: Vec<MessageRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[MessageRecord] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records carrying `label`, in input order
    pub fn by_label(&self, label: Label) -> impl Iterator<Item = &MessageRecord> + '_ {
        self.records.iter().filter(move |r| r.label == label)
    }

    /// Count of records carrying `label`
    pub fn count(&self, label: Label) -> usize {
        self.by_label(label).count()
    }

    /// Group records by label. Only labels present in the table get an entry.
    pub fn group_by_label(&self) -> BTreeMap<Label, Vec<&MessageRecord>> {
        let mut groups: BTreeMap<Label, Vec<&MessageRecord>> = BTreeMap::new();
        for record in &self.records {
            groups.entry(record.label).or_default().push(record);
        }
        groups
    }
}

/// Numeric per-message feature, as used by the comparison view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    MessageLength,
    WordCount,
    UppercaseRatio,
    ExclamationCount,
    QuestionCount,
    HasNumbers,
    HasCurrency,
}

impl Feature {
    pub const ALL: [Feature; 7] = [
        Feature::MessageLength,
        Feature::WordCount,
        Feature::UppercaseRatio,
        Feature::ExclamationCount,
        Feature::QuestionCount,
        Feature::HasNumbers,
        Feature::HasCurrency,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Feature::MessageLength => "message_length",
            Feature::WordCount => "word_count",
            Feature::UppercaseRatio => "uppercase_ratio",
            Feature::ExclamationCount => "exclamation_count",
            Feature::QuestionCount => "question_count",
            Feature::HasNumbers => "has_numbers",
            Feature::HasCurrency => "has_currency",
        }
    }

    /// Read the feature as a number; flags become 0.0 / 1.0
    pub fn value(&self, features: &MessageFeatures) -> f64 {
        match self {
            Feature::MessageLength => features.message_length as f64,
            Feature::WordCount => features.word_count as f64,
            Feature::UppercaseRatio => features.uppercase_ratio,
            Feature::ExclamationCount => features.exclamation_count as f64,
            Feature::QuestionCount => features.question_count as f64,
            Feature::HasNumbers => f64::from(u8::from(features.has_numbers)),
            Feature::HasCurrency => f64::from(u8::from(features.has_currency)),
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_parse() {
        assert_eq!("ham".parse::<Label>(), Ok(Label::Ham));
        assert_eq!("spam".parse::<Label>(), Ok(Label::Spam));
        assert!("Spam".parse::<Label>().is_err());
        assert!("".parse::<Label>().is_err());
    }

    #[test]
    fn test_group_by_label_keeps_order() {
        let table = FeatureTable::from_records(vec![
            MessageRecord::new(Label::Spam, "first spam"),
            MessageRecord::new(Label::Ham, "first ham"),
            MessageRecord::new(Label::Spam, "second spam"),
        ]);

        let groups = table.group_by_label();
        let labels: Vec<Label> = groups.keys().copied().collect();
        assert_eq!(labels, vec![Label::Ham, Label::Spam]);

        let spam: Vec<&str> = groups[&Label::Spam].iter().map(|r| r.message.as_str()).collect();
        assert_eq!(spam, vec!["first spam", "second spam"]);
    }

    #[test]
    fn test_group_by_label_skips_absent_labels() {
        let table = FeatureTable::from_records(vec![MessageRecord::new(Label::Ham, "hi")]);
        assert!(!table.group_by_label().contains_key(&Label::Spam));
        assert_eq!(table.count(Label::Spam), 0);
    }

    #[test]
    fn test_flag_features_are_numeric() {
        let record = MessageRecord::new(Label::Spam, "Win $100");
        assert_eq!(Feature::HasNumbers.value(&record.features), 1.0);
        assert_eq!(Feature::HasCurrency.value(&record.features), 1.0);
        assert_eq!(Feature::QuestionCount.value(&record.features), 0.0);
    }
}
