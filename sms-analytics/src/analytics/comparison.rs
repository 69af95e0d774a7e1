//! Ham vs spam feature comparison

use super::stats::{mean, round_opt, sample_std};
use super::types::FeatureComparison;
use crate::corpus::{Feature, FeatureTable, Label};

const DECIMALS: u32 = 3;

/// Mean and sample standard deviation of every feature, per label
pub fn feature_comparison(table: &FeatureTable) -> Vec<FeatureComparison> {
    Feature::ALL
        .iter()
        .map(|&feature| compare_feature(table, feature))
        .collect()
}

fn compare_feature(table: &FeatureTable, feature: Feature) -> FeatureComparison {
    let values = |label: Label| -> Vec<f64> {
        table
            .by_label(label)
            .map(|r| feature.value(&r.features))
            .collect()
    };
    let ham = values(Label::Ham);
    let spam = values(Label::Spam);

    let ham_mean = mean(&ham);
    let spam_mean = mean(&spam);
    let difference = ham_mean.zip(spam_mean).map(|(h, s)| s - h);

    FeatureComparison {
        feature,
        ham_mean: round_opt(ham_mean, DECIMALS),
        ham_std: round_opt(sample_std(&ham), DECIMALS),
        spam_mean: round_opt(spam_mean, DECIMALS),
        spam_std: round_opt(sample_std(&spam), DECIMALS),
        difference: round_opt(difference, DECIMALS),
    }
}
