//! Headline insights derived from the summary and feature comparison

use serde::Serialize;

use super::format::UNDEFINED;
use crate::analytics::stats::round_to;
use crate::analytics::{FeatureComparison, Summary};
use crate::corpus::Feature;

/// Key figures for the closing section of the report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insights {
    pub spam_percentage: f64,
    pub ham_percentage: f64,
    /// Spam minus ham mean message length
    pub length_difference: Option<f64>,
    /// Spam minus ham mean uppercase ratio
    pub uppercase_difference: Option<f64>,
    /// Spam minus ham mean exclamation count
    pub exclamation_difference: Option<f64>,
}

impl Insights {
    pub fn derive(summary: &Summary, comparison: &[FeatureComparison]) -> Self {
        let difference = |feature: Feature| {
            comparison
                .iter()
                .find(|row| row.feature == feature)
                .and_then(|row| row.difference)
        };

        Self {
            spam_percentage: summary.spam_percentage,
            ham_percentage: round_to(100.0 - summary.spam_percentage, 2),
            length_difference: difference(Feature::MessageLength),
            uppercase_difference: difference(Feature::UppercaseRatio),
            exclamation_difference: difference(Feature::ExclamationCount),
        }
    }

    /// Numbered insight sentences
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "Dataset is imbalanced: {}% spam vs {}% ham",
            self.spam_percentage, self.ham_percentage
        )];

        lines.push(match self.length_difference {
            Some(d) => format!(
                "Spam messages are {} on average ({:.1} chars difference)",
                if d > 0.0 { "longer" } else { "shorter" },
                d.abs()
            ),
            None => format!("Spam/ham length difference: {}", UNDEFINED),
        });

        lines.push(match self.uppercase_difference {
            Some(d) => format!(
                "Spam uses {} uppercase ({:.3} ratio difference)",
                if d > 0.0 { "more" } else { "less" },
                d
            ),
            None => format!("Spam/ham uppercase difference: {}", UNDEFINED),
        });

        lines.push(match self.exclamation_difference {
            Some(d) => format!("Spam has {:.1} more exclamation marks on average", d),
            None => format!("Spam/ham exclamation difference: {}", UNDEFINED),
        });

        lines
            .into_iter()
            .enumerate()
            .map(|(i, line)| format!("{}. {}", i + 1, line))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(spam_percentage: f64) -> Summary {
        Summary {
            total_messages: 10,
            spam_count: 1,
            ham_count: 9,
            spam_percentage,
            avg_spam_length: Some(100.0),
            avg_ham_length: Some(50.0),
            max_message_length: 120,
            min_message_length: 2,
        }
    }

    fn row(feature: Feature, difference: Option<f64>) -> FeatureComparison {
        FeatureComparison {
            feature,
            ham_mean: None,
            ham_std: None,
            spam_mean: None,
            spam_std: None,
            difference,
        }
    }

    #[test]
    fn test_lines() {
        let comparison = vec![
            row(Feature::MessageLength, Some(-12.34)),
            row(Feature::UppercaseRatio, Some(0.123)),
            row(Feature::ExclamationCount, Some(0.5)),
        ];
        let insights = Insights::derive(&summary(13.41), &comparison);
        assert_eq!(insights.ham_percentage, 86.59);

        let lines = insights.lines();
        assert_eq!(lines[0], "1. Dataset is imbalanced: 13.41% spam vs 86.59% ham");
        assert_eq!(lines[1], "2. Spam messages are shorter on average (12.3 chars difference)");
        assert_eq!(lines[2], "3. Spam uses more uppercase (0.123 ratio difference)");
        assert_eq!(lines[3], "4. Spam has 0.5 more exclamation marks on average");
    }

    #[test]
    fn test_undefined_differences() {
        let insights = Insights::derive(&summary(100.0), &[]);
        let lines = insights.lines();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].ends_with("n/a"));
        assert!(lines[3].ends_with("n/a"));
    }
}
