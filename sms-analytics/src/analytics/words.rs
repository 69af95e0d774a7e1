//! Word frequency ranking

use std::collections::HashMap;
use tracing::debug;

use super::types::WordCount;
use crate::corpus::features::is_letter_word;
use crate::corpus::{FeatureTable, Label};

/// Tokens excluded from the ranking
pub const STOP_WORDS: [&str; 42] = [
    "i", "me", "my", "you", "your", "we", "the", "a", "an", "is", "are", "was", "to", "of", "and",
    "in", "it", "for", "on", "with", "at", "be", "this", "that", "have", "do", "will", "can",
    "but", "or", "so", "if", "just", "not", "u", "ur", "im", "dont", "its", "got", "get", "been",
];

/// Words must be longer than this many characters
const MIN_WORD_CHARS: usize = 2;

/// Lowercase, whitespace-split and filter a message into countable words
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(str::to_lowercase)
        .filter(|w| is_countable(w))
}

fn is_countable(word: &str) -> bool {
    word.chars().count() > MIN_WORD_CHARS
        && is_letter_word(word)
        && !STOP_WORDS.contains(&word)
}

/// The `top_n` most frequent words, optionally restricted to one label.
///
/// Sorted by count descending; equal counts keep the order in which the
/// words first appeared.
pub fn word_frequency(table: &FeatureTable, label: Option<Label>, top_n: usize) -> Vec<WordCount> {
    // word -> (count, first occurrence)
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    let mut seen = 0usize;

    let records = table
        .records()
        .iter()
        .filter(|r| label.map_or(true, |l| r.label == l));

    for record in records {
        for word in tokenize(&record.message) {
            let entry = counts.entry(word).or_insert((0, seen));
            entry.0 += 1;
            seen += 1;
        }
    }

    let mut ranked: Vec<(String, usize, usize)> = counts
        .into_iter()
        .map(|(word, (count, first))| (word, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.truncate(top_n);

    debug!(
        "word_frequency: label={:?} top_n={} returned={}",
        label,
        top_n,
        ranked.len()
    );

    ranked
        .into_iter()
        .map(|(word, count, _)| WordCount { word, count })
        .collect()
}
