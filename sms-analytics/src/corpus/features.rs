//! Per-message feature extraction
//!
//! Every feature is a pure function of the message text.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::analytics::stats::round_to;

/// Currency symbols counted by `has_currency`
pub const CURRENCY_SYMBOLS: [char; 3] = ['$', '£', '€'];

/// Decimal places kept on `uppercase_ratio`
const UPPERCASE_RATIO_DECIMALS: u32 = 4;

fn digit_regex() -> &'static Regex {
    static DIGIT: OnceLock<Regex> = OnceLock::new();
    // `\d` matches any Unicode decimal digit, not only ASCII
    DIGIT.get_or_init(|| Regex::new(r"\d").expect("digit pattern is valid"))
}

// Letters are the `L*` general categories. Combining marks such as vowel
// signs are not letters even though they carry the Alphabetic property.
fn letter_regex() -> &'static Regex {
    static LETTER: OnceLock<Regex> = OnceLock::new();
    LETTER.get_or_init(|| Regex::new(r"\p{L}").expect("letter pattern is valid"))
}

fn word_regex() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"^\p{L}+$").expect("word pattern is valid"))
}

/// Whether `word` is non-empty and made of letters only
pub fn is_letter_word(word: &str) -> bool {
    word_regex().is_match(word)
}

/// Features derived from a message at load time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageFeatures {
    /// Number of characters
    pub message_length: usize,
    /// Number of whitespace-delimited tokens
    pub word_count: usize,
    /// Contains at least one decimal digit
    pub has_numbers: bool,
    /// Contains `$`, `£` or `€`
    pub has_currency: bool,
    /// Uppercase letters over alphabetic characters, 0.0 without letters
    pub uppercase_ratio: f64,
    /// Number of `!`
    pub exclamation_count: usize,
    /// Number of `?`
    pub question_count: usize,
}

impl MessageFeatures {
    /// Derive all features from `text`
    pub fn extract(text: &str) -> Self {
        let mut message_length = 0;
        let mut exclamation_count = 0;
        let mut question_count = 0;
        let mut has_currency = false;

        for c in text.chars() {
            message_length += 1;
            match c {
                '!' => exclamation_count += 1,
                '?' => question_count += 1,
                c if CURRENCY_SYMBOLS.contains(&c) => has_currency = true,
                _ => {}
            }
        }

        Self {
            message_length,
            word_count: text.split_whitespace().count(),
            has_numbers: digit_regex().is_match(text),
            has_currency,
            uppercase_ratio: uppercase_ratio(text),
            exclamation_count,
            question_count,
        }
    }
}

/// Share of uppercase letters among alphabetic characters
pub fn uppercase_ratio(text: &str) -> f64 {
    let (letters, uppercase) = letter_regex()
        .find_iter(text)
        .fold((0usize, 0usize), |(letters, upper), m| {
            let is_upper = m.as_str().chars().all(char::is_uppercase);
            (letters + 1, upper + usize::from(is_upper))
        });

    if letters == 0 {
        return 0.0;
    }

    round_to(uppercase as f64 / letters as f64, UPPERCASE_RATIO_DECIMALS)
}
