//! Text Normalization
//!
//! Lowercasing, punctuation stripping and tokenization shared by every
//! comparison the matcher makes.

/// Minimum length (exclusive) for a word to count as a keyword
const MIN_KEYWORD_LEN: usize = 2;

/// Normalize text for comparison.
///
/// Lowercases, drops every character that is not an ASCII letter, digit or
/// whitespace, then trims. Inner whitespace runs are kept as-is.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Split already-normalized text into words
pub fn tokenize(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().collect()
}

/// Extract keywords from free text.
///
/// Normalizes, keeps words longer than two characters and returns the first
/// `limit` of them in order.
pub fn extract_keywords(text: &str, limit: usize) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .filter(|word| word.chars().count() > MIN_KEYWORD_LEN)
        .take(limit)
        .map(str::to_string)
        .collect()
}
