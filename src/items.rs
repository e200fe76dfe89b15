//! User item parsing and validation
//!
//! Turns the free-text "what do you have?" box into a clean item list.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

lazy_static! {
    static ref SEPARATORS: Regex = Regex::new(r"[,\n]+").expect("valid separator regex");
    static ref NUMBERS_ONLY: Regex = Regex::new(r"^[0-9\s]+$").expect("valid numeric regex");
    static ref INJECTION_CHARS: Regex = Regex::new(r"[<>{}\[\]]").expect("valid injection regex");
    static ref DIGITS_ONLY: Regex = Regex::new(r"^[0-9]+$").expect("valid digits regex");
}

/// Maximum items kept from one submission
pub const MAX_ITEMS: usize = 20;
/// Items this long (in characters) or longer are dropped
pub const MAX_ITEM_LENGTH: usize = 50;

/// Limits applied while parsing and validating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemLimits {
    pub max_items: usize,
    pub max_item_length: usize,
}

impl Default for ItemLimits {
    fn default() -> Self {
        Self {
            max_items: MAX_ITEMS,
            max_item_length: MAX_ITEM_LENGTH,
        }
    }
}

/// Parse raw input with the default limits
pub fn parse_items(raw: &str) -> Vec<String> {
    parse_items_with(raw, &ItemLimits::default())
}

/// Parse comma/newline separated input into a clean, deduplicated item list.
///
/// Entries are trimmed and lowercased. Empty, overlong, number-only and
/// markup-looking entries are dropped silently. The first `max_items`
/// survivors are kept, then duplicates are removed keeping the first
/// occurrence.
pub fn parse_items_with(raw: &str, limits: &ItemLimits) -> Vec<String> {
    let candidates: Vec<String> = SEPARATORS
        .split(raw)
        .map(|piece| piece.trim().to_lowercase())
        .filter(|item| !item.is_empty() && item.chars().count() < limits.max_item_length)
        .filter(|item| !NUMBERS_ONLY.is_match(item))
        .filter(|item| !INJECTION_CHARS.is_match(item))
        .take(limits.max_items)
        .collect();

    let mut seen = HashSet::new();
    let items: Vec<String> = candidates
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect();

    debug!("Parsed {} items from input", items.len());
    items
}

/// Check an item list with the default limits
pub fn is_valid_input(items: &[String]) -> bool {
    is_valid_input_with(items, &ItemLimits::default())
}

/// An item list is usable when it is non-empty, within the item cap, and at
/// least one entry has two or more characters and is not a bare number.
pub fn is_valid_input_with(items: &[String], limits: &ItemLimits) -> bool {
    if items.is_empty() || items.len() > limits.max_items {
        return false;
    }

    items.iter().any(|item| {
        let normalized = item.to_lowercase();
        normalized.chars().count() >= 2 && !DIGITS_ONLY.is_match(&normalized)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_mixed_delimiters_dedup() {
        assert_eq!(parse_items("scissors, glue\nscissors"), strings(&["scissors", "glue"]));
    }

    #[test]
    fn test_parse_drops_numbers_and_markup() {
        assert_eq!(parse_items("123, a, <script>"), strings(&["a"]));
        assert_eq!(parse_items("{glue}, [tape], 4 5 6"), Vec::<String>::new());
    }

    #[test]
    fn test_parse_trims_and_lowercases() {
        assert_eq!(
            parse_items("  Mason Jar ,,\n\nFairy LIGHTS\r\n"),
            strings(&["mason jar", "fairy lights"])
        );
    }

    #[test]
    fn test_parse_drops_long_entries() {
        let long = "x".repeat(50);
        let almost = "y".repeat(49);
        let raw = format!("{}, {}", long, almost);
        assert_eq!(parse_items(&raw), vec![almost]);
    }

    #[test]
    fn test_parse_truncates_before_dedup() {
        let mut raw: Vec<String> = (0..19).map(|i| format!("item{}", i)).collect();
        raw.push("item0".to_string());
        raw.push("late".to_string());

        let items = parse_items(&raw.join(","));
        // the 21st entry is cut before duplicates are removed
        assert_eq!(items.len(), 19);
        assert!(!items.contains(&"late".to_string()));
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_items("").is_empty());
        assert!(parse_items(" , \n ,").is_empty());
    }

    #[test]
    fn test_is_valid_input() {
        assert!(!is_valid_input(&[]));
        assert!(!is_valid_input(&strings(&["5"])));
        assert!(!is_valid_input(&strings(&["a"])));
        assert!(is_valid_input(&strings(&["glue"])));
        assert!(is_valid_input(&strings(&["5", "a", "tin"])));
    }

    #[test]
    fn test_is_valid_input_too_many() {
        let items: Vec<String> = (0..21).map(|i| format!("item{}", i)).collect();
        assert!(!is_valid_input(&items));
        assert!(is_valid_input(&items[..20]));
    }

    #[test]
    fn test_custom_limits() {
        let limits = ItemLimits {
            max_items: 2,
            max_item_length: 6,
        };
        assert_eq!(
            parse_items_with("glue, scissors, tape, paper", &limits),
            strings(&["glue", "tape"])
        );
    }
}
