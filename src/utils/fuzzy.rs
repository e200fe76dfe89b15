//! Fuzzy matching utilities
//!
//! Heuristic substring/word-overlap similarity used by the alias resolver and
//! the match engine. This is deliberately not an edit distance: the match
//! thresholds elsewhere in the crate are calibrated against these fixed tiers.

use serde::{Deserialize, Serialize};

use crate::core::text_normalizer::{normalize, tokenize};

/// Score for identical strings after normalization
pub const EXACT_SCORE: f64 = 1.0;
/// Score when one string contains the other
pub const SUBSTRING_SCORE: f64 = 0.8;
/// Constant score returned by [`OverlapMode::Binary`]
pub const BINARY_OVERLAP_SCORE: f64 = 0.6;
/// Upper bound for [`OverlapMode::Proportional`]
pub const MAX_OVERLAP_SCORE: f64 = 0.7;

/// How the word-overlap tier turns overlapping words into a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlapMode {
    /// Any overlap scores a flat 0.6
    Binary,
    /// `min(pairs / max(len1, len2), 0.7)`
    #[default]
    Proportional,
}

/// Result of a fuzzy match with the matched value and score
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyMatch {
    /// Position of the candidate in the input slice
    pub index: usize,
    pub value: String,
    pub score: f64,
}

/// Similarity in `[0, 1]` using the default proportional overlap mode
pub fn similarity(a: &str, b: &str) -> f64 {
    similarity_with(a, b, OverlapMode::default())
}

/// Similarity in `[0, 1]` with an explicit overlap mode.
///
/// Tiers, first hit wins: equal after normalization (1.0), one contains the
/// other (0.8), overlapping words (see [`OverlapMode`]), otherwise 0.0.
/// Text that normalizes to nothing is contained in every string, so it
/// scores 0.8 against anything non-empty and 1.0 against itself.
pub fn similarity_with(a: &str, b: &str, mode: OverlapMode) -> f64 {
    let norm_a = normalize(a);
    let norm_b = normalize(b);

    if norm_a == norm_b {
        return EXACT_SCORE;
    }

    if norm_a.contains(&norm_b) || norm_b.contains(&norm_a) {
        return SUBSTRING_SCORE;
    }

    word_overlap(&norm_a, &norm_b, mode)
}

/// Word-level tier. Counts (w1, w2) pairs where either word contains the
/// other, so the score is symmetric in its arguments.
fn word_overlap(norm_a: &str, norm_b: &str, mode: OverlapMode) -> f64 {
    let words_a = tokenize(norm_a);
    let words_b = tokenize(norm_b);

    let pairs = words_a
        .iter()
        .map(|w1| {
            words_b
                .iter()
                .filter(|w2| w1.contains(*w2) || w2.contains(*w1))
                .count()
        })
        .sum::<usize>();

    if pairs == 0 {
        return 0.0;
    }

    match mode {
        OverlapMode::Binary => BINARY_OVERLAP_SCORE,
        OverlapMode::Proportional => {
            let longest = words_a.len().max(words_b.len()) as f64;
            (pairs as f64 / longest).min(MAX_OVERLAP_SCORE)
        }
    }
}

/// Find matches in a list of candidates
///
/// Returns up to `n` matches scoring at least `cutoff` (and above zero),
/// best first. Equal scores keep candidate order.
pub fn find_matches(
    search_term: &str,
    candidates: &[String],
    n: usize,
    cutoff: f64,
    mode: OverlapMode,
) -> Vec<FuzzyMatch> {
    let mut matches: Vec<FuzzyMatch> = candidates
        .iter()
        .enumerate()
        .filter_map(|(index, candidate)| {
            let score = similarity_with(search_term, candidate, mode);
            (score > 0.0 && score >= cutoff).then(|| FuzzyMatch {
                index,
                value: candidate.clone(),
                score,
            })
        })
        .collect();

    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    matches.truncate(n);

    matches
}

/// Find the best match in a list of candidates
pub fn find_best_match(
    search_term: &str,
    candidates: &[String],
    cutoff: f64,
    mode: OverlapMode,
) -> Option<FuzzyMatch> {
    find_matches(search_term, candidates, 1, cutoff, mode)
        .into_iter()
        .next()
}
