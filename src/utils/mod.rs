//! Utility modules

pub mod fuzzy;

pub use fuzzy::{find_best_match, find_matches, similarity, similarity_with, FuzzyMatch, OverlapMode};
