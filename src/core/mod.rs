//! Core text processing
//!
//! Normalization and tokenization used by the scorer, resolver and matcher.

pub mod text_normalizer;

pub use text_normalizer::{extract_keywords, normalize, tokenize};
