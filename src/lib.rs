//! Craftmatch Library
//!
//! Matches a free-text list of household items against DIY craft projects
//! and videos, ranked by fuzzy text similarity.

pub mod aliases;
pub mod catalog;
pub mod config;
pub mod core;
pub mod error;
pub mod items;
pub mod matcher;
pub mod messages;
pub mod processor;
pub mod ranking;
pub mod search;
pub mod utils;
