//! Video matching
//!
//! A video has no material list, so each user item is looked for in the
//! video's title and description keywords instead.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::MatchEngine;
use crate::catalog::Video;
use crate::core::text_normalizer::extract_keywords;
use crate::utils::fuzzy::similarity_with;

/// Percentage at or above which a video is a partial match
const PARTIAL_PERCENTAGE: u32 = 70;

/// How completely the user's items cover a video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Exact,
    Partial,
    Suggested,
}

impl MatchType {
    /// Bucket for a rounded match percentage
    pub fn from_percentage(percentage: u32) -> Self {
        if percentage == 100 {
            MatchType::Exact
        } else if percentage >= PARTIAL_PERCENTAGE {
            MatchType::Partial
        } else {
            MatchType::Suggested
        }
    }

    /// Sort weight, higher is better
    pub fn rank(self) -> u8 {
        match self {
            MatchType::Exact => 3,
            MatchType::Partial => 2,
            MatchType::Suggested => 1,
        }
    }
}

/// Outcome of matching one video against the user's items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMatch {
    pub video: Video,
    pub matched_items: Vec<String>,
    /// User items the video does not appear to use
    pub suggested_items: Vec<String>,
    /// `matched_items / user items`
    pub match_score: f64,
    pub match_percentage: u32,
    pub match_type: MatchType,
    pub relevance_score: f64,
}

impl VideoMatch {
    fn empty(video: &Video) -> Self {
        Self {
            video: video.clone(),
            matched_items: Vec::new(),
            suggested_items: Vec::new(),
            match_score: 0.0,
            match_percentage: 0,
            match_type: MatchType::Suggested,
            relevance_score: 0.0,
        }
    }

    pub fn is_exact_match(&self) -> bool {
        self.match_type == MatchType::Exact
    }
}

impl MatchEngine {
    /// Score one video against the user's items.
    ///
    /// Each item is expanded through the alias table and compared with the
    /// video's keywords and, as typed, with the title; its best score above
    /// the video threshold marks it matched.
    pub fn match_video(&self, items: &[String], video: &Video) -> VideoMatch {
        if items.is_empty() {
            return VideoMatch::empty(video);
        }

        let settings = &self.settings;
        let mode = settings.video_overlap;
        let resolver = self
            .aliases
            .resolver(settings.video_alias_threshold, mode);

        let content = video.content();
        let keywords = extract_keywords(&content, settings.keyword_limit);

        let mut matched_items = Vec::new();
        let mut suggested_items = Vec::new();
        let mut similarity_scores = Vec::new();

        for item in items {
            let keyword_best = resolver
                .expand(item)
                .iter()
                .flat_map(|variant| {
                    keywords
                        .iter()
                        .map(move |keyword| similarity_with(variant, keyword, mode))
                })
                .fold(0.0_f64, f64::max);
            let title_score = similarity_with(item, &video.title, mode);
            let best_match = keyword_best.max(title_score);

            if best_match > settings.video_match_threshold {
                matched_items.push(item.clone());
                similarity_scores.push(best_match);
            } else {
                suggested_items.push(item.clone());
            }
        }

        let match_score = matched_items.len() as f64 / items.len() as f64;
        let match_percentage = (match_score * 100.0).round() as u32;

        let avg_similarity = if similarity_scores.is_empty() {
            0.0
        } else {
            similarity_scores.iter().sum::<f64>() / similarity_scores.len() as f64
        };

        let content_lower = content.to_lowercase();
        let is_diy_video = settings
            .diy_keywords
            .iter()
            .any(|kw| content_lower.contains(kw.as_str()));
        let relevance_bonus = if is_diy_video {
            settings.relevance_bonus
        } else {
            0.0
        };
        let relevance_score = (avg_similarity + relevance_bonus).min(1.0);

        debug!(
            "Video '{}': {}/{} items, {}%, relevance {:.2}",
            video.id,
            matched_items.len(),
            items.len(),
            match_percentage,
            relevance_score
        );

        VideoMatch {
            video: video.clone(),
            matched_items,
            suggested_items,
            match_score,
            match_percentage,
            match_type: MatchType::from_percentage(match_percentage),
            relevance_score,
        }
    }

    /// Score videos in order. No items means no results.
    pub fn match_videos<'v>(
        &self,
        items: &[String],
        videos: impl IntoIterator<Item = &'v Video>,
    ) -> Vec<VideoMatch> {
        if items.is_empty() {
            return Vec::new();
        }

        videos
            .into_iter()
            .map(|video| self.match_video(items, video))
            .collect()
    }
}
