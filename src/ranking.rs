//! Result ranking
//!
//! Orders match records for display. Both rankers use stable sorts, so
//! records that tie on every key keep their catalog order.

use std::cmp::Ordering;
use tracing::debug;

use crate::matcher::{ProjectMatch, VideoMatch};

/// Videos at or below this percentage need another reason to be shown
const MIN_VIDEO_PERCENTAGE: u32 = 30;
/// Relevance above this keeps a weakly matching video
const MIN_VIDEO_RELEVANCE: f64 = 0.4;

/// Best score first; among equals, fewer missing materials first
pub fn rank_projects(mut results: Vec<ProjectMatch>) -> Vec<ProjectMatch> {
    results.sort_by(|a, b| {
        b.match_score
            .total_cmp(&a.match_score)
            .then_with(|| a.suggested_materials.len().cmp(&b.suggested_materials.len()))
    });
    results
}

/// Whether a video record is worth showing at all
pub fn is_video_worth_showing(result: &VideoMatch) -> bool {
    result.match_percentage > MIN_VIDEO_PERCENTAGE
        || result.is_exact_match()
        || result.relevance_score > MIN_VIDEO_RELEVANCE
}

fn compare_videos(a: &VideoMatch, b: &VideoMatch) -> Ordering {
    b.match_type
        .rank()
        .cmp(&a.match_type.rank())
        .then_with(|| b.match_percentage.cmp(&a.match_percentage))
        .then_with(|| b.relevance_score.total_cmp(&a.relevance_score))
        .then_with(|| a.suggested_items.len().cmp(&b.suggested_items.len()))
}

/// Drop weak videos, then order by match type, percentage, relevance and
/// fewest unused items, in that priority.
pub fn rank_videos(results: Vec<VideoMatch>) -> Vec<VideoMatch> {
    let total = results.len();
    let mut kept: Vec<VideoMatch> = results.into_iter().filter(is_video_worth_showing).collect();
    kept.sort_by(compare_videos);

    debug!("Ranked {} of {} videos", kept.len(), total);
    kept
}
