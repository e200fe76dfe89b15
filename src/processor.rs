//! Search Processor
//!
//! Runs one video search end to end: fetch candidates for the user's items,
//! score them, rank them and summarize the outcome.

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::matcher::{MatchEngine, VideoMatch};
use crate::messages::video_results_message;
use crate::search::VideoFinder;

/// Shown when a search is started without items
pub const NO_ITEMS_MESSAGE: &str = "Please add at least one item to search";
/// Shown when providers returned nothing at all
pub const NO_VIDEOS_MESSAGE: &str = "We couldn't find DIY videos for those items. Try adding common craft supplies like scissors, glue, paper, or tape!";

/// Result of processing a search
#[derive(Debug)]
pub enum ProcessResult {
    /// No items were given
    NoItems(String),
    /// Providers returned no candidate videos
    NoVideos(String),
    /// Ranked matches with a summary line
    Ranked {
        results: Vec<VideoMatch>,
        fetched: usize,
        message: String,
    },
    /// The search could not run
    Failed(String),
}

pub struct SearchProcessor {
    finder: VideoFinder,
    engine: MatchEngine,
    search_limit: usize,
}

impl SearchProcessor {
    pub fn new(finder: VideoFinder, engine: MatchEngine, config: &Config) -> Self {
        Self {
            finder,
            engine,
            search_limit: config.search_limit,
        }
    }

    /// Search, score and rank videos for `items`
    pub async fn process(&self, items: &[String]) -> ProcessResult {
        if items.is_empty() {
            return ProcessResult::NoItems(NO_ITEMS_MESSAGE.to_string());
        }

        let videos = match self.finder.search_with_cache(items, self.search_limit).await {
            Ok(videos) => videos,
            Err(e) => {
                warn!("❌ Video search failed: {}", e);
                return ProcessResult::Failed(format!(
                    "Failed to fetch videos: {}. Please check your connection and try again.",
                    e
                ));
            }
        };

        if videos.is_empty() {
            debug!("No videos for {:?}", items);
            return ProcessResult::NoVideos(NO_VIDEOS_MESSAGE.to_string());
        }

        let results = self.engine.ranked_videos(items, &videos);
        let message = video_results_message(&results, items.len());
        info!("🎯 Ranked {} of {} videos", results.len(), videos.len());

        ProcessResult::Ranked {
            results,
            fetched: videos.len(),
            message,
        }
    }
}
