//! Video search
//!
//! Gathers candidate videos for a set of user items from one or more
//! providers. The crate ships no network client; anything implementing
//! [`VideoProvider`] can be plugged in.

pub mod cache;
pub mod local;
pub mod queries;

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::catalog::Video;
use crate::config::Config;
use crate::error::CraftResult;

pub use cache::{cache_key, SearchCache};
pub use local::LocalVideoProvider;
pub use queries::build_search_queries;

/// Trait for video sources
#[async_trait]
pub trait VideoProvider: Send + Sync {
    /// Return up to `limit` videos for a free-text query
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<Video>>;

    /// Get the provider name
    fn name(&self) -> &str;
}

/// Runs the query plan against providers and caches the outcome
pub struct VideoFinder {
    primary: Arc<dyn VideoProvider>,
    fallback: Option<Arc<dyn VideoProvider>>,
    cache: Mutex<SearchCache>,
    per_query_limit: usize,
    request_delay: Duration,
}

impl VideoFinder {
    pub fn new(primary: Arc<dyn VideoProvider>, config: &Config) -> Self {
        Self {
            primary,
            fallback: None,
            cache: Mutex::new(SearchCache::new(config.cache_ttl())),
            per_query_limit: config.per_query_limit,
            request_delay: config.request_delay(),
        }
    }

    /// Provider asked when the primary comes back with too few videos
    pub fn with_fallback(mut self, fallback: Arc<dyn VideoProvider>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Collect up to `limit` distinct videos for `items`.
    ///
    /// Queries run one at a time with a pause between them. A failing query
    /// is logged and skipped. If fewer than half of `limit` videos turn up,
    /// the fallback provider gets the first query for the remainder.
    pub async fn search(&self, items: &[String], limit: usize) -> Vec<Video> {
        let queries = build_search_queries(items);
        let mut videos: Vec<Video> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        info!(
            "🔎 Searching {} for {} items ({} queries)",
            self.primary.name(),
            items.len(),
            queries.len()
        );

        for query in &queries {
            if videos.len() >= limit {
                break;
            }

            match self.primary.search(query, self.per_query_limit).await {
                Ok(found) => collect_new(&mut videos, &mut seen, found, limit),
                Err(e) => warn!("Search failed for query \"{}\": {}", query, e),
            }

            if !self.request_delay.is_zero() {
                tokio::time::sleep(self.request_delay).await;
            }
        }

        if videos.len() * 2 < limit {
            if let (Some(fallback), Some(first_query)) = (&self.fallback, queries.first()) {
                debug!("Only {} videos, trying {}", videos.len(), fallback.name());
                match fallback.search(first_query, limit - videos.len()).await {
                    Ok(found) => collect_new(&mut videos, &mut seen, found, limit),
                    Err(e) => warn!("Fallback search via {} failed: {}", fallback.name(), e),
                }
            }
        }

        info!("✅ Found {} videos", videos.len());
        videos
    }

    /// [`VideoFinder::search`] behind the session cache
    pub async fn search_with_cache(&self, items: &[String], limit: usize) -> CraftResult<Vec<Video>> {
        if let Some(cached) = self.cache.lock()?.get(items, limit) {
            return Ok(cached);
        }

        let videos = self.search(items, limit).await;
        self.cache.lock()?.insert(items, videos.clone());
        Ok(videos)
    }

    /// Drop every cached search
    pub fn clear_cache(&self) -> CraftResult<()> {
        self.cache.lock()?.clear();
        Ok(())
    }
}

fn collect_new(videos: &mut Vec<Video>, seen: &mut HashSet<String>, found: Vec<Video>, limit: usize) {
    for video in found {
        if videos.len() >= limit {
            break;
        }
        if seen.insert(video.id.clone()) {
            videos.push(video);
        }
    }
}
