//! Offline video provider backed by a preloaded catalog

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use super::VideoProvider;
use crate::catalog::Video;
use crate::utils::fuzzy::{find_matches, OverlapMode};

/// Serves videos from memory, best fuzzy match for the query first
#[derive(Debug, Clone, Default)]
pub struct LocalVideoProvider {
    videos: Vec<Video>,
}

impl LocalVideoProvider {
    pub fn new(videos: Vec<Video>) -> Self {
        Self { videos }
    }
}

#[async_trait]
impl VideoProvider for LocalVideoProvider {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<Video>> {
        let contents: Vec<String> = self.videos.iter().map(Video::content).collect();
        let matches = find_matches(query, &contents, limit, 0.0, OverlapMode::Proportional);
        debug!("Local search '{}': {} hits", query, matches.len());

        Ok(matches
            .into_iter()
            .map(|m| self.videos[m.index].clone())
            .collect())
    }

    fn name(&self) -> &str {
        "local"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::VideoSource;

    fn video(id: &str, title: &str) -> Video {
        Video {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            thumbnail: String::new(),
            url: String::new(),
            source: VideoSource::Youtube,
            duration: None,
            views: None,
            channel: None,
        }
    }

    #[tokio::test]
    async fn test_local_search_filters_and_limits() {
        let provider = LocalVideoProvider::new(vec![
            video("a", "Cardboard castle"),
            video("b", "Knitting basics"),
            video("c", "Cardboard box organizer"),
        ]);

        let hits = provider.search("cardboard", 5).await.unwrap();
        let ids: Vec<&str> = hits.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);

        let one = provider.search("cardboard", 1).await.unwrap();
        assert_eq!(one.len(), 1);
        assert_eq!(provider.name(), "local");
    }
}
