//! Mock Video Provider for Testing
//!
//! Provides controlled responses for integration tests.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use craftmatch::catalog::Video;
use craftmatch::search::VideoProvider;
use std::sync::Mutex;

/// Mock provider that returns queued responses in order
pub struct MockProvider {
    /// Queue of responses; `None` simulates a failed request
    responses: Mutex<Vec<Option<Vec<Video>>>>,
    /// Every (query, limit) received, for verification
    pub received: Mutex<Vec<(String, usize)>>,
    name: String,
}

impl MockProvider {
    pub fn new(name: &str, responses: Vec<Option<Vec<Video>>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            received: Mutex::new(Vec::new()),
            name: name.to_string(),
        }
    }

    /// Create a mock that answers every query with the same videos
    pub fn always(name: &str, videos: Vec<Video>, times: usize) -> Self {
        Self::new(name, vec![Some(videos); times])
    }

    pub fn queries(&self) -> Vec<String> {
        self.received
            .lock()
            .unwrap()
            .iter()
            .map(|(q, _)| q.clone())
            .collect()
    }
}

#[async_trait]
impl VideoProvider for MockProvider {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<Video>> {
        self.received
            .lock()
            .unwrap()
            .push((query.to_string(), limit));

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Ok(Vec::new());
        }

        match responses.remove(0) {
            Some(videos) => Ok(videos.into_iter().take(limit).collect()),
            None => Err(anyhow!("simulated outage")),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_provider_returns_responses() {
        let mock = MockProvider::new("mock", vec![Some(vec![]), None]);
        assert!(mock.search("a", 5).await.unwrap().is_empty());
        assert!(mock.search("b", 5).await.is_err());
        assert!(mock.search("c", 5).await.unwrap().is_empty());
        assert_eq!(mock.queries(), vec!["a", "b", "c"]);
    }
}
