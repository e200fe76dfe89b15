//! In-memory search result cache
//!
//! Session-only: entries live as long as the finder that owns them.
//! Concurrent searches for the same key are not coalesced; the last write
//! wins.

use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::catalog::Video;

struct CacheEntry {
    videos: Vec<Video>,
    stored_at: Instant,
}

/// Video results keyed by the user's item list
pub struct SearchCache {
    entries: HashMap<String, CacheEntry>,
    ttl: Duration,
}

/// Cache key: items sorted and joined with `|`, so order does not matter
pub fn cache_key(items: &[String]) -> String {
    let mut sorted: Vec<&str> = items.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted.join("|")
}

impl SearchCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    /// Fresh cached videos for `items`, truncated to `limit`. An expired
    /// entry is dropped.
    pub fn get(&mut self, items: &[String], limit: usize) -> Option<Vec<Video>> {
        let key = cache_key(items);
        let entry = self.entries.get(&key)?;

        if entry.stored_at.elapsed() < self.ttl {
            debug!("Cache hit for '{}'", key);
            Some(entry.videos.iter().take(limit).cloned().collect())
        } else {
            debug!("Cache entry for '{}' expired", key);
            self.entries.remove(&key);
            None
        }
    }

    /// Store videos for `items`, sweeping out expired entries first
    pub fn insert(&mut self, items: &[String], videos: Vec<Video>) {
        let ttl = self.ttl;
        self.entries.retain(|_, entry| entry.stored_at.elapsed() < ttl);

        self.entries.insert(
            cache_key(items),
            CacheEntry {
                videos,
                stored_at: Instant::now(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::VideoSource;

    fn video(id: &str) -> Video {
        Video {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            thumbnail: String::new(),
            url: String::new(),
            source: VideoSource::Youtube,
            duration: None,
            views: None,
            channel: None,
        }
    }

    fn items(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_cache_key_is_order_independent() {
        assert_eq!(cache_key(&items(&["glue", "cardboard"])), "cardboard|glue");
        assert_eq!(
            cache_key(&items(&["glue", "cardboard"])),
            cache_key(&items(&["cardboard", "glue"]))
        );
    }

    #[test]
    fn test_cache_hit_truncates() {
        let mut cache = SearchCache::new(Duration::from_secs(300));
        cache.insert(&items(&["glue"]), vec![video("a"), video("b"), video("c")]);

        let hit = cache.get(&items(&["glue"]), 2).unwrap();
        assert_eq!(hit.len(), 2);
        assert_eq!(hit[0].id, "a");
        assert!(cache.get(&items(&["tape"]), 2).is_none());
    }

    #[test]
    fn test_cache_expiry() {
        let mut cache = SearchCache::new(Duration::ZERO);
        cache.insert(&items(&["glue"]), vec![video("a")]);
        assert_eq!(cache.len(), 1);
        assert!(cache.get(&items(&["glue"]), 5).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_insert_sweeps_expired() {
        let mut cache = SearchCache::new(Duration::ZERO);
        cache.insert(&items(&["glue"]), vec![video("a")]);
        cache.insert(&items(&["tape"]), vec![video("b")]);
        cache.insert(&items(&["yarn"]), vec![video("c")]);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_last_write_wins() {
        let mut cache = SearchCache::new(Duration::from_secs(300));
        cache.insert(&items(&["glue"]), vec![video("old")]);
        cache.insert(&items(&["glue"]), vec![video("new")]);
        assert_eq!(cache.get(&items(&["glue"]), 5).unwrap()[0].id, "new");

        cache.clear();
        assert!(cache.is_empty());
    }
}
