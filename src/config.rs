use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::aliases::AliasTable;
use crate::error::{CraftError, CraftResult};
use crate::items::{ItemLimits, MAX_ITEMS, MAX_ITEM_LENGTH};
use crate::matcher::{MatchSettings, DIY_KEYWORDS};
use crate::utils::fuzzy::OverlapMode;

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // Alias resolution
    pub project_alias_threshold: f64,
    pub video_alias_threshold: f64,

    // Matching
    pub material_match_threshold: f64,
    pub video_match_threshold: f64,
    pub project_overlap: OverlapMode,
    pub video_overlap: OverlapMode,
    pub keyword_limit: usize,
    pub relevance_bonus: f64,
    pub diy_keywords: Vec<String>,

    // Input
    pub max_items: usize,
    pub max_item_length: usize,

    // Video search
    pub search_limit: usize,
    pub per_query_limit: usize,
    pub request_delay_ms: u64,
    pub cache_ttl_secs: u64,

    // Data
    pub custom_aliases: HashMap<String, Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        let settings = MatchSettings::default();
        Self {
            project_alias_threshold: settings.project_alias_threshold,
            video_alias_threshold: settings.video_alias_threshold,
            material_match_threshold: settings.material_match_threshold,
            video_match_threshold: settings.video_match_threshold,
            project_overlap: settings.project_overlap,
            video_overlap: settings.video_overlap,
            keyword_limit: settings.keyword_limit,
            relevance_bonus: settings.relevance_bonus,
            diy_keywords: DIY_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            max_items: MAX_ITEMS,
            max_item_length: MAX_ITEM_LENGTH,
            search_limit: 15,
            per_query_limit: 5,
            request_delay_ms: 200,
            cache_ttl_secs: 300,
            custom_aliases: HashMap::new(),
        }
    }
}

impl Config {
    /// Load config from the default location, or defaults if absent
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    /// Load config from `path`.
    ///
    /// A missing file yields defaults. A corrupt file is moved aside to
    /// `*.json.corrupt` and defaults are used. A well-formed file with
    /// out-of-range values is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        match serde_json::from_str::<Self>(&content) {
            Ok(config) => {
                config.validate()?;
                Ok(config)
            }
            Err(e) => {
                tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                let backup_path = path.with_extension("json.corrupt");
                let _ = std::fs::rename(path, &backup_path);
                Ok(Self::default())
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&config_path())
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject values the matcher cannot work with
    pub fn validate(&self) -> CraftResult<()> {
        let fractions = [
            ("project_alias_threshold", self.project_alias_threshold),
            ("video_alias_threshold", self.video_alias_threshold),
            ("material_match_threshold", self.material_match_threshold),
            ("video_match_threshold", self.video_match_threshold),
            ("relevance_bonus", self.relevance_bonus),
        ];
        for (name, value) in fractions {
            if !(0.0..=1.0).contains(&value) {
                return Err(CraftError::Config(format!(
                    "{} must be between 0 and 1, got {}",
                    name, value
                )));
            }
        }

        let counts = [
            ("keyword_limit", self.keyword_limit),
            ("max_items", self.max_items),
            ("max_item_length", self.max_item_length),
            ("search_limit", self.search_limit),
            ("per_query_limit", self.per_query_limit),
        ];
        for (name, value) in counts {
            if value == 0 {
                return Err(CraftError::Config(format!("{} must be at least 1", name)));
            }
        }

        Ok(())
    }

    /// Thresholds and modes for the match engine
    pub fn match_settings(&self) -> MatchSettings {
        MatchSettings {
            project_alias_threshold: self.project_alias_threshold,
            video_alias_threshold: self.video_alias_threshold,
            material_match_threshold: self.material_match_threshold,
            video_match_threshold: self.video_match_threshold,
            project_overlap: self.project_overlap,
            video_overlap: self.video_overlap,
            keyword_limit: self.keyword_limit,
            relevance_bonus: self.relevance_bonus,
            diy_keywords: self.diy_keywords.clone(),
        }
    }

    pub fn item_limits(&self) -> ItemLimits {
        ItemLimits {
            max_items: self.max_items,
            max_item_length: self.max_item_length,
        }
    }

    /// Seed aliases with `custom_aliases` merged on top
    pub fn alias_table(&self) -> AliasTable {
        let mut table = AliasTable::seed();
        if !self.custom_aliases.is_empty() {
            table.merge(&AliasTable::from_map(&self.custom_aliases));
        }
        table
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("craftmatch")
        .join("config.json")
}
