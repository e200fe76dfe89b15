//! Match engine
//!
//! Scores user items against catalog candidates. Projects and videos use
//! separate entry points ([`MatchEngine::match_project`] and
//! [`MatchEngine::match_video`]) because their scores are normalized
//! differently: a project by its own material count, a video by the user's
//! item count.

pub mod project;
pub mod video;

use serde::{Deserialize, Serialize};

use crate::aliases::AliasTable;
use crate::catalog::{Catalog, Video};
use crate::ranking::{rank_projects, rank_videos};
use crate::utils::fuzzy::OverlapMode;

pub use project::ProjectMatch;
pub use video::{MatchType, VideoMatch};

/// Words that mark a video as a DIY tutorial
pub const DIY_KEYWORDS: &[&str] = &["diy", "craft", "tutorial", "how to", "make", "project"];

/// Thresholds and modes for both matching paths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSettings {
    /// Resolver threshold when expanding items and materials for projects
    pub project_alias_threshold: f64,
    /// Resolver threshold when expanding items for videos
    pub video_alias_threshold: f64,
    /// A material counts as owned above this similarity
    pub material_match_threshold: f64,
    /// A user item counts as used by a video above this similarity
    pub video_match_threshold: f64,
    pub project_overlap: OverlapMode,
    pub video_overlap: OverlapMode,
    /// Video keywords considered (title + description)
    pub keyword_limit: usize,
    /// Added to a video's relevance when it reads like a tutorial
    pub relevance_bonus: f64,
    pub diy_keywords: Vec<String>,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            project_alias_threshold: 0.6,
            video_alias_threshold: 0.7,
            material_match_threshold: 0.5,
            video_match_threshold: 0.5,
            project_overlap: OverlapMode::Proportional,
            video_overlap: OverlapMode::Proportional,
            keyword_limit: 20,
            relevance_bonus: 0.2,
            diy_keywords: DIY_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Stateless scorer over an injected alias table and settings
#[derive(Debug, Clone)]
pub struct MatchEngine {
    aliases: AliasTable,
    settings: MatchSettings,
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new(AliasTable::seed(), MatchSettings::default())
    }
}

impl MatchEngine {
    pub fn new(aliases: AliasTable, settings: MatchSettings) -> Self {
        Self { aliases, settings }
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn settings(&self) -> &MatchSettings {
        &self.settings
    }

    /// Match every project in the catalog and rank the survivors
    pub fn ranked_projects(&self, items: &[String], catalog: &Catalog) -> Vec<ProjectMatch> {
        rank_projects(self.match_projects(items, catalog.projects()))
    }

    /// Match every video and rank the survivors
    pub fn ranked_videos<'v>(
        &self,
        items: &[String],
        videos: impl IntoIterator<Item = &'v Video>,
    ) -> Vec<VideoMatch> {
        rank_videos(self.match_videos(items, videos))
    }
}
