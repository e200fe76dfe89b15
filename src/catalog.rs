//! Candidate catalog
//!
//! Projects and videos the matcher ranks. A catalog is loaded once, then
//! shared read-only with every ranking call.

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;
use tracing::info;

use crate::error::CraftError;

/// How hard a project is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// A DIY project with an explicit list of required materials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub difficulty: Difficulty,
    pub time_estimate: String,
    pub description: String,
    pub materials: Vec<String>,
    pub tutorial_url: String,
}

/// Where a video is hosted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoSource {
    Youtube,
    Dailymotion,
    Vimeo,
}

/// A tutorial video; its title and description are the matching surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail: String,
    pub url: String,
    pub source: VideoSource,
    /// Display length such as "12m 5s"; a number of seconds is formatted on load
    #[serde(
        default,
        deserialize_with = "deserialize_duration",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration: Option<String>,
    /// View count; text such as "1.2M views" is parsed on load
    #[serde(
        default,
        deserialize_with = "deserialize_views",
        skip_serializing_if = "Option::is_none"
    )]
    pub views: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
}

impl Video {
    /// Title and description joined by a space
    pub fn content(&self) -> String {
        format!("{} {}", self.title, self.description)
    }
}

/// Scraped metadata arrives either as a raw number or as display text
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(u64),
    Text(String),
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<NumberOrText>::deserialize(deserializer)?.map(|value| match value {
            NumberOrText::Number(seconds) => format_duration(seconds),
            NumberOrText::Text(text) => text,
        }),
    )
}

fn deserialize_views<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<NumberOrText>::deserialize(deserializer)?.map(|value| match value {
            NumberOrText::Number(views) => views,
            NumberOrText::Text(text) => parse_view_count(&text),
        }),
    )
}

/// Anything the matcher can rank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Candidate {
    Project(Project),
    Video(Video),
}

impl Candidate {
    pub fn id(&self) -> &str {
        match self {
            Candidate::Project(p) => &p.id,
            Candidate::Video(v) => &v.id,
        }
    }
}

/// Ordered, immutable collection of candidates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub candidates: Vec<Candidate>,
}

impl Catalog {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    /// Parse a catalog from JSON: `{"candidates": [{"kind": "project", ...}]}`
    pub fn from_json(json: &str) -> Result<Self, CraftError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        let catalog = Self::from_json(&content)
            .with_context(|| format!("Invalid catalog {}", path.display()))?;
        info!(
            "📦 Loaded catalog: {} projects, {} videos",
            catalog.projects().count(),
            catalog.videos().count()
        );
        Ok(catalog)
    }

    /// Reject duplicate ids, which would make ranked output ambiguous
    fn validate(&self) -> Result<(), CraftError> {
        let mut seen = std::collections::HashSet::new();
        for candidate in &self.candidates {
            if !seen.insert(candidate.id()) {
                return Err(CraftError::Catalog(format!(
                    "duplicate candidate id '{}'",
                    candidate.id()
                )));
            }
        }
        Ok(())
    }

    /// Projects in catalog order
    pub fn projects(&self) -> impl Iterator<Item = &Project> {
        self.candidates.iter().filter_map(|c| match c {
            Candidate::Project(p) => Some(p),
            Candidate::Video(_) => None,
        })
    }

    /// Videos in catalog order
    pub fn videos(&self) -> impl Iterator<Item = &Video> {
        self.candidates.iter().filter_map(|c| match c {
            Candidate::Video(v) => Some(v),
            Candidate::Project(_) => None,
        })
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Small built-in project catalog so the CLI works out of the box
    pub fn demo() -> Self {
        let project = |id: &str,
                       title: &str,
                       difficulty: Difficulty,
                       time: &str,
                       description: &str,
                       materials: &[&str]| {
            Candidate::Project(Project {
                id: id.to_string(),
                title: title.to_string(),
                difficulty,
                time_estimate: time.to_string(),
                description: description.to_string(),
                materials: materials.iter().map(|m| m.to_string()).collect(),
                tutorial_url: format!("https://www.youtube.com/results?search_query=diy+{}", id),
            })
        };

        Self::new(vec![
            project(
                "cardboard-organizer",
                "Cardboard Desk Organizer",
                Difficulty::Beginner,
                "30 min",
                "Turn an old box into compartments for pens and notes.",
                &["cardboard", "scissors", "glue", "paint"],
            ),
            project(
                "mason-jar-lantern",
                "Mason Jar Lantern",
                Difficulty::Beginner,
                "20 min",
                "Wrap a jar with twine and drop in fairy lights.",
                &["mason jar", "twine", "fairy lights"],
            ),
            project(
                "tshirt-tote",
                "No-Sew T-Shirt Tote Bag",
                Difficulty::Beginner,
                "15 min",
                "Cut and knot an old t-shirt into a reusable bag.",
                &["t-shirt", "scissors"],
            ),
            project(
                "magazine-bowl",
                "Rolled Magazine Bowl",
                Difficulty::Intermediate,
                "2 hours",
                "Roll magazine pages into coils and glue them into a bowl.",
                &["magazine", "glue", "paint"],
            ),
            project(
                "tin-can-planter",
                "Tin Can Planter",
                Difficulty::Intermediate,
                "1 hour",
                "Punch drainage holes and spray paint a can for herbs.",
                &["tin can", "hammer", "nail", "spray paint"],
            ),
            project(
                "washi-frame",
                "Washi Tape Picture Frame",
                Difficulty::Beginner,
                "25 min",
                "Decorate a cardboard frame with patterned tape.",
                &["cardboard", "washi tape", "scissors"],
            ),
        ])
    }
}

const ADVANCED_KEYWORDS: &[&str] = &["advanced", "complex", "professional", "expert", "difficult"];
const INTERMEDIATE_KEYWORDS: &[&str] = &["intermediate", "medium", "skilled"];
const BEGINNER_KEYWORDS: &[&str] = &["beginner", "easy", "simple", "quick", "diy for kids", "no sew"];

/// Guess a video's difficulty from its wording, then from its length
pub fn estimate_difficulty(video: &Video) -> Difficulty {
    let content = video.content().to_lowercase();
    let mentions = |keywords: &[&str]| keywords.iter().any(|kw| content.contains(kw));

    if mentions(ADVANCED_KEYWORDS) {
        return Difficulty::Advanced;
    }
    if mentions(INTERMEDIATE_KEYWORDS) {
        return Difficulty::Intermediate;
    }
    if mentions(BEGINNER_KEYWORDS) {
        return Difficulty::Beginner;
    }

    // Minute-scale durations only ("12m 30s"); hour-long ones fall through
    if let Some(duration) = &video.duration {
        if duration.contains('m') && !duration.contains('h') {
            if let Some(minutes) = leading_number(duration) {
                if minutes < 15 {
                    return Difficulty::Beginner;
                }
                if minutes < 45 {
                    return Difficulty::Intermediate;
                }
            }
        }
    }

    Difficulty::Intermediate
}

fn leading_number(text: &str) -> Option<u64> {
    let digits: String = text
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Format a length in seconds as "45s", "12m 5s" or "1h 3m"
pub fn format_duration(total_seconds: u64) -> String {
    if total_seconds < 60 {
        return format!("{}s", total_seconds);
    }

    let minutes = total_seconds / 60;
    let secs = total_seconds % 60;
    if minutes < 60 {
        return if secs > 0 {
            format!("{}m {}s", minutes, secs)
        } else {
            format!("{}m", minutes)
        };
    }

    let hours = minutes / 60;
    let mins = minutes % 60;
    if mins > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}h", hours)
    }
}

/// Parse view counts such as "1,234 views", "1.2M views" or "15K views".
///
/// The suffix scales the decimal value, so "1.2M" is 1,200,000. Digits are
/// not run together, which would give 12,000,000.
pub fn parse_view_count(text: &str) -> u64 {
    let number: String = text
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .filter(|c| *c != ',')
        .collect();

    let Ok(value) = number.parse::<f64>() else {
        return 0;
    };

    let multiplier = if text.contains('M') {
        1_000_000.0
    } else if text.contains('K') {
        1_000.0
    } else {
        1.0
    };

    (value * multiplier).round() as u64
}
