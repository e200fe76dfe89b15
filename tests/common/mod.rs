#![allow(dead_code)] // Helpers are shared across different integration test crates

pub mod mock_provider;

use craftmatch::catalog::{Candidate, Catalog, Difficulty, Project, Video, VideoSource};

pub fn items(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

pub fn project(id: &str, materials: &[&str]) -> Project {
    Project {
        id: id.to_string(),
        title: format!("Project {}", id),
        difficulty: Difficulty::Beginner,
        time_estimate: "30 min".to_string(),
        description: String::new(),
        materials: materials.iter().map(|m| m.to_string()).collect(),
        tutorial_url: format!("https://example.com/{}", id),
    }
}

pub fn video(id: &str, title: &str, description: &str) -> Video {
    Video {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        thumbnail: format!("https://img.example.com/{}.jpg", id),
        url: format!("https://www.youtube.com/watch?v={}", id),
        source: VideoSource::Youtube,
        duration: None,
        views: None,
        channel: None,
    }
}

/// Fixture catalog mixing projects and videos
pub fn fixture_catalog() -> Catalog {
    Catalog::new(vec![
        Candidate::Project(project("organizer", &["cardboard", "scissors", "glue"])),
        Candidate::Video(video("v-box", "DIY cardboard box craft tutorial", "")),
        Candidate::Project(project("lantern", &["mason jar", "twine"])),
        Candidate::Video(video("v-jar", "Mason jar lantern", "wrap a glass jar with twine")),
        Candidate::Project(project("empty", &[])),
        Candidate::Video(video("v-knit", "Knitting basics", "needles and wool")),
    ])
}
