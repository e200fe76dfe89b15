//! Human-readable summaries of ranked results

use crate::matcher::{MatchType, ProjectMatch, VideoMatch};

/// Shown when the user has not entered anything yet
pub const EMPTY_INPUT_MESSAGE: &str = "Add some items you have at home to discover DIY projects!";
/// Shown when nothing matched the user's items
pub const NO_RESULTS_MESSAGE: &str = "We couldn't find DIY videos matching those items right now. Try adding common craft supplies like scissors, glue, paper, or tape!";

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

/// Summary line for ranked videos
pub fn video_results_message(results: &[VideoMatch], item_count: usize) -> String {
    if results.is_empty() {
        return if item_count == 0 {
            EMPTY_INPUT_MESSAGE.to_string()
        } else {
            NO_RESULTS_MESSAGE.to_string()
        };
    }

    let count_of = |kind: MatchType| results.iter().filter(|r| r.match_type == kind).count();
    let exact = count_of(MatchType::Exact);
    let partial = count_of(MatchType::Partial);

    if exact > 0 {
        return format!(
            "Found {} where you have everything needed!",
            plural(exact, "video")
        );
    }
    if partial > 0 {
        return format!(
            "Found {} you're almost ready to make!",
            plural(partial, "project")
        );
    }

    format!(
        "Found {} you can explore!",
        plural(results.len(), "creative option")
    )
}

/// Summary line for ranked projects
pub fn project_results_message(results: &[ProjectMatch], item_count: usize) -> String {
    if item_count == 0 {
        return EMPTY_INPUT_MESSAGE.to_string();
    }
    if results.is_empty() {
        return "No projects match those items yet. Try adding common craft supplies like scissors, glue, paper, or tape!".to_string();
    }

    let complete = results.iter().filter(|r| r.match_score >= 1.0).count();
    if complete > 0 {
        format!(
            "You can start {} right now!",
            plural(complete, "project")
        )
    } else {
        format!(
            "Found {} you're almost ready to make!",
            plural(results.len(), "project")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Difficulty, Project, Video, VideoSource};

    fn video_match(match_type: MatchType) -> VideoMatch {
        VideoMatch {
            video: Video {
                id: "v".to_string(),
                title: "v".to_string(),
                description: String::new(),
                thumbnail: String::new(),
                url: String::new(),
                source: VideoSource::Vimeo,
                duration: None,
                views: None,
                channel: None,
            },
            matched_items: Vec::new(),
            suggested_items: Vec::new(),
            match_score: 0.0,
            match_percentage: 0,
            match_type,
            relevance_score: 0.5,
        }
    }

    #[test]
    fn test_video_messages_empty() {
        assert_eq!(video_results_message(&[], 0), EMPTY_INPUT_MESSAGE);
        assert_eq!(video_results_message(&[], 3), NO_RESULTS_MESSAGE);
    }

    #[test]
    fn test_video_messages_counts() {
        let exact = vec![video_match(MatchType::Exact), video_match(MatchType::Partial)];
        assert_eq!(
            video_results_message(&exact, 2),
            "Found 1 video where you have everything needed!"
        );

        let partial = vec![video_match(MatchType::Partial), video_match(MatchType::Partial)];
        assert_eq!(
            video_results_message(&partial, 2),
            "Found 2 projects you're almost ready to make!"
        );

        let suggested = vec![video_match(MatchType::Suggested)];
        assert_eq!(
            video_results_message(&suggested, 2),
            "Found 1 creative option you can explore!"
        );
    }

    #[test]
    fn test_project_messages() {
        assert_eq!(project_results_message(&[], 0), EMPTY_INPUT_MESSAGE);
        assert!(project_results_message(&[], 2).starts_with("No projects"));

        let result = ProjectMatch {
            project: Project {
                id: "p".to_string(),
                title: "p".to_string(),
                difficulty: Difficulty::Beginner,
                time_estimate: String::new(),
                description: String::new(),
                materials: vec!["glue".to_string()],
                tutorial_url: String::new(),
            },
            matched_materials: vec!["glue".to_string()],
            suggested_materials: Vec::new(),
            match_score: 1.0,
        };
        assert_eq!(
            project_results_message(&[result], 1),
            "You can start 1 project right now!"
        );
    }
}
