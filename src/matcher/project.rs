//! Project matching
//!
//! A project is scored by how many of its required materials the user
//! already owns, directly or through an alias.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

use super::MatchEngine;
use crate::catalog::Project;
use crate::core::text_normalizer::normalize;
use crate::utils::fuzzy::similarity_with;

/// Outcome of matching one project against the user's items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMatch {
    pub project: Project,
    /// User items (as typed) that cover at least one material
    pub matched_materials: Vec<String>,
    /// Materials the user does not seem to have
    pub suggested_materials: Vec<String>,
    /// `matched_materials / project.materials`, in `(0, 1]`
    pub match_score: f64,
}

impl MatchEngine {
    /// Score one project.
    ///
    /// Returns `None` when nothing matches, when `items` is empty, or when
    /// the project lists no materials at all.
    pub fn match_project(&self, items: &[String], project: &Project) -> Option<ProjectMatch> {
        if project.materials.is_empty() {
            debug!("Skipping project '{}' with no materials", project.id);
            return None;
        }
        if items.is_empty() {
            return None;
        }

        let settings = &self.settings;
        let resolver = self
            .aliases
            .resolver(settings.project_alias_threshold, settings.project_overlap);
        let threshold = settings.material_match_threshold;
        let mode = settings.project_overlap;

        let item_variants: Vec<(&String, BTreeSet<String>)> = items
            .iter()
            .map(|item| (item, resolver.expand(item)))
            .collect();

        let mut matched_materials: Vec<String> = Vec::new();
        let mut suggested_materials: Vec<String> = Vec::new();

        for material in &project.materials {
            let material_variants = resolver.expand(material);
            let normalized_material = normalize(material);

            let owner = item_variants.iter().find(|(_, variants)| {
                variants.iter().any(|owned| {
                    material_variants
                        .iter()
                        .any(|wanted| similarity_with(owned, wanted, mode) > threshold)
                        || similarity_with(owned, &normalized_material, mode) > threshold
                })
            });

            match owner {
                Some((item, _)) => {
                    if !matched_materials.contains(*item) {
                        matched_materials.push((*item).clone());
                    }
                }
                None => suggested_materials.push(material.clone()),
            }
        }

        let match_score = matched_materials.len() as f64 / project.materials.len() as f64;
        if match_score == 0.0 {
            return None;
        }

        Some(ProjectMatch {
            project: project.clone(),
            matched_materials,
            suggested_materials,
            match_score,
        })
    }

    /// Score projects in order, dropping those with no match
    pub fn match_projects<'p>(
        &self,
        items: &[String],
        projects: impl IntoIterator<Item = &'p Project>,
    ) -> Vec<ProjectMatch> {
        if items.is_empty() {
            return Vec::new();
        }

        projects
            .into_iter()
            .filter_map(|project| self.match_project(items, project))
            .collect()
    }
}
