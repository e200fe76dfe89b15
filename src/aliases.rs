//! Material alias table and resolver
//!
//! Maps canonical craft materials to their common synonyms so that
//! "box" on a user's list can satisfy a project asking for "cardboard".

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use tracing::{debug, info};

use crate::core::text_normalizer::normalize;
use crate::utils::fuzzy::{similarity_with, OverlapMode};

/// Built-in synonyms for common household craft materials
const SEED_ALIASES: &[(&str, &[&str])] = &[
    ("cardboard", &["box", "carton", "packaging", "corrugated"]),
    (
        "glue",
        &["adhesive", "paste", "cement", "hot glue", "craft glue", "super glue"],
    ),
    ("scissors", &["shears", "cutting tool", "cutter"]),
    (
        "paper",
        &["sheet", "construction paper", "craft paper", "scrapbook"],
    ),
    (
        "tape",
        &["adhesive tape", "masking tape", "duct tape", "washi tape"],
    ),
    ("paint", &["acrylic", "spray paint", "watercolor", "marker"]),
    ("fabric", &["cloth", "textile", "material", "felt", "cotton"]),
    ("string", &["twine", "cord", "yarn", "rope", "thread"]),
    ("bottle", &["plastic bottle", "glass bottle", "container"]),
    ("jar", &["mason jar", "glass jar", "container"]),
    ("magazine", &["newspaper", "publication", "print"]),
    ("wood", &["stick", "dowel", "timber", "lumber"]),
    ("metal", &["aluminum", "tin", "wire", "copper"]),
    ("t-shirt", &["shirt", "tee", "old shirt", "clothing"]),
];

/// One canonical material with its synonyms, stored normalized
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AliasEntry {
    pub canonical: String,
    pub aliases: Vec<String>,
}

/// Immutable canonical -> synonyms table.
///
/// Built once and handed to the match engine; nothing mutates it during a
/// ranking call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AliasTable {
    entries: Vec<AliasEntry>,
}

impl AliasTable {
    /// Table containing only the built-in seed aliases
    pub fn seed() -> Self {
        let mut table = Self::default();
        for (canonical, aliases) in SEED_ALIASES {
            table.insert(canonical, aliases.iter().copied());
        }
        table
    }

    /// Build a table from a canonical -> aliases map.
    ///
    /// Keys are sorted so the table is deterministic regardless of map order.
    pub fn from_map(map: &HashMap<String, Vec<String>>) -> Self {
        let mut keys: Vec<&String> = map.keys().collect();
        keys.sort();

        let mut table = Self::default();
        for key in keys {
            table.insert(key, map[key].iter().map(String::as_str));
        }
        table
    }

    /// Parse a JSON object of the form `{"canonical": ["alias", ...]}`
    pub fn from_json(json: &str) -> Result<Self> {
        let map: HashMap<String, Vec<String>> =
            serde_json::from_str(json).context("Invalid alias JSON")?;
        Ok(Self::from_map(&map))
    }

    /// Load an alias JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read alias file {}", path.display()))?;
        let table = Self::from_json(&content)?;
        info!("📚 Loaded {} alias entries from {}", table.len(), path.display());
        Ok(table)
    }

    /// Merge another table into this one.
    ///
    /// Aliases for an existing canonical name are appended (duplicates
    /// skipped); unknown canonical names become new entries.
    pub fn merge(&mut self, other: &AliasTable) {
        for entry in &other.entries {
            self.insert(&entry.canonical, entry.aliases.iter().map(String::as_str));
        }
    }

    fn insert<'a>(&mut self, canonical: &str, aliases: impl IntoIterator<Item = &'a str>) {
        let canonical = normalize(canonical);
        if canonical.is_empty() {
            return;
        }

        let idx = match self.entries.iter().position(|e| e.canonical == canonical) {
            Some(idx) => idx,
            None => {
                self.entries.push(AliasEntry {
                    canonical,
                    aliases: Vec::new(),
                });
                self.entries.len() - 1
            }
        };

        let entry = &mut self.entries[idx];
        for alias in aliases {
            let alias = normalize(alias);
            if !alias.is_empty() && !entry.aliases.contains(&alias) {
                entry.aliases.push(alias);
            }
        }
    }

    pub fn entries(&self) -> &[AliasEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolver over this table with the given threshold and overlap mode
    pub fn resolver(&self, threshold: f64, mode: OverlapMode) -> AliasResolver<'_> {
        AliasResolver {
            table: self,
            threshold,
            mode,
        }
    }
}

/// Expands a term into its synonym variants
#[derive(Debug, Clone, Copy)]
pub struct AliasResolver<'a> {
    table: &'a AliasTable,
    threshold: f64,
    mode: OverlapMode,
}

impl AliasResolver<'_> {
    /// Expand `term` into the set of normalized variants.
    ///
    /// The normalized term is always included, even when it normalizes to
    /// nothing. An entry contributes its canonical name and every alias when
    /// the term equals or resembles the canonical name, or resembles any one
    /// of its aliases, above the resolver threshold.
    pub fn expand(&self, term: &str) -> BTreeSet<String> {
        let normalized = normalize(term);
        let mut variants = BTreeSet::new();
        variants.insert(normalized.clone());

        for entry in &self.table.entries {
            let key_hit = normalized == entry.canonical
                || similarity_with(&normalized, &entry.canonical, self.mode) > self.threshold;
            let alias_hit = || {
                entry
                    .aliases
                    .iter()
                    .any(|alias| similarity_with(&normalized, alias, self.mode) > self.threshold)
            };

            if key_hit || alias_hit() {
                variants.insert(entry.canonical.clone());
                variants.extend(entry.aliases.iter().cloned());
            }
        }

        debug!("Expanded '{}' into {} variants", term, variants.len());
        variants
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver(table: &AliasTable) -> AliasResolver<'_> {
        table.resolver(0.6, OverlapMode::Proportional)
    }

    #[test]
    fn test_seed_table() {
        let table = AliasTable::seed();
        assert_eq!(table.len(), 14);
        assert_eq!(table.entries()[0].canonical, "cardboard");
        // punctuation is normalized away on insert
        assert!(table.entries().iter().any(|e| e.canonical == "tshirt"));
    }

    #[test]
    fn test_expand_canonical() {
        let table = AliasTable::seed();
        let variants = resolver(&table).expand("Cardboard");
        for expected in ["cardboard", "box", "carton", "packaging", "corrugated"] {
            assert!(variants.contains(expected), "missing {}", expected);
        }
    }

    #[test]
    fn test_expand_from_alias() {
        let table = AliasTable::seed();
        let variants = resolver(&table).expand("twine");
        assert!(variants.contains("twine"));
        assert!(variants.contains("string"));
        assert!(variants.contains("yarn"));
    }

    #[test]
    fn test_expand_substring_of_canonical() {
        let table = AliasTable::seed();
        // "glue stick" contains "glue" -> 0.8 against the key
        let variants = resolver(&table).expand("glue stick");
        assert!(variants.contains("glue stick"));
        assert!(variants.contains("adhesive"));
    }

    #[test]
    fn test_expand_unknown_term() {
        let table = AliasTable::seed();
        let variants = resolver(&table).expand("pinecone");
        assert_eq!(variants.len(), 1);
        assert!(variants.contains("pinecone"));
    }

    #[test]
    fn test_expand_blank_term() {
        let table = AliasTable::seed();
        let variants = resolver(&table).expand("?!");

        // the empty string sits inside every canonical name
        assert!(variants.contains(""));
        for entry in table.entries() {
            assert!(variants.contains(&entry.canonical), "missing {}", entry.canonical);
        }
    }

    #[test]
    fn test_from_json_and_merge() {
        let custom = AliasTable::from_json(r#"{"glue": ["glue stick"], "button": ["buttons"]}"#)
            .unwrap();
        assert_eq!(custom.len(), 2);

        let mut table = AliasTable::seed();
        table.merge(&custom);
        assert_eq!(table.len(), 15);

        let glue = table.entries().iter().find(|e| e.canonical == "glue").unwrap();
        assert_eq!(glue.aliases.last().unwrap(), "glue stick");
        assert_eq!(glue.aliases.len(), 7);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(AliasTable::from_json("[1, 2]").is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aliases.json");
        std::fs::write(&path, r#"{"Pom-Pom": ["pompom", "puff ball"]}"#).unwrap();

        let table = AliasTable::from_file(&path).unwrap();
        assert_eq!(table.entries()[0].canonical, "pompom");
        assert_eq!(table.entries()[0].aliases, vec!["pompom", "puff ball"]);
    }
}
