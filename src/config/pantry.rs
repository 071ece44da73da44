// ABOUTME: Pantry staple configuration for grocery list filtering
// ABOUTME: Default staple set with environment replacement and additions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealBot Contributors

use crate::constants::pantry::DEFAULT_STAPLES;
use crate::grocery::normalize_name;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::env;

/// Environment variable replacing the whole staple set (comma-separated)
pub const ENV_PANTRY_STAPLES: &str = "MEALBOT_PANTRY_STAPLES";
/// Environment variable adding staples to the active set (comma-separated)
pub const ENV_PANTRY_EXTRA: &str = "MEALBOT_PANTRY_EXTRA";

/// Ingredients assumed to already be at home
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PantryDocument")]
pub struct PantryConfig {
    /// Normalized staple names
    pub staples: BTreeSet<String>,
}

/// Serialized form; names go through the same normalization as `from_names`
#[derive(Deserialize)]
struct PantryDocument {
    #[serde(default)]
    staples: Vec<String>,
}

impl From<PantryDocument> for PantryConfig {
    fn from(document: PantryDocument) -> Self {
        Self::from_names(document.staples)
    }
}

impl Default for PantryConfig {
    fn default() -> Self {
        Self::from_names(DEFAULT_STAPLES.iter().copied())
    }
}

impl PantryConfig {
    /// Build a staple set; names are normalized and blank entries dropped
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let staples = names
            .into_iter()
            .map(|name| normalize_name(name.as_ref()))
            .filter(|name| !name.is_empty())
            .collect();
        Self { staples }
    }

    /// An empty staple set: nothing is ever filtered
    #[must_use]
    pub fn empty() -> Self {
        Self {
            staples: BTreeSet::new(),
        }
    }

    /// Defaults, replaced by `MEALBOT_PANTRY_STAPLES` when set, then extended
    /// with `MEALBOT_PANTRY_EXTRA`
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = env::var(ENV_PANTRY_STAPLES)
            .map_or_else(|_| Self::default(), |list| Self::from_names(split_list(&list)));

        if let Ok(extra) = env::var(ENV_PANTRY_EXTRA) {
            config.extend(split_list(&extra));
        }
        config
    }

    /// Add staples to the set
    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.staples.extend(
            names
                .into_iter()
                .map(|name| normalize_name(name.as_ref()))
                .filter(|name| !name.is_empty()),
        );
    }
}

fn split_list(list: &str) -> impl Iterator<Item = &str> {
    list.split(',')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_contains_known_staples() {
        let config = PantryConfig::default();
        assert!(config.staples.contains("sel"));
        assert!(config.staples.contains("huile d'olive"));
        assert_eq!(config.staples.len(), DEFAULT_STAPLES.len());
    }

    #[test]
    fn test_from_names_normalizes_and_drops_blanks() {
        let config = PantryConfig::from_names(["  Beurre ", "", "SEL", "   "]);
        let staples: Vec<&str> = config.staples.iter().map(String::as_str).collect();
        assert_eq!(staples, vec!["beurre", "sel"]);
    }

    #[test]
    fn test_deserialized_staples_are_normalized() {
        let config: PantryConfig =
            serde_json::from_str(r#"{"staples": ["  Sel ", "BEURRE", "", "sel"]}"#)
                .unwrap_or_else(|_| PantryConfig::empty());
        let staples: Vec<&str> = config.staples.iter().map(String::as_str).collect();
        assert_eq!(staples, vec!["beurre", "sel"]);
    }

    #[test]
    fn test_extend_deduplicates() {
        let mut config = PantryConfig::from_names(["sel"]);
        config.extend(["Sel", "moutarde"]);
        assert_eq!(config.staples.len(), 2);
    }
}
