// ABOUTME: Pantry staple filter deciding which ingredients are assumed on hand
// ABOUTME: Bidirectional substring matching against a configurable staple set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealBot Contributors

use super::normalize::normalize_name;
use crate::config::PantryConfig;

/// Decides whether an ingredient is a staple that stays off the grocery list.
///
/// A name matches when its normalized form contains a staple, or a staple
/// contains it. This is deliberately permissive: "huile de sésame" matches
/// the "huile" staple, and "pois" matches inside "poivre".
#[derive(Debug, Clone, Default)]
pub struct PantryFilter {
    staples: Vec<String>,
}

impl PantryFilter {
    /// Build a filter from a pantry configuration
    #[must_use]
    pub fn new(config: &PantryConfig) -> Self {
        Self {
            staples: config.staples.iter().cloned().collect(),
        }
    }

    /// Whether the filter has no staples (matches nothing)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.staples.is_empty()
    }

    /// Whether `name` is a pantry staple
    #[must_use]
    pub fn is_staple(&self, name: &str) -> bool {
        let normalized = normalize_name(name);
        self.staples.iter().any(|staple| {
            normalized.contains(staple.as_str()) || staple.contains(normalized.as_str())
        })
    }
}

impl From<&PantryConfig> for PantryFilter {
    fn from(config: &PantryConfig) -> Self {
        Self::new(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_filter() -> PantryFilter {
        PantryFilter::new(&PantryConfig::default())
    }

    #[test]
    fn test_exact_staples_match() {
        let filter = default_filter();
        assert!(filter.is_staple("sel"));
        assert!(filter.is_staple("Poivre"));
        assert!(filter.is_staple(" huile d'olive "));
    }

    #[test]
    fn test_regular_ingredients_do_not_match() {
        let filter = default_filter();
        assert!(!filter.is_staple("tofu ferme"));
        assert!(!filter.is_staple("courge butternut"));
        assert!(!filter.is_staple("carotte"));
    }

    #[test]
    fn test_name_containing_staple_matches() {
        let filter = default_filter();
        assert!(filter.is_staple("huile de sésame"));
        assert!(filter.is_staple("sucre de canne"));
    }

    #[test]
    fn test_staple_containing_name_matches() {
        // Known false positive: "pois" is a substring of "poivre"
        let filter = default_filter();
        assert!(filter.is_staple("pois"));
    }

    #[test]
    fn test_blank_name_matches_everything_contained() {
        // Every staple contains the empty string
        let filter = default_filter();
        assert!(filter.is_staple("   "));
    }

    #[test]
    fn test_empty_filter_matches_nothing() {
        let filter = PantryFilter::new(&PantryConfig::empty());
        assert!(filter.is_empty());
        assert!(!filter.is_staple("sel"));
    }
}
