// ABOUTME: Ingredient name normalization used as the aggregation and staple-matching key
// ABOUTME: Lower-cases and trims surrounding whitespace, nothing more
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealBot Contributors

/// Canonical form of an ingredient name: lower-cased, surrounding whitespace trimmed.
///
/// Two ingredients aggregate together iff their normalized names are equal.
/// No synonym resolution or fuzzy matching happens here.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_trims() {
        assert_eq!(normalize_name("  Tofu Ferme\t"), "tofu ferme");
        assert_eq!(normalize_name("Crème Fraîche"), "crème fraîche");
    }

    #[test]
    fn test_inner_whitespace_is_kept() {
        assert_eq!(normalize_name("lait  de coco"), "lait  de coco");
        assert_ne!(normalize_name("lait  de coco"), normalize_name("lait de coco"));
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(normalize_name(""), "");
        assert_eq!(normalize_name("   "), "");
    }
}
