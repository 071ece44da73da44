// ABOUTME: Aggregated grocery list and its per-category grouping view
// ABOUTME: Items are immutable once produced by the aggregation engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealBot Contributors

use super::category::Category;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One line of the grocery list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryListItem {
    /// Display name as first seen in a recipe
    pub ingredient_name: String,
    /// Summed, scaled quantity across all meal slots
    pub total_quantity: f64,
    /// Unit of the first occurrence
    pub unit: String,
    /// Classified category
    pub category: Category,
}

impl GroceryListItem {
    /// Create a list item
    pub fn new(
        ingredient_name: impl Into<String>,
        total_quantity: f64,
        unit: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            ingredient_name: ingredient_name.into(),
            total_quantity,
            unit: unit.into(),
            category,
        }
    }
}

/// Ordered grocery list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroceryList {
    items: Vec<GroceryListItem>,
}

impl GroceryList {
    /// Wrap items in their final order; no sorting happens here
    #[must_use]
    pub const fn new(items: Vec<GroceryListItem>) -> Self {
        Self { items }
    }

    /// Items in list order
    #[must_use]
    pub fn items(&self) -> &[GroceryListItem] {
        &self.items
    }

    /// Number of distinct items
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Group items by category, keeping list order inside each bucket.
    ///
    /// Only categories with at least one item appear; the map iterates in
    /// canonical category order.
    #[must_use]
    pub fn by_category(&self) -> BTreeMap<Category, Vec<&GroceryListItem>> {
        let mut grouped: BTreeMap<Category, Vec<&GroceryListItem>> = BTreeMap::new();
        for item in &self.items {
            grouped.entry(item.category).or_default().push(item);
        }
        grouped
    }
}

impl IntoIterator for GroceryList {
    type Item = GroceryListItem;
    type IntoIter = std::vec::IntoIter<GroceryListItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a GroceryList {
    type Item = &'a GroceryListItem;
    type IntoIter = std::slice::Iter<'a, GroceryListItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GroceryList {
        GroceryList::new(vec![
            GroceryListItem::new("carotte", 350.0, "g", Category::Vegetables),
            GroceryListItem::new("poireau", 300.0, "g", Category::Vegetables),
            GroceryListItem::new("tofu ferme", 400.0, "g", Category::Proteins),
            GroceryListItem::new("boisson coco", 600.0, "ml", Category::Grocery),
        ])
    }

    #[test]
    fn test_total_items_matches_length() {
        let list = sample();
        assert_eq!(list.total_items(), 4);
        assert_eq!(list.total_items(), list.items().len());
        assert!(GroceryList::default().is_empty());
    }

    #[test]
    fn test_by_category_partitions_items() {
        let list = sample();
        let grouped = list.by_category();

        assert_eq!(grouped.len(), 3);
        let bucket_total: usize = grouped.values().map(Vec::len).sum();
        assert_eq!(bucket_total, list.total_items());

        let vegetables = &grouped[&Category::Vegetables];
        assert_eq!(vegetables[0].ingredient_name, "carotte");
        assert_eq!(vegetables[1].ingredient_name, "poireau");
        assert!(!grouped.contains_key(&Category::Frozen));
    }

    #[test]
    fn test_by_category_does_not_resort() {
        let list = GroceryList::new(vec![
            GroceryListItem::new("zucchini", 1.0, "pc", Category::Vegetables),
            GroceryListItem::new("ail", 1.0, "pc", Category::Vegetables),
        ]);
        let grouped = list.by_category();
        assert_eq!(grouped[&Category::Vegetables][0].ingredient_name, "zucchini");
    }
}
