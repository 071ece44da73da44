// ABOUTME: Grocery list pipeline from weekly meal plans to categorized shopping lists
// ABOUTME: Normalization, pantry filtering, category classification, aggregation and rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealBot Contributors

//! # Grocery Module
//!
//! ```text
//! (MealPlan, RecipeTable) -> AggregationEngine -> GroceryList -> formatter
//! ```
//!
//! The aggregation engine resolves each meal slot to its recipe, scales the
//! recipe's ingredients by `portions / servings`, drops pantry staples and
//! merges ingredients sharing a normalized name into one list item.

/// Ingredient quantity aggregation across meal slots
pub mod aggregator;
/// Closed set of grocery categories and label classification
pub mod category;
/// Chat-message rendering of grocery lists and meal plans
pub mod formatter;
/// Aggregated grocery list container
pub mod list;
/// Ingredient name normalization
pub mod normalize;
/// Pantry staple matching
pub mod pantry;

pub use aggregator::{aggregate_ingredients, AggregationEngine};
pub use category::{classify, Category};
pub use formatter::{format_grocery_list, format_item, format_meal_plan, format_quantity};
pub use list::{GroceryList, GroceryListItem};
pub use normalize::normalize_name;
pub use pantry::PantryFilter;
