// ABOUTME: Main library entry point for the MealBot grocery and nutrition pipeline
// ABOUTME: Turns weekly meal plans into categorized grocery lists and validates daily macros
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealBot Contributors

#![deny(unsafe_code)]

//! # `MealBot`
//!
//! Deterministic transformation and validation over a weekly meal plan
//! produced by an external generative service.
//!
//! ## Architecture
//!
//! - **grocery**: name normalization, pantry-staple filtering, category
//!   classification, quantity aggregation and list rendering
//! - **nutrition**: per-day protein and carbohydrate threshold checks
//! - **planner**: seasonal produce calendar and parsing of generated plan documents
//! - **config**: environment-driven thresholds, pantry staples and logging
//!
//! ## Example Usage
//!
//! ```rust
//! use mealbot::grocery::aggregate_ingredients;
//! use mealbot::models::{recipe_table, Ingredient, MealPlan, MealSlot, Recipe};
//!
//! # fn main() -> mealbot::errors::AppResult<()> {
//! let curry = Recipe::new(
//!     "curry-tofu",
//!     "Curry tofu",
//!     4,
//!     vec![Ingredient::new("tofu ferme", 400.0, "g", "proteines")],
//! );
//! let plan = MealPlan::new(
//!     "2026-W06",
//!     vec![MealSlot::new("lundi", "lunch", "curry-tofu", 2)],
//! );
//!
//! let list = aggregate_ingredients(&plan, &recipe_table([curry]), true)?;
//! assert_eq!(list.total_items(), 1);
//! # Ok(())
//! # }
//! ```

/// Environment-driven configuration (thresholds, pantry staples, logging)
pub mod config;

/// Grocery list aggregation, classification and rendering
pub mod grocery;

/// Structured logging setup
pub mod logging;

/// Daily nutrition validation
pub mod nutrition;

/// Seasonal calendar and generated plan documents
pub mod planner;

/// Re-export of the core error types
pub use mealbot_core::errors;

/// Re-export of the core models
pub use mealbot_core::models;

/// Re-export of the core constants
pub use mealbot_core::constants;
