// ABOUTME: Meal planning helpers around the external plan generator
// ABOUTME: Seasonal produce calendar and generated plan document parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealBot Contributors

/// Generated plan documents
pub mod document;
/// Swiss seasonal produce calendar
pub mod seasonal;

pub use document::{load_generated_plan, parse_generated_plan, GeneratedPlan};
pub use seasonal::{is_in_season, seasonal_ingredients, SeasonalCategory, SeasonalProduce};
