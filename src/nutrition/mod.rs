// ABOUTME: Daily nutrition validation of weekly meal plans
// ABOUTME: Protein floor, carbohydrate ceiling and high-carb recipe flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealBot Contributors

//! Nutrition validation module
//!
//! Thresholds come from [`NutritionThresholds`](crate::config::NutritionThresholds)
//! and are passed to the validator explicitly.

/// Threshold checks over daily macros
pub mod validator;

pub use validator::{NutritionValidationResult, NutritionValidator, ValidationResult};
