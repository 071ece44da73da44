// ABOUTME: Core data models for recipes and weekly meal plans
// ABOUTME: Re-exports recipe, ingredient, macro and meal plan types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealBot Contributors

/// Meal plan models: days, meal types, slots and weekly plans
pub mod meal_plan;
/// Recipe models: ingredients, macros and the recipe table
pub mod recipe;

pub use meal_plan::{Day, MealPlan, MealSlot, MealType};
pub use recipe::{recipe_table, Ingredient, Macros, Recipe, RecipeTable};
