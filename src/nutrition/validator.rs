// ABOUTME: Validates that a day of planned meals meets protein and carbohydrate thresholds
// ABOUTME: Macros are per portion and scale directly by the slot's portion count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealBot Contributors

use crate::config::NutritionThresholds;
use crate::models::{Day, Macros, MealPlan, Recipe, RecipeTable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Outcome of a single threshold check
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the threshold is satisfied
    pub is_valid: bool,
    /// Summed value for the day
    pub total: f64,
    /// Threshold the total was compared against
    pub target: f64,
    /// Amount missing below a floor (protein)
    pub deficit: f64,
    /// Amount above a ceiling (carbohydrates)
    pub excess: f64,
}

/// Outcome of validating one day of a meal plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionValidationResult {
    /// Protein floor satisfied
    pub protein_valid: bool,
    /// Carbohydrate ceiling satisfied
    pub carbs_valid: bool,
    /// Total protein in grams
    pub protein_total: f64,
    /// Total carbohydrates in grams
    pub carbs_total: f64,
    /// Grams of protein missing to reach the floor
    pub protein_deficit: f64,
    /// Grams of carbohydrates above the ceiling
    pub carbs_excess: f64,
    /// Total energy in kcal
    pub calories_total: u32,
    /// Total fat in grams
    pub fat_total: f64,
    /// Ids of high-carb recipes eaten that day, one entry per slot
    pub high_carb_recipes: Vec<String>,
    /// Slots that contributed macros (recipe found and macros known)
    pub meals_counted: usize,
}

impl NutritionValidationResult {
    /// Both threshold checks pass
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.protein_valid && self.carbs_valid
    }

    /// At least one recipe of the day exceeds the high-carb threshold
    #[must_use]
    pub fn has_high_carb_recipes(&self) -> bool {
        !self.high_carb_recipes.is_empty()
    }
}

/// Checks daily macros against configured thresholds
#[derive(Debug, Clone, Copy, Default)]
pub struct NutritionValidator {
    thresholds: NutritionThresholds,
}

impl NutritionValidator {
    /// Create a validator with the given thresholds
    #[must_use]
    pub const fn new(thresholds: NutritionThresholds) -> Self {
        Self { thresholds }
    }

    /// Protein total must reach the daily floor (inclusive)
    #[must_use]
    pub fn validate_daily_protein(&self, daily_macros: &[Macros]) -> ValidationResult {
        let total: f64 = daily_macros.iter().map(|m| m.protein_g).sum();
        let target = self.thresholds.min_daily_protein_g;
        ValidationResult {
            is_valid: total >= target,
            total,
            target,
            deficit: (target - total).max(0.0),
            excess: 0.0,
        }
    }

    /// Carbohydrate total must stay at or under the daily ceiling
    #[must_use]
    pub fn validate_daily_carbs(&self, daily_macros: &[Macros]) -> ValidationResult {
        let total: f64 = daily_macros.iter().map(|m| m.carbs_g).sum();
        let target = self.thresholds.max_daily_carbs_g;
        ValidationResult {
            is_valid: total <= target,
            total,
            target,
            deficit: 0.0,
            excess: (total - target).max(0.0),
        }
    }

    /// Per-portion carbohydrates strictly above the high-carb threshold.
    /// Recipes without macros are never flagged.
    #[must_use]
    pub fn is_high_carb_recipe(&self, recipe: &Recipe) -> bool {
        recipe
            .macros
            .is_some_and(|macros| macros.carbs_g > self.thresholds.high_carb_threshold_g)
    }

    /// Validate the slots of `plan` whose day string equals `day`.
    ///
    /// Slots with an unknown recipe or a recipe without macros are skipped.
    /// A day matching no slot yields a zero-total result; it is logged as a
    /// warning and visible through `meals_counted`.
    #[must_use]
    pub fn validate_meal_plan_nutrition(
        &self,
        plan: &MealPlan,
        recipes: &RecipeTable,
        day: &str,
    ) -> NutritionValidationResult {
        let mut daily_macros = Vec::new();
        let mut high_carb_recipes: Vec<String> = Vec::new();
        let mut slots_seen = 0_usize;

        for slot in plan.slots_for_day(day) {
            slots_seen += 1;
            let Some(recipe) = recipes.get(&slot.recipe_id) else {
                debug!(recipe_id = %slot.recipe_id, day, "Skipping slot with unknown recipe");
                continue;
            };
            let Some(macros) = recipe.macros else {
                debug!(recipe_id = %recipe.id, day, "Skipping recipe without macros");
                continue;
            };

            daily_macros.push(macros.scaled(slot.portions));
            if self.is_high_carb_recipe(recipe) {
                high_carb_recipes.push(recipe.id.clone());
            }
        }

        if slots_seen == 0 {
            if Day::from_str_lossy(day).is_none() {
                warn!(day, week = %plan.week, "Unknown day requested for nutrition validation");
            } else {
                warn!(day, week = %plan.week, "No meal slots planned for day");
            }
        }

        let protein = self.validate_daily_protein(&daily_macros);
        let carbs = self.validate_daily_carbs(&daily_macros);
        let calories_total = daily_macros
            .iter()
            .fold(0_u32, |acc, m| acc.saturating_add(m.calories));
        let fat_total = daily_macros.iter().map(|m| m.fat_g).sum();

        debug!(
            day,
            protein_g = protein.total,
            carbs_g = carbs.total,
            calories = calories_total,
            meals = daily_macros.len(),
            "Validated daily nutrition"
        );

        NutritionValidationResult {
            protein_valid: protein.is_valid,
            carbs_valid: carbs.is_valid,
            protein_total: protein.total,
            carbs_total: carbs.total,
            protein_deficit: protein.deficit,
            carbs_excess: carbs.excess,
            calories_total,
            fat_total,
            high_carb_recipes,
            meals_counted: daily_macros.len(),
        }
    }

    /// Validate all seven days of the plan in calendar order
    #[must_use]
    pub fn validate_week(
        &self,
        plan: &MealPlan,
        recipes: &RecipeTable,
    ) -> BTreeMap<Day, NutritionValidationResult> {
        Day::ALL
            .into_iter()
            .map(|day| {
                (
                    day,
                    self.validate_meal_plan_nutrition(plan, recipes, day.as_str()),
                )
            })
            .collect()
    }
}
