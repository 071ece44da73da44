// ABOUTME: Aggregation engine turning a weekly meal plan into a deduplicated grocery list
// ABOUTME: Scales ingredients by portions over servings and merges them by normalized name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealBot Contributors

use super::category::{classify, Category};
use super::list::{GroceryList, GroceryListItem};
use super::normalize::normalize_name;
use super::pantry::PantryFilter;
use crate::config::PantryConfig;
use crate::errors::AppResult;
use crate::models::{MealPlan, RecipeTable};
use std::collections::HashMap;
use tracing::debug;

/// Running total for one normalized ingredient name
#[derive(Debug)]
struct Accumulated {
    display_name: String,
    quantity: f64,
    unit: String,
    category: Category,
}

/// Builds grocery lists from meal plans
#[derive(Debug, Clone, Default)]
pub struct AggregationEngine {
    pantry: PantryFilter,
}

impl AggregationEngine {
    /// Create an engine using the given pantry staples
    #[must_use]
    pub const fn new(pantry: PantryFilter) -> Self {
        Self { pantry }
    }

    /// Create an engine from pantry configuration
    #[must_use]
    pub fn from_config(config: &PantryConfig) -> Self {
        Self::new(PantryFilter::new(config))
    }

    /// Aggregate every slot of `plan` into a grocery list.
    ///
    /// Each slot contributes `ingredient.quantity * portions / servings` per
    /// ingredient. Slots naming an unknown recipe are skipped. Quantities of
    /// ingredients sharing a normalized name are summed regardless of unit;
    /// the first display name and unit seen are kept. Items come out sorted
    /// by category, then by lower-cased name.
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if a referenced recipe has zero servings.
    /// No partial list is produced in that case.
    pub fn aggregate(
        &self,
        plan: &MealPlan,
        recipes: &RecipeTable,
        exclude_pantry: bool,
    ) -> AppResult<GroceryList> {
        let mut accumulator: HashMap<String, Accumulated> = HashMap::new();

        for slot in &plan.slots {
            let Some(recipe) = recipes.get(&slot.recipe_id) else {
                debug!(
                    recipe_id = %slot.recipe_id,
                    day = %slot.day,
                    meal_type = %slot.meal_type,
                    "Skipping meal slot with unknown recipe"
                );
                continue;
            };

            let multiplier = recipe.portion_multiplier(slot.portions)?;

            for ingredient in &recipe.ingredients {
                if exclude_pantry && self.pantry.is_staple(&ingredient.name) {
                    debug!(
                        ingredient = %ingredient.name,
                        recipe_id = %recipe.id,
                        "Excluding pantry staple"
                    );
                    continue;
                }

                let scaled_quantity = ingredient.quantity * multiplier;
                accumulator
                    .entry(normalize_name(&ingredient.name))
                    .and_modify(|entry| entry.quantity += scaled_quantity)
                    .or_insert_with(|| Accumulated {
                        display_name: ingredient.name.clone(),
                        quantity: scaled_quantity,
                        unit: ingredient.unit.clone(),
                        category: classify(&ingredient.category),
                    });
            }
        }

        let mut items: Vec<GroceryListItem> = accumulator
            .into_values()
            .map(|entry| {
                GroceryListItem::new(entry.display_name, entry.quantity, entry.unit, entry.category)
            })
            .collect();
        items.sort_by_cached_key(|item| (item.category, normalize_name(&item.ingredient_name)));

        debug!(
            week = %plan.week,
            slots = plan.slots.len(),
            items = items.len(),
            exclude_pantry,
            "Aggregated grocery list"
        );
        Ok(GroceryList::new(items))
    }
}

/// Aggregate a plan with the default pantry staples.
///
/// # Errors
///
/// Returns `ValueOutOfRange` if a referenced recipe has zero servings
pub fn aggregate_ingredients(
    plan: &MealPlan,
    recipes: &RecipeTable,
    exclude_pantry: bool,
) -> AppResult<GroceryList> {
    AggregationEngine::from_config(&PantryConfig::default()).aggregate(plan, recipes, exclude_pantry)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use crate::models::{recipe_table, Ingredient, MealSlot, Recipe};

    fn curry() -> Recipe {
        Recipe::new(
            "curry",
            "Curry",
            4,
            vec![
                Ingredient::new("tofu ferme", 400.0, "g", "proteines"),
                Ingredient::new("sel", 5.0, "g", "base"),
            ],
        )
    }

    #[test]
    fn test_scales_by_portions_over_servings() {
        let plan = MealPlan::new("2026-W06", vec![MealSlot::new("lundi", "lunch", "curry", 2)]);
        let list = aggregate_ingredients(&plan, &recipe_table([curry()]), true).unwrap();

        assert_eq!(list.total_items(), 1);
        let tofu = &list.items()[0];
        assert!((tofu.total_quantity - 200.0).abs() < f64::EPSILON);
        assert_eq!(tofu.category, Category::Proteins);
    }

    #[test]
    fn test_pantry_toggle() {
        let plan = MealPlan::new("2026-W06", vec![MealSlot::new("lundi", "lunch", "curry", 1)]);
        let table = recipe_table([curry()]);

        let without = aggregate_ingredients(&plan, &table, true).unwrap();
        let with = aggregate_ingredients(&plan, &table, false).unwrap();
        assert_eq!(without.total_items(), 1);
        assert_eq!(with.total_items(), 2);
    }

    #[test]
    fn test_zero_servings_aborts() {
        let mut broken = curry();
        broken.servings = 0;
        let plan = MealPlan::new("2026-W06", vec![MealSlot::new("lundi", "lunch", "curry", 1)]);

        let err = aggregate_ingredients(&plan, &recipe_table([broken]), true).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert_eq!(err.resource_id.as_deref(), Some("curry"));
    }

    #[test]
    fn test_custom_pantry_engine() {
        let engine = AggregationEngine::from_config(&PantryConfig::from_names(["tofu"]));
        let plan = MealPlan::new("2026-W06", vec![MealSlot::new("lundi", "lunch", "curry", 4)]);
        let list = engine.aggregate(&plan, &recipe_table([curry()]), true).unwrap();

        assert_eq!(list.total_items(), 1);
        assert_eq!(list.items()[0].ingredient_name, "sel");
    }
}
