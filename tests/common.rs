// ABOUTME: Shared test fixtures and setup functions for integration tests
// ABOUTME: Provides sample recipes, meal plans, plan documents and quiet logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealBot Contributors
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `mealbot`
//!
//! Common fixtures so individual test files do not rebuild the same
//! recipes and plans.

use mealbot::models::{recipe_table, Ingredient, Macros, MealPlan, MealSlot, Recipe, RecipeTable};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Batch tofu curry: 4 servings, contains two pantry staples
pub fn curry_tofu() -> Recipe {
    Recipe::new(
        "curry-tofu",
        "Curry rouge tofu & courge",
        4,
        vec![
            Ingredient::new("tofu ferme", 400.0, "g", "proteines"),
            Ingredient::new("courge butternut", 500.0, "g", "légumes"),
            Ingredient::new("lait de coco", 400.0, "ml", "epicerie"),
            Ingredient::new("pate de curry", 30.0, "g", "epicerie"),
            Ingredient::new("sel", 5.0, "g", "base"),
            Ingredient::new("huile d'olive", 15.0, "ml", "base"),
        ],
    )
    .with_macros(Macros::new(420, 22.0, 35.0, 20.0))
    .with_prep_time(45)
}

/// Lentil salad: 2 servings, shares carrots with the soup
pub fn salade_lentilles() -> Recipe {
    Recipe::new(
        "salade-lentilles",
        "Salade de lentilles",
        2,
        vec![
            Ingredient::new("lentilles vertes", 150.0, "g", "proteines"),
            Ingredient::new("carotte", 100.0, "g", "legumes"),
            Ingredient::new("vinaigre", 10.0, "ml", "base"),
            Ingredient::new("poivre", 2.0, "g", "base"),
        ],
    )
    .with_macros(Macros::new(380, 24.0, 45.0, 8.0))
    .with_prep_time(25)
}

/// Leek soup: 4 servings, shares carrots with the salad
pub fn soupe_poireaux() -> Recipe {
    Recipe::new(
        "soupe-poireaux",
        "Soupe poireaux pommes de terre",
        4,
        vec![
            Ingredient::new("poireau", 300.0, "g", "légumes"),
            Ingredient::new("pomme de terre", 400.0, "g", "légumes"),
            Ingredient::new("Carotte", 200.0, "g", "légumes"),
            Ingredient::new("sel", 5.0, "g", "base"),
        ],
    )
    .with_macros(Macros::new(180, 6.0, 28.0, 4.0))
    .with_prep_time(30)
}

/// All fixture recipes keyed by id
pub fn sample_recipes() -> RecipeTable {
    recipe_table([curry_tofu(), salade_lentilles(), soupe_poireaux()])
}

/// Two days of meals over the fixture recipes
pub fn sample_plan() -> MealPlan {
    let mut plan = MealPlan::new(
        "2026-W06",
        vec![
            MealSlot::new("lundi", "lunch", "curry-tofu", 1),
            MealSlot::new("lundi", "diner", "soupe-poireaux", 1),
            MealSlot::new("mardi", "lunch", "salade-lentilles", 1),
            MealSlot::new("mardi", "diner", "curry-tofu", 2),
        ],
    );
    plan.prep_order = vec!["curry-tofu".into(), "soupe-poireaux".into()];
    plan.total_prep_time_min = 75;
    plan
}

/// A generator response: prose around a fenced JSON document
pub const SAMPLE_PLAN_DOCUMENT: &str = r#"Voici ton plan pour la semaine :

```json
{
  "meal_plan": {
    "week": "2026-W06",
    "slots": [
      {"day": "lundi", "meal_type": "petit-dej", "recipe_id": "overnight-oats"},
      {"day": "lundi", "meal_type": "lunch", "recipe_id": "curry-tofu", "portions": 1},
      {"day": "lundi", "meal_type": "diner", "recipe_id": "curry-tofu", "portions": 1}
    ],
    "prep_order": ["curry-tofu", "overnight-oats"],
    "total_prep_time_min": 55
  },
  "recipes": [
    {
      "id": "curry-tofu",
      "name": "Curry rouge tofu & courge",
      "servings": 4,
      "prep_time_min": 45,
      "ingredients": [
        {"name": "tofu ferme", "quantity": 400, "unit": "g", "category": "proteines"},
        {"name": "courge butternut", "quantity": 500, "unit": "g", "category": "légumes"},
        {"name": "sel", "quantity": 5, "unit": "g", "category": "base"}
      ],
      "instructions": ["Couper la courge", "Mijoter 25 minutes"],
      "tags": ["batch", "curry"],
      "macros": {"calories": 420, "protein_g": 22, "carbs_g": 35, "fat_g": 20},
      "season": ["automne", "hiver"]
    },
    {
      "id": "overnight-oats",
      "name": "Overnight oats",
      "servings": 1,
      "ingredients": [
        {"name": "flocons d'avoine", "quantity": 50, "unit": "g", "category": "epicerie"},
        {"name": "skyr", "quantity": 150, "unit": "g", "category": "frais"}
      ],
      "storage_days": 2,
      "reheatable": false
    }
  ]
}
```

Bon appétit !"#;
