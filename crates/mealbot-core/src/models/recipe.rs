// ABOUTME: Recipe data models used by grocery aggregation and nutrition validation
// ABOUTME: Defines Ingredient, Macros, Recipe and the RecipeTable lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealBot Contributors

use crate::constants::recipes::DEFAULT_STORAGE_DAYS;
use crate::errors::{AppError, AppResult};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Mapping of recipe id to recipe, supplied alongside a meal plan
pub type RecipeTable = HashMap<String, Recipe>;

/// An ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Display name, e.g. "tofu ferme"
    pub name: String,
    /// Quantity for the whole recipe batch
    pub quantity: f64,
    /// Free-text unit ("g", "ml", "pc", ...)
    pub unit: String,
    /// Free-text category label, e.g. "proteines", "légumes", "base"
    pub category: String,
}

impl Ingredient {
    /// Create an ingredient line
    pub fn new(
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
            category: category.into(),
        }
    }
}

/// Nutritional macros for one portion of a recipe
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Macros {
    /// Energy in kcal; fractional values are rounded when deserializing
    #[serde(deserialize_with = "deserialize_calories")]
    pub calories: u32,
    /// Protein in grams
    pub protein_g: f64,
    /// Carbohydrates in grams
    pub carbs_g: f64,
    /// Fat in grams
    pub fat_g: f64,
}

impl Macros {
    /// Create a macro set
    #[must_use]
    pub const fn new(calories: u32, protein_g: f64, carbs_g: f64, fat_g: f64) -> Self {
        Self {
            calories,
            protein_g,
            carbs_g,
            fat_g,
        }
    }

    /// Multiply every macro by a number of portions
    #[must_use]
    pub fn scaled(&self, portions: u32) -> Self {
        let factor = f64::from(portions);
        Self {
            calories: self.calories.saturating_mul(portions),
            protein_g: self.protein_g * factor,
            carbs_g: self.carbs_g * factor,
            fat_g: self.fat_g * factor,
        }
    }
}

/// Accept any non-negative JSON number and round it to whole kcal
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn deserialize_calories<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() || value < 0.0 || value > f64::from(u32::MAX) {
        return Err(D::Error::custom(format!(
            "calories must be a non-negative number, got {value}"
        )));
    }
    Ok(value.round() as u32)
}

/// `null` and `{}` both mean "no macros"; any other object must be complete
fn deserialize_optional_macros<'de, D>(deserializer: D) -> Result<Option<Macros>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Map<String, Value>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(fields) if fields.is_empty() => Ok(None),
        Some(fields) => serde_json::from_value(Value::Object(fields))
            .map(Some)
            .map_err(D::Error::custom),
    }
}

fn default_storage_days() -> u32 {
    DEFAULT_STORAGE_DAYS
}

const fn default_reheatable() -> bool {
    true
}

/// A batch recipe with ingredients, instructions and metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique identifier referenced by meal slots
    pub id: String,
    /// Display name, e.g. "Curry rouge tofu & courge"
    pub name: String,
    /// Portions produced by one batch; must be strictly positive
    pub servings: u32,
    /// Preparation time in minutes
    #[serde(default)]
    pub prep_time_min: u32,
    /// Ingredient lines for the whole batch
    pub ingredients: Vec<Ingredient>,
    /// Preparation steps
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Free-form tags ("batch", "curry", ...)
    #[serde(default)]
    pub tags: Vec<String>,
    /// Per-portion macros, when known
    #[serde(
        default,
        deserialize_with = "deserialize_optional_macros",
        skip_serializing_if = "Option::is_none"
    )]
    pub macros: Option<Macros>,
    /// Seasons the recipe fits ("automne", "hiver", ...)
    #[serde(default)]
    pub season: Vec<String>,
    /// Days the cooked batch keeps
    #[serde(default = "default_storage_days")]
    pub storage_days: u32,
    /// Whether leftovers can be reheated
    #[serde(default = "default_reheatable")]
    pub reheatable: bool,
}

impl Recipe {
    /// Create a recipe with default metadata and no macros
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        servings: u32,
        ingredients: Vec<Ingredient>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            servings,
            prep_time_min: 0,
            ingredients,
            instructions: Vec::new(),
            tags: Vec::new(),
            macros: None,
            season: Vec::new(),
            storage_days: DEFAULT_STORAGE_DAYS,
            reheatable: true,
        }
    }

    /// Attach per-portion macros
    #[must_use]
    pub fn with_macros(mut self, macros: Macros) -> Self {
        self.macros = Some(macros);
        self
    }

    /// Set the preparation time
    #[must_use]
    pub fn with_prep_time(mut self, prep_time_min: u32) -> Self {
        self.prep_time_min = prep_time_min;
        self
    }

    /// Check the recipe invariants
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if `servings` is zero
    pub fn validate(&self) -> AppResult<()> {
        if self.servings == 0 {
            return Err(
                AppError::value_out_of_range("recipe servings must be strictly positive")
                    .with_resource_id(self.id.clone()),
            );
        }
        Ok(())
    }

    /// Scale factor applied to every ingredient when `portions` of this
    /// recipe are eaten: `portions / servings`
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if `servings` is zero
    pub fn portion_multiplier(&self, portions: u32) -> AppResult<f64> {
        self.validate()?;
        Ok(f64::from(portions) / f64::from(self.servings))
    }
}

/// Build a [`RecipeTable`] keyed by recipe id; later duplicates replace earlier ones
pub fn recipe_table(recipes: impl IntoIterator<Item = Recipe>) -> RecipeTable {
    recipes
        .into_iter()
        .map(|recipe| (recipe.id.clone(), recipe))
        .collect()
}
