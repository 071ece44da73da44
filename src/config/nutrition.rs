// ABOUTME: Daily nutrition threshold configuration for meal plan validation
// ABOUTME: Protein floor, carbohydrate ceiling and per-portion high-carb threshold
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealBot Contributors

use super::apply_env_var;
use super::error::ConfigError;
use crate::constants::nutrition::{DAILY_CARBS_MAX_G, DAILY_PROTEIN_MIN_G, HIGH_CARB_THRESHOLD_G};
use serde::{Deserialize, Serialize};

/// Environment variable overriding [`NutritionThresholds::min_daily_protein_g`]
pub const ENV_MIN_PROTEIN_G: &str = "MEALBOT_MIN_PROTEIN_G";
/// Environment variable overriding [`NutritionThresholds::max_daily_carbs_g`]
pub const ENV_MAX_CARBS_G: &str = "MEALBOT_MAX_CARBS_G";
/// Environment variable overriding [`NutritionThresholds::high_carb_threshold_g`]
pub const ENV_HIGH_CARB_G: &str = "MEALBOT_HIGH_CARB_G";

/// Thresholds used by the nutrition validator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionThresholds {
    /// A day is valid for protein when its total is at least this many grams
    pub min_daily_protein_g: f64,
    /// A day is valid for carbs when its total is at most this many grams
    pub max_daily_carbs_g: f64,
    /// A recipe is flagged when its per-portion carbs are strictly above this
    pub high_carb_threshold_g: f64,
}

impl Default for NutritionThresholds {
    fn default() -> Self {
        Self {
            min_daily_protein_g: DAILY_PROTEIN_MIN_G,
            max_daily_carbs_g: DAILY_CARBS_MAX_G,
            high_carb_threshold_g: HIGH_CARB_THRESHOLD_G,
        }
    }
}

impl NutritionThresholds {
    /// Defaults with environment overrides applied, then validated
    ///
    /// # Errors
    ///
    /// Returns an error if an override does not parse or the result is invalid
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut thresholds = Self::default();
        apply_env_var(ENV_MIN_PROTEIN_G, &mut thresholds.min_daily_protein_g)?;
        apply_env_var(ENV_MAX_CARBS_G, &mut thresholds.max_daily_carbs_g)?;
        apply_env_var(ENV_HIGH_CARB_G, &mut thresholds.high_carb_threshold_g)?;
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Validate the thresholds
    ///
    /// # Errors
    ///
    /// Returns an error if any threshold is not a finite positive number, or if
    /// the per-portion high-carb threshold exceeds the daily carb ceiling
    pub fn validate(&self) -> Result<(), ConfigError> {
        let all_positive = [
            self.min_daily_protein_g,
            self.max_daily_carbs_g,
            self.high_carb_threshold_g,
        ]
        .iter()
        .all(|value| value.is_finite() && *value > 0.0);

        if !all_positive {
            return Err(ConfigError::ValueOutOfRange(
                "nutrition thresholds must be finite and positive",
            ));
        }
        if self.high_carb_threshold_g > self.max_daily_carbs_g {
            return Err(ConfigError::InvalidRange(
                "high-carb threshold cannot exceed the daily carb ceiling",
            ));
        }
        Ok(())
    }
}
