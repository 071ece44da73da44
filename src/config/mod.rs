// ABOUTME: Configuration management module for nutrition thresholds and pantry staples
// ABOUTME: Loads defaults, applies environment overrides and validates the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealBot Contributors

//! Configuration module for `MealBot`
//!
//! - **Nutrition**: daily protein floor, carb ceiling and high-carb threshold
//! - **Pantry**: staple ingredients excluded from grocery lists
//!
//! Configuration values are passed explicitly to the pantry filter and the
//! nutrition validator; nothing here is read from a global at call time.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::debug;

/// Configuration error types
pub mod error;
/// Daily nutrition thresholds
pub mod nutrition;
/// Pantry staple set
pub mod pantry;

pub use error::ConfigError;
pub use nutrition::NutritionThresholds;
pub use pantry::PantryConfig;

/// Complete runtime configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealbotConfig {
    /// Nutrition validation thresholds
    pub nutrition: NutritionThresholds,
    /// Pantry staples
    pub pantry: PantryConfig,
}

impl MealbotConfig {
    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self {
            nutrition: NutritionThresholds::from_env()?,
            pantry: PantryConfig::from_env(),
        };
        config.validate()?;

        debug!(
            min_protein_g = config.nutrition.min_daily_protein_g,
            max_carbs_g = config.nutrition.max_daily_carbs_g,
            high_carb_g = config.nutrition.high_carb_threshold_g,
            staples = config.pantry.staples.len(),
            "Loaded MealBot configuration"
        );
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the nutrition thresholds are invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.nutrition.validate()
    }
}

/// Parse and apply an environment variable override
fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
    if let Ok(val) = env::var(env_var_name) {
        *target = val
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: {val}")))?;
    }
    Ok(())
}
