// ABOUTME: Parsing of generated weekly plan documents into a meal plan and recipe table
// ABOUTME: Extracts JSON from fenced blocks and validates recipes after deserialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealBot Contributors

use crate::errors::{AppError, AppResult};
use crate::models::{recipe_table, MealPlan, Recipe, RecipeTable};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

/// A weekly plan as produced by the generation service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPlan {
    /// Slots and prep information
    pub meal_plan: MealPlan,
    /// Recipes referenced by the slots
    pub recipes: Vec<Recipe>,
}

impl GeneratedPlan {
    /// Recipe lookup keyed by id
    #[must_use]
    pub fn recipe_table(&self) -> RecipeTable {
        recipe_table(self.recipes.iter().cloned())
    }

    /// Split into the plan and its recipe table
    #[must_use]
    pub fn into_parts(self) -> (MealPlan, RecipeTable) {
        (self.meal_plan, recipe_table(self.recipes))
    }

    /// Check every recipe invariant
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` naming the first recipe with zero servings
    pub fn validate(&self) -> AppResult<()> {
        self.recipes.iter().try_for_each(Recipe::validate)
    }
}

/// Text between the first fence opener and the next closing fence, or the
/// whole input when there is no fence
fn extract_json_payload(text: &str) -> &str {
    let opener = text
        .find(JSON_FENCE)
        .map(|start| start + JSON_FENCE.len())
        .or_else(|| text.find(FENCE).map(|start| start + FENCE.len()));

    let Some(body_start) = opener else {
        return text.trim();
    };
    let body = &text[body_start..];
    body.find(FENCE).map_or(body, |end| &body[..end]).trim()
}

/// Parse a generated plan document.
///
/// Accepts raw JSON, or JSON wrapped in a ```` ```json ```` or plain
/// ```` ``` ```` fenced block anywhere in the text.
///
/// # Errors
///
/// Returns `InvalidInput` when the document holds no JSON at all,
/// `InvalidFormat` for malformed JSON or missing required fields, and
/// `ValueOutOfRange` for a recipe with zero servings
pub fn parse_generated_plan(text: &str) -> AppResult<GeneratedPlan> {
    let payload = extract_json_payload(text);
    if payload.is_empty() {
        return Err(AppError::invalid_input("Plan document contains no JSON"));
    }
    let plan: GeneratedPlan = serde_json::from_str(payload)?;
    plan.validate()?;

    debug!(
        week = %plan.meal_plan.week,
        slots = plan.meal_plan.slots.len(),
        recipes = plan.recipes.len(),
        "Parsed generated meal plan"
    );
    Ok(plan)
}

/// Read and parse a generated plan document from disk
///
/// # Errors
///
/// Returns `ResourceNotFound` if the file does not exist, `InternalError`
/// for other read failures, and the errors of [`parse_generated_plan`]
pub fn load_generated_plan(path: &Path) -> AppResult<GeneratedPlan> {
    let text = fs::read_to_string(path).map_err(|error| {
        let resource = path.display().to_string();
        if error.kind() == io::ErrorKind::NotFound {
            AppError::not_found(resource).with_source(error)
        } else {
            AppError::internal(format!("Failed to read plan document {resource}"))
                .with_source(error)
        }
    })?;
    parse_generated_plan(&text).map_err(|error| {
        if error.resource_id.is_some() {
            error
        } else {
            error.with_resource_id(path.display().to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_json_fence() {
        let text = "Voici le plan:\n```json\n{\"a\": 1}\n```\nBon appétit";
        assert_eq!(extract_json_payload(text), "{\"a\": 1}");
    }

    #[test]
    fn test_extracts_plain_fence() {
        let text = "```\n{\"a\": 1}\n```";
        assert_eq!(extract_json_payload(text), "{\"a\": 1}");
    }

    #[test]
    fn test_unterminated_fence_takes_rest() {
        let text = "```json\n{\"a\": 1}\n";
        assert_eq!(extract_json_payload(text), "{\"a\": 1}");
    }

    #[test]
    fn test_raw_text_is_trimmed() {
        assert_eq!(extract_json_payload("  {}\n"), "{}");
    }
}
