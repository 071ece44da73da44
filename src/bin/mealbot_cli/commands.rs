// ABOUTME: Subcommand implementations for mealbot-cli
// ABOUTME: Each command loads its inputs and returns the text to print
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealBot Contributors

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use mealbot::config::MealbotConfig;
use mealbot::grocery::{format_grocery_list, format_meal_plan, AggregationEngine};
use mealbot::nutrition::{NutritionValidationResult, NutritionValidator};
use mealbot::planner::{load_generated_plan, seasonal_ingredients, SeasonalCategory};
use std::fmt::Write;
use std::path::Path;
use tracing::info;

/// Grocery list of the plan at `path`
pub fn groceries(config: &MealbotConfig, path: &Path, include_pantry: bool) -> Result<String> {
    let (plan, recipes) = load_generated_plan(path)?.into_parts();
    let engine = AggregationEngine::from_config(&config.pantry);
    let list = engine.aggregate(&plan, &recipes, !include_pantry)?;

    info!(week = %plan.week, items = list.total_items(), "Built grocery list");
    Ok(format_grocery_list(&list))
}

/// Nutrition check of one day of the plan at `path`
pub fn nutrition_day(config: &MealbotConfig, path: &Path, day: &str) -> Result<String> {
    let (plan, recipes) = load_generated_plan(path)?.into_parts();
    let validator = NutritionValidator::new(config.nutrition);
    let result = validator.validate_meal_plan_nutrition(&plan, &recipes, day);

    let mut out = String::new();
    write_day_report(&mut out, day, &result)?;
    Ok(out.trim_end().to_owned())
}

/// Nutrition check of every day of the plan at `path`
pub fn nutrition_week(config: &MealbotConfig, path: &Path) -> Result<String> {
    let (plan, recipes) = load_generated_plan(path)?.into_parts();
    let validator = NutritionValidator::new(config.nutrition);

    let mut out = format!("Semaine {}\n\n", plan.week);
    let mut valid_days = 0_usize;
    for (day, result) in validator.validate_week(&plan, &recipes) {
        if result.is_valid() {
            valid_days += 1;
        }
        write_day_report(&mut out, day.as_str(), &result)?;
        out.push('\n');
    }
    writeln!(out, "{valid_days}/7 jours valides")?;
    Ok(out.trim_end().to_owned())
}

fn write_day_report(
    out: &mut String,
    day: &str,
    result: &NutritionValidationResult,
) -> std::fmt::Result {
    let status = if result.is_valid() { "✅" } else { "❌" };
    writeln!(out, "{status} {day} ({} repas)", result.meals_counted)?;
    writeln!(
        out,
        "  Protéines: {:.1}g{}",
        result.protein_total,
        if result.protein_valid {
            String::new()
        } else {
            format!(" (manque {:.1}g)", result.protein_deficit)
        }
    )?;
    writeln!(
        out,
        "  Glucides: {:.1}g{}",
        result.carbs_total,
        if result.carbs_valid {
            String::new()
        } else {
            format!(" (excès {:.1}g)", result.carbs_excess)
        }
    )?;
    writeln!(out, "  Lipides: {:.1}g", result.fat_total)?;
    writeln!(out, "  Calories: {} kcal", result.calories_total)?;
    if result.has_high_carb_recipes() {
        writeln!(
            out,
            "  Riches en glucides: {}",
            result.high_carb_recipes.join(", ")
        )?;
    }
    Ok(())
}

/// Formatted weekly plan at `path`
pub fn plan(path: &Path) -> Result<String> {
    let generated = load_generated_plan(path)?;
    let recipes = generated.recipe_table();
    Ok(format_meal_plan(&generated.meal_plan, &recipes)
        .trim_end()
        .to_owned())
}

/// Produce in season during `month`, or the current month
pub fn seasonal(month: Option<u32>) -> Result<String> {
    let month = month.unwrap_or_else(|| Local::now().month());
    let produce = seasonal_ingredients(month)
        .with_context(|| format!("Cannot list seasonal produce for month {month}"))?;

    let mut out = format!("🌱 *De saison (mois {month})*\n");
    for category in SeasonalCategory::ALL {
        write!(out, "\n*{category}*: {}", produce.joined(category))?;
    }
    Ok(out)
}
