// ABOUTME: Criterion benchmarks for grocery aggregation and nutrition validation
// ABOUTME: Measures a generated 21-slot week and larger synthetic plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealBot Contributors

//! Criterion benchmarks for the grocery and nutrition pipeline.
//!
//! Plans are built from synthetic recipes with overlapping ingredient names
//! so that the merge path of the aggregator is exercised.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mealbot::grocery::{format_grocery_list, AggregationEngine};
use mealbot::models::{
    recipe_table, Day, Ingredient, Macros, MealPlan, MealSlot, Recipe, RecipeTable,
};
use mealbot::nutrition::NutritionValidator;

const MEAL_TYPES: [&str; 3] = ["petit-dej", "lunch", "diner"];
const CATEGORIES: [&str; 6] = ["légumes", "fruits", "proteines", "frais", "epicerie", "base"];

/// Recipes sharing a pool of 40 ingredient names
fn generate_recipes(count: usize) -> RecipeTable {
    recipe_table((0..count).map(|index| {
        let ingredients = (0..8)
            .map(|offset| {
                let ingredient = (index * 3 + offset) % 40;
                Ingredient::new(
                    format!("ingredient {ingredient}"),
                    50.0 + (offset * 25) as f64,
                    "g",
                    CATEGORIES[ingredient % CATEGORIES.len()],
                )
            })
            .chain([Ingredient::new("sel", 5.0, "g", "base")])
            .collect();
        Recipe::new(
            format!("recipe-{index}"),
            format!("Recipe {index}"),
            2 + (index % 4) as u32,
            ingredients,
        )
        .with_macros(Macros::new(450, 20.0 + (index % 10) as f64, 30.0 + (index % 30) as f64, 15.0))
    }))
}

/// `weeks` x 21 slots cycling over `recipe_count` recipes
fn generate_plan(weeks: usize, recipe_count: usize) -> MealPlan {
    let slots = (0..weeks * 21)
        .map(|index| {
            let day = Day::ALL[(index / 3) % 7];
            MealSlot::new(
                day.as_str(),
                MEAL_TYPES[index % 3],
                format!("recipe-{}", index % recipe_count),
                1 + (index % 2) as u32,
            )
        })
        .collect();
    MealPlan::new("2026-W06", slots)
}

fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");
    let engine = AggregationEngine::default();
    let recipes = generate_recipes(12);

    for weeks in [1, 4, 16] {
        let plan = generate_plan(weeks, 12);
        group.throughput(Throughput::Elements(plan.slots.len() as u64));
        group.bench_with_input(BenchmarkId::new("slots", plan.slots.len()), &plan, |b, plan| {
            b.iter(|| engine.aggregate(black_box(plan), black_box(&recipes), true));
        });
    }

    group.finish();
}

fn bench_pantry_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("pantry");
    let engine = AggregationEngine::default();
    let recipes = generate_recipes(12);
    let plan = generate_plan(1, 12);

    group.bench_function("exclude_pantry", |b| {
        b.iter(|| engine.aggregate(black_box(&plan), &recipes, true));
    });
    group.bench_function("include_pantry", |b| {
        b.iter(|| engine.aggregate(black_box(&plan), &recipes, false));
    });

    group.finish();
}

fn bench_formatting(c: &mut Criterion) {
    let recipes = generate_recipes(12);
    let plan = generate_plan(1, 12);
    let Ok(list) = AggregationEngine::default().aggregate(&plan, &recipes, true) else {
        return;
    };

    c.bench_function("format_grocery_list", |b| {
        b.iter(|| format_grocery_list(black_box(&list)));
    });
}

fn bench_nutrition_week(c: &mut Criterion) {
    let validator = NutritionValidator::default();
    let recipes = generate_recipes(12);
    let plan = generate_plan(1, 12);

    c.bench_function("validate_week", |b| {
        b.iter(|| validator.validate_week(black_box(&plan), black_box(&recipes)));
    });
}

criterion_group!(
    benches,
    bench_aggregation,
    bench_pantry_filtering,
    bench_formatting,
    bench_nutrition_week
);
criterion_main!(benches);
