// ABOUTME: Core types and constants for the MealBot meal planning platform
// ABOUTME: Foundation crate with error handling, recipe and meal plan models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealBot Contributors

#![deny(unsafe_code)]

//! # `MealBot` Core
//!
//! Foundation crate providing shared types and constants for the `MealBot`
//! grocery and nutrition pipeline. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Recipes, ingredients, macros, meal slots and weekly plans
//! - **constants**: Default nutrition thresholds, pantry staples and vocabularies

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Recipe, Ingredient, Macros, `MealPlan`, ...)
pub mod models;
