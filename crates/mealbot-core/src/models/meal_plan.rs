// ABOUTME: Weekly meal plan models linking days and meal types to recipes
// ABOUTME: Defines Day, MealType, MealSlot and MealPlan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealBot Contributors

use crate::constants::planning::{DAY_NAMES, MEAL_BREAKFAST, MEAL_DINNER, MEAL_LUNCH};
use crate::constants::recipes::DEFAULT_PORTIONS;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Day of the week, named as the meal plan generator names them
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    /// Monday
    Lundi,
    /// Tuesday
    Mardi,
    /// Wednesday
    Mercredi,
    /// Thursday
    Jeudi,
    /// Friday
    Vendredi,
    /// Saturday
    Samedi,
    /// Sunday
    Dimanche,
}

impl Day {
    /// All days in calendar order
    pub const ALL: [Self; 7] = [
        Self::Lundi,
        Self::Mardi,
        Self::Mercredi,
        Self::Jeudi,
        Self::Vendredi,
        Self::Samedi,
        Self::Dimanche,
    ];

    /// Wire name of the day ("lundi", ...)
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        DAY_NAMES[*self as usize]
    }

    /// Parse a day name, ignoring case and surrounding whitespace
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        let lowered = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|day| day.as_str() == lowered)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type of meal within a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MealType {
    /// Portable breakfast
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
    /// Any label the planner does not know
    Other,
}

impl MealType {
    /// Parse meal type from its wire label
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            MEAL_BREAKFAST => Self::Breakfast,
            MEAL_LUNCH => Self::Lunch,
            MEAL_DINNER => Self::Dinner,
            _ => Self::Other,
        }
    }
}

const fn default_portions() -> u32 {
    DEFAULT_PORTIONS
}

/// A single meal slot in the weekly plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSlot {
    /// Day name as produced by the generator, e.g. "lundi"
    pub day: String,
    /// Meal type label: "petit-dej", "lunch", "diner"
    pub meal_type: String,
    /// Foreign key into the recipe table
    pub recipe_id: String,
    /// Portions eaten in this slot
    #[serde(default = "default_portions")]
    pub portions: u32,
}

impl MealSlot {
    /// Create a meal slot
    pub fn new(
        day: impl Into<String>,
        meal_type: impl Into<String>,
        recipe_id: impl Into<String>,
        portions: u32,
    ) -> Self {
        Self {
            day: day.into(),
            meal_type: meal_type.into(),
            recipe_id: recipe_id.into(),
            portions,
        }
    }

    /// Parsed day, if the slot names a known one
    #[must_use]
    pub fn parsed_day(&self) -> Option<Day> {
        Day::from_str_lossy(&self.day)
    }

    /// Parsed meal type
    #[must_use]
    pub fn parsed_meal_type(&self) -> MealType {
        MealType::from_str_lossy(&self.meal_type)
    }
}

/// A weekly meal plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlan {
    /// ISO week, e.g. "2026-W06"
    pub week: String,
    /// Slots in plan order
    pub slots: Vec<MealSlot>,
    /// Optimal batch-cooking order for Sunday (recipe ids)
    #[serde(default)]
    pub prep_order: Vec<String>,
    /// Total batch-cooking time in minutes
    #[serde(default)]
    pub total_prep_time_min: u32,
}

impl MealPlan {
    /// Create a plan without prep information
    pub fn new(week: impl Into<String>, slots: Vec<MealSlot>) -> Self {
        Self {
            week: week.into(),
            slots,
            prep_order: Vec::new(),
            total_prep_time_min: 0,
        }
    }

    /// Slots whose day string equals `day` exactly, in plan order
    pub fn slots_for_day<'a>(&'a self, day: &'a str) -> impl Iterator<Item = &'a MealSlot> + 'a {
        self.slots.iter().filter(move |slot| slot.day == day)
    }
}
