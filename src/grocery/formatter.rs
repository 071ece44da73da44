// ABOUTME: Chat-message rendering of grocery lists and weekly meal plans
// ABOUTME: Markdown text with category emojis, check-box lines and day headers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealBot Contributors

use super::list::{GroceryList, GroceryListItem};
use crate::models::{Day, MealPlan, MealSlot, MealType, RecipeTable};
use std::fmt::Write;

const GROCERY_HEADER: &str = "🛒 *Liste de courses*";
const EMPTY_GROCERY_LIST: &str = "🛒 *Liste de courses*\n\n_Aucun article_";
const PREP_ORDER_HEADER: &str = "🍳 *Ordre de préparation (dimanche)*";

/// Render a quantity without superfluous decimals.
///
/// Whole numbers print without a decimal point; anything else is rounded to
/// the nearest integer.
#[must_use]
pub fn format_quantity(quantity: f64) -> String {
    format!("{:.0}", quantity.round())
}

/// Render one grocery item as a check-box line
#[must_use]
pub fn format_item(item: &GroceryListItem) -> String {
    format!(
        "☐ {} - {}{}",
        item.ingredient_name,
        format_quantity(item.total_quantity),
        item.unit
    )
}

/// Render a grocery list grouped by category
#[must_use]
pub fn format_grocery_list(list: &GroceryList) -> String {
    if list.is_empty() {
        return EMPTY_GROCERY_LIST.to_owned();
    }

    let mut lines = vec![GROCERY_HEADER.to_owned(), String::new()];
    for (category, items) in list.by_category() {
        lines.push(format!("{} *{}*", category.emoji(), category.display_name()));
        lines.extend(items.into_iter().map(format_item));
        lines.push(String::new());
    }
    lines.push(format!("_Total: {} articles_", list.total_items()));

    lines.join("\n")
}

const fn day_emoji(day: Day) -> &'static str {
    match day {
        Day::Lundi => "1️⃣",
        Day::Mardi => "2️⃣",
        Day::Mercredi => "3️⃣",
        Day::Jeudi => "4️⃣",
        Day::Vendredi => "5️⃣",
        Day::Samedi => "6️⃣",
        Day::Dimanche => "7️⃣",
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

fn meal_label(slot: &MealSlot) -> &str {
    match slot.parsed_meal_type() {
        MealType::Breakfast => "🌅 Petit-déjeuner",
        MealType::Lunch => "☀️ Déjeuner",
        MealType::Dinner => "🌙 Dîner",
        MealType::Other => &slot.meal_type,
    }
}

fn recipe_name<'a>(recipes: &'a RecipeTable, recipe_id: &'a str) -> &'a str {
    recipes
        .get(recipe_id)
        .map_or(recipe_id, |recipe| recipe.name.as_str())
}

/// `2h05` above an hour, `45min` below
fn format_prep_time(total_min: u32) -> String {
    let hours = total_min / 60;
    let minutes = total_min % 60;
    if hours > 0 {
        format!("{hours}h{minutes:02}")
    } else {
        format!("{minutes}min")
    }
}

/// Render a weekly meal plan day by day.
///
/// Slots whose day is not one of the seven known day names are not shown.
/// Recipes missing from `recipes` appear under their raw id.
#[must_use]
pub fn format_meal_plan(plan: &MealPlan, recipes: &RecipeTable) -> String {
    let mut out = format!("📅 *Plan repas - {}*\n", plan.week);

    for day in Day::ALL {
        let mut day_slots: Vec<&MealSlot> = plan.slots_for_day(day.as_str()).collect();
        if day_slots.is_empty() {
            continue;
        }
        day_slots.sort_by_key(|slot| slot.parsed_meal_type());

        // Writing into a String cannot fail
        let _ = write!(out, "\n{} *{}*\n", day_emoji(day), capitalize(day.as_str()));
        for slot in day_slots {
            let _ = writeln!(
                out,
                "  {}: {}",
                meal_label(slot),
                recipe_name(recipes, &slot.recipe_id)
            );
        }
    }

    if !plan.prep_order.is_empty() {
        let _ = write!(out, "\n{PREP_ORDER_HEADER}\n");
        for (position, recipe_id) in plan.prep_order.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", position + 1, recipe_name(recipes, recipe_id));
        }
    }

    if plan.total_prep_time_min > 0 {
        let _ = write!(
            out,
            "\n⏱ _Temps total de préparation: {}_",
            format_prep_time(plan.total_prep_time_min)
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grocery::Category;

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(400.0), "400");
        assert_eq!(format_quantity(0.0), "0");
        assert_eq!(format_quantity(333.333), "333");
        assert_eq!(format_quantity(87.6), "88");
    }

    #[test]
    fn test_format_item() {
        let item = GroceryListItem::new("tofu ferme", 400.0, "g", Category::Proteins);
        assert_eq!(format_item(&item), "☐ tofu ferme - 400g");
    }

    #[test]
    fn test_prep_time() {
        assert_eq!(format_prep_time(125), "2h05");
        assert_eq!(format_prep_time(120), "2h00");
        assert_eq!(format_prep_time(45), "45min");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("mercredi"), "Mercredi");
        assert_eq!(capitalize(""), "");
    }
}
