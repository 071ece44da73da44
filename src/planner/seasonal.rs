// ABOUTME: Swiss seasonal produce calendar used to steer weekly meal plan generation
// ABOUTME: Static month-indexed tables of vegetables, fruits and herbs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealBot Contributors

use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::fmt;

/// Produce family in the seasonal calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasonalCategory {
    /// Vegetables
    Vegetables,
    /// Fruits
    Fruits,
    /// Fresh herbs
    Herbs,
}

impl SeasonalCategory {
    /// All categories in display order
    pub const ALL: [Self; 3] = [Self::Vegetables, Self::Fruits, Self::Herbs];

    /// French label used in prompts and CLI output
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Vegetables => "Légumes",
            Self::Fruits => "Fruits",
            Self::Herbs => "Herbes",
        }
    }
}

impl fmt::Display for SeasonalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Produce in season for one month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeasonalProduce {
    /// Vegetables in season
    pub vegetables: &'static [&'static str],
    /// Fruits in season
    pub fruits: &'static [&'static str],
    /// Herbs in season
    pub herbs: &'static [&'static str],
}

impl SeasonalProduce {
    /// Items of one category
    #[must_use]
    pub const fn items(&self, category: SeasonalCategory) -> &'static [&'static str] {
        match category {
            SeasonalCategory::Vegetables => self.vegetables,
            SeasonalCategory::Fruits => self.fruits,
            SeasonalCategory::Herbs => self.herbs,
        }
    }

    /// Whether `ingredient` (already lower-cased) appears in any category
    #[must_use]
    pub fn contains(&self, ingredient: &str) -> bool {
        SeasonalCategory::ALL
            .iter()
            .flat_map(|category| self.items(*category))
            .any(|item| *item == ingredient)
    }

    /// Comma-separated list of one category, as inserted into generation prompts
    #[must_use]
    pub fn joined(&self, category: SeasonalCategory) -> String {
        self.items(category).join(", ")
    }
}

const WINTER_HERBS: &[&str] = &["persil", "romarin", "thym", "sauge"];
const STORAGE_FRUITS: &[&str] = &["pomme", "poire"];

static CALENDAR: [SeasonalProduce; 12] = [
    // January
    SeasonalProduce {
        vegetables: &[
            "carotte", "panais", "celeri-rave", "poireau", "chou", "chou-rouge", "chou-frise",
            "betterave", "navet", "rutabaga", "topinambour", "salsifis", "endive", "mache",
        ],
        fruits: STORAGE_FRUITS,
        herbs: WINTER_HERBS,
    },
    // February
    SeasonalProduce {
        vegetables: &[
            "carotte", "panais", "celeri-rave", "poireau", "chou", "chou-rouge", "chou-frise",
            "betterave", "navet", "rutabaga", "topinambour", "salsifis", "endive", "mache",
            "epinard",
        ],
        fruits: STORAGE_FRUITS,
        herbs: WINTER_HERBS,
    },
    // March
    SeasonalProduce {
        vegetables: &[
            "carotte", "panais", "celeri-rave", "poireau", "chou", "epinard", "mache", "radis",
            "cresson",
        ],
        fruits: &["pomme", "poire", "rhubarbe"],
        herbs: &["persil", "ciboulette", "ail-des-ours"],
    },
    // April
    SeasonalProduce {
        vegetables: &[
            "asperge", "radis", "epinard", "cresson", "laitue", "oignon-nouveau",
            "carotte-nouvelle",
        ],
        fruits: &["rhubarbe"],
        herbs: &["persil", "ciboulette", "ail-des-ours", "cerfeuil"],
    },
    // May
    SeasonalProduce {
        vegetables: &[
            "asperge", "radis", "epinard", "laitue", "petit-pois", "feve", "oignon-nouveau",
            "carotte-nouvelle", "chou-rave",
        ],
        fruits: &["rhubarbe", "fraise"],
        herbs: &["persil", "ciboulette", "basilic", "menthe", "cerfeuil", "estragon"],
    },
    // June
    SeasonalProduce {
        vegetables: &[
            "asperge", "petit-pois", "feve", "haricot-vert", "courgette", "concombre", "laitue",
            "radis", "chou-rave", "fenouil", "bette",
        ],
        fruits: &["fraise", "cerise", "framboise", "groseille"],
        herbs: &["persil", "ciboulette", "basilic", "menthe", "aneth", "coriandre"],
    },
    // July
    SeasonalProduce {
        vegetables: &[
            "tomate", "courgette", "aubergine", "poivron", "concombre", "haricot-vert",
            "petit-pois", "fenouil", "bette", "mais", "laitue", "celeri-branche",
        ],
        fruits: &[
            "fraise", "framboise", "myrtille", "groseille", "cerise", "abricot", "peche", "prune",
        ],
        herbs: &[
            "basilic", "persil", "ciboulette", "menthe", "aneth", "coriandre", "origan",
            "marjolaine",
        ],
    },
    // August
    SeasonalProduce {
        vegetables: &[
            "tomate", "courgette", "aubergine", "poivron", "concombre", "haricot-vert", "fenouil",
            "bette", "mais", "oignon", "ail",
        ],
        fruits: &[
            "framboise", "myrtille", "mure", "prune", "peche", "poire", "pomme", "melon",
            "pasteque",
        ],
        herbs: &[
            "basilic", "persil", "ciboulette", "menthe", "aneth", "coriandre", "origan", "thym",
        ],
    },
    // September
    SeasonalProduce {
        vegetables: &[
            "tomate", "courgette", "aubergine", "poivron", "courge", "potimarron", "butternut",
            "haricot-vert", "fenouil", "bette", "chou", "poireau", "carotte",
        ],
        fruits: &["pomme", "poire", "prune", "raisin", "figue", "mure"],
        herbs: &["persil", "ciboulette", "thym", "romarin", "sauge"],
    },
    // October
    SeasonalProduce {
        vegetables: &[
            "courge", "potimarron", "butternut", "chou", "chou-rouge", "chou-frise", "poireau",
            "carotte", "panais", "celeri-rave", "betterave", "navet", "fenouil", "brocoli",
        ],
        fruits: &["pomme", "poire", "raisin", "coing", "chataigne", "noix"],
        herbs: WINTER_HERBS,
    },
    // November
    SeasonalProduce {
        vegetables: &[
            "courge", "potimarron", "butternut", "chou", "chou-rouge", "chou-frise",
            "chou-de-bruxelles", "poireau", "carotte", "panais", "celeri-rave", "betterave",
            "navet", "topinambour", "salsifis", "endive", "mache",
        ],
        fruits: &["pomme", "poire", "coing", "chataigne", "noix"],
        herbs: WINTER_HERBS,
    },
    // December
    SeasonalProduce {
        vegetables: &[
            "chou", "chou-rouge", "chou-frise", "chou-de-bruxelles", "poireau", "carotte",
            "panais", "celeri-rave", "betterave", "navet", "rutabaga", "topinambour", "salsifis",
            "endive", "mache",
        ],
        fruits: STORAGE_FRUITS,
        herbs: WINTER_HERBS,
    },
];

/// Produce in season in Switzerland for `month` (1 = January)
///
/// # Errors
///
/// Returns `ValueOutOfRange` if `month` is not in `1..=12`
pub fn seasonal_ingredients(month: u32) -> AppResult<&'static SeasonalProduce> {
    if !(1..=12).contains(&month) {
        return Err(AppError::value_out_of_range(format!(
            "Month must be between 1 and 12, got {month}"
        )));
    }
    CALENDAR
        .get((month - 1) as usize)
        .ok_or_else(|| AppError::internal(format!("No seasonal calendar entry for month {month}")))
}

/// Whether `ingredient` is in season during `month`; the name is compared
/// lower-cased and exactly
///
/// # Errors
///
/// Returns `ValueOutOfRange` if `month` is not in `1..=12`
pub fn is_in_season(ingredient: &str, month: u32) -> AppResult<bool> {
    let produce = seasonal_ingredients(month)?;
    Ok(produce.contains(&ingredient.trim().to_lowercase()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_every_month_has_produce() {
        for month in 1..=12 {
            let produce = seasonal_ingredients(month).unwrap();
            assert!(!produce.vegetables.is_empty(), "month {month}");
            assert!(!produce.fruits.is_empty(), "month {month}");
            assert!(!produce.herbs.is_empty(), "month {month}");
        }
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(seasonal_ingredients(0).unwrap_err().code, ErrorCode::ValueOutOfRange);
        assert_eq!(seasonal_ingredients(13).unwrap_err().code, ErrorCode::ValueOutOfRange);
    }

    #[test]
    fn test_joined_list() {
        let april = seasonal_ingredients(4).unwrap();
        assert_eq!(april.joined(SeasonalCategory::Fruits), "rhubarbe");
    }
}
