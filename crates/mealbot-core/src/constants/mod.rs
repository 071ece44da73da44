// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Nutrition thresholds, default pantry staples and planning vocabularies

//! Constants module
//!
//! Constants are grouped into logical domains. They are defaults only: the
//! root crate's configuration layer can override thresholds and staples at
//! runtime and passes them explicitly to the filter and validator.

/// Daily nutrition thresholds (grams)
pub mod nutrition {
    /// Minimum daily protein target
    pub const DAILY_PROTEIN_MIN_G: f64 = 60.0;

    /// Maximum daily carbohydrate limit
    pub const DAILY_CARBS_MAX_G: f64 = 150.0;

    /// Carbohydrates per portion above which a recipe is flagged as high-carb
    pub const HIGH_CARB_THRESHOLD_G: f64 = 50.0;
}

/// Pantry staples assumed to already be at home
pub mod pantry {
    /// Default staple names, stored normalized (lower-case, trimmed)
    pub const DEFAULT_STAPLES: &[&str] = &[
        "sel",
        "poivre",
        "huile d'olive",
        "huile",
        "vinaigre",
        "sucre",
        "farine",
        "eau",
        "poivre noir",
        "sel fin",
        "gros sel",
    ];
}

/// Recipe and meal slot defaults applied when a generated document omits them
pub mod recipes {
    /// Days a batch-cooked recipe keeps in the fridge
    pub const DEFAULT_STORAGE_DAYS: u32 = 3;

    /// Portions eaten in a meal slot
    pub const DEFAULT_PORTIONS: u32 = 1;
}

/// Planning vocabularies shared with the meal plan generator
pub mod planning {
    /// Day names in calendar order
    pub const DAY_NAMES: [&str; 7] = [
        "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche",
    ];

    /// Breakfast meal type label
    pub const MEAL_BREAKFAST: &str = "petit-dej";
    /// Lunch meal type label
    pub const MEAL_LUNCH: &str = "lunch";
    /// Dinner meal type label
    pub const MEAL_DINNER: &str = "diner";
}
