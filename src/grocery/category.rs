// ABOUTME: Grocery categories and the synonym table mapping free-text labels onto them
// ABOUTME: Classification is total: unknown labels fall back to Category::Other
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MealBot Contributors

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Grocery list section an item is shopped from.
///
/// Variant order is the presentation order: the derived `Ord` is the
/// canonical category sort key used by aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Vegetables and other produce
    Vegetables,
    /// Fruits
    Fruits,
    /// Meat, fish, tofu, legumes bought as protein
    Proteins,
    /// Fresh and dairy products
    Fresh,
    /// Shelf-stable grocery and pantry goods
    Grocery,
    /// Drinks
    Beverages,
    /// Frozen goods
    Frozen,
    /// Anything the synonym table does not know
    Other,
}

impl Category {
    /// All categories in presentation order
    pub const ALL: [Self; 8] = [
        Self::Vegetables,
        Self::Fruits,
        Self::Proteins,
        Self::Fresh,
        Self::Grocery,
        Self::Beverages,
        Self::Frozen,
        Self::Other,
    ];

    /// Section title shown in chat messages
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Vegetables => "Légumes",
            Self::Fruits => "Fruits",
            Self::Proteins => "Protéines",
            Self::Fresh => "Frais",
            Self::Grocery => "Épicerie",
            Self::Beverages => "Boissons",
            Self::Frozen => "Surgelés",
            Self::Other => "Autres",
        }
    }

    /// Section emoji shown in chat messages
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Vegetables => "🥬",
            Self::Fruits => "🍎",
            Self::Proteins => "🥩",
            Self::Fresh => "🧀",
            Self::Grocery => "🏪",
            Self::Beverages => "🥤",
            Self::Frozen => "🧊",
            Self::Other => "📦",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Lower-cased category labels (French and English, accented and not)
static CATEGORY_SYNONYMS: LazyLock<HashMap<&'static str, Category>> = LazyLock::new(|| {
    [
        ("legumes", Category::Vegetables),
        ("légumes", Category::Vegetables),
        ("legume", Category::Vegetables),
        ("légume", Category::Vegetables),
        ("vegetables", Category::Vegetables),
        ("produce", Category::Vegetables),
        ("fruits", Category::Fruits),
        ("fruit", Category::Fruits),
        ("proteines", Category::Proteins),
        ("protéines", Category::Proteins),
        ("proteine", Category::Proteins),
        ("protéine", Category::Proteins),
        ("protein", Category::Proteins),
        ("proteins", Category::Proteins),
        ("viande", Category::Proteins),
        ("poisson", Category::Proteins),
        ("meat", Category::Proteins),
        ("fish", Category::Proteins),
        ("frais", Category::Fresh),
        ("fresh", Category::Fresh),
        ("dairy", Category::Fresh),
        ("produits laitiers", Category::Fresh),
        ("epicerie", Category::Grocery),
        ("épicerie", Category::Grocery),
        ("base", Category::Grocery),
        ("grocery", Category::Grocery),
        ("pantry", Category::Grocery),
        ("boissons", Category::Beverages),
        ("boisson", Category::Beverages),
        ("beverages", Category::Beverages),
        ("drinks", Category::Beverages),
        ("surgeles", Category::Frozen),
        ("surgelés", Category::Frozen),
        ("frozen", Category::Frozen),
    ]
    .into_iter()
    .collect()
});

/// Map a free-text category label onto a [`Category`].
///
/// Case-insensitive and whitespace-trimmed; never fails.
#[must_use]
pub fn classify(label: &str) -> Category {
    let key = label.trim().to_lowercase();
    CATEGORY_SYNONYMS
        .get(key.as_str())
        .copied()
        .unwrap_or(Category::Other)
}
