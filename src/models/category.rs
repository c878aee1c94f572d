// src/models/category.rs
// DOCUMENTATION: Food/beverage category definitions
// PURPOSE: Declarative search table consumed by the fan-out and dedup loops

use serde::{Deserialize, Serialize};

/// Closed set of gourmet categories covered by one search
/// DOCUMENTATION: Variant order matches the CATEGORIES table below
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    GeneralRestaurant,
    Izakaya,
    FamilyRestaurant,
    Ramen,
    SobaUdon,
    Cafe,
}

impl Category {
    /// Display label used in the response payload
    pub fn label(&self) -> &'static str {
        match self {
            Category::GeneralRestaurant => "一般飲食店",
            Category::Izakaya => "居酒屋",
            Category::FamilyRestaurant => "ファミリーレストラン",
            Category::Ramen => "ラーメン",
            Category::SobaUdon => "そば・うどん",
            Category::Cafe => "カフェ",
        }
    }
}

/// One row of the category search table
#[derive(Debug, Clone, Copy)]
pub struct CategorySpec {
    pub category: Category,
    /// Keyword passed to the nearby search (may carry an OR expression)
    pub keyword: &'static str,
    /// Google place type filter
    pub place_type: &'static str,
}

/// Search table driving the per-grid-point fan-out.
///
/// Table order is the deduplication priority: a place matching several
/// category keywords is kept by the earliest category listed here. Adding a
/// category is a data change to this table, not a code change.
pub static CATEGORIES: [CategorySpec; 6] = [
    CategorySpec {
        category: Category::GeneralRestaurant,
        keyword: "飲食店",
        place_type: "restaurant",
    },
    CategorySpec {
        category: Category::Izakaya,
        keyword: "居酒屋",
        place_type: "restaurant",
    },
    CategorySpec {
        category: Category::FamilyRestaurant,
        keyword: "ファミリーレストラン",
        place_type: "restaurant",
    },
    CategorySpec {
        category: Category::Ramen,
        keyword: "ラーメン",
        place_type: "restaurant",
    },
    CategorySpec {
        category: Category::SobaUdon,
        keyword: "そば OR うどん",
        place_type: "restaurant",
    },
    CategorySpec {
        category: Category::Cafe,
        keyword: "カフェ OR 喫茶店",
        place_type: "cafe",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_category_table_indexes_align() {
        // Accumulators are indexed by variant position, so the table order
        // and the enum declaration order must agree.
        for (idx, spec) in CATEGORIES.iter().enumerate() {
            assert_eq!(spec.category as usize, idx);
        }
    }

    #[test]
    fn test_category_table_covers_all_categories_once() {
        let distinct: HashSet<Category> = CATEGORIES.iter().map(|s| s.category).collect();
        assert_eq!(distinct.len(), CATEGORIES.len());
    }

    #[test]
    fn test_cafe_searches_cafe_type() {
        let cafe = CATEGORIES
            .iter()
            .find(|s| s.category == Category::Cafe)
            .unwrap();
        assert_eq!(cafe.place_type, "cafe");

        // Every other category queries the restaurant type
        assert!(CATEGORIES
            .iter()
            .filter(|s| s.category != Category::Cafe)
            .all(|s| s.place_type == "restaurant"));
    }
}
