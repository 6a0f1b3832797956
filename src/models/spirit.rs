//! Spirit model
//!
//! Brands and their ABVs, grouped by ingredient category.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single bottling of a spirit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spirit {
    pub brand: String,
    pub abv: f64,
}

/// Ingredient category (e.g. "gin") -> available brands, first entry is the default
pub type SpiritCatalog = BTreeMap<String, Vec<Spirit>>;

/// Resolve a brand selection within a category to an ABV
///
/// An unrecognized brand falls back to the first brand listed for the category. An empty or
/// unknown category resolves to `0.0`.
pub fn resolve_brand_abv(spirits: &SpiritCatalog, category: &str, brand: &str) -> f64 {
    let Some(brands) = spirits.get(category) else {
        tracing::debug!(category, "unknown spirit category, treating as non-alcoholic");
        return 0.0;
    };

    if let Some(spirit) = brands.iter().find(|s| s.brand == brand) {
        return spirit.abv;
    }

    match brands.first() {
        Some(fallback) => {
            tracing::debug!(
                category,
                brand,
                fallback = %fallback.brand,
                "unrecognized brand, using category default"
            );
            fallback.abv
        }
        None => 0.0,
    }
}
