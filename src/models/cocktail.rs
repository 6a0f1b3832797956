//! Cocktail model
//!
//! A cocktail from the recipe catalog with its named variations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::AbvPreset;
use crate::dilution::IngredientRatios;

/// Serving size assumed when the catalog does not give one
pub const DEFAULT_SERVING_SIZE_ML: f64 = 90.0;

/// A cocktail with one or more ratio variations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cocktail {
    pub name: String,
    #[serde(default)]
    pub garnish: String,
    #[serde(default = "default_serving_size")]
    pub serving_size_ml: f64,
    /// Suggested strengths for this cocktail, keyed by preset id
    #[serde(default)]
    pub presets: BTreeMap<String, AbvPreset>,
    pub variations: BTreeMap<String, Variation>,
}

fn default_serving_size() -> f64 {
    DEFAULT_SERVING_SIZE_ML
}

/// A specific ratio of a cocktail (e.g. a 4:1 or 6:1 martini)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variation {
    pub name: String,
    pub ingredients: IngredientRatios,
}

impl Cocktail {
    /// Look up a variation by id
    pub fn variation(&self, id: &str) -> Option<&Variation> {
        self.variations.get(id)
    }
}

impl Variation {
    /// Ingredient ids in this variation
    pub fn ingredient_ids(&self) -> Vec<String> {
        self.ingredients.keys().cloned().collect()
    }
}
