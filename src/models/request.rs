//! Calculation request
//!
//! Incoming payloads are deserialized with every field optional so that a missing key can be
//! reported by name instead of failing the whole body.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Required keys of a calculation request, in the order they are checked
pub const REQUIRED_FIELDS: [&str; 5] = [
    "cocktail",
    "variation",
    "spirits",
    "target_volume_ml",
    "target_abv",
];

/// Raw calculation request as received from a client
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculateRequest {
    #[serde(default)]
    pub cocktail: Option<String>,
    #[serde(default)]
    pub variation: Option<String>,
    /// Ingredient category -> selected brand
    #[serde(default)]
    pub spirits: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub target_volume_ml: Option<f64>,
    #[serde(default)]
    pub target_abv: Option<f64>,
}

/// A calculation request with every required field present
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedCalculation {
    pub cocktail: String,
    pub variation: String,
    pub spirits: BTreeMap<String, String>,
    pub target_volume_ml: f64,
    pub target_abv: f64,
}

impl CalculateRequest {
    /// Check required fields, returning the name of the first one missing
    pub fn validate(self) -> Result<ValidatedCalculation, &'static str> {
        let [cocktail, variation, spirits, volume, abv] = REQUIRED_FIELDS;
        Ok(ValidatedCalculation {
            cocktail: self.cocktail.ok_or(cocktail)?,
            variation: self.variation.ok_or(variation)?,
            spirits: self.spirits.ok_or(spirits)?,
            target_volume_ml: self.target_volume_ml.ok_or(volume)?,
            target_abv: self.target_abv.ok_or(abv)?,
        })
    }
}
