//! Recipe assembly
//!
//! Scales an unscaled ratio map to literal volumes for a target batch size and strength.

use serde::{Deserialize, Serialize};

use super::abv::{estimate_abv, total_parts};
use super::units::{round_to, ML_DECIMALS};
use super::{AbvMap, IngredientRatios};

/// Result of a batch calculation
///
/// Volumes are in milliliters and ABVs in percent, all rounded to one decimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Scaled volume per ingredient
    pub ingredients: IngredientRatios,
    pub water_ml: f64,
    /// Weighted-average ABV of the undiluted mixture
    pub initial_abv: f64,
    /// Strength actually reached; never above `initial_abv`
    pub final_abv: f64,
    pub total_volume_ml: f64,
}

impl CalculationResult {
    /// Whether any water is added to the batch
    pub fn is_diluted(&self) -> bool {
        self.water_ml > 0.0
    }

    /// Sum of the rounded ingredient volumes, excluding water
    pub fn spirit_volume_ml(&self) -> f64 {
        self.ingredients.values().sum()
    }
}

/// Build a batch of `target_volume_ml` at `target_abv` from a ratio map
///
/// When the target is at or above the mixture's own strength no water is added, the ratios
/// are scaled straight to the target volume and the achieved strength is reported as the
/// final ABV. Otherwise the spirit portion is sized so that topping it up with water to
/// `target_volume_ml` lands exactly on `target_abv`.
pub fn build_recipe(
    ratios: &IngredientRatios,
    abvs: &AbvMap,
    target_volume_ml: f64,
    target_abv: f64,
) -> CalculationResult {
    let initial_abv = estimate_abv(ratios, abvs);
    let total = total_parts(ratios);

    // A mixture with no alcohol cannot be diluted towards any target
    let (spirit_volume_ml, water_ml, final_abv) = if target_abv >= initial_abv || initial_abv <= 0.0
    {
        (target_volume_ml, 0.0, initial_abv)
    } else {
        let spirit_volume_ml = target_volume_ml * target_abv / initial_abv;
        (spirit_volume_ml, target_volume_ml - spirit_volume_ml, target_abv)
    };

    let scale_factor = if total == 0.0 {
        0.0
    } else {
        spirit_volume_ml / total
    };

    let ingredients = ratios
        .iter()
        .map(|(ingredient, parts)| {
            (ingredient.clone(), round_to(parts * scale_factor, ML_DECIMALS))
        })
        .collect();

    tracing::debug!(
        initial_abv,
        target_abv,
        target_volume_ml,
        water_ml,
        "assembled batch recipe"
    );

    CalculationResult {
        ingredients,
        water_ml: round_to(water_ml, ML_DECIMALS),
        initial_abv: round_to(initial_abv, ML_DECIMALS),
        final_abv: round_to(final_abv, ML_DECIMALS),
        total_volume_ml: round_to(target_volume_ml, ML_DECIMALS),
    }
}
