//! Calculation tools
//!
//! Resolve a request against the catalog, run the dilution core and dress the result up for
//! display.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{ToolError, ToolResult};
use crate::catalog::Catalog;
use crate::dilution::units::ML_DECIMALS;
use crate::dilution::{
    build_recipe, ml_to_oz, round_to, simplify_ml, simplify_oz, solve_water_volume,
    CalculationResult, SimplifiedAmount,
};
use crate::models::CalculateRequest;

/// A simplified amount in both unit systems
#[derive(Debug, Clone, Serialize)]
pub struct SimplifiedPair {
    pub ml: SimplifiedAmount,
    pub oz: SimplifiedAmount,
}

impl SimplifiedPair {
    fn new(ml: f64, oz: f64) -> Self {
        Self {
            ml: simplify_ml(ml),
            oz: simplify_oz(oz),
        }
    }
}

/// Pourable version of a batch
#[derive(Debug, Clone, Serialize)]
pub struct SimplifiedRecipe {
    pub ingredients: BTreeMap<String, SimplifiedPair>,
    pub water: SimplifiedPair,
}

/// Response for calculate
#[derive(Debug, Clone, Serialize)]
pub struct CalculateResponse {
    #[serde(flatten)]
    pub result: CalculationResult,
    pub ingredients_oz: BTreeMap<String, f64>,
    pub water_oz: f64,
    pub total_volume_oz: f64,
    /// The brand selections exactly as the caller sent them
    pub spirit_brands: BTreeMap<String, String>,
    pub cocktail_name: String,
    pub variation_name: String,
    pub garnish: String,
    pub simplified: SimplifiedRecipe,
}

/// Calculate a batch for a cocktail variation
pub fn calculate(catalog: &Catalog, request: CalculateRequest) -> ToolResult<CalculateResponse> {
    let request = request.validate().map_err(ToolError::MissingField)?;

    let cocktail = catalog
        .cocktail(&request.cocktail)
        .ok_or_else(|| ToolError::CocktailNotFound(request.cocktail.clone()))?;
    let variation =
        cocktail
            .variation(&request.variation)
            .ok_or_else(|| ToolError::VariationNotFound {
                cocktail: request.cocktail.clone(),
                variation: request.variation.clone(),
            })?;

    let abvs = catalog.resolve_abvs(&request.spirits);
    let result = build_recipe(
        &variation.ingredients,
        &abvs,
        request.target_volume_ml,
        request.target_abv,
    );

    tracing::info!(
        cocktail = %request.cocktail,
        variation = %request.variation,
        target_volume_ml = request.target_volume_ml,
        target_abv = request.target_abv,
        initial_abv = result.initial_abv,
        water_ml = result.water_ml,
        "calculated batch"
    );

    let ingredients_oz: BTreeMap<String, f64> = result
        .ingredients
        .iter()
        .map(|(ingredient, ml)| (ingredient.clone(), ml_to_oz(*ml)))
        .collect();
    let water_oz = ml_to_oz(result.water_ml);

    let simplified = SimplifiedRecipe {
        ingredients: result
            .ingredients
            .iter()
            .map(|(ingredient, ml)| {
                (
                    ingredient.clone(),
                    SimplifiedPair::new(*ml, ingredients_oz[ingredient]),
                )
            })
            .collect(),
        water: SimplifiedPair::new(result.water_ml, water_oz),
    };

    Ok(CalculateResponse {
        total_volume_oz: ml_to_oz(result.total_volume_ml),
        ingredients_oz,
        water_oz,
        spirit_brands: request.spirits,
        cocktail_name: cocktail.name.clone(),
        variation_name: variation.name.clone(),
        garnish: cocktail.garnish.clone(),
        simplified,
        result,
    })
}

/// Request for a direct dilution of a known spirit volume
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiluteRequest {
    #[serde(default)]
    pub spirit_volume_ml: Option<f64>,
    #[serde(default)]
    pub initial_abv: Option<f64>,
    #[serde(default)]
    pub target_abv: Option<f64>,
}

/// Response for dilute
#[derive(Debug, Clone, Serialize)]
pub struct DiluteResponse {
    pub water_ml: f64,
    pub water_oz: f64,
    pub final_volume_ml: f64,
    pub final_volume_oz: f64,
    pub final_abv: f64,
}

/// How much water to add to an existing spirit volume
pub fn dilute(request: DiluteRequest) -> ToolResult<DiluteResponse> {
    let spirit_volume_ml = request
        .spirit_volume_ml
        .ok_or(ToolError::MissingField("spirit_volume_ml"))?;
    let initial_abv = request
        .initial_abv
        .ok_or(ToolError::MissingField("initial_abv"))?;
    let target_abv = request
        .target_abv
        .ok_or(ToolError::MissingField("target_abv"))?;

    let water = solve_water_volume(spirit_volume_ml, initial_abv, target_abv);
    let final_abv = if water > 0.0 { target_abv } else { initial_abv };

    // Ounces are derived from the displayed milliliters, as in `calculate`
    let water_ml = round_to(water, ML_DECIMALS);
    let final_volume_ml = round_to(spirit_volume_ml + water, ML_DECIMALS);

    Ok(DiluteResponse {
        water_ml,
        water_oz: ml_to_oz(water_ml),
        final_volume_ml,
        final_volume_oz: ml_to_oz(final_volume_ml),
        final_abv: round_to(final_abv, ML_DECIMALS),
    })
}
