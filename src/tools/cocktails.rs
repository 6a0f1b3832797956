//! Cocktail tools
//!
//! Listing and detail views over the recipe catalog.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{ToolError, ToolResult};
use crate::catalog::Catalog;
use crate::models::AbvPreset;

/// Variation reference in a cocktail listing
#[derive(Debug, Serialize)]
pub struct VariationSummary {
    pub id: String,
    pub name: String,
}

/// Cocktail summary for listing
#[derive(Debug, Serialize)]
pub struct CocktailSummary {
    pub id: String,
    pub name: String,
    pub variations: Vec<VariationSummary>,
    pub garnish: String,
    pub presets: BTreeMap<String, AbvPreset>,
    pub serving_size_ml: f64,
}

/// Variation detail with its ingredient ids
#[derive(Debug, Serialize)]
pub struct VariationDetail {
    pub name: String,
    pub ingredients: Vec<String>,
}

/// Full cocktail detail
#[derive(Debug, Serialize)]
pub struct CocktailDetail {
    pub id: String,
    pub name: String,
    pub variations: BTreeMap<String, VariationDetail>,
    pub garnish: String,
    pub presets: BTreeMap<String, AbvPreset>,
}

/// List every cocktail with its variations
pub fn list_cocktails(catalog: &Catalog) -> Vec<CocktailSummary> {
    catalog
        .cocktails
        .iter()
        .map(|(id, cocktail)| CocktailSummary {
            id: id.clone(),
            name: cocktail.name.clone(),
            variations: cocktail
                .variations
                .iter()
                .map(|(var_id, variation)| VariationSummary {
                    id: var_id.clone(),
                    name: variation.name.clone(),
                })
                .collect(),
            garnish: cocktail.garnish.clone(),
            presets: cocktail.presets.clone(),
            serving_size_ml: cocktail.serving_size_ml,
        })
        .collect()
}

/// Get one cocktail with the ingredients of each variation
pub fn get_cocktail(catalog: &Catalog, id: &str) -> ToolResult<CocktailDetail> {
    let cocktail = catalog
        .cocktail(id)
        .ok_or_else(|| ToolError::CocktailNotFound(id.to_string()))?;

    Ok(CocktailDetail {
        id: id.to_string(),
        name: cocktail.name.clone(),
        variations: cocktail
            .variations
            .iter()
            .map(|(var_id, variation)| {
                (
                    var_id.clone(),
                    VariationDetail {
                        name: variation.name.clone(),
                        ingredients: variation.ingredient_ids(),
                    },
                )
            })
            .collect(),
        garnish: cocktail.garnish.clone(),
        presets: cocktail.presets.clone(),
    })
}
