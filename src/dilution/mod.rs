//! Dilution calculation module
//!
//! The numeric core: ABV estimation, water solving, batch assembly and unit conversion.
//! Everything here is pure and total; validation lives in the request layer.

use std::collections::BTreeMap;

pub mod abv;
pub mod recipe;
pub mod simplify;
pub mod solver;
pub mod units;

/// Ingredient id -> relative parts (or scaled milliliters once assembled)
pub type IngredientRatios = BTreeMap<String, f64>;

/// Ingredient id -> ABV percentage
pub type AbvMap = BTreeMap<String, f64>;

pub use abv::{estimate_abv, total_parts};
pub use recipe::{build_recipe, CalculationResult};
pub use simplify::{simplify_ml, simplify_oz, MeasureUnit, SimplifiedAmount};
pub use solver::solve_water_volume;
pub use units::{ml_to_oz, oz_to_ml, round_to, ML_PER_FL_OZ};
