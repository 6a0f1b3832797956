//! Data models
//!
//! Reference data and request shapes shared by every transport.

mod cocktail;
mod preset;
mod request;
mod spirit;

pub use cocktail::{Cocktail, Variation, DEFAULT_SERVING_SIZE_ML};
pub use preset::{default_presets, AbvPreset};
pub use request::{CalculateRequest, ValidatedCalculation, REQUIRED_FIELDS};
pub use spirit::{resolve_brand_abv, Spirit, SpiritCatalog};
