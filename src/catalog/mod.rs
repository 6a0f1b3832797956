//! Reference data catalog
//!
//! Cocktail recipes and spirit brands, loaded from a [`CatalogSource`] and shared through a
//! [`CatalogStore`].

pub mod source;
pub mod store;

use std::collections::BTreeMap;

use crate::dilution::AbvMap;
use crate::models::{resolve_brand_abv, Cocktail, Spirit, SpiritCatalog};

pub use source::{
    CatalogError, CatalogResult, CatalogSource, JsonCatalogSource, RECIPES_FILE, SPIRITS_FILE,
};
pub use store::{CatalogStore, ReloadSummary};

/// One immutable copy of the reference data
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Cocktail id -> cocktail
    pub cocktails: BTreeMap<String, Cocktail>,
    pub spirits: SpiritCatalog,
}

impl Catalog {
    pub fn cocktail(&self, id: &str) -> Option<&Cocktail> {
        self.cocktails.get(id)
    }

    pub fn spirits_in(&self, category: &str) -> Option<&[Spirit]> {
        self.spirits.get(category).map(Vec::as_slice)
    }

    /// Resolve a user's brand selections (category -> brand) to an ABV map
    pub fn resolve_abvs(&self, selections: &BTreeMap<String, String>) -> AbvMap {
        selections
            .iter()
            .map(|(category, brand)| {
                (
                    category.clone(),
                    resolve_brand_abv(&self.spirits, category, brand),
                )
            })
            .collect()
    }
}
