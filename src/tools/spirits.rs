//! Spirit tools

use super::{ToolError, ToolResult};
use crate::catalog::Catalog;
use crate::models::{Spirit, SpiritCatalog};

/// All spirits, grouped by category
pub fn list_spirits(catalog: &Catalog) -> SpiritCatalog {
    catalog.spirits.clone()
}

/// Brands available for one ingredient category
pub fn get_spirits(catalog: &Catalog, category: &str) -> ToolResult<Vec<Spirit>> {
    catalog
        .spirits_in(category)
        .map(<[Spirit]>::to_vec)
        .ok_or_else(|| ToolError::CategoryNotFound(category.to_string()))
}
