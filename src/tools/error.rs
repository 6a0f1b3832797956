//! Tool error taxonomy
//!
//! Shared by every transport; each transport maps these onto its own status codes.

use thiserror::Error;

use crate::catalog::CatalogError;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Cocktail not found")]
    CocktailNotFound(String),

    #[error("Variation not found")]
    VariationNotFound { cocktail: String, variation: String },

    #[error("Category not found")]
    CategoryNotFound(String),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

impl ToolError {
    /// Caller supplied an incomplete request
    pub fn is_client_error(&self) -> bool {
        matches!(self, ToolError::MissingField(_))
    }

    /// Caller asked for an identifier the catalog does not have
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ToolError::CocktailNotFound(_)
                | ToolError::VariationNotFound { .. }
                | ToolError::CategoryNotFound(_)
        )
    }
}

/// Result type for tool operations
pub type ToolResult<T> = Result<T, ToolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ToolError::MissingField("target_abv").to_string(),
            "Missing required field: target_abv"
        );
        assert_eq!(
            ToolError::CocktailNotFound("daiquiri".to_string()).to_string(),
            "Cocktail not found"
        );
    }

    #[test]
    fn test_classification() {
        assert!(ToolError::MissingField("cocktail").is_client_error());
        assert!(!ToolError::MissingField("cocktail").is_not_found());
        assert!(ToolError::CategoryNotFound("mezcal".to_string()).is_not_found());
        assert!(ToolError::VariationNotFound {
            cocktail: "martini".to_string(),
            variation: "reverse".to_string(),
        }
        .is_not_found());
    }
}
