//! Catalog sources
//!
//! Where reference data comes from. The service only ever reads through [`CatalogSource`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use super::Catalog;

/// File holding the recipe catalog inside the data directory
pub const RECIPES_FILE: &str = "recipes.json";
/// File holding the spirits catalog inside the data directory
pub const SPIRITS_FILE: &str = "spirits.json";

/// Catalog error types
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Read-only access to reference data
pub trait CatalogSource: Send + Sync {
    /// Load a fresh copy of the catalog
    fn load(&self) -> CatalogResult<Catalog>;

    /// Human-readable location, used in logs and status output
    fn describe(&self) -> String;
}

/// Catalog stored as `recipes.json` and `spirits.json` in a directory
#[derive(Debug, Clone)]
pub struct JsonCatalogSource {
    data_dir: PathBuf,
}

impl JsonCatalogSource {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn read_json<T: DeserializeOwned>(&self, file: &str) -> CatalogResult<T> {
        let path = self.data_dir.join(file);
        let contents = fs::read_to_string(&path).map_err(|source| CatalogError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| CatalogError::Parse { path, source })
    }
}

impl CatalogSource for JsonCatalogSource {
    fn load(&self) -> CatalogResult<Catalog> {
        let cocktails = self.read_json(RECIPES_FILE)?;
        let spirits = self.read_json(SPIRITS_FILE)?;
        Ok(Catalog { cocktails, spirits })
    }

    fn describe(&self) -> String {
        self.data_dir.display().to_string()
    }
}
