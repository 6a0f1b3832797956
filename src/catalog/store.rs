//! Catalog store
//!
//! Holds the current catalog snapshot for the lifetime of the service. Readers get a cheap
//! `Arc` to an immutable snapshot; a reload swaps the snapshot only when the source loads
//! cleanly, so a bad edit on disk never takes the service down.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Catalog, CatalogResult, CatalogSource};

struct Snapshot {
    catalog: Arc<Catalog>,
    loaded_at: DateTime<Utc>,
}

/// Outcome of a successful load or reload
#[derive(Debug, Clone, Serialize)]
pub struct ReloadSummary {
    pub source: String,
    pub cocktails: usize,
    pub spirit_categories: usize,
    pub loaded_at: String,
}

/// Shared handle to the reference data
#[derive(Clone)]
pub struct CatalogStore {
    source: Arc<dyn CatalogSource>,
    current: Arc<RwLock<Snapshot>>,
}

impl CatalogStore {
    /// Load the catalog from `source` and wrap it in a store
    pub fn open<S: CatalogSource + 'static>(source: S) -> CatalogResult<Self> {
        let catalog = source.load()?;
        let store = Self {
            source: Arc::new(source),
            current: Arc::new(RwLock::new(Snapshot {
                catalog: Arc::new(catalog),
                loaded_at: Utc::now(),
            })),
        };
        tracing::info!(
            source = %store.source.describe(),
            cocktails = store.snapshot().cocktails.len(),
            "catalog loaded"
        );
        Ok(store)
    }

    /// Current catalog snapshot
    pub fn snapshot(&self) -> Arc<Catalog> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard.catalog)
    }

    /// When the current snapshot was loaded
    pub fn loaded_at(&self) -> DateTime<Utc> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        guard.loaded_at
    }

    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    /// Re-read the source and replace the snapshot
    ///
    /// On failure the previous snapshot stays in place.
    pub fn reload(&self) -> CatalogResult<ReloadSummary> {
        let catalog = match self.source.load() {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::warn!(error = %e, "catalog reload failed, keeping previous snapshot");
                return Err(e);
            }
        };

        let loaded_at = Utc::now();
        let summary = ReloadSummary {
            source: self.source.describe(),
            cocktails: catalog.cocktails.len(),
            spirit_categories: catalog.spirits.len(),
            loaded_at: loaded_at.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        };

        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Snapshot {
            catalog: Arc::new(catalog),
            loaded_at,
        };
        drop(guard);

        tracing::info!(
            source = %summary.source,
            cocktails = summary.cocktails,
            spirit_categories = summary.spirit_categories,
            "catalog reloaded"
        );
        Ok(summary)
    }
}
