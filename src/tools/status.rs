//! Freezer Door status tool
//!
//! Provides runtime status information about the service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::catalog::CatalogStore;

/// How to use the calculator, returned to assistants over MCP
pub const CALCULATOR_INSTRUCTIONS: &str = r#"
# Freezer Door Batch Instructions

A freezer door cocktail is pre-batched, diluted with water up front, and kept in the freezer.
The water replaces the melt you would get from stirring over ice, so the batch is usually
brought down to 20-26% ABV.

## Workflow

1. Call `list_cocktails` to find the cocktail id and variation id.
2. Call `get_spirits` for each ingredient category of the variation and pick a brand.
   An unrecognized brand silently falls back to the first brand in the category.
   Ingredients without a selection count as non-alcoholic.
3. Call `list_presets` for the standard strengths (weak 22%, normal 24%, strong 26%).
4. Call `calculate_recipe` with the cocktail, variation, brand selections, the total batch
   volume in ml (a 750 ml bottle is typical) and the target ABV.

## Reading the Result

- `ingredients` are the spirit volumes in ml; `water_ml` is the water to add.
- `final_abv` is the strength actually reached. If the target was at or above the mixture's
  own strength no water is added and `final_abv` equals `initial_abv`.
- `simplified` gives pourable amounts (dashes, bar spoons, 5 ml or quarter-ounce steps).

## Diluting an Existing Bottle

`dilute` takes a spirit volume, its ABV and a target ABV and returns the water to add.
"#;

/// Runtime status of the service
#[derive(Debug, Clone, Serialize)]
pub struct FreezerDoorStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Catalog information
    pub catalog_source: String,
    pub catalog_loaded_at: String,
    pub cocktail_count: usize,
    pub spirit_category_count: usize,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    /// Get the current status
    pub fn get_status(&self, catalog: &CatalogStore) -> FreezerDoorStatus {
        let build_info = BuildInfo::current();
        let snapshot = catalog.snapshot();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        FreezerDoorStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            catalog_source: catalog.source_description(),
            catalog_loaded_at: catalog
                .loaded_at()
                .format("%Y-%m-%dT%H:%M:%SZ")
                .to_string(),
            cocktail_count: snapshot.cocktails.len(),
            spirit_category_count: snapshot.spirits.len(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}
