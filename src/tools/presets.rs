//! Preset tools

use std::collections::BTreeMap;

use crate::models::{default_presets, AbvPreset};

/// Service-wide strength presets
pub fn list_presets() -> BTreeMap<String, AbvPreset> {
    default_presets()
}
