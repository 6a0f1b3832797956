//! ABV presets
//!
//! Named target strengths offered to the user.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A named target ABV
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbvPreset {
    pub name: String,
    pub abv: f64,
}

impl AbvPreset {
    pub fn new(name: &str, abv: f64) -> Self {
        Self {
            name: name.to_string(),
            abv,
        }
    }
}

/// Service-wide strength presets
pub fn default_presets() -> BTreeMap<String, AbvPreset> {
    BTreeMap::from([
        ("weak".to_string(), AbvPreset::new("Weak", 22.0)),
        ("normal".to_string(), AbvPreset::new("Normal", 24.0)),
        ("strong".to_string(), AbvPreset::new("Strong", 26.0)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_presets() {
        let presets = default_presets();
        assert_eq!(presets.len(), 3);
        assert_eq!(presets["weak"].abv, 22.0);
        assert_eq!(presets["normal"].name, "Normal");
        assert_eq!(presets["strong"].abv, 26.0);
    }

    #[test]
    fn test_presets_are_ordered_by_strength() {
        let presets = default_presets();
        assert!(presets["weak"].abv < presets["normal"].abv);
        assert!(presets["normal"].abv < presets["strong"].abv);
    }
}
