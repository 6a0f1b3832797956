//! Weighted-average ABV of an unscaled ingredient mixture

use super::{AbvMap, IngredientRatios};

/// Sum of all parts in a ratio map
pub fn total_parts(ratios: &IngredientRatios) -> f64 {
    ratios.values().sum()
}

/// Estimate the ABV of a mixture from its ratios and per-ingredient ABVs
///
/// Every ingredient in `ratios` contributes, and an ingredient with no entry in `abvs`
/// counts as non-alcoholic. An empty or all-zero ratio map yields exactly `0.0`.
pub fn estimate_abv(ratios: &IngredientRatios, abvs: &AbvMap) -> f64 {
    let total = total_parts(ratios);
    if total == 0.0 {
        return 0.0;
    }

    let weighted: f64 = ratios
        .iter()
        .map(|(ingredient, parts)| parts * abvs.get(ingredient).copied().unwrap_or(0.0))
        .sum();

    weighted / total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, f64)]) -> IngredientRatios {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    fn sample_spirits() -> AbvMap {
        map(&[
            ("gin", 47.3),
            ("vermouth_dry", 17.5),
            ("vodka", 40.0),
            ("bourbon", 45.0),
            ("campari", 25.0),
            ("vermouth_sweet", 16.0),
        ])
    }

    #[test]
    fn test_single_spirit_returns_own_abv() {
        let abv = estimate_abv(&map(&[("gin", 1.0)]), &sample_spirits());
        assert_eq!(abv, 47.3);
    }

    #[test]
    fn test_equal_parts_is_simple_average() {
        let abv = estimate_abv(&map(&[("gin", 1.0), ("vermouth_dry", 1.0)]), &sample_spirits());
        assert!((abv - (47.3 + 17.5) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_martini_weighted_average() {
        let abv = estimate_abv(&map(&[("gin", 2.4), ("vermouth_dry", 0.6)]), &sample_spirits());
        let expected = (2.4 * 47.3 + 0.6 * 17.5) / 3.0;
        assert!((abv - expected).abs() < 1e-9);
    }

    #[test]
    fn test_negroni_three_equal_parts() {
        let negroni = map(&[("gin", 1.0), ("campari", 1.0), ("vermouth_sweet", 1.0)]);
        let abv = estimate_abv(&negroni, &sample_spirits());
        assert!((abv - (47.3 + 25.0 + 16.0) / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_ratios_is_zero() {
        assert_eq!(estimate_abv(&IngredientRatios::new(), &sample_spirits()), 0.0);
    }

    #[test]
    fn test_all_zero_parts_is_zero() {
        let abv = estimate_abv(&map(&[("gin", 0.0), ("campari", 0.0)]), &sample_spirits());
        assert_eq!(abv, 0.0);
    }

    #[test]
    fn test_missing_abv_counts_as_zero() {
        let ratios = map(&[("gin", 1.0), ("unknown_spirit", 1.0)]);
        let abv = estimate_abv(&ratios, &map(&[("gin", 40.0)]));
        assert_eq!(abv, 20.0);
    }

    #[test]
    fn test_no_abvs_at_all() {
        let ratios = map(&[("gin", 2.0), ("vermouth_dry", 1.0)]);
        assert_eq!(estimate_abv(&ratios, &AbvMap::new()), 0.0);
    }
}
