//! Water volume solver
//!
//! Dilution holds the absolute alcohol content constant:
//! `spirit_volume * initial_abv == final_volume * target_abv`.

/// Water (ml) to add to `spirit_volume_ml` at `initial_abv` to bring it down to `target_abv`
///
/// Returns `0.0` when the target is not positive or not below the starting strength, since
/// water cannot raise ABV.
pub fn solve_water_volume(spirit_volume_ml: f64, initial_abv: f64, target_abv: f64) -> f64 {
    if target_abv <= 0.0 {
        return 0.0;
    }
    if target_abv >= initial_abv {
        return 0.0;
    }

    let final_volume = spirit_volume_ml * initial_abv / target_abv;
    let water = final_volume - spirit_volume_ml;

    water.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_dilution() {
        assert_eq!(solve_water_volume(100.0, 40.0, 20.0), 100.0);
    }

    #[test]
    fn test_typical_freezer_dilution() {
        let water = solve_water_volume(100.0, 40.0, 24.0);
        assert!((water - 66.67).abs() / 66.67 < 0.01);
    }

    #[test]
    fn test_target_equals_initial() {
        assert_eq!(solve_water_volume(100.0, 40.0, 40.0), 0.0);
    }

    #[test]
    fn test_target_above_initial() {
        assert_eq!(solve_water_volume(100.0, 40.0, 50.0), 0.0);
    }

    #[test]
    fn test_zero_and_negative_target() {
        assert_eq!(solve_water_volume(100.0, 40.0, 0.0), 0.0);
        assert_eq!(solve_water_volume(100.0, 40.0, -10.0), 0.0);
    }

    #[test]
    fn test_zero_spirit_volume() {
        assert_eq!(solve_water_volume(0.0, 40.0, 20.0), 0.0);
    }

    #[test]
    fn test_negative_volume_is_clamped() {
        assert_eq!(solve_water_volume(-100.0, 40.0, 20.0), 0.0);
    }
}
