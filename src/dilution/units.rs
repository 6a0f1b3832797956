//! Unit conversion constants and helpers
//!
//! Volumes are carried in milliliters everywhere; fluid ounces only exist for display.

// ============================================================================
// Volume Conversion Constants
// ============================================================================

/// Milliliters per US fluid ounce
pub const ML_PER_FL_OZ: f64 = 29.5735;

/// Decimal places kept for milliliter figures and ABV percentages
pub const ML_DECIMALS: i32 = 1;

/// Decimal places kept for fluid ounce figures
pub const OZ_DECIMALS: i32 = 2;

// ============================================================================
// Rounding and Conversion
// ============================================================================

/// Round a value to the given number of decimal places (half away from zero)
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Convert milliliters to fluid ounces, rounded to two decimals
pub fn ml_to_oz(ml: f64) -> f64 {
    round_to(ml / ML_PER_FL_OZ, OZ_DECIMALS)
}

/// Convert fluid ounces to milliliters, rounded to one decimal
pub fn oz_to_ml(oz: f64) -> f64 {
    round_to(oz * ML_PER_FL_OZ, ML_DECIMALS)
}
