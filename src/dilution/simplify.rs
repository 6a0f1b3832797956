//! Bar-friendly measurement rounding
//!
//! Turns exact volumes into amounts that can actually be poured: dashes for a few
//! milliliters, half bar spoons up to 7.5 ml, then 5 ml or quarter-ounce steps.

use serde::{Deserialize, Serialize};

use super::units::ML_PER_FL_OZ;

/// Milliliters in one dash
const ML_PER_DASH: f64 = 1.0;
/// Milliliters in one bar spoon
const ML_PER_BAR_SPOON: f64 = 5.0;
/// Amounts below this are measured in dashes
const DASH_LIMIT_ML: f64 = 5.0;
/// Amounts below this (and above the dash limit) are measured in bar spoons
const BAR_SPOON_LIMIT_ML: f64 = 7.5;
/// Metric pours are rounded to this step
const ML_STEP: f64 = 5.0;
/// Imperial pours are rounded to quarter ounces
const OZ_STEPS_PER_OZ: f64 = 4.0;

/// Unit of a simplified measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeasureUnit {
    #[serde(rename = "dash")]
    Dash,
    #[serde(rename = "bar tsp")]
    BarSpoon,
    #[serde(rename = "ml")]
    Ml,
    #[serde(rename = "oz")]
    Oz,
}

impl MeasureUnit {
    pub fn label(&self) -> &'static str {
        match self {
            MeasureUnit::Dash => "dash",
            MeasureUnit::BarSpoon => "bar tsp",
            MeasureUnit::Ml => "ml",
            MeasureUnit::Oz => "oz",
        }
    }
}

/// A rounded, human-pourable amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedAmount {
    pub value: f64,
    pub unit: MeasureUnit,
    pub display: String,
}

impl SimplifiedAmount {
    fn new(value: f64, unit: MeasureUnit) -> Self {
        let display = match unit {
            MeasureUnit::Dash if value == 1.0 => "1 dash".to_string(),
            MeasureUnit::Dash => format!("{} dashes", value),
            _ => format!("{} {}", value, unit.label()),
        };
        Self {
            value,
            unit,
            display,
        }
    }
}

/// Simplify a milliliter amount
pub fn simplify_ml(ml: f64) -> SimplifiedAmount {
    simplify_small(ml).unwrap_or_else(|| {
        SimplifiedAmount::new((ml / ML_STEP).round() * ML_STEP, MeasureUnit::Ml)
    })
}

/// Simplify a fluid ounce amount
pub fn simplify_oz(oz: f64) -> SimplifiedAmount {
    simplify_small(oz * ML_PER_FL_OZ).unwrap_or_else(|| {
        SimplifiedAmount::new(
            (oz * OZ_STEPS_PER_OZ).round() / OZ_STEPS_PER_OZ,
            MeasureUnit::Oz,
        )
    })
}

/// Dash and bar spoon handling shared by both unit systems
fn simplify_small(ml: f64) -> Option<SimplifiedAmount> {
    if ml <= 0.0 {
        return Some(SimplifiedAmount::new(0.0, MeasureUnit::Dash));
    }
    if ml < DASH_LIMIT_ML {
        return Some(SimplifiedAmount::new(
            (ml / ML_PER_DASH).round(),
            MeasureUnit::Dash,
        ));
    }
    if ml < BAR_SPOON_LIMIT_ML {
        let half_spoons = (ml / ML_PER_BAR_SPOON * 2.0).round();
        return Some(SimplifiedAmount::new(half_spoons / 2.0, MeasureUnit::BarSpoon));
    }
    None
}
