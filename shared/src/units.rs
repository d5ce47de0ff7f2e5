//! Unit systems and conversion factors
//!
//! All calculations run on SI values (kilograms, meters). Imperial values are
//! converted on the way in and on the way out, never inside business logic.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Exact kilograms per avoirdupois pound
pub const KG_PER_LB: f64 = 0.45359237;

/// Pounds per kilogram as used for display
pub const LB_PER_KG: f64 = 2.20462262;

/// Exact meters per inch
pub const M_PER_INCH: f64 = 0.0254;

pub const CM_PER_M: f64 = 100.0;

pub const INCHES_PER_FOOT: f64 = 12.0;

// ============================================================================
// Unit System
// ============================================================================

/// Which set of input fields the caller supplies and which units are displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn weight_unit(&self) -> WeightUnit {
        match self {
            UnitSystem::Metric => WeightUnit::Kg,
            UnitSystem::Imperial => WeightUnit::Lb,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UnitSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "si" => Ok(UnitSystem::Metric),
            "imperial" | "us" => Ok(UnitSystem::Imperial),
            _ => Err(format!("Unknown unit system: {}", s)),
        }
    }
}

// ============================================================================
// Weight Units
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lb,
}

impl WeightUnit {
    /// Convert from this unit to kilograms
    pub fn to_kg(&self, value: f64) -> f64 {
        match self {
            WeightUnit::Kg => value,
            WeightUnit::Lb => value * KG_PER_LB,
        }
    }

    /// Convert from kilograms to this unit
    pub fn from_kg(&self, kg: f64) -> f64 {
        match self {
            WeightUnit::Kg => kg,
            WeightUnit::Lb => kg * LB_PER_KG,
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lb => "lb",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

// ============================================================================
// Height Units
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HeightUnit {
    #[default]
    Cm,
    FeetInches, // converted through total inches
}

impl HeightUnit {
    /// Convert from this unit to meters. `FeetInches` takes total inches.
    pub fn to_meters(&self, value: f64) -> f64 {
        match self {
            HeightUnit::Cm => value / CM_PER_M,
            HeightUnit::FeetInches => value * M_PER_INCH,
        }
    }

    /// Convert from meters to this unit. `FeetInches` yields total inches.
    pub fn from_meters(&self, meters: f64) -> f64 {
        match self {
            HeightUnit::Cm => meters * CM_PER_M,
            HeightUnit::FeetInches => meters / M_PER_INCH,
        }
    }
}

// ============================================================================
// Feet/Inches Display Helper
// ============================================================================

/// A height split into whole feet and whole inches for display.
///
/// Inches are rounded to the nearest whole inch. A remainder that rounds up to
/// 12 carries into the next foot, so `inches` is always in `0..12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeetInchesHeight {
    pub feet: u32,
    pub inches: u32,
}

impl FeetInchesHeight {
    /// Split a non-negative number of total inches.
    ///
    /// Rounding and carry happen in `f64`; feet saturate at `u32::MAX` for
    /// heights beyond that.
    pub fn from_total_inches(total_inches: f64) -> Self {
        let total = total_inches.max(0.0);
        let mut feet = (total / INCHES_PER_FOOT).floor();
        let mut inches = (total - feet * INCHES_PER_FOOT).round();
        if inches >= INCHES_PER_FOOT {
            feet += 1.0;
            inches -= INCHES_PER_FOOT;
        }
        Self {
            feet: feet as u32,
            inches: (inches.max(0.0) as u32).min(11),
        }
    }

    pub fn from_meters(meters: f64) -> Self {
        Self::from_total_inches(meters / M_PER_INCH)
    }

    pub fn to_total_inches(&self) -> f64 {
        self.feet as f64 * INCHES_PER_FOOT + self.inches as f64
    }
}

impl fmt::Display for FeetInchesHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ft {} in", self.feet, self.inches)
    }
}
