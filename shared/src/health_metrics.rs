//! BMI calculation, classification and healthy weight ranges
//!
//! Everything here operates on canonical (SI) values and is unit-agnostic.
//! The one exception is [`bmi_from_imperial`], kept so the imperial shortcut
//! formula can be checked against the canonical route.

use crate::measurement::CanonicalMeasurement;
use crate::units::{KG_PER_LB, LB_PER_KG, M_PER_INCH};
use serde::{Deserialize, Serialize};

/// Lower bound of the normal BMI band
pub const BMI_NORMAL_MIN: f64 = 18.5;
/// Lower bound of the overweight band
pub const BMI_OVERWEIGHT_MIN: f64 = 25.0;
/// Lower bound of the obese band
pub const BMI_OBESE_MIN: f64 = 30.0;

/// Upper BMI used for the healthy weight range. Sits just inside the normal band.
pub const HEALTHY_BMI_MAX: f64 = 24.9;

/// Conventional factor for `lb / in²` BMI
pub const IMPERIAL_BMI_FACTOR_ROUNDED: f64 = 703.0;

/// Exact factor for `lb / in²` BMI, derived from the unit definitions (~703.0696)
pub const IMPERIAL_BMI_FACTOR: f64 = KG_PER_LB / (M_PER_INCH * M_PER_INCH);

// ============================================================================
// BMI Calculations
// ============================================================================

/// Calculate BMI from a canonical measurement
///
/// Formula: BMI = weight(kg) / height(m)²
///
/// A zero height gives a non-finite result; callers classify that as
/// [`BmiCategory::Unknown`] rather than failing.
pub fn compute_bmi(canonical: &CanonicalMeasurement) -> f64 {
    canonical.weight_kg / (canonical.height_m * canonical.height_m)
}

/// Calculate BMI directly from pounds and total inches
pub fn bmi_from_imperial(weight_lb: f64, total_inches: f64) -> f64 {
    IMPERIAL_BMI_FACTOR * weight_lb / (total_inches * total_inches)
}

/// Same as [`bmi_from_imperial`] with the rounded factor 703
pub fn bmi_from_imperial_rounded(weight_lb: f64, total_inches: f64) -> f64 {
    IMPERIAL_BMI_FACTOR_ROUNDED * weight_lb / (total_inches * total_inches)
}

// ============================================================================
// Classification
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
    /// BMI could not be computed (non-finite)
    Unknown,
}

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
            BmiCategory::Unknown => "—",
        }
    }

    /// Badge colour used by the front-end
    pub fn tone(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "teal",
            BmiCategory::Normal => "green",
            BmiCategory::Overweight => "amber",
            BmiCategory::Obese => "rose",
            BmiCategory::Unknown => "",
        }
    }
}

/// Classify BMI into category. First matching threshold wins.
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if !bmi.is_finite() {
        BmiCategory::Unknown
    } else if bmi < BMI_NORMAL_MIN {
        BmiCategory::Underweight
    } else if bmi < BMI_OVERWEIGHT_MIN {
        BmiCategory::Normal
    } else if bmi < BMI_OBESE_MIN {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

// ============================================================================
// Healthy Weight Range
// ============================================================================

/// Weight interval at a given height for BMI 18.5 to 24.9
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthyRange {
    pub min_kg: f64,
    pub max_kg: f64,
}

impl HealthyRange {
    /// Both bounds converted to pounds
    pub fn in_pounds(&self) -> (f64, f64) {
        (self.min_kg * LB_PER_KG, self.max_kg * LB_PER_KG)
    }

    pub fn contains(&self, weight_kg: f64) -> bool {
        weight_kg >= self.min_kg && weight_kg <= self.max_kg
    }

    /// Signed distance from the range (negative = under, positive = over, 0 = in range)
    pub fn distance_kg(&self, weight_kg: f64) -> f64 {
        if weight_kg < self.min_kg {
            weight_kg - self.min_kg
        } else if weight_kg > self.max_kg {
            weight_kg - self.max_kg
        } else {
            0.0
        }
    }
}

/// Calculate healthy weight range for a given height in meters.
///
/// Only meaningful for a positive height.
pub fn healthy_weight_range(height_m: f64) -> HealthyRange {
    let height_m_sq = height_m * height_m;
    HealthyRange {
        min_kg: BMI_NORMAL_MIN * height_m_sq,
        max_kg: HEALTHY_BMI_MAX * height_m_sq,
    }
}
