//! Raw and canonical body measurements
//!
//! A [`RawMeasurement`] is whatever the caller read from its input fields, in
//! the unit system it had selected. [`to_canonical`] is the single place that
//! turns it into kilograms and meters; nothing downstream looks at units again.

use crate::errors::MeasurementError;
use crate::units::{HeightUnit, UnitSystem, WeightUnit, INCHES_PER_FOOT};
use crate::validation::{finite_or_zero, parse_field, validate_height, validate_weight};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Caller-supplied measurement, tagged by unit system.
///
/// Non-finite values stand for absent or unparseable fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", rename_all = "lowercase")]
pub enum RawMeasurement {
    Metric {
        weight_kg: f64,
        height_cm: f64,
    },
    Imperial {
        weight_lb: f64,
        height_feet: f64,
        height_inches: f64,
    },
}

impl RawMeasurement {
    pub fn metric(weight_kg: f64, height_cm: f64) -> Self {
        RawMeasurement::Metric {
            weight_kg,
            height_cm,
        }
    }

    pub fn imperial(weight_lb: f64, height_feet: f64, height_inches: f64) -> Self {
        RawMeasurement::Imperial {
            weight_lb,
            height_feet,
            height_inches,
        }
    }

    /// Build from metric text fields
    pub fn parse_metric(weight: &str, height: &str) -> Self {
        Self::metric(parse_field(weight), parse_field(height))
    }

    /// Build from imperial text fields
    pub fn parse_imperial(weight: &str, feet: &str, inches: &str) -> Self {
        Self::imperial(parse_field(weight), parse_field(feet), parse_field(inches))
    }

    pub fn unit_system(&self) -> UnitSystem {
        match self {
            RawMeasurement::Metric { .. } => UnitSystem::Metric,
            RawMeasurement::Imperial { .. } => UnitSystem::Imperial,
        }
    }
}

/// Measurement in SI units. Both values are positive when produced by
/// [`to_canonical`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanonicalMeasurement {
    pub weight_kg: f64,
    pub height_m: f64,
}

/// Total inches of a feet/inches pair, counting absent parts as zero
pub fn total_inches(feet: f64, inches: f64) -> f64 {
    finite_or_zero(feet) * INCHES_PER_FOOT + finite_or_zero(inches)
}

/// Normalize a raw measurement into kilograms and meters.
///
/// Weight is checked before height.
pub fn to_canonical(raw: &RawMeasurement) -> Result<CanonicalMeasurement, MeasurementError> {
    let canonical = match *raw {
        RawMeasurement::Metric {
            weight_kg,
            height_cm,
        } => {
            validate_weight(weight_kg)?;
            validate_height(height_cm)?;
            CanonicalMeasurement {
                weight_kg: WeightUnit::Kg.to_kg(weight_kg),
                height_m: HeightUnit::Cm.to_meters(height_cm),
            }
        }
        RawMeasurement::Imperial {
            weight_lb,
            height_feet,
            height_inches,
        } => {
            validate_weight(weight_lb)?;
            let inches = total_inches(height_feet, height_inches);
            validate_height(inches)?;
            CanonicalMeasurement {
                weight_kg: WeightUnit::Lb.to_kg(weight_lb),
                height_m: HeightUnit::FeetInches.to_meters(inches),
            }
        }
    };

    trace!(
        unit = %raw.unit_system(),
        weight_kg = canonical.weight_kg,
        height_m = canonical.height_m,
        "Converted measurement to canonical form"
    );

    Ok(canonical)
}
