//! Measurement evaluation pipeline
//!
//! [`evaluate`] is the one entry point front-ends call on every field edit,
//! unit toggle, submit or reset. It runs convert -> compute -> classify ->
//! range and returns plain values; nothing is cached between calls.

use crate::errors::MeasurementError;
use crate::health_metrics::{classify_bmi, compute_bmi, healthy_weight_range, BmiCategory, HealthyRange};
use crate::measurement::{to_canonical, CanonicalMeasurement, RawMeasurement};
use crate::presenter::{
    format_bmi, format_healthy_range, format_height, format_weight, scale_position,
};
use crate::units::UnitSystem;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Reset values for metric fields
pub const DEFAULT_WEIGHT_KG: f64 = 70.0;
pub const DEFAULT_HEIGHT_CM: f64 = 175.0;

/// Reset values for imperial fields
pub const DEFAULT_WEIGHT_LB: f64 = 154.0;
pub const DEFAULT_HEIGHT_FEET: f64 = 5.0;
pub const DEFAULT_HEIGHT_INCHES: f64 = 9.0;

impl RawMeasurement {
    /// Field values a front-end restores on reset
    pub fn defaults(unit: UnitSystem) -> Self {
        match unit {
            UnitSystem::Metric => Self::metric(DEFAULT_WEIGHT_KG, DEFAULT_HEIGHT_CM),
            UnitSystem::Imperial => {
                Self::imperial(DEFAULT_WEIGHT_LB, DEFAULT_HEIGHT_FEET, DEFAULT_HEIGHT_INCHES)
            }
        }
    }
}

/// Everything derived from a valid measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiAssessment {
    pub canonical: CanonicalMeasurement,
    pub bmi: f64,
    pub category: BmiCategory,
    pub healthy_range: HealthyRange,
}

impl BmiAssessment {
    /// Format every display value for the given unit system
    pub fn display(&self, unit: UnitSystem) -> DisplaySummary {
        DisplaySummary {
            bmi: format_bmi(self.bmi),
            category: self.category.label(),
            tone: self.category.tone(),
            marker_percent: scale_position(self.bmi),
            height: format_height(self.canonical.height_m, unit),
            weight: format_weight(self.canonical.weight_kg, unit),
            range_metric: format_healthy_range(&self.healthy_range, UnitSystem::Metric),
            range_imperial: format_healthy_range(&self.healthy_range, UnitSystem::Imperial),
        }
    }
}

/// Formatted values for a result panel. `None` fields render as a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplaySummary {
    pub bmi: Option<String>,
    pub category: &'static str,
    pub tone: &'static str,
    pub marker_percent: Option<f64>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub range_metric: Option<String>,
    pub range_imperial: Option<String>,
}

/// Evaluate a raw measurement.
///
/// An invalid measurement is an `Err` carrying the reason; no derived values
/// are produced for it.
pub fn evaluate(raw: &RawMeasurement) -> Result<BmiAssessment, MeasurementError> {
    let canonical = match to_canonical(raw) {
        Ok(canonical) => canonical,
        Err(err) => {
            debug!(unit = %raw.unit_system(), field = err.field(), "Measurement rejected: {}", err);
            return Err(err);
        }
    };

    let bmi = compute_bmi(&canonical);
    let category = classify_bmi(bmi);
    let healthy_range = healthy_weight_range(canonical.height_m);

    debug!(
        unit = %raw.unit_system(),
        bmi,
        category = category.label(),
        "Measurement evaluated"
    );

    Ok(BmiAssessment {
        canonical,
        bmi,
        category,
        healthy_range,
    })
}

/// Wire shape of an evaluation, for callers that speak JSON
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<BmiCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<CanonicalMeasurement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub healthy_range: Option<HealthyRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Result<BmiAssessment, MeasurementError>> for EvaluationReport {
    fn from(result: Result<BmiAssessment, MeasurementError>) -> Self {
        match result {
            Ok(assessment) => Self {
                valid: true,
                bmi: Some(assessment.bmi),
                category: Some(assessment.category),
                canonical: Some(assessment.canonical),
                healthy_range: Some(assessment.healthy_range),
                error: None,
            },
            Err(err) => Self {
                valid: false,
                bmi: None,
                category: None,
                canonical: None,
                healthy_range: None,
                error: Some(err.to_string()),
            },
        }
    }
}
