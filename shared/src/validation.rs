//! Input pre-checks
//!
//! Every downstream computation is gated on these. They decide whether a raw
//! number can stand for a body measurement; range plausibility is left to the
//! caller.

use crate::errors::MeasurementError;

/// Validate a weight value (any unit)
pub fn validate_weight(value: f64) -> Result<(), MeasurementError> {
    if is_positive_finite(value) {
        Ok(())
    } else {
        Err(MeasurementError::InvalidWeight { value })
    }
}

/// Validate a height value (any unit, including total inches)
pub fn validate_height(value: f64) -> Result<(), MeasurementError> {
    if is_positive_finite(value) {
        Ok(())
    } else {
        Err(MeasurementError::InvalidHeight { value })
    }
}

pub fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Summand rule for composite heights: an absent or unparseable component
/// counts as zero.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Parse a form field into a number.
///
/// Empty or unparseable input yields NaN, which the converter treats as an
/// absent value.
pub fn parse_field(input: &str) -> f64 {
    input.trim().parse::<f64>().unwrap_or(f64::NAN)
}
