//! Error types for the BMI calculator

use serde::Serialize;
use thiserror::Error;

/// Reasons a raw measurement cannot be turned into a canonical one.
///
/// This is the only failure the core knows about. It is a value handed back
/// to the caller, which shows a "check your inputs" indicator and blanks every
/// derived display.
#[derive(Error, Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MeasurementError {
    #[error("Weight must be a positive number (got {value})")]
    InvalidWeight { value: f64 },

    #[error("Height must be a positive number (got {value})")]
    InvalidHeight { value: f64 },
}

impl MeasurementError {
    /// Name of the offending input field
    pub fn field(&self) -> &'static str {
        match self {
            MeasurementError::InvalidWeight { .. } => "weight",
            MeasurementError::InvalidHeight { .. } => "height",
        }
    }
}
