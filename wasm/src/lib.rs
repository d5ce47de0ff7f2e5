//! BMI Calculator WASM Module
//!
//! WebAssembly bindings the browser form calls on every field edit, unit
//! toggle, submit and reset. Structured results cross the boundary as JSON.

use bmi_calculator_shared::{
    classify_bmi, compute_bmi, evaluate, to_canonical, CanonicalMeasurement, EvaluationReport,
    RawMeasurement, UnitSystem,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| r#"{"valid":false}"#.to_string())
}

fn report_json(raw: &RawMeasurement) -> String {
    to_json(&EvaluationReport::from(evaluate(raw)))
}

fn display_json(raw: &RawMeasurement) -> String {
    match evaluate(raw) {
        Ok(assessment) => to_json(&assessment.display(raw.unit_system())),
        Err(err) => to_json(&EvaluationReport::from(Err(err))),
    }
}

/// Evaluate metric fields. Returns an `EvaluationReport` as JSON.
#[wasm_bindgen]
pub fn evaluate_metric(weight_kg: f64, height_cm: f64) -> String {
    report_json(&RawMeasurement::metric(weight_kg, height_cm))
}

/// Evaluate imperial fields. Pass NaN for an empty feet or inches field.
#[wasm_bindgen]
pub fn evaluate_imperial(weight_lb: f64, height_feet: f64, height_inches: f64) -> String {
    report_json(&RawMeasurement::imperial(weight_lb, height_feet, height_inches))
}

/// Formatted result panel for metric fields, or the invalid report
#[wasm_bindgen]
pub fn display_metric(weight_kg: f64, height_cm: f64) -> String {
    display_json(&RawMeasurement::metric(weight_kg, height_cm))
}

/// Formatted result panel for imperial fields, or the invalid report
#[wasm_bindgen]
pub fn display_imperial(weight_lb: f64, height_feet: f64, height_inches: f64) -> String {
    display_json(&RawMeasurement::imperial(weight_lb, height_feet, height_inches))
}

/// Calculate BMI from weight (kg) and height (cm). NaN when the inputs are invalid.
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    to_canonical(&RawMeasurement::metric(weight_kg, height_cm))
        .map(|canonical: CanonicalMeasurement| compute_bmi(&canonical))
        .unwrap_or(f64::NAN)
}

/// Category label for a BMI value
#[wasm_bindgen]
pub fn classify(bmi: f64) -> String {
    classify_bmi(bmi).label().to_string()
}

/// Marker position in percent on the 12-40 scale. NaN hides the marker.
#[wasm_bindgen]
pub fn scale_position(bmi: f64) -> f64 {
    bmi_calculator_shared::scale_position(bmi).unwrap_or(f64::NAN)
}

/// Reset values for a unit system ("metric" or "imperial") as JSON
#[wasm_bindgen]
pub fn default_fields(unit: &str) -> String {
    let unit = unit.parse::<UnitSystem>().unwrap_or_default();
    to_json(&RawMeasurement::defaults(unit))
}
