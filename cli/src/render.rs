//! Terminal rendering of evaluation results

use bmi_calculator_shared::{
    BmiAssessment, DisplaySummary, EvaluationReport, MeasurementError, UnitSystem, PLACEHOLDER,
    SCALE_MAX, SCALE_MIN,
};
use serde::Serialize;

/// Width of the text scale bar, one cell per BMI unit
const SCALE_WIDTH: usize = (SCALE_MAX - SCALE_MIN) as usize;

/// JSON document printed with `--format json`
#[derive(Debug, Serialize)]
pub struct JsonOutput {
    pub unit: UnitSystem,
    #[serde(flatten)]
    pub report: EvaluationReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplaySummary>,
}

impl JsonOutput {
    pub fn new(result: Result<BmiAssessment, MeasurementError>, unit: UnitSystem) -> Self {
        let display = result.as_ref().ok().map(|assessment| assessment.display(unit));
        Self {
            unit,
            report: EvaluationReport::from(result),
            display,
        }
    }
}

fn or_placeholder(value: Option<&str>) -> &str {
    value.unwrap_or(PLACEHOLDER)
}

/// Draw the BMI scale with a marker, e.g. `12 [------|---------] 40`
pub fn scale_bar(marker_percent: Option<f64>) -> String {
    let mut cells = vec!['-'; SCALE_WIDTH + 1];
    if let Some(percent) = marker_percent {
        let index = (percent / 100.0 * SCALE_WIDTH as f64).round() as usize;
        cells[index.min(SCALE_WIDTH)] = '|';
    }
    let bar: String = cells.into_iter().collect();
    format!("{} [{}] {}", SCALE_MIN, bar, SCALE_MAX)
}

/// Render a valid assessment as text
pub fn render_text(assessment: &BmiAssessment, unit: UnitSystem) -> String {
    let display = assessment.display(unit);
    let range = match unit {
        UnitSystem::Metric => (&display.range_metric, &display.range_imperial),
        UnitSystem::Imperial => (&display.range_imperial, &display.range_metric),
    };

    let mut lines = vec![
        format!(
            "BMI:           {} ({})",
            or_placeholder(display.bmi.as_deref()),
            display.category
        ),
        format!("Scale:         {}", scale_bar(display.marker_percent)),
        format!("Height:        {}", or_placeholder(display.height.as_deref())),
        format!("Weight:        {}", or_placeholder(display.weight.as_deref())),
        format!(
            "Healthy range: {} ({})",
            or_placeholder(range.0.as_deref()),
            or_placeholder(range.1.as_deref())
        ),
    ];

    let weight_kg = assessment.canonical.weight_kg;
    if !assessment.healthy_range.contains(weight_kg) {
        let distance = assessment.healthy_range.distance_kg(weight_kg);
        let weight_unit = unit.weight_unit();
        let amount = weight_unit.from_kg(distance.abs());
        let direction = if distance < 0.0 { "below" } else { "above" };
        lines.push(format!(
            "               {:.1} {} {} the healthy range",
            amount, weight_unit, direction
        ));
    }

    lines.join("\n")
}

/// Render the "check your inputs" message
pub fn render_invalid(err: &MeasurementError) -> String {
    format!("Please check your inputs: {}", err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmi_calculator_shared::{evaluate, RawMeasurement};
    use proptest::prelude::*;

    #[test]
    fn test_scale_bar() {
        assert_eq!(scale_bar(Some(0.0)), format!("12 [|{}] 40", "-".repeat(28)));
        assert_eq!(scale_bar(Some(100.0)), format!("12 [{}|] 40", "-".repeat(28)));
        assert!(!scale_bar(None).contains('|'));
    }

    #[test]
    fn test_render_text_metric() {
        let assessment = evaluate(&RawMeasurement::metric(70.0, 175.0)).unwrap();
        let text = render_text(&assessment, UnitSystem::Metric);
        assert!(text.contains("BMI:           22.9 (Normal)"));
        assert!(text.contains("175.0 cm"));
        assert!(text.contains("56.7 – 76.3 kg (124.9 – 168.1 lb)"));
        // In range, so no distance line
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn test_render_text_distance() {
        let assessment = evaluate(&RawMeasurement::metric(50.0, 200.0)).unwrap();
        let text = render_text(&assessment, UnitSystem::Metric);
        // Healthy minimum at 2 m is 74.0 kg
        assert!(text.contains("24.0 kg below the healthy range"));

        let assessment = evaluate(&RawMeasurement::metric(90.0, 175.0)).unwrap();
        let text = render_text(&assessment, UnitSystem::Imperial);
        // 90 - 76.25625 kg over, shown in pounds
        assert!(text.contains("30.3 lb above the healthy range"));
    }

    #[test]
    fn test_json_output() {
        let output = JsonOutput::new(
            evaluate(&RawMeasurement::imperial(154.0, 5.0, 9.0)),
            UnitSystem::Imperial,
        );
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["unit"], "imperial");
        assert_eq!(json["valid"], true);
        assert_eq!(json["display"]["height"], "5 ft 9 in");

        let output = JsonOutput::new(evaluate(&RawMeasurement::metric(0.0, 175.0)), UnitSystem::Metric);
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["valid"], false);
        assert!(json.get("display").is_none());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: any BMI draws exactly one marker inside the bar
        #[test]
        fn prop_scale_bar_single_marker(bmi in 0.0f64..80.0) {
            let bar = scale_bar(bmi_calculator_shared::scale_position(bmi));
            prop_assert_eq!(bar.matches('|').count(), 1);
            prop_assert_eq!(bar.chars().count(), "12 [] 40".len() + SCALE_WIDTH + 1);
        }
    }

    #[test]
    fn test_render_invalid() {
        let err = MeasurementError::InvalidHeight { value: 0.0 };
        assert_eq!(
            render_invalid(&err),
            "Please check your inputs: Height must be a positive number (got 0)"
        );
    }
}
