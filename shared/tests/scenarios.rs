//! End-to-end evaluation scenarios

use bmi_calculator_shared::{
    evaluate, format_bmi, scale_position, BmiCategory, EvaluationReport, RawMeasurement,
    UnitSystem,
};

#[test]
fn test_metric_adult_in_normal_range() {
    let assessment = evaluate(&RawMeasurement::metric(70.0, 175.0)).unwrap();

    assert!((assessment.bmi - 70.0 / (1.75 * 1.75)).abs() < 1e-12);
    assert_eq!(format_bmi(assessment.bmi).as_deref(), Some("22.9"));
    assert_eq!(assessment.category, BmiCategory::Normal);
    assert!((assessment.healthy_range.min_kg - 56.7).abs() < 0.05);
    assert!((assessment.healthy_range.max_kg - 76.26).abs() < 0.01);
}

#[test]
fn test_imperial_adult_in_normal_range() {
    let assessment = evaluate(&RawMeasurement::imperial(154.0, 5.0, 9.0)).unwrap();

    // 703 * 154 / 69² = 22.739; the exact factor gives 22.741
    assert!((assessment.bmi - 22.74).abs() < 0.01);
    assert_eq!(assessment.category, BmiCategory::Normal);
}

#[test]
fn test_tall_light_adult_is_underweight() {
    let assessment = evaluate(&RawMeasurement::metric(50.0, 200.0)).unwrap();

    assert!((assessment.bmi - 12.5).abs() < 1e-12);
    assert_eq!(assessment.category, BmiCategory::Underweight);

    // (12.5 - 12) / 28 * 100
    let marker = scale_position(assessment.bmi).unwrap();
    assert!((marker - 1.7857).abs() < 1e-3);
}

#[test]
fn test_below_scale_marker_pins_to_zero() {
    let assessment = evaluate(&RawMeasurement::metric(40.0, 200.0)).unwrap();
    assert_eq!(scale_position(assessment.bmi), Some(0.0));
}

#[test]
fn test_invalid_inputs() {
    let cases = [
        RawMeasurement::metric(0.0, 175.0),
        RawMeasurement::metric(-5.0, 175.0),
        RawMeasurement::metric(70.0, 0.0),
        RawMeasurement::imperial(154.0, 0.0, 0.0),
    ];

    for raw in cases {
        let report = EvaluationReport::from(evaluate(&raw));
        assert!(!report.valid, "{:?} should be invalid", raw);
        assert!(report.bmi.is_none());
    }
}

#[test]
fn test_same_person_in_both_systems() {
    let metric = evaluate(&RawMeasurement::metric(70.0, 175.0)).unwrap();
    let display = metric.display(UnitSystem::Imperial);

    // Feed the imperial tiles back in as a user would
    let imperial = evaluate(&RawMeasurement::parse_imperial("154.3", "5", "9")).unwrap();

    assert_eq!(display.category, imperial.category.label());
    assert!((metric.bmi - imperial.bmi).abs() < 0.2);
}

#[test]
fn test_reset_defaults_roundtrip_through_json() {
    let raw = RawMeasurement::defaults(UnitSystem::Imperial);
    let json = serde_json::to_string(&raw).unwrap();
    assert!(json.contains("\"unit\":\"imperial\""));

    let back: RawMeasurement = serde_json::from_str(&json).unwrap();
    assert_eq!(back, raw);
}
