//! Display formatting
//!
//! Turns canonical values back into unit-specific strings. Functions return
//! `None` when there is nothing sensible to show; the presentation layer
//! decides how to render that (usually [`PLACEHOLDER`]).

use crate::health_metrics::HealthyRange;
use crate::units::{FeetInchesHeight, HeightUnit, UnitSystem, WeightUnit};
use crate::validation::is_positive_finite;

/// What front-ends show in place of a missing value
pub const PLACEHOLDER: &str = "--";

/// Lower end of the BMI scale bar
pub const SCALE_MIN: f64 = 12.0;
/// Upper end of the BMI scale bar
pub const SCALE_MAX: f64 = 40.0;

/// Round to one decimal place
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Format a height: "175.0 cm" or "5 ft 9 in"
pub fn format_height(height_m: f64, unit: UnitSystem) -> Option<String> {
    if !is_positive_finite(height_m) {
        return None;
    }
    let text = match unit {
        UnitSystem::Metric => format!("{:.1} cm", HeightUnit::Cm.from_meters(height_m)),
        UnitSystem::Imperial => FeetInchesHeight::from_meters(height_m).to_string(),
    };
    Some(text)
}

/// Format a weight: "70.0 kg" or "154.3 lb"
pub fn format_weight(weight_kg: f64, unit: UnitSystem) -> Option<String> {
    if !is_positive_finite(weight_kg) {
        return None;
    }
    let weight_unit = unit.weight_unit();
    Some(format!("{:.1} {}", weight_unit.from_kg(weight_kg), weight_unit))
}

/// Format a BMI value to one decimal
pub fn format_bmi(bmi: f64) -> Option<String> {
    bmi.is_finite().then(|| format!("{:.1}", bmi))
}

/// Format a healthy range: "56.7 – 76.3 kg"
pub fn format_healthy_range(range: &HealthyRange, unit: UnitSystem) -> Option<String> {
    if !is_positive_finite(range.min_kg) || !is_positive_finite(range.max_kg) {
        return None;
    }
    let (min, max, weight_unit) = match unit {
        UnitSystem::Metric => (range.min_kg, range.max_kg, WeightUnit::Kg),
        UnitSystem::Imperial => {
            let (min_lb, max_lb) = range.in_pounds();
            (min_lb, max_lb, WeightUnit::Lb)
        }
    };
    Some(format!("{:.1} – {:.1} {}", min, max, weight_unit))
}

/// Marker position on the BMI scale as a percentage in `0..=100`.
///
/// Values outside the scale are pinned to its ends. A non-finite BMI has no
/// position.
pub fn scale_position(bmi: f64) -> Option<f64> {
    if !bmi.is_finite() {
        return None;
    }
    let percent = (bmi - SCALE_MIN) / (SCALE_MAX - SCALE_MIN) * 100.0;
    Some(percent.clamp(0.0, 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health_metrics::healthy_weight_range;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn test_format_height() {
        assert_eq!(format_height(1.75, UnitSystem::Metric).as_deref(), Some("175.0 cm"));
        assert_eq!(
            format_height(69.0 * 0.0254, UnitSystem::Imperial).as_deref(),
            Some("5 ft 9 in")
        );
    }

    #[test]
    fn test_format_height_inch_carry() {
        // 182 cm = 71.65 in. The browser form printed "5 ft 12 in" here.
        assert_eq!(format_height(1.82, UnitSystem::Imperial).as_deref(), Some("6 ft 0 in"));
    }

    #[test]
    fn test_format_height_huge_value() {
        let assessment = crate::evaluation::evaluate(&crate::RawMeasurement::metric(70.0, 1e300)).unwrap();
        let shown = format_height(assessment.canonical.height_m, UnitSystem::Imperial).unwrap();
        assert!(shown.starts_with(&format!("{} ft ", u32::MAX)));
    }

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(70.0, UnitSystem::Metric).as_deref(), Some("70.0 kg"));
        assert_eq!(format_weight(70.0, UnitSystem::Imperial).as_deref(), Some("154.3 lb"));
    }

    #[rstest]
    #[case(0.0)]
    #[case(-1.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn test_nothing_to_show(#[case] value: f64) {
        for unit in [UnitSystem::Metric, UnitSystem::Imperial] {
            assert_eq!(format_height(value, unit), None);
            assert_eq!(format_weight(value, unit), None);
        }
    }

    #[test]
    fn test_format_bmi() {
        assert_eq!(format_bmi(22.857).as_deref(), Some("22.9"));
        assert_eq!(format_bmi(f64::INFINITY), None);
    }

    #[test]
    fn test_format_healthy_range() {
        let range = healthy_weight_range(1.75);
        assert_eq!(
            format_healthy_range(&range, UnitSystem::Metric).as_deref(),
            Some("56.7 – 76.3 kg")
        );
        assert_eq!(
            format_healthy_range(&range, UnitSystem::Imperial).as_deref(),
            Some("124.9 – 168.1 lb")
        );
        assert_eq!(format_healthy_range(&healthy_weight_range(0.0), UnitSystem::Metric), None);
    }

    #[rstest]
    #[case(12.0, 0.0)]
    #[case(26.0, 50.0)]
    #[case(40.0, 100.0)]
    #[case(5.0, 0.0)]
    #[case(55.0, 100.0)]
    fn test_scale_position(#[case] bmi: f64, #[case] expected: f64) {
        let position = scale_position(bmi).unwrap();
        assert!((position - expected).abs() < 1e-9);
    }

    #[test]
    fn test_scale_position_non_finite() {
        assert_eq!(scale_position(f64::NAN), None);
        assert_eq!(scale_position(f64::INFINITY), None);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_scale_position_bounded(bmi in -100.0f64..200.0) {
            let p = scale_position(bmi).unwrap();
            prop_assert!((0.0..=100.0).contains(&p));
        }

        /// Property: metric display survives parsing back within 0.1
        #[test]
        fn prop_metric_display_roundtrip(kg in 20.0f64..300.0, cm in 100.0f64..250.0) {
            let weight = format_weight(kg, UnitSystem::Metric).unwrap();
            let height = format_height(cm / 100.0, UnitSystem::Metric).unwrap();
            let kg_back: f64 = weight.trim_end_matches(" kg").parse().unwrap();
            let cm_back: f64 = height.trim_end_matches(" cm").parse().unwrap();
            prop_assert!((kg - kg_back).abs() <= 0.1);
            prop_assert!((cm - cm_back).abs() <= 0.1);
        }

        /// Property: imperial weight display converts back to kg within 0.1
        #[test]
        fn prop_imperial_weight_roundtrip(kg in 20.0f64..300.0) {
            let shown = format_weight(kg, UnitSystem::Imperial).unwrap();
            let lb: f64 = shown.trim_end_matches(" lb").parse().unwrap();
            prop_assert!((WeightUnit::Lb.to_kg(lb) - kg).abs() < 0.1);
        }
    }
}
