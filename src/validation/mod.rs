//! Input validation for the propeller form
//!
//! `validate()` turns a blade count and three parsed measurements into a
//! [`GuidanceResult`]. A non-empty result closes the submission gate, so no
//! prediction request is issued until every field is numeric and inside the
//! range the models were trained on.
//!
//! ## Rules
//!
//! 1. Blade count unset: one `blades` entry, nothing else is checked.
//! 2. Non-numeric measurement: "Enter a valid numeric value."
//! 3. Numeric measurement outside its blade-class range: the range message.
//!
//! Empty fields are non-numeric, so the gate reads as closed right after a
//! blade count is picked and before the measurements are typed.

pub mod ranges;

pub use ranges::{range_table, RangeTable, ValidRange, MULTI_BLADE, TWO_BLADE};

use crate::types::{BladeCount, FormInput, GuidanceResult, MeasurementField, ParsedMeasurement};

/// Validate one form snapshot.
pub fn validate(
    blade_count: BladeCount,
    diameter: ParsedMeasurement,
    pitch: ParsedMeasurement,
    advance_ratio: ParsedMeasurement,
) -> GuidanceResult {
    let mut guidance = GuidanceResult::new();

    let Some(class) = blade_count.blade_class() else {
        guidance.set(MeasurementField::Blades, ranges::SELECT_BLADES_MESSAGE);
        return guidance;
    };

    let fields = [
        (MeasurementField::Diameter, diameter),
        (MeasurementField::Pitch, pitch),
        (MeasurementField::AdvanceRatio, advance_ratio),
    ];

    for (field, measurement) in fields {
        if measurement.is_invalid() {
            guidance.set(field, ranges::NOT_NUMERIC_MESSAGE);
        }
    }

    // Range pass runs after the parse pass; its message replaces any earlier one.
    let table = range_table(class);
    for (field, measurement) in fields {
        let (Some(value), Some(range)) = (measurement.value(), table.for_field(field)) else {
            continue;
        };
        if range.is_outside(value) {
            guidance.set(field, range.message);
        }
    }

    guidance
}

/// Validate a parsed form.
pub fn validate_form(input: &FormInput) -> GuidanceResult {
    validate(
        input.blade_count,
        input.diameter,
        input.pitch,
        input.advance_ratio,
    )
}

/// Submission gate: true when any guidance is present.
pub fn has_invalid_input(guidance: &GuidanceResult) -> bool {
    !guidance.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RawFormInput;

    fn form(blades: &str, diameter: &str, pitch: &str, advance_ratio: &str) -> FormInput {
        FormInput::parse(&RawFormInput {
            blades: blades.to_string(),
            diameter: diameter.to_string(),
            pitch: pitch.to_string(),
            advance_ratio: advance_ratio.to_string(),
        })
    }

    #[test]
    fn test_unset_blades_short_circuits() {
        for (d, p, a) in [("", "", ""), ("100", "abc", "9"), ("10", "5", "0.4")] {
            let g = validate_form(&form("", d, p, a));
            assert_eq!(g.len(), 1);
            assert_eq!(
                g.get(MeasurementField::Blades),
                Some(ranges::SELECT_BLADES_MESSAGE)
            );
        }
    }

    #[test]
    fn test_unsupported_blade_count_is_unset() {
        let g = validate_form(&form("6", "10", "5", "0.4"));
        assert!(g.contains(MeasurementField::Blades));
    }

    #[test]
    fn test_two_blade_valid_form_is_clean() {
        let g = validate_form(&form("2", "10", "5", "0.4"));
        assert!(g.is_empty(), "unexpected guidance: {g}");
        assert!(!has_invalid_input(&g));
    }

    #[test]
    fn test_two_blade_diameter_boundary() {
        let at = validate_form(&form("2", "19", "5", "0.4"));
        assert!(!at.contains(MeasurementField::Diameter));

        let over = validate_form(&form("2", "19.01", "5", "0.4"));
        assert_eq!(
            over.get(MeasurementField::Diameter),
            Some(TWO_BLADE.diameter.message)
        );
    }

    #[test]
    fn test_multi_blade_pitch_boundary() {
        for blades in ["3", "4"] {
            let at = validate_form(&form(blades, "6", "7.7", "0.4"));
            assert!(!at.contains(MeasurementField::Pitch));

            let over = validate_form(&form(blades, "6", "7.71", "0.4"));
            assert_eq!(
                over.get(MeasurementField::Pitch),
                Some(MULTI_BLADE.pitch.message)
            );
        }
    }

    #[test]
    fn test_fields_are_checked_independently() {
        let g = validate_form(&form("3", "20", "abc", "0.1"));
        assert_eq!(g.len(), 3);
        assert_eq!(
            g.get(MeasurementField::Diameter),
            Some(MULTI_BLADE.diameter.message)
        );
        assert_eq!(
            g.get(MeasurementField::Pitch),
            Some(ranges::NOT_NUMERIC_MESSAGE)
        );
        assert_eq!(
            g.get(MeasurementField::AdvanceRatio),
            Some(MULTI_BLADE.advance_ratio.message)
        );
    }

    #[test]
    fn test_gate_closed_before_measurements_entered() {
        let g = validate_form(&form("2", "", "", ""));
        assert_eq!(g.len(), 3);
        assert!(has_invalid_input(&g));
        assert!(g
            .iter()
            .all(|(_, message)| message == ranges::NOT_NUMERIC_MESSAGE));
    }

    #[test]
    fn test_advance_ratio_upper_bound_differs_by_class() {
        let two = validate_form(&form("2", "10", "5", "0.75"));
        assert!(two.contains(MeasurementField::AdvanceRatio));

        let four = validate_form(&form("4", "6", "5", "0.75"));
        assert!(!four.contains(MeasurementField::AdvanceRatio));
    }
}
