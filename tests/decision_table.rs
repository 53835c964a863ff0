//! Decision table regression
//!
//! Public-API checks on the two pure decision functions: the validation gate
//! and the drone-type classifier. Boundary values come from the trained data
//! ranges; classifier cases come from the rule table.

use prop_advisor::recommendation::{first_matching_rule, ClassifierInput, FALLBACK, RULES};
use prop_advisor::{
    classify, has_invalid_input, validate, BladeCount, DroneCategory, FormInput, MeasurementField,
    ParsedMeasurement, RawFormInput,
};

fn v(x: f64) -> ParsedMeasurement {
    ParsedMeasurement::Value(x)
}

// ============================================================================
// Validation gate
// ============================================================================

#[test]
fn unset_blades_yield_exactly_one_entry_whatever_else_is_typed() {
    let inputs = [
        (v(10.0), v(5.0), v(0.4)),
        (ParsedMeasurement::Invalid, ParsedMeasurement::Invalid, ParsedMeasurement::Invalid),
        (v(-1.0), v(1000.0), v(f64::INFINITY)),
    ];
    for (d, p, j) in inputs {
        let g = validate(BladeCount::Unset, d, p, j);
        assert_eq!(g.len(), 1);
        assert!(g.contains(MeasurementField::Blades));
    }
}

#[test]
fn two_blade_diameter_upper_bound_is_inclusive() {
    let ok = validate(BladeCount::Two, v(19.0), v(5.0), v(0.4));
    assert!(!ok.contains(MeasurementField::Diameter));

    let over = validate(BladeCount::Two, v(19.01), v(5.0), v(0.4));
    assert!(over.contains(MeasurementField::Diameter));
}

#[test]
fn three_blade_pitch_upper_bound_is_inclusive() {
    let ok = validate(BladeCount::Three, v(6.0), v(7.7), v(0.4));
    assert!(!has_invalid_input(&ok));

    let over = validate(BladeCount::Three, v(6.0), v(7.71), v(0.4));
    assert_eq!(
        over.get(MeasurementField::Pitch),
        Some("Valid range for 3/4-blade propellers: 3–7.7 inches.")
    );
}

#[test]
fn four_blades_use_the_multi_blade_table() {
    let three = validate(BladeCount::Three, v(9.5), v(8.0), v(0.85));
    let four = validate(BladeCount::Four, v(9.5), v(8.0), v(0.85));
    assert_eq!(three, four);
    assert_eq!(four.len(), 3);
}

#[test]
fn first_frame_after_blade_selection_is_gated() {
    // Blade count picked, measurements still empty.
    let raw = RawFormInput {
        blades: "2".to_string(),
        ..RawFormInput::default()
    };
    let guidance = validate_raw(&raw);
    assert!(has_invalid_input(&guidance));
    assert_eq!(guidance.len(), 3);
    assert!(!guidance.contains(MeasurementField::Blades));
}

#[test]
fn fields_are_checked_independently() {
    let raw = RawFormInput {
        blades: "2".to_string(),
        diameter: "12".to_string(),
        pitch: "".to_string(),
        advance_ratio: "0.9".to_string(),
    };
    let guidance = validate_raw(&raw);
    assert!(!guidance.contains(MeasurementField::Diameter));
    assert_eq!(
        guidance.get(MeasurementField::Pitch),
        Some("Enter a valid numeric value.")
    );
    assert_eq!(
        guidance.get(MeasurementField::AdvanceRatio),
        Some("Valid advance ratio for 2-blade propellers: 0.2–0.7.")
    );
}

fn validate_raw(raw: &RawFormInput) -> prop_advisor::GuidanceResult {
    prop_advisor::validation::validate_form(&FormInput::parse(raw))
}

// ============================================================================
// Classifier
// ============================================================================

#[test]
fn racing_wins_over_agriculture() {
    let rec = classify(0.09, 0.05, 0.4, 7.0, 0.75);
    assert_eq!(rec.category, DroneCategory::Racing);
}

#[test]
fn agriculture_example() {
    assert_eq!(
        classify(0.09, 0.03, 0.4, 5.0, 0.4).category,
        DroneCategory::Agriculture
    );
}

#[test]
fn surveillance_example() {
    assert_eq!(
        classify(0.02, 0.02, 0.6, 5.0, 0.3).category,
        DroneCategory::Surveillance
    );
}

#[test]
fn no_conditions_fall_back_to_general_purpose() {
    let rec = classify(0.02, 0.08, 0.3, 4.0, 0.3);
    assert_eq!(rec.category, DroneCategory::GeneralPurpose);
    assert_eq!(rec.title, "General Purpose UAV");
}

#[test]
fn delivery_shadowed_by_agriculture_at_low_advance_ratio() {
    // Same coefficients: only the advance ratio decides between the two.
    assert_eq!(
        classify(0.09, 0.07, 0.4, 5.0, 0.5).category,
        DroneCategory::Agriculture
    );
    assert_eq!(
        classify(0.09, 0.07, 0.4, 5.0, 0.6).category,
        DroneCategory::Delivery
    );
}

#[test]
fn result_is_always_the_first_matching_rule() {
    let cts = [0.02, 0.085, 0.12];
    let cps = [0.02, 0.06, 0.065, 0.09];
    let effs = [0.3, 0.52, 0.58, 0.7];
    let pitches = [4.0, 6.5, 8.0];
    let ratios = [0.2, 0.5, 0.6, 0.7, 0.8];

    for &ct in &cts {
        for &cp in &cps {
            for &eff in &effs {
                for &pitch in &pitches {
                    for &ar in &ratios {
                        let input = ClassifierInput {
                            thrust_coefficient: ct,
                            power_coefficient: cp,
                            efficiency: eff,
                            pitch,
                            advance_ratio: ar,
                        };
                        let expected = RULES
                            .iter()
                            .find(|r| r.matches(&input))
                            .map_or(FALLBACK, |r| r.category);
                        let got = classify(ct, cp, eff, pitch, ar).category;
                        assert_eq!(got, expected, "mismatch for {input:?}");
                        assert_eq!(
                            first_matching_rule(&input).is_none(),
                            got == FALLBACK
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn nan_inputs_fall_through_to_fallback() {
    let rec = classify(f64::NAN, f64::NAN, f64::NAN, f64::NAN, f64::NAN);
    assert_eq!(rec.category, DroneCategory::GeneralPurpose);
}
