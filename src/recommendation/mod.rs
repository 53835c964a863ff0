//! Drone-type recommendation
//!
//! Pure selection over the ordered rule table in [`rules`], followed by a
//! lookup in the static [`catalog`]. Every input, including NaN, yields
//! exactly one [`Recommendation`].

pub mod catalog;
pub mod rules;

pub use catalog::recommendation_for;
pub use rules::{first_matching_rule, ClassifierInput, Rule, FALLBACK, RULES};

use crate::types::{DroneCategory, Recommendation};

/// Category chosen for an input (first match wins).
pub fn first_match(input: &ClassifierInput) -> DroneCategory {
    first_matching_rule(input).map_or(FALLBACK, |idx| RULES[idx].category)
}

/// Recommendation for a classifier input.
pub fn classify_input(input: &ClassifierInput) -> Recommendation {
    recommendation_for(first_match(input))
}

/// Recommendation for the five performance values.
pub fn classify(
    thrust_coefficient: f64,
    power_coefficient: f64,
    efficiency: f64,
    pitch: f64,
    advance_ratio: f64,
) -> Recommendation {
    classify_input(&ClassifierInput {
        thrust_coefficient,
        power_coefficient,
        efficiency,
        pitch,
        advance_ratio,
    })
}
