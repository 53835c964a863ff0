//! Ordered drone-type rule table
//!
//! Rules overlap (Agriculture and Delivery share the thrust threshold, Racing
//! can fire on high-thrust inputs), so position in [`RULES`] decides the
//! outcome. The first matching rule wins and General Purpose catches the rest.

use serde::{Deserialize, Serialize};

use crate::types::{DroneCategory, PerformanceSample};

/// Racing: advance ratio at or above this...
pub const RACING_MIN_ADVANCE_RATIO: f64 = 0.7;
/// ...and pitch (inches) at or above this.
pub const RACING_MIN_PITCH: f64 = 6.5;
/// Thrust coefficient shared by Agriculture and Delivery.
pub const HIGH_THRUST_MIN_CT: f64 = 0.085;
/// Agriculture: advance ratio at or below this.
pub const AGRICULTURE_MAX_ADVANCE_RATIO: f64 = 0.5;
/// Delivery: power coefficient at or above this.
pub const DELIVERY_MIN_CP: f64 = 0.06;
/// Surveillance: efficiency at or above this.
pub const SURVEILLANCE_MIN_EFFICIENCY: f64 = 0.58;
/// Mapping: efficiency at or above this...
pub const MAPPING_MIN_EFFICIENCY: f64 = 0.52;
/// ...and power coefficient at or below this.
pub const MAPPING_MAX_CP: f64 = 0.065;

/// Everything one classification looks at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifierInput {
    pub thrust_coefficient: f64,
    pub power_coefficient: f64,
    pub efficiency: f64,
    pub pitch: f64,
    pub advance_ratio: f64,
}

impl ClassifierInput {
    pub const fn new(sample: PerformanceSample, pitch: f64, advance_ratio: f64) -> Self {
        Self {
            thrust_coefficient: sample.thrust_coefficient,
            power_coefficient: sample.power_coefficient,
            efficiency: sample.efficiency,
            pitch,
            advance_ratio,
        }
    }
}

/// One `(predicate, category)` row.
#[derive(Clone, Copy)]
pub struct Rule {
    pub category: DroneCategory,
    pub condition: &'static str,
    predicate: fn(&ClassifierInput) -> bool,
}

impl Rule {
    pub fn matches(&self, input: &ClassifierInput) -> bool {
        (self.predicate)(input)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("category", &self.category)
            .field("condition", &self.condition)
            .finish()
    }
}

/// Evaluated top to bottom.
pub const RULES: [Rule; 5] = [
    Rule {
        category: DroneCategory::Racing,
        condition: "advance_ratio >= 0.7 && pitch >= 6.5",
        predicate: |i| {
            i.advance_ratio >= RACING_MIN_ADVANCE_RATIO && i.pitch >= RACING_MIN_PITCH
        },
    },
    Rule {
        category: DroneCategory::Agriculture,
        condition: "ct >= 0.085 && advance_ratio <= 0.5",
        predicate: |i| {
            i.thrust_coefficient >= HIGH_THRUST_MIN_CT
                && i.advance_ratio <= AGRICULTURE_MAX_ADVANCE_RATIO
        },
    },
    Rule {
        category: DroneCategory::Delivery,
        condition: "ct >= 0.085 && cp >= 0.06",
        predicate: |i| {
            i.thrust_coefficient >= HIGH_THRUST_MIN_CT && i.power_coefficient >= DELIVERY_MIN_CP
        },
    },
    Rule {
        category: DroneCategory::Surveillance,
        condition: "efficiency >= 0.58",
        predicate: |i| i.efficiency >= SURVEILLANCE_MIN_EFFICIENCY,
    },
    Rule {
        category: DroneCategory::Mapping,
        condition: "efficiency >= 0.52 && cp <= 0.065",
        predicate: |i| {
            i.efficiency >= MAPPING_MIN_EFFICIENCY && i.power_coefficient <= MAPPING_MAX_CP
        },
    },
];

/// Category used when no rule matches.
pub const FALLBACK: DroneCategory = DroneCategory::GeneralPurpose;

/// Position of the first matching rule, or `None` for the fallback.
pub fn first_matching_rule(input: &ClassifierInput) -> Option<usize> {
    RULES.iter().position(|rule| rule.matches(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(ct: f64, cp: f64, eff: f64, pitch: f64, ar: f64) -> ClassifierInput {
        ClassifierInput {
            thrust_coefficient: ct,
            power_coefficient: cp,
            efficiency: eff,
            pitch,
            advance_ratio: ar,
        }
    }

    #[test]
    fn test_rule_order_is_fixed() {
        let order: Vec<_> = RULES.iter().map(|r| r.category).collect();
        assert_eq!(
            order,
            vec![
                DroneCategory::Racing,
                DroneCategory::Agriculture,
                DroneCategory::Delivery,
                DroneCategory::Surveillance,
                DroneCategory::Mapping,
            ]
        );
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        assert_eq!(first_matching_rule(&input(0.0, 0.0, 0.0, 6.5, 0.7)), Some(0));
        assert_eq!(first_matching_rule(&input(0.085, 0.0, 0.0, 0.0, 0.5)), Some(1));
        assert_eq!(first_matching_rule(&input(0.085, 0.06, 0.0, 0.0, 0.6)), Some(2));
        assert_eq!(first_matching_rule(&input(0.0, 0.0, 0.58, 0.0, 0.6)), Some(3));
        assert_eq!(first_matching_rule(&input(0.0, 0.065, 0.52, 0.0, 0.6)), Some(4));
    }

    #[test]
    fn test_just_below_thresholds_falls_through() {
        let i = input(0.0849, 0.0651, 0.5199, 6.49, 0.69);
        assert_eq!(first_matching_rule(&i), None);
    }

    #[test]
    fn test_nan_matches_nothing() {
        let i = input(f64::NAN, f64::NAN, f64::NAN, f64::NAN, f64::NAN);
        assert_eq!(first_matching_rule(&i), None);
    }

    #[test]
    fn test_overlapping_rules_report_earliest() {
        // Matches Racing, Agriculture-thrust, Delivery and Surveillance at once.
        let i = input(0.1, 0.07, 0.7, 7.0, 0.75);
        assert_eq!(first_matching_rule(&i), Some(0));
        assert!(RULES[2].matches(&i));
        assert!(RULES[3].matches(&i));
    }
}
