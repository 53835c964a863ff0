//! Valid input ranges per blade class
//!
//! The ranges mirror the data the prediction models were trained on. Bounds
//! are inclusive.

use serde::Serialize;

use crate::types::{BladeClass, MeasurementField};

/// Message for a blade count that has not been chosen.
pub const SELECT_BLADES_MESSAGE: &str = "Select blade count to view valid input ranges.";

/// Message for a measurement that did not parse as a number.
pub const NOT_NUMERIC_MESSAGE: &str = "Enter a valid numeric value.";

/// Inclusive `[min, max]` interval with the guidance shown when a value falls outside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValidRange {
    pub min: f64,
    pub max: f64,
    #[serde(skip)]
    pub message: &'static str,
}

impl ValidRange {
    /// Out when strictly below `min` or strictly above `max`.
    pub fn is_outside(&self, value: f64) -> bool {
        value < self.min || value > self.max
    }
}

/// Ranges for the three measurements of one blade class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeTable {
    pub diameter: ValidRange,
    pub pitch: ValidRange,
    pub advance_ratio: ValidRange,
}

impl RangeTable {
    pub fn for_field(&self, field: MeasurementField) -> Option<&ValidRange> {
        match field {
            MeasurementField::Diameter => Some(&self.diameter),
            MeasurementField::Pitch => Some(&self.pitch),
            MeasurementField::AdvanceRatio => Some(&self.advance_ratio),
            MeasurementField::Blades => None,
        }
    }
}

/// 2-blade propellers (inches, inches, dimensionless).
pub const TWO_BLADE: RangeTable = RangeTable {
    diameter: ValidRange {
        min: 9.0,
        max: 19.0,
        message: "Valid range for 2-blade propellers: 9–19 inches.",
    },
    pitch: ValidRange {
        min: 4.0,
        max: 13.0,
        message: "Valid range for 2-blade propellers: 4–13 inches.",
    },
    advance_ratio: ValidRange {
        min: 0.2,
        max: 0.7,
        message: "Valid advance ratio for 2-blade propellers: 0.2–0.7.",
    },
};

/// 3 and 4-blade propellers.
pub const MULTI_BLADE: RangeTable = RangeTable {
    diameter: ValidRange {
        min: 5.0,
        max: 9.0,
        message: "Valid range for 3/4-blade propellers: 5–9 inches.",
    },
    pitch: ValidRange {
        min: 3.0,
        max: 7.7,
        message: "Valid range for 3/4-blade propellers: 3–7.7 inches.",
    },
    advance_ratio: ValidRange {
        min: 0.2,
        max: 0.8,
        message: "Valid advance ratio for 3/4-blade propellers: 0.2–0.8.",
    },
};

pub const fn range_table(class: BladeClass) -> &'static RangeTable {
    match class {
        BladeClass::TwoBlade => &TWO_BLADE,
        BladeClass::MultiBlade => &MULTI_BLADE,
    }
}
