//! Form input types: BladeCount, BladeClass, ParsedMeasurement, FormInput

use serde::{Deserialize, Deserializer, Serialize};

use crate::prediction::PredictionRequest;

// ============================================================================
// Blade Count
// ============================================================================

/// Discrete blade-count selection from the input form.
///
/// The form offers 2, 3 and 4 blades. Anything else, including an empty
/// selection, is `Unset` so the submission gate stays closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BladeCount {
    Two,
    Three,
    Four,
    #[default]
    Unset,
}

/// Propeller class that decides which valid-range table applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BladeClass {
    /// 2-blade propellers (model A on the prediction service)
    TwoBlade,
    /// 3 and 4-blade propellers (model B on the prediction service)
    MultiBlade,
}

impl BladeCount {
    /// Parse the raw select value. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "2" => Self::Two,
            "3" => Self::Three,
            "4" => Self::Four,
            _ => Self::Unset,
        }
    }

    /// Number of blades, or `None` when nothing usable was selected.
    pub fn blades(self) -> Option<u8> {
        match self {
            Self::Two => Some(2),
            Self::Three => Some(3),
            Self::Four => Some(4),
            Self::Unset => None,
        }
    }

    pub fn blade_class(self) -> Option<BladeClass> {
        match self {
            Self::Two => Some(BladeClass::TwoBlade),
            Self::Three | Self::Four => Some(BladeClass::MultiBlade),
            Self::Unset => None,
        }
    }

    pub fn is_set(self) -> bool {
        self != Self::Unset
    }
}

// ============================================================================
// Measurements
// ============================================================================

/// A continuous measurement after text parsing.
///
/// Unparsable text is its own state and never collapses to zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ParsedMeasurement {
    Value(f64),
    Invalid,
}

impl ParsedMeasurement {
    /// Parse a form field. Empty text, garbage and `NaN` are all `Invalid`;
    /// infinities are numbers and are left for the range check to reject.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(v) if !v.is_nan() => Self::Value(v),
            _ => Self::Invalid,
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(v),
            Self::Invalid => None,
        }
    }

    pub fn is_invalid(self) -> bool {
        matches!(self, Self::Invalid)
    }
}

// ============================================================================
// Form Input
// ============================================================================

/// Raw form values exactly as typed, before any parsing.
///
/// Missing or `null` JSON fields become empty strings, matching a fresh form.
/// JSON numbers are accepted and kept as their decimal text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFormInput {
    #[serde(default, deserialize_with = "text_or_number")]
    pub blades: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub diameter: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub pitch: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub advance_ratio: String,
}

fn text_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Option::<TextOrNumber>::deserialize(deserializer)? {
        None => String::new(),
        Some(TextOrNumber::Text(s)) => s,
        Some(TextOrNumber::Int(i)) => i.to_string(),
        Some(TextOrNumber::Float(f)) => f.to_string(),
    })
}

/// Parsed, immutable snapshot of the propeller form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormInput {
    pub blade_count: BladeCount,
    pub diameter: ParsedMeasurement,
    pub pitch: ParsedMeasurement,
    pub advance_ratio: ParsedMeasurement,
}

impl FormInput {
    pub fn parse(raw: &RawFormInput) -> Self {
        Self {
            blade_count: BladeCount::parse(&raw.blades),
            diameter: ParsedMeasurement::parse(&raw.diameter),
            pitch: ParsedMeasurement::parse(&raw.pitch),
            advance_ratio: ParsedMeasurement::parse(&raw.advance_ratio),
        }
    }

    /// Wire request for the prediction service.
    ///
    /// `None` unless a blade count is selected and every measurement parsed.
    /// Range checks are the validator's job, not this conversion's.
    pub fn to_prediction_request(&self) -> Option<PredictionRequest> {
        Some(PredictionRequest {
            blades: self.blade_count.blades()?,
            diameter: self.diameter.value()?,
            pitch: self.pitch.value()?,
            advance_ratio: self.advance_ratio.value()?,
        })
    }
}

impl From<&RawFormInput> for FormInput {
    fn from(raw: &RawFormInput) -> Self {
        Self::parse(raw)
    }
}
