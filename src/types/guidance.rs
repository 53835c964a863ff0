//! Per-field guidance produced by input validation

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Form field a guidance message is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MeasurementField {
    Blades,
    Diameter,
    Pitch,
    AdvanceRatio,
}

impl MeasurementField {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blades => "blades",
            Self::Diameter => "diameter",
            Self::Pitch => "pitch",
            Self::AdvanceRatio => "advanceRatio",
        }
    }
}

impl std::fmt::Display for MeasurementField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field name → human-readable message.
///
/// Empty means every field is valid or not yet evaluable. Any entry closes
/// the submission gate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuidanceResult(BTreeMap<MeasurementField, String>);

impl GuidanceResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the message for a field, replacing any earlier one.
    pub fn set(&mut self, field: MeasurementField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: MeasurementField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: MeasurementField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (MeasurementField, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl std::fmt::Display for GuidanceResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_message_wins() {
        let mut g = GuidanceResult::new();
        g.set(MeasurementField::Pitch, "first");
        g.set(MeasurementField::Pitch, "second");
        assert_eq!(g.len(), 1);
        assert_eq!(g.get(MeasurementField::Pitch), Some("second"));
    }

    #[test]
    fn test_serializes_with_form_field_names() {
        let mut g = GuidanceResult::new();
        g.set(MeasurementField::AdvanceRatio, "too high");
        let v = serde_json::to_value(&g).unwrap();
        assert_eq!(v["advanceRatio"], "too high");
    }

    #[test]
    fn test_display_joins_entries() {
        let mut g = GuidanceResult::new();
        g.set(MeasurementField::Diameter, "a");
        g.set(MeasurementField::Pitch, "b");
        assert_eq!(g.to_string(), "diameter: a; pitch: b");
    }
}
