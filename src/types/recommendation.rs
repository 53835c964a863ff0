//! Drone-type recommendation types: DroneCategory, VisualTheme, Recommendation

use serde::{Deserialize, Serialize};

/// The six mission categories a propeller can be recommended for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DroneCategory {
    Racing,
    Agriculture,
    Delivery,
    Surveillance,
    Mapping,
    GeneralPurpose,
}

impl DroneCategory {
    pub const ALL: [Self; 6] = [
        Self::Racing,
        Self::Agriculture,
        Self::Delivery,
        Self::Surveillance,
        Self::Mapping,
        Self::GeneralPurpose,
    ];

    /// Label the prediction backend uses in its `drone_type` field.
    pub const fn service_label(self) -> &'static str {
        match self {
            Self::Racing => "Racing Drone",
            Self::Agriculture => "Agriculture Drone",
            Self::Delivery => "Delivery Drone",
            Self::Surveillance => "Surveillance Drone",
            Self::Mapping => "Mapping Drone",
            Self::GeneralPurpose => "General Purpose UAV",
        }
    }
}

impl std::fmt::Display for DroneCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.service_label())
    }
}

/// Opaque styling tokens for the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisualTheme {
    /// Gradient utility classes for the recommendation banner
    pub gradient: &'static str,
    /// Icon identifier
    pub icon: &'static str,
}

/// One classification result. Static catalog data, never computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub title: &'static str,
    pub category: DroneCategory,
    pub description: &'static str,
    pub theme: VisualTheme,
}
