//! Static recommendation text and styling per drone category

use crate::types::{DroneCategory, Recommendation, VisualTheme};

const RACING: Recommendation = Recommendation {
    title: "Racing / Performance Drone",
    category: DroneCategory::Racing,
    description: "High advance ratio and aggressive pitch indicate a speed-focused racing configuration.",
    theme: VisualTheme {
        gradient: "from-red-500 to-orange-600",
        icon: "zap",
    },
};

const AGRICULTURE: Recommendation = Recommendation {
    title: "Agriculture Drone",
    category: DroneCategory::Agriculture,
    description: "High thrust at lower advance ratios makes this configuration suitable for agricultural payload lifting.",
    theme: VisualTheme {
        gradient: "from-lime-500 to-green-700",
        icon: "tractor",
    },
};

const DELIVERY: Recommendation = Recommendation {
    title: "Delivery Drone",
    category: DroneCategory::Delivery,
    description: "High thrust combined with higher power usage is suitable for payload delivery operations.",
    theme: VisualTheme {
        gradient: "from-blue-500 to-indigo-600",
        icon: "package",
    },
};

const SURVEILLANCE: Recommendation = Recommendation {
    title: "Surveillance Drone",
    category: DroneCategory::Surveillance,
    description: "Higher aerodynamic efficiency makes this propeller suitable for long-endurance surveillance missions.",
    theme: VisualTheme {
        gradient: "from-emerald-500 to-green-600",
        icon: "video",
    },
};

const MAPPING: Recommendation = Recommendation {
    title: "Mapping Drone",
    category: DroneCategory::Mapping,
    description: "Balanced thrust and efficiency enable stable hovering for mapping and surveying tasks.",
    theme: VisualTheme {
        gradient: "from-sky-500 to-cyan-600",
        icon: "map",
    },
};

const GENERAL_PURPOSE: Recommendation = Recommendation {
    title: "General Purpose UAV",
    category: DroneCategory::GeneralPurpose,
    description: "This configuration provides moderate performance suitable for general UAV applications.",
    theme: VisualTheme {
        gradient: "from-gray-500 to-slate-600",
        icon: "map",
    },
};

/// Catalog entry for a category.
pub const fn recommendation_for(category: DroneCategory) -> Recommendation {
    match category {
        DroneCategory::Racing => RACING,
        DroneCategory::Agriculture => AGRICULTURE,
        DroneCategory::Delivery => DELIVERY,
        DroneCategory::Surveillance => SURVEILLANCE,
        DroneCategory::Mapping => MAPPING,
        DroneCategory::GeneralPurpose => GENERAL_PURPOSE,
    }
}
