//! Aerodynamic performance values returned by the prediction service

use serde::{Deserialize, Serialize};

/// Dimensionless coefficients for one propeller operating point.
///
/// No range is enforced; values are trusted as delivered by the model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSample {
    /// Thrust coefficient (Ct)
    pub thrust_coefficient: f64,
    /// Power coefficient (Cp)
    pub power_coefficient: f64,
    /// Propulsive efficiency (0-1)
    pub efficiency: f64,
}

/// Display strings for the three result tiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricDisplay {
    pub thrust: String,
    pub power: String,
    pub efficiency: String,
}

impl PerformanceSample {
    /// Ct and Cp to three decimals, efficiency as a one-decimal percentage.
    pub fn display(&self) -> MetricDisplay {
        MetricDisplay {
            thrust: format!("{:.3}", self.thrust_coefficient),
            power: format!("{:.3}", self.power_coefficient),
            efficiency: format!("{:.1}%", self.efficiency * 100.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_formatting() {
        let s = PerformanceSample {
            thrust_coefficient: 0.08765,
            power_coefficient: 0.0412,
            efficiency: 0.612,
        };
        let d = s.display();
        assert_eq!(d.thrust, "0.088");
        assert_eq!(d.power, "0.041");
        assert_eq!(d.efficiency, "61.2%");
    }
}
