//! Aircraft parameters consumed by the evaluator.

use serde::{Deserialize, Serialize};

use crate::PerformanceError;

/// Weight, wing geometry, drag polar and thrust of a fixed-wing aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftConfig {
    pub weight_n: f64,
    pub wing_area_m2: f64,
    /// Zero-lift drag coefficient.
    pub cd0: f64,
    pub aspect_ratio: f64,
    /// Oswald span efficiency, in (0, 1].
    pub oswald_efficiency: f64,
    /// Thrust available, assumed independent of airspeed.
    pub max_thrust_n: f64,
}

impl AircraftConfig {
    /// Check every field against its physical domain.
    pub fn validate(&self) -> Result<(), PerformanceError> {
        positive("weight_n", self.weight_n)?;
        positive("wing_area_m2", self.wing_area_m2)?;
        non_negative("cd0", self.cd0)?;
        positive("aspect_ratio", self.aspect_ratio)?;
        positive("oswald_efficiency", self.oswald_efficiency)?;
        if self.oswald_efficiency > 1.0 {
            return Err(invalid(
                "oswald_efficiency",
                format!("must not exceed 1, got {}", self.oswald_efficiency),
            ));
        }
        non_negative("max_thrust_n", self.max_thrust_n)?;
        Ok(())
    }

    /// Induced-drag factor k = 1 / (π · AR · e).
    pub fn induced_drag_factor(&self) -> f64 {
        1.0 / (std::f64::consts::PI * self.aspect_ratio * self.oswald_efficiency)
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), PerformanceError> {
    finite(field, value)?;
    if value <= 0.0 {
        return Err(invalid(field, format!("must be positive, got {value}")));
    }
    Ok(())
}

fn non_negative(field: &'static str, value: f64) -> Result<(), PerformanceError> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(invalid(field, format!("must not be negative, got {value}")));
    }
    Ok(())
}

fn finite(field: &'static str, value: f64) -> Result<(), PerformanceError> {
    if !value.is_finite() {
        return Err(invalid(field, format!("must be finite, got {value}")));
    }
    Ok(())
}

fn invalid(field: &'static str, reason: String) -> PerformanceError {
    PerformanceError::InvalidConfig { field, reason }
}
