//! Steady level-flight performance evaluator.
//!
//! Given an aircraft, an air density and a sweep of airspeeds, [`evaluate_performance`]
//! derives lift and drag coefficients, the drag breakdown, thrust required/available and the
//! excess-power rate of climb at every airspeed. Each airspeed is evaluated independently.

pub mod aircraft;
pub mod curve;
pub mod summary;
pub mod sweep;

pub use aircraft::AircraftConfig;
pub use curve::{PerformanceCurve, PerformancePoint, evaluate_performance};
pub use summary::{EnvelopeSummary, OperatingPoint};
pub use sweep::AirspeedSweep;

use thiserror::Error;

/// Validation failures reported before any output is produced.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PerformanceError {
    #[error("invalid aircraft config: {field} {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: String,
    },
    #[error("invalid airspeed sweep: {0}")]
    InvalidSweep(String),
    #[error("air density must be finite and positive, got {0}")]
    InvalidDensity(f64),
}
