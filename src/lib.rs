//! Steady level-flight performance envelope for fixed-wing aircraft.
//!
//! The physics lives in the member crates: the atmosphere model turns an altitude into a
//! density and the performance evaluator turns aircraft parameters, density and an airspeed
//! sweep into drag, thrust and climb curves. This crate re-exports them for the binaries and
//! adds the report writers shared by the front-ends.

pub mod cli;
pub mod envelope;
pub mod report;

pub use envelope_atmosphere as atmosphere;
pub use envelope_config as config;
pub use envelope_core as physics;
pub use envelope_performance as performance;
