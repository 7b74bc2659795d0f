//! Scenario-to-curves pipeline: altitude to density to performance curves.

use envelope_atmosphere::AtmosphereSample;
use envelope_config::{ConfigError, ScenarioConfig};
use envelope_performance::{AircraftConfig, EnvelopeSummary, PerformanceCurve, evaluate_performance};

use crate::report::Report;

/// The inputs and outputs of one scenario evaluation.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub scenario: ScenarioConfig,
    pub aircraft: AircraftConfig,
    pub atmosphere: AtmosphereSample,
    pub curve: PerformanceCurve,
    pub summary: Option<EnvelopeSummary>,
}

impl Evaluation {
    pub fn report(&self) -> Report<'_> {
        Report {
            scenario: &self.scenario.name,
            aircraft: &self.aircraft,
            atmosphere: &self.atmosphere,
            summary: self.summary.as_ref(),
            curve: &self.curve,
        }
    }
}

/// Evaluate a scenario end to end. Fails before producing any curve if inputs are invalid.
pub fn evaluate_scenario(scenario: ScenarioConfig) -> Result<Evaluation, ConfigError> {
    let aircraft = scenario.aircraft();
    let sweep = scenario.sweep()?;
    let atmosphere = envelope_atmosphere::sample(scenario.flight.altitude_m);
    let curve = evaluate_performance(&aircraft, atmosphere.density_kg_m3, sweep.as_slice())?;
    let summary = curve.summary();
    tracing::info!(
        scenario = %scenario.name,
        altitude_m = atmosphere.altitude_m,
        density_kg_m3 = atmosphere.density_kg_m3,
        points = curve.len(),
        "evaluated envelope"
    );
    Ok(Evaluation {
        scenario,
        aircraft,
        atmosphere,
        curve,
        summary,
    })
}
