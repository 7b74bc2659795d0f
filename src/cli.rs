//! Command-line plumbing shared by the `envelope` and `envelope_plot` binaries.

use std::path::PathBuf;

use clap::Args;
use envelope_config::{ConfigError, ScenarioConfig, load_scenarios, select_scenario};
use tracing_subscriber::EnvFilter;

/// Scenario selection plus per-field overrides.
#[derive(Args, Debug, Clone, Default)]
pub struct ScenarioArgs {
    /// Scenario file (.toml or YAML list) or directory of .toml files
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Scenario name inside the config (defaults to the first one)
    #[arg(long)]
    pub scenario: Option<String>,

    /// Aircraft weight in N
    #[arg(long)]
    pub weight: Option<f64>,

    /// Wing area in m^2
    #[arg(long)]
    pub wing_area: Option<f64>,

    /// Zero-lift drag coefficient
    #[arg(long)]
    pub cd0: Option<f64>,

    #[arg(long)]
    pub aspect_ratio: Option<f64>,

    /// Oswald efficiency factor, in (0, 1]
    #[arg(long)]
    pub oswald: Option<f64>,

    /// Thrust available in N
    #[arg(long)]
    pub max_thrust: Option<f64>,

    /// Altitude in m
    #[arg(long, allow_negative_numbers = true)]
    pub altitude: Option<f64>,

    /// First airspeed of the sweep in m/s
    #[arg(long, allow_negative_numbers = true)]
    pub v_min: Option<f64>,

    /// Last airspeed of the sweep in m/s
    #[arg(long)]
    pub v_max: Option<f64>,

    /// Number of airspeeds in the sweep
    #[arg(long)]
    pub points: Option<usize>,
}

impl ScenarioArgs {
    /// Load the selected scenario (or the built-in default) and apply overrides.
    pub fn resolve(&self) -> Result<ScenarioConfig, ConfigError> {
        let mut scenario = match &self.config {
            Some(path) => select_scenario(&load_scenarios(path)?, self.scenario.as_deref())?,
            None => ScenarioConfig::default(),
        };

        let aircraft = &mut scenario.aircraft;
        override_with(&mut aircraft.weight_n, self.weight);
        override_with(&mut aircraft.wing_area_m2, self.wing_area);
        override_with(&mut aircraft.cd0, self.cd0);
        override_with(&mut aircraft.aspect_ratio, self.aspect_ratio);
        override_with(&mut aircraft.oswald_efficiency, self.oswald);
        override_with(&mut aircraft.max_thrust_n, self.max_thrust);

        let flight = &mut scenario.flight;
        override_with(&mut flight.altitude_m, self.altitude);
        override_with(&mut flight.airspeed.start_m_s, self.v_min);
        override_with(&mut flight.airspeed.end_m_s, self.v_max);
        override_with(&mut flight.airspeed.points, self.points);

        Ok(scenario)
    }
}

fn override_with<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// Install a stderr `tracing` subscriber filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
