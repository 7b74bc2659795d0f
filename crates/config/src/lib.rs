//! Scenario models and loaders for the flight envelope evaluator.
//!
//! A scenario names an aircraft, the altitude it flies at and the airspeed sweep to evaluate.
//! Every field has a default, so an empty scenario reproduces the reference light aircraft:
//! 5000 N, 18 m² wing, CD0 0.025, AR 7, e 0.8, 1800 N thrust, sea level, 20 to 120 m/s.
//! Unknown keys are rejected.

use std::fs::File;
use std::path::{Path, PathBuf};

use envelope_performance::{AircraftConfig, AirspeedSweep, PerformanceError};
use serde::Deserialize;
use thiserror::Error;

/// One evaluation case parsed from a scenario file.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub aircraft: AircraftSection,
    #[serde(default)]
    pub flight: FlightSection,
}

/// Aircraft parameters as written in scenario files.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AircraftSection {
    pub weight_n: f64,
    pub wing_area_m2: f64,
    pub cd0: f64,
    pub aspect_ratio: f64,
    pub oswald_efficiency: f64,
    pub max_thrust_n: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FlightSection {
    pub altitude_m: f64,
    pub airspeed: SweepSection,
}

/// Inclusive, evenly spaced airspeed range.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SweepSection {
    pub start_m_s: f64,
    pub end_m_s: f64,
    pub points: usize,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            aircraft: AircraftSection::default(),
            flight: FlightSection::default(),
        }
    }
}

impl Default for AircraftSection {
    fn default() -> Self {
        Self {
            weight_n: 5000.0,
            wing_area_m2: 18.0,
            cd0: 0.025,
            aspect_ratio: 7.0,
            oswald_efficiency: 0.8,
            max_thrust_n: 1800.0,
        }
    }
}

impl Default for FlightSection {
    fn default() -> Self {
        Self {
            altitude_m: 0.0,
            airspeed: SweepSection::default(),
        }
    }
}

impl Default for SweepSection {
    fn default() -> Self {
        Self {
            start_m_s: 20.0,
            end_m_s: 120.0,
            points: 200,
        }
    }
}

fn default_name() -> String {
    "default".to_string()
}

impl ScenarioConfig {
    /// Aircraft value for the evaluator. Not validated here; the evaluator does that.
    pub fn aircraft(&self) -> AircraftConfig {
        let a = &self.aircraft;
        AircraftConfig {
            weight_n: a.weight_n,
            wing_area_m2: a.wing_area_m2,
            cd0: a.cd0,
            aspect_ratio: a.aspect_ratio,
            oswald_efficiency: a.oswald_efficiency,
            max_thrust_n: a.max_thrust_n,
        }
    }

    /// Build the validated airspeed sweep described by the scenario.
    pub fn sweep(&self) -> Result<AirspeedSweep, ConfigError> {
        let s = &self.flight.airspeed;
        Ok(AirspeedSweep::linspace(s.start_m_s, s.end_m_s, s.points)?)
    }
}

/// Errors that can occur while loading or binding scenario files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("scenario '{0}' not found")]
    UnknownScenario(String),
    #[error("no scenarios found")]
    Empty,
    #[error(transparent)]
    Performance(#[from] PerformanceError),
}

/// Load scenarios from a `.toml` file, a YAML list, or a directory of `.toml` files.
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<ScenarioConfig>, ConfigError> {
    let path = path.as_ref();
    let scenarios: Vec<ScenarioConfig> = load_records(path)?;
    tracing::debug!(path = %path.display(), count = scenarios.len(), "loaded scenarios");
    Ok(scenarios)
}

/// Pick a scenario by case-insensitive name, or the first one when no name is given.
pub fn select_scenario(
    scenarios: &[ScenarioConfig],
    name: Option<&str>,
) -> Result<ScenarioConfig, ConfigError> {
    match name {
        Some(wanted) => scenarios
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(wanted))
            .cloned()
            .ok_or_else(|| ConfigError::UnknownScenario(wanted.to_string())),
        None => scenarios.first().cloned().ok_or(ConfigError::Empty),
    }
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_toml(path))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}
