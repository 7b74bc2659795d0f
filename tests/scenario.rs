use std::fs;

use flight_envelope::config::{ConfigError, ScenarioConfig, load_scenarios, select_scenario};
use flight_envelope::envelope::evaluate_scenario;
use flight_envelope::performance::PerformanceError;

#[test]
fn default_scenario_reproduces_reference_aircraft() {
    let scenario = ScenarioConfig::default();
    let aircraft = scenario.aircraft();
    assert_eq!(aircraft.weight_n, 5000.0);
    assert_eq!(aircraft.wing_area_m2, 18.0);
    assert_eq!(aircraft.cd0, 0.025);
    assert_eq!(aircraft.aspect_ratio, 7.0);
    assert_eq!(aircraft.oswald_efficiency, 0.8);
    assert_eq!(aircraft.max_thrust_n, 1800.0);
    assert_eq!(scenario.flight.altitude_m, 0.0);

    let sweep = scenario.sweep().expect("sweep");
    assert_eq!(sweep.len(), 200);
    assert_eq!(sweep.as_slice()[0], 20.0);
    assert_eq!(sweep.as_slice()[199], 120.0);
}

#[test]
fn aircraft_catalog_directory_loads_sorted_toml_files() {
    let scenarios = load_scenarios("configs/aircraft").expect("catalog");
    assert_eq!(scenarios.len(), 2);
    assert_eq!(scenarios[0].name, "light-trainer");
    assert_eq!(scenarios[1].name, "motor-glider");
    assert_eq!(scenarios[0], ScenarioConfig {
        name: "light-trainer".to_string(),
        ..ScenarioConfig::default()
    });

    let glider = select_scenario(&scenarios, Some("MOTOR-GLIDER")).expect("glider");
    assert_eq!(glider.flight.altitude_m, 1500.0);
    assert_eq!(glider.flight.airspeed.points, 150);
}

#[test]
fn yaml_list_fills_missing_fields_with_defaults() {
    let scenarios = load_scenarios("configs/scenarios.yaml").expect("yaml");
    assert_eq!(scenarios.len(), 2);
    let high = select_scenario(&scenarios, Some("light-trainer-high")).expect("high");
    assert_eq!(high.flight.altitude_m, 3000.0);
    assert_eq!(high.aircraft, scenarios[0].aircraft);
    assert_eq!(high.flight.airspeed, scenarios[0].flight.airspeed);

    let first = select_scenario(&scenarios, None).expect("first");
    assert_eq!(first.name, "light-trainer");
}

#[test]
fn unknown_and_empty_selections_are_errors() {
    let scenarios = load_scenarios("configs/aircraft").expect("catalog");
    assert!(matches!(
        select_scenario(&scenarios, Some("airliner")),
        Err(ConfigError::UnknownScenario(name)) if name == "airliner"
    ));
    assert!(matches!(select_scenario(&[], None), Err(ConfigError::Empty)));
}

#[test]
fn single_toml_file_and_parse_errors() {
    let dir = tempfile::tempdir().expect("tempdir");
    let good = dir.path().join("fast.toml");
    fs::write(
        &good,
        "name = \"fast\"\n[aircraft]\nmax_thrust_n = 4000.0\n[flight.airspeed]\npoints = 10\n",
    )
    .expect("write toml");
    let scenarios = load_scenarios(&good).expect("toml");
    assert_eq!(scenarios.len(), 1);
    assert_eq!(scenarios[0].aircraft.max_thrust_n, 4000.0);
    assert_eq!(scenarios[0].aircraft.weight_n, 5000.0);
    assert_eq!(scenarios[0].flight.airspeed.points, 10);
    assert_eq!(scenarios[0].flight.airspeed.start_m_s, 20.0);

    let bad = dir.path().join("bad.toml");
    fs::write(&bad, "name = [").expect("write toml");
    assert!(matches!(load_scenarios(&bad), Err(ConfigError::Toml(_))));

    let missing = dir.path().join("missing.yaml");
    assert!(matches!(load_scenarios(&missing), Err(ConfigError::Io(_))));
}

#[test]
fn misspelled_keys_are_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let toml_path = dir.path().join("typo.toml");
    fs::write(
        &toml_path,
        "name = \"typo\"\n[aircraft]\nweight = 9000.0\nmax_thrust = 500.0\n",
    )
    .expect("write toml");
    match load_scenarios(&toml_path) {
        Err(ConfigError::Toml(err)) => assert!(err.to_string().contains("weight"), "{err}"),
        other => panic!("expected TOML error, got {other:?}"),
    }

    let nested = dir.path().join("sweep.toml");
    fs::write(&nested, "[flight.airspeed]\nstart = 10.0\n").expect("write toml");
    assert!(matches!(load_scenarios(&nested), Err(ConfigError::Toml(_))));

    let yaml_path = dir.path().join("typo.yaml");
    fs::write(&yaml_path, "- name: typo\n  flight:\n    altitude: 2000.0\n").expect("write yaml");
    assert!(matches!(load_scenarios(&yaml_path), Err(ConfigError::Parse(_))));
}

#[test]
fn evaluate_scenario_runs_the_whole_pipeline() {
    let evaluation = evaluate_scenario(ScenarioConfig::default()).expect("evaluation");
    assert!((evaluation.atmosphere.density_kg_m3 - 1.225).abs() < 1e-3);
    assert_eq!(evaluation.curve.len(), 200);
    let summary = evaluation.summary.as_ref().expect("summary");
    assert_eq!(summary.thrust_crossings_m_s.len(), 1);
}

#[test]
fn invalid_scenarios_surface_performance_errors() {
    let mut scenario = ScenarioConfig::default();
    scenario.aircraft.oswald_efficiency = 1.5;
    assert!(matches!(
        evaluate_scenario(scenario),
        Err(ConfigError::Performance(PerformanceError::InvalidConfig {
            field: "oswald_efficiency",
            ..
        }))
    ));

    let mut scenario = ScenarioConfig::default();
    scenario.flight.airspeed.points = 0;
    assert!(matches!(
        evaluate_scenario(scenario),
        Err(ConfigError::Performance(PerformanceError::InvalidSweep(_)))
    ));
}
