use flight_envelope::atmosphere::density;
use flight_envelope::performance::{AircraftConfig, AirspeedSweep, evaluate_performance};

fn light_trainer() -> AircraftConfig {
    AircraftConfig {
        weight_n: 5000.0,
        wing_area_m2: 18.0,
        cd0: 0.025,
        aspect_ratio: 7.0,
        oswald_efficiency: 0.8,
        max_thrust_n: 1800.0,
    }
}

#[test]
fn summary_locates_min_drag_best_climb_and_crossing() {
    let sweep = AirspeedSweep::linspace(20.0, 120.0, 200).expect("sweep");
    let curve =
        evaluate_performance(&light_trainer(), density(0.0), sweep.as_slice()).expect("curve");
    let summary = curve.summary().expect("summary");

    // D_min = 2W sqrt(k CD0) ~ 377 N
    assert!((summary.min_drag.value - 377.0).abs() < 3.0, "{:?}", summary.min_drag);
    assert!((summary.min_drag.airspeed_m_s - 26.1).abs() < 1.0);

    assert!(summary.best_rate_of_climb.value > 0.0);
    assert!(summary.best_rate_of_climb.airspeed_m_s > summary.min_drag.airspeed_m_s);

    // total drag reaches 1800 N near 80.36 m/s
    assert_eq!(summary.thrust_crossings_m_s.len(), 1);
    let crossing = summary.thrust_crossings_m_s[0];
    assert!((crossing - 80.36).abs() < 0.2, "crossing = {crossing}");
}

#[test]
fn underpowered_aircraft_has_no_crossing() {
    let config = AircraftConfig {
        max_thrust_n: 100.0,
        ..light_trainer()
    };
    let sweep = AirspeedSweep::linspace(20.0, 120.0, 50).expect("sweep");
    let curve = evaluate_performance(&config, density(0.0), sweep.as_slice()).expect("curve");
    let summary = curve.summary().expect("summary");
    assert!(summary.thrust_crossings_m_s.is_empty());
    assert!(summary.best_rate_of_climb.value < 0.0);
}

#[test]
fn two_crossings_when_thrust_sits_between_min_and_edge_drag() {
    let sweep = AirspeedSweep::linspace(12.0, 120.0, 300).expect("sweep");
    let config = AircraftConfig {
        max_thrust_n: 600.0,
        ..light_trainer()
    };
    let curve = evaluate_performance(&config, density(0.0), sweep.as_slice()).expect("curve");
    let crossings = curve.thrust_crossings();
    assert_eq!(crossings.len(), 2, "{crossings:?}");
    assert!(crossings[0] < 26.0 && crossings[1] > 26.0);
}

#[test]
fn exact_sample_crossing_is_reported_once() {
    let rho = density(0.0);
    let speeds = [30.0, 55.0, 90.0];
    let base = evaluate_performance(&light_trainer(), rho, &speeds).expect("curve");
    let config = AircraftConfig {
        max_thrust_n: base.total_drag_n()[1],
        ..light_trainer()
    };
    let curve = evaluate_performance(&config, rho, &speeds).expect("curve");
    assert_eq!(curve.thrust_crossings(), vec![55.0]);
}
