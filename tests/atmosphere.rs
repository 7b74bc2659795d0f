use flight_envelope::atmosphere::{Regime, density, sample};
use flight_envelope::physics::isa::{SEA_LEVEL_DENSITY_KG_M3, TROPOPAUSE_ALTITUDE_M};

#[test]
fn sea_level_density_matches_standard_value() {
    let rho = density(0.0);
    assert!((rho - SEA_LEVEL_DENSITY_KG_M3).abs() < 1e-3, "rho0 = {rho}");
}

#[test]
fn density_decreases_through_troposphere() {
    let mut previous = density(0.0);
    for step in 1..=110 {
        let h = step as f64 * 100.0;
        let rho = density(h);
        assert!(rho < previous, "density not decreasing at {h} m");
        previous = rho;
    }
}

#[test]
fn negative_altitudes_clamp_to_sea_level() {
    assert_eq!(density(-1.0), density(0.0));
    assert_eq!(density(-500.0), density(0.0));
    assert_eq!(density(f64::NEG_INFINITY), density(0.0));
}

#[test]
fn upper_layer_is_frozen_at_tropopause_density() {
    let at_tropopause = density(TROPOPAUSE_ALTITUDE_M);
    for h in [11_000.5, 12_000.0, 20_000.0, 50_000.0, 1.0e6] {
        assert_eq!(density(h), at_tropopause, "h = {h}");
    }
    // ~0.364 kg/m^3 at 11 km in the standard atmosphere
    assert!((at_tropopause - 0.364).abs() < 5e-3, "rho11 = {at_tropopause}");
}

#[test]
fn density_is_continuous_across_the_tropopause() {
    let below = density(TROPOPAUSE_ALTITUDE_M - 1e-6);
    let above = density(TROPOPAUSE_ALTITUDE_M + 1e-6);
    assert!((below - above).abs() < 1e-9);
}

#[test]
fn sample_reports_state_and_regime() {
    let sea = sample(-200.0);
    assert_eq!(sea.regime, Regime::Troposphere);
    assert_eq!(sea.altitude_m, -200.0);
    assert_eq!(sea.effective_altitude_m, 0.0);
    assert!((sea.temperature_k - 288.15).abs() < 1e-12);
    assert!((sea.pressure_pa - 101_325.0).abs() < 1e-9);

    let high = sample(15_000.0);
    assert_eq!(high.regime, Regime::FrozenUpper);
    assert_eq!(high.effective_altitude_m, TROPOPAUSE_ALTITUDE_M);
    assert!((high.temperature_k - 216.65).abs() < 1e-9);
    assert_eq!(high.density_kg_m3, density(15_000.0));

    assert_eq!(Regime::for_altitude(TROPOPAUSE_ALTITUDE_M), Regime::Troposphere);
    assert_eq!(Regime::for_altitude(-500.0), Regime::Troposphere);
}

#[test]
fn density_is_positive_for_extreme_inputs() {
    for h in [-1.0e9, 0.0, 5_000.0, 11_000.0, 1.0e9, f64::INFINITY] {
        let rho = density(h);
        assert!(rho.is_finite() && rho > 0.0, "h = {h}, rho = {rho}");
    }
}
