//! Two-layer International Standard Atmosphere approximation.
//!
//! Below the tropopause temperature falls linearly with altitude and pressure follows the
//! barometric formula. Above 11 km the model does not continue into the isothermal
//! stratosphere: temperature, pressure and density stay frozen at their tropopause values.
//! That flattening is a known approximation of the model, so callers asking for densities at
//! cruise altitudes of jet aircraft will get the 11 km density back.

use envelope_core::constants::{GAS_CONSTANT_AIR, GRAVITY_M_S2};
use envelope_core::isa::{
    LAPSE_RATE_K_M, SEA_LEVEL_PRESSURE_PA, SEA_LEVEL_TEMPERATURE_K, TROPOPAUSE_ALTITUDE_M,
};
use serde::Serialize;

/// Which layer of the model produced a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Regime {
    /// Linear lapse-rate layer, 0 m to the tropopause inclusive.
    Troposphere,
    /// Everything above the tropopause, held at tropopause conditions.
    FrozenUpper,
}

impl Regime {
    /// Select the layer for an altitude. Negative altitudes select `Troposphere`.
    pub fn for_altitude(altitude_m: f64) -> Self {
        if altitude_m > TROPOPAUSE_ALTITUDE_M {
            Regime::FrozenUpper
        } else {
            Regime::Troposphere
        }
    }
}

/// Atmospheric state at one requested altitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AtmosphereSample {
    /// Altitude as requested by the caller.
    pub altitude_m: f64,
    /// Altitude the model actually evaluated after clamping and flattening.
    pub effective_altitude_m: f64,
    pub temperature_k: f64,
    pub pressure_pa: f64,
    pub density_kg_m3: f64,
    pub regime: Regime,
}

/// Air density (kg/m³) at the given altitude (m).
///
/// Total over all inputs: altitudes below zero evaluate at sea level and altitudes above the
/// tropopause evaluate at the tropopause.
pub fn density(altitude_m: f64) -> f64 {
    sample(altitude_m).density_kg_m3
}

/// Full atmospheric state at the given altitude (m).
pub fn sample(altitude_m: f64) -> AtmosphereSample {
    let regime = Regime::for_altitude(altitude_m);
    let effective_altitude_m = match regime {
        Regime::Troposphere => altitude_m.max(0.0),
        Regime::FrozenUpper => {
            tracing::debug!(
                altitude_m,
                "altitude above tropopause; using frozen tropopause conditions"
            );
            TROPOPAUSE_ALTITUDE_M
        }
    };

    let temperature_k = SEA_LEVEL_TEMPERATURE_K + LAPSE_RATE_K_M * effective_altitude_m;
    let exponent = -GRAVITY_M_S2 / (GAS_CONSTANT_AIR * LAPSE_RATE_K_M);
    let pressure_pa =
        SEA_LEVEL_PRESSURE_PA * (temperature_k / SEA_LEVEL_TEMPERATURE_K).powf(exponent);
    let density_kg_m3 = pressure_pa / (GAS_CONSTANT_AIR * temperature_k);

    AtmosphereSample {
        altitude_m,
        effective_altitude_m,
        temperature_k,
        pressure_pa,
        density_kg_m3,
        regime,
    }
}
