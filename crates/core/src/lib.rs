//! Core constants and shared primitives for the flight envelope workspace.

/// Physical constants expressed in SI units.
pub mod constants {
    /// Gravitational acceleration used by the barometric formula (m/s²).
    pub const GRAVITY_M_S2: f64 = 9.81;
    /// Specific gas constant for dry air (J/(kg·K)).
    pub const GAS_CONSTANT_AIR: f64 = 287.058;
}

/// International Standard Atmosphere reference values.
pub mod isa {
    /// Sea-level standard temperature (K).
    pub const SEA_LEVEL_TEMPERATURE_K: f64 = 288.15;
    /// Sea-level standard pressure (Pa).
    pub const SEA_LEVEL_PRESSURE_PA: f64 = 101_325.0;
    /// Tropospheric temperature lapse rate (K/m). Negative: temperature falls with altitude.
    pub const LAPSE_RATE_K_M: f64 = -0.0065;
    /// Altitude of the tropopause (m).
    pub const TROPOPAUSE_ALTITUDE_M: f64 = 11_000.0;
    /// Nominal sea-level density (kg/m³), for reference checks only.
    pub const SEA_LEVEL_DENSITY_KG_M3: f64 = 1.225;
}
