//! Elementwise derivation of the performance curves.

use serde::Serialize;

use crate::aircraft::AircraftConfig;
use crate::{PerformanceError, sweep};

/// All derived quantities at a single airspeed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PerformancePoint {
    pub airspeed_m_s: f64,
    pub lift_coefficient: f64,
    pub drag_coefficient: f64,
    pub dynamic_pressure_pa: f64,
    pub lift_n: f64,
    pub parasite_drag_n: f64,
    pub induced_drag_n: f64,
    pub total_drag_n: f64,
    pub thrust_required_n: f64,
    pub thrust_available_n: f64,
    pub rate_of_climb_m_s: f64,
}

/// Parallel sequences indexed identically to the airspeed sweep that produced them.
///
/// Only the evaluator builds a curve, so every sequence always has the sweep's length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceCurve {
    airspeed_m_s: Vec<f64>,
    lift_coefficient: Vec<f64>,
    drag_coefficient: Vec<f64>,
    dynamic_pressure_pa: Vec<f64>,
    lift_n: Vec<f64>,
    parasite_drag_n: Vec<f64>,
    induced_drag_n: Vec<f64>,
    total_drag_n: Vec<f64>,
    thrust_required_n: Vec<f64>,
    thrust_available_n: Vec<f64>,
    rate_of_climb_m_s: Vec<f64>,
}

impl PerformanceCurve {
    fn with_capacity(len: usize) -> Self {
        Self {
            airspeed_m_s: Vec::with_capacity(len),
            lift_coefficient: Vec::with_capacity(len),
            drag_coefficient: Vec::with_capacity(len),
            dynamic_pressure_pa: Vec::with_capacity(len),
            lift_n: Vec::with_capacity(len),
            parasite_drag_n: Vec::with_capacity(len),
            induced_drag_n: Vec::with_capacity(len),
            total_drag_n: Vec::with_capacity(len),
            thrust_required_n: Vec::with_capacity(len),
            thrust_available_n: Vec::with_capacity(len),
            rate_of_climb_m_s: Vec::with_capacity(len),
        }
    }

    fn push(&mut self, point: PerformancePoint) {
        self.airspeed_m_s.push(point.airspeed_m_s);
        self.lift_coefficient.push(point.lift_coefficient);
        self.drag_coefficient.push(point.drag_coefficient);
        self.dynamic_pressure_pa.push(point.dynamic_pressure_pa);
        self.lift_n.push(point.lift_n);
        self.parasite_drag_n.push(point.parasite_drag_n);
        self.induced_drag_n.push(point.induced_drag_n);
        self.total_drag_n.push(point.total_drag_n);
        self.thrust_required_n.push(point.thrust_required_n);
        self.thrust_available_n.push(point.thrust_available_n);
        self.rate_of_climb_m_s.push(point.rate_of_climb_m_s);
    }

    pub fn len(&self) -> usize {
        self.airspeed_m_s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airspeed_m_s.is_empty()
    }

    pub fn airspeed_m_s(&self) -> &[f64] {
        &self.airspeed_m_s
    }

    pub fn lift_coefficient(&self) -> &[f64] {
        &self.lift_coefficient
    }

    pub fn drag_coefficient(&self) -> &[f64] {
        &self.drag_coefficient
    }

    pub fn dynamic_pressure_pa(&self) -> &[f64] {
        &self.dynamic_pressure_pa
    }

    pub fn lift_n(&self) -> &[f64] {
        &self.lift_n
    }

    pub fn parasite_drag_n(&self) -> &[f64] {
        &self.parasite_drag_n
    }

    pub fn induced_drag_n(&self) -> &[f64] {
        &self.induced_drag_n
    }

    pub fn total_drag_n(&self) -> &[f64] {
        &self.total_drag_n
    }

    pub fn thrust_required_n(&self) -> &[f64] {
        &self.thrust_required_n
    }

    pub fn thrust_available_n(&self) -> &[f64] {
        &self.thrust_available_n
    }

    pub fn rate_of_climb_m_s(&self) -> &[f64] {
        &self.rate_of_climb_m_s
    }

    /// Values at sweep index `index`, if in range.
    pub fn point(&self, index: usize) -> Option<PerformancePoint> {
        Some(PerformancePoint {
            airspeed_m_s: *self.airspeed_m_s.get(index)?,
            lift_coefficient: *self.lift_coefficient.get(index)?,
            drag_coefficient: *self.drag_coefficient.get(index)?,
            dynamic_pressure_pa: *self.dynamic_pressure_pa.get(index)?,
            lift_n: *self.lift_n.get(index)?,
            parasite_drag_n: *self.parasite_drag_n.get(index)?,
            induced_drag_n: *self.induced_drag_n.get(index)?,
            total_drag_n: *self.total_drag_n.get(index)?,
            thrust_required_n: *self.thrust_required_n.get(index)?,
            thrust_available_n: *self.thrust_available_n.get(index)?,
            rate_of_climb_m_s: *self.rate_of_climb_m_s.get(index)?,
        })
    }

    /// Iterate the curve one airspeed at a time, in sweep order.
    pub fn points(&self) -> impl Iterator<Item = PerformancePoint> + '_ {
        (0..self.len()).filter_map(|i| self.point(i))
    }
}

/// Evaluate steady level-flight performance at every airspeed of the sweep.
///
/// Config, density and sweep are validated up front; on success every output sequence has
/// the sweep's length and ordering. Lift is assumed equal to weight at every sample and thrust
/// available is the constant `max_thrust_n`.
pub fn evaluate_performance(
    config: &AircraftConfig,
    density_kg_m3: f64,
    airspeeds_m_s: &[f64],
) -> Result<PerformanceCurve, PerformanceError> {
    config.validate()?;
    if !density_kg_m3.is_finite() || density_kg_m3 <= 0.0 {
        return Err(PerformanceError::InvalidDensity(density_kg_m3));
    }
    sweep::validate(airspeeds_m_s)?;

    let k = config.induced_drag_factor();
    let mut curve = PerformanceCurve::with_capacity(airspeeds_m_s.len());
    for &airspeed in airspeeds_m_s {
        curve.push(evaluate_point(config, k, density_kg_m3, airspeed));
    }

    tracing::debug!(
        points = curve.len(),
        density_kg_m3,
        induced_drag_factor = k,
        "evaluated performance curve"
    );
    Ok(curve)
}

fn evaluate_point(config: &AircraftConfig, k: f64, rho: f64, v: f64) -> PerformancePoint {
    let s = config.wing_area_m2;
    let weight = config.weight_n;

    let cl = 2.0 * weight / (rho * v * v * s);
    let cd = config.cd0 + k * cl * cl;
    let q = 0.5 * rho * v * v;

    let lift = q * s * cl;
    let parasite = q * s * config.cd0;
    let induced = q * s * (cd - config.cd0);
    let total_drag = parasite + induced;
    let thrust_available = config.max_thrust_n;
    // excess power over weight
    let rate_of_climb = (thrust_available - total_drag) * v / weight;

    PerformancePoint {
        airspeed_m_s: v,
        lift_coefficient: cl,
        drag_coefficient: cd,
        dynamic_pressure_pa: q,
        lift_n: lift,
        parasite_drag_n: parasite,
        induced_drag_n: induced,
        total_drag_n: total_drag,
        thrust_required_n: total_drag,
        thrust_available_n: thrust_available,
        rate_of_climb_m_s: rate_of_climb,
    }
}
