//! Headline numbers read off a performance curve.

use serde::Serialize;

use crate::curve::PerformanceCurve;

/// A value of interest and the airspeed at which it occurs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OperatingPoint {
    pub airspeed_m_s: f64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvelopeSummary {
    /// Lowest total drag on the sweep.
    pub min_drag: OperatingPoint,
    /// Highest rate of climb on the sweep (may be negative).
    pub best_rate_of_climb: OperatingPoint,
    /// Airspeeds where thrust required equals thrust available, ascending along the sweep.
    pub thrust_crossings_m_s: Vec<f64>,
}

impl PerformanceCurve {
    /// Summarise the curve. Returns `None` only for an empty curve.
    pub fn summary(&self) -> Option<EnvelopeSummary> {
        let min_drag = extremum(self.airspeed_m_s(), self.total_drag_n(), |a, b| a < b)?;
        let best_rate_of_climb =
            extremum(self.airspeed_m_s(), self.rate_of_climb_m_s(), |a, b| a > b)?;
        Some(EnvelopeSummary {
            min_drag,
            best_rate_of_climb,
            thrust_crossings_m_s: self.thrust_crossings(),
        })
    }

    /// Airspeeds where excess thrust changes sign, linearly interpolated between samples.
    ///
    /// A sample that lands exactly on the crossing is reported once, at that sample.
    pub fn thrust_crossings(&self) -> Vec<f64> {
        let samples: Vec<(f64, f64)> = self
            .airspeed_m_s()
            .iter()
            .zip(self.thrust_available_n().iter().zip(self.thrust_required_n()))
            .map(|(&v, (available, required))| (v, available - required))
            .collect();

        let mut crossings = Vec::new();
        for (i, &(v0, e0)) in samples.iter().enumerate() {
            if e0 == 0.0 {
                crossings.push(v0);
                continue;
            }
            let Some(&(v1, e1)) = samples.get(i + 1) else {
                continue;
            };
            if e1 != 0.0 && e0.signum() != e1.signum() {
                let t = e0 / (e0 - e1);
                crossings.push(v0 + t * (v1 - v0));
            }
        }
        crossings
    }
}

fn extremum(
    airspeeds: &[f64],
    values: &[f64],
    better: impl Fn(f64, f64) -> bool,
) -> Option<OperatingPoint> {
    let mut best: Option<OperatingPoint> = None;
    for (&airspeed_m_s, &value) in airspeeds.iter().zip(values) {
        match best {
            Some(current) if !better(value, current.value) => {}
            _ => best = Some(OperatingPoint { airspeed_m_s, value }),
        }
    }
    best
}
