//! Validated airspeed sweeps.

use serde::Serialize;

use crate::PerformanceError;

/// Ordered, non-empty sequence of strictly positive airspeeds (m/s).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirspeedSweep(Vec<f64>);

impl AirspeedSweep {
    pub fn new(airspeeds_m_s: Vec<f64>) -> Result<Self, PerformanceError> {
        validate(&airspeeds_m_s)?;
        Ok(Self(airspeeds_m_s))
    }

    /// Evenly spaced sweep with both endpoints included.
    ///
    /// A single point yields `[start]`; zero points is rejected as an empty sweep.
    pub fn linspace(start_m_s: f64, end_m_s: f64, points: usize) -> Result<Self, PerformanceError> {
        let airspeeds = match points {
            0 => Vec::new(),
            1 => vec![start_m_s],
            _ => {
                let step = (end_m_s - start_m_s) / (points - 1) as f64;
                (0..points)
                    .map(|i| {
                        if i == points - 1 {
                            end_m_s
                        } else {
                            start_m_s + step * i as f64
                        }
                    })
                    .collect()
            }
        };
        Self::new(airspeeds)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

pub(crate) fn validate(airspeeds_m_s: &[f64]) -> Result<(), PerformanceError> {
    if airspeeds_m_s.is_empty() {
        return Err(PerformanceError::InvalidSweep(
            "airspeed sweep is empty".to_string(),
        ));
    }
    if let Some((index, value)) = airspeeds_m_s
        .iter()
        .enumerate()
        .find(|(_, v)| !v.is_finite() || **v <= 0.0)
    {
        return Err(PerformanceError::InvalidSweep(format!(
            "airspeed at index {index} must be finite and positive, got {value}"
        )));
    }
    Ok(())
}
