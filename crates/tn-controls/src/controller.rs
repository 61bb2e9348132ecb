//! Proportional feedback applied to recorded outputs.

use serde::{Deserialize, Serialize};

use crate::error::{ControlError, ControlResult};

/// Proportional (P-only) feedback configuration.
///
/// The delivered heat flow is q = gain · (setpoint − measured), W per K of
/// tracking error. Large gains approximate perfect setpoint tracking when
/// the same value is used as the controller-branch conductance; a
/// vanishing gain leaves the building free-running.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Proportional {
    /// Proportional gain, W/K.
    pub gain: f64,
}

impl Proportional {
    /// Create a proportional controller.
    ///
    /// The gain must be finite and non-negative.
    pub fn new(gain: f64) -> ControlResult<Self> {
        if !gain.is_finite() || gain < 0.0 {
            return Err(ControlError::InvalidArg {
                what: "gain must be finite and non-negative",
            });
        }
        Ok(Self { gain })
    }

    /// Feedback heat flow for one sample.
    pub fn heat_flow(&self, setpoint: f64, measured: f64) -> f64 {
        self.gain * (setpoint - measured)
    }

    /// Feedback heat flow over a trajectory with a per-step setpoint.
    pub fn heat_flow_series(
        &self,
        setpoints: &[f64],
        measured: &[f64],
    ) -> ControlResult<Vec<f64>> {
        if setpoints.len() != measured.len() {
            return Err(ControlError::DimensionMismatch {
                what: "setpoint series",
                expected: measured.len(),
                actual: setpoints.len(),
            });
        }
        Ok(setpoints
            .iter()
            .zip(measured)
            .map(|(&sp, &pv)| self.heat_flow(sp, pv))
            .collect())
    }

    /// Feedback heat flow over a trajectory with a constant setpoint.
    pub fn heat_flow_at(&self, setpoint: f64, measured: &[f64]) -> Vec<f64> {
        measured
            .iter()
            .map(|&pv| self.heat_flow(setpoint, pv))
            .collect()
    }
}
