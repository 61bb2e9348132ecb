//! Prepared one-step integrators.
//!
//! Both schemes advance the state equation dθ/dt = As·θ + Bs·u by a fixed
//! dt. The matrices applied at every step depend only on (As, Bs, dt), so
//! they are assembled once at construction; the implicit scheme pays its
//! matrix inversion there and never again.

use nalgebra::{DMatrix, DVector};
use tn_solver::StateSpace;

use crate::error::{SimError, SimResult};

/// One fixed step of a time integrator.
pub trait Stepper {
    /// Advance the state by one step under the input held over the step.
    fn advance(&self, state: &DVector<f64>, input: &DVector<f64>) -> DVector<f64>;

    /// Number of states this stepper was prepared for.
    fn state_count(&self) -> usize;

    /// Number of inputs this stepper was prepared for.
    fn input_count(&self) -> usize;
}

fn check_dt(dt: f64) -> SimResult<f64> {
    if dt.is_finite() && dt > 0.0 {
        Ok(dt)
    } else {
        Err(SimError::InvalidArg {
            what: "dt must be positive and finite",
        })
    }
}

/// Forward (explicit) Euler: θ[k+1] = (I + dt·As)·θ[k] + dt·Bs·u[k].
///
/// One matrix-vector multiply per step; diverges when dt exceeds the
/// advisory maximum stable step. Choosing dt is the caller's policy.
#[derive(Debug, Clone)]
pub struct ExplicitEuler {
    transition: DMatrix<f64>,
    input_gain: DMatrix<f64>,
}

impl ExplicitEuler {
    /// Prepare the stepper for a system and step size.
    pub fn new(system: &StateSpace, dt: f64) -> SimResult<Self> {
        let dt = check_dt(dt)?;
        let n = system.state_count();
        let transition = DMatrix::identity(n, n) + dt * &system.a;
        let input_gain = dt * &system.b;
        Ok(Self {
            transition,
            input_gain,
        })
    }
}

impl Stepper for ExplicitEuler {
    fn advance(&self, state: &DVector<f64>, input: &DVector<f64>) -> DVector<f64> {
        &self.transition * state + &self.input_gain * input
    }

    fn state_count(&self) -> usize {
        self.transition.nrows()
    }

    fn input_count(&self) -> usize {
        self.input_gain.ncols()
    }
}

/// Backward (implicit) Euler: θ[k+1] = (I − dt·As)⁻¹·(θ[k] + dt·Bs·u[k]).
///
/// Unconditionally stable for circuits whose state matrix has a decaying
/// spectrum. The inverse is computed once here and reused every step.
#[derive(Debug, Clone)]
pub struct ImplicitEuler {
    transition: DMatrix<f64>,
    input_gain: DMatrix<f64>,
}

impl ImplicitEuler {
    /// Prepare the stepper, inverting (I − dt·As) once.
    pub fn new(system: &StateSpace, dt: f64) -> SimResult<Self> {
        let dt = check_dt(dt)?;
        let n = system.state_count();
        let transition = (DMatrix::identity(n, n) - dt * &system.a)
            .try_inverse()
            .ok_or(SimError::SingularStepMatrix { dt })?;
        let input_gain = dt * &system.b;
        Ok(Self {
            transition,
            input_gain,
        })
    }
}

impl Stepper for ImplicitEuler {
    fn advance(&self, state: &DVector<f64>, input: &DVector<f64>) -> DVector<f64> {
        &self.transition * (state + &self.input_gain * input)
    }

    fn state_count(&self) -> usize {
        self.transition.nrows()
    }

    fn input_count(&self) -> usize {
        self.input_gain.ncols()
    }
}
