//! Simulation runner and trajectory recording.

use nalgebra::{DMatrix, DVector};
use rayon::prelude::*;
use tn_solver::StateSpace;
use tracing::debug;

use crate::error::{SimError, SimResult};
use crate::stepper::{ExplicitEuler, ImplicitEuler, Stepper};

/// Integration scheme selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Scheme {
    /// Backward Euler (default: unconditionally stable, one inversion at setup).
    #[default]
    ImplicitEuler,
    /// Forward Euler (cheapest per step, stable only below the advisory dt_max).
    ExplicitEuler,
}

/// Recorded result of one simulation run.
///
/// Column k of `states` and `outputs` corresponds to `time[k]` and to
/// column k of the input trajectory the run was driven with.
#[derive(Debug, Clone)]
pub struct Trajectory {
    /// Time points, seconds from the start of the run.
    pub time: Vec<f64>,
    /// State temperatures, state count x step count.
    pub states: DMatrix<f64>,
    /// Reconstructed outputs y[k] = Cs·θ[k] + Ds·u[k], output count x step count.
    pub outputs: DMatrix<f64>,
}

impl Trajectory {
    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// True for a zero-step trajectory.
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// One output channel as a time series.
    pub fn output_series(&self, channel: usize) -> Vec<f64> {
        self.outputs.row(channel).iter().copied().collect()
    }
}

/// Integrate a system over an input trajectory with a fixed step.
///
/// `inputs` has one column per step (input count x step count); the state
/// trajectory starts from `initial` and column k+1 is advanced from column
/// k under input column k. Outputs are reconstructed at every step
/// independent of the scheme. Instability of the explicit scheme above the
/// advisory bound is not detected here; it surfaces as diverging values.
pub fn simulate(
    system: &StateSpace,
    scheme: Scheme,
    dt: f64,
    initial: &DVector<f64>,
    inputs: &DMatrix<f64>,
) -> SimResult<Trajectory> {
    match scheme {
        Scheme::ExplicitEuler => {
            let stepper = ExplicitEuler::new(system, dt)?;
            run(system, &stepper, dt, initial, inputs)
        }
        Scheme::ImplicitEuler => {
            let stepper = ImplicitEuler::new(system, dt)?;
            run(system, &stepper, dt, initial, inputs)
        }
    }
}

/// Integrate with an already-prepared stepper.
pub fn run<S: Stepper>(
    system: &StateSpace,
    stepper: &S,
    dt: f64,
    initial: &DVector<f64>,
    inputs: &DMatrix<f64>,
) -> SimResult<Trajectory> {
    let ns = system.state_count();
    let nu = system.input_count();
    let n = inputs.ncols();

    if initial.len() != ns {
        return Err(SimError::DimensionMismatch {
            what: "initial state",
            expected: ns,
            actual: initial.len(),
        });
    }
    if inputs.nrows() != nu {
        return Err(SimError::DimensionMismatch {
            what: "input trajectory rows",
            expected: nu,
            actual: inputs.nrows(),
        });
    }
    if stepper.state_count() != ns || stepper.input_count() != nu {
        return Err(SimError::DimensionMismatch {
            what: "stepper dimensions",
            expected: ns,
            actual: stepper.state_count(),
        });
    }
    if n == 0 {
        return Err(SimError::InvalidArg {
            what: "input trajectory must contain at least one step",
        });
    }

    let mut states = DMatrix::zeros(ns, n);
    states.set_column(0, initial);

    // Each step depends on the previous one; the loop is inherently serial.
    for k in 0..n - 1 {
        let next = stepper.advance(&states.column(k).into_owned(), &inputs.column(k).into_owned());
        states.set_column(k + 1, &next);
    }

    let outputs = &system.c * &states + &system.d * inputs;
    let time = (0..n).map(|k| k as f64 * dt).collect();

    debug!(steps = n, states = ns, "simulation run complete");

    Ok(Trajectory {
        time,
        states,
        outputs,
    })
}

/// One simulation request for `simulate_many`.
#[derive(Debug, Clone)]
pub struct SimCase<'a> {
    pub system: &'a StateSpace,
    pub scheme: Scheme,
    pub dt: f64,
    pub initial: DVector<f64>,
    pub inputs: DMatrix<f64>,
}

/// Run independent simulations in parallel.
///
/// The time loop inside each run stays sequential; only whole runs are
/// distributed across threads, which is the one parallelization this
/// problem admits.
pub fn simulate_many(cases: &[SimCase<'_>]) -> SimResult<Vec<Trajectory>> {
    cases
        .par_iter()
        .map(|case| simulate(case.system, case.scheme, case.dt, &case.initial, &case.inputs))
        .collect()
}
