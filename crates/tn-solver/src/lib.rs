//! Circuit-to-state-space conversion and steady-state solving.
//!
//! This crate turns a validated `ThermalCircuit` into a linear
//! time-invariant state-space system
//!
//! ```text
//! dθs/dt = As·θs + Bs·u        y = Cs·θs + Ds·u
//! ```
//!
//! where θs collects the temperatures of nodes with thermal capacity and u
//! the active external sources. Zero-capacity nodes are eliminated through
//! the steady balance at those nodes; the elimination is an explicit
//! partition → reduce → assemble pipeline so that the only failure mode, a
//! non-invertible algebraic block, stays an isolated, testable step.

pub mod error;
pub mod reduce;
pub mod statespace;
pub mod steady;

pub use error::{SolverError, SolverResult};
pub use reduce::circuit_to_state_space;
pub use statespace::StateSpace;
pub use steady::{solve_steady, solve_steady_inputs, SteadyState};
