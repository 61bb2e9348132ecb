//! Fixed-step time-domain simulation of reduced thermal circuits.
//!
//! Provides:
//! - Prepared one-step integrators (explicit and implicit Euler) whose
//!   per-step matrices are assembled once at construction
//! - An advisory maximum stable time step for the explicit scheme
//! - A sequential simulation runner producing aligned state and output
//!   trajectories, plus a rayon helper for independent runs

pub mod error;
pub mod sim;
pub mod stability;
pub mod stepper;

pub use error::{SimError, SimResult};
pub use sim::{simulate, simulate_many, Scheme, SimCase, Trajectory};
pub use stability::dt_max;
pub use stepper::{ExplicitEuler, ImplicitEuler, Stepper};
