//! Error types for simulation operations.

use thiserror::Error;

/// Errors encountered while preparing or running a simulation.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Dimension mismatch in {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The implicit step matrix (I − dt·As) could not be inverted.
    #[error("Singular step matrix for dt = {dt}")]
    SingularStepMatrix { dt: f64 },
}

pub type SimResult<T> = Result<T, SimError>;
