//! Error types for solver operations.

use thiserror::Error;
use tn_circuit::CircuitError;
use tn_core::TnError;

/// Errors that can occur while reducing a circuit or solving it.
#[derive(Error, Debug)]
pub enum SolverError {
    /// The linear system that determines the eliminated (zero-capacity)
    /// node temperatures is not invertible; the circuit has unconnected or
    /// redundant algebraic nodes.
    #[error("Singular reduction: {what} is not invertible")]
    SingularReduction { what: &'static str },

    /// Vector/matrix shapes disagree with the circuit or system.
    #[error("Dimension mismatch in {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Circuit error: {0}")]
    Circuit(#[from] CircuitError),
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<SolverError> for TnError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::SingularReduction { what } => TnError::Invariant { what },
            SolverError::DimensionMismatch {
                what,
                expected,
                actual,
            } => TnError::DimensionMismatch {
                what,
                expected,
                actual,
            },
            SolverError::Circuit(c) => c.into(),
        }
    }
}
