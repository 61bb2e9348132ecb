//! Error types for envelope-model construction.

use thiserror::Error;
use tn_circuit::CircuitError;

#[derive(Error, Debug)]
pub enum EnvelopeError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Dimension mismatch in {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The interior reflection system (I − ρF) is not invertible; the
    /// configured reflectances and view factors trap all radiation.
    #[error("Singular shortwave reflection system")]
    SingularReflection,

    #[error("Circuit error: {0}")]
    Circuit(#[from] CircuitError),
}

pub type EnvelopeResult<T> = Result<T, EnvelopeError>;
