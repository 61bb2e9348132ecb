//! Error types for control post-processing.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ControlError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Dimension mismatch in {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}

pub type ControlResult<T> = Result<T, ControlError>;
