//! Circuit-specific error types.

use thiserror::Error;
use tn_core::TnError;

/// Circuit construction and validation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CircuitError {
    /// Matrix or vector shapes disagree (wrong number of branches or nodes).
    #[error("Dimension mismatch in {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A branch conductance is zero, negative, or non-finite.
    #[error("Branch {branch} has non-positive conductance {value}")]
    InvalidConductance { branch: usize, value: f64 },

    /// A node capacity is negative or non-finite.
    #[error("Node {node} has invalid capacity {value}")]
    InvalidCapacity { node: usize, value: f64 },

    /// A branch connects a node to itself.
    #[error("Branch {branch} connects node {node} to itself")]
    SelfLoop { branch: usize, node: usize },

    /// A builder call referenced an id the builder never issued.
    #[error("Unknown {what} id {id}")]
    UnknownId { what: &'static str, id: u32 },
}

pub type CircuitResult<T> = Result<T, CircuitError>;

impl From<CircuitError> for TnError {
    fn from(e: CircuitError) -> Self {
        match e {
            CircuitError::DimensionMismatch {
                what,
                expected,
                actual,
            } => TnError::DimensionMismatch {
                what,
                expected,
                actual,
            },
            CircuitError::InvalidConductance { .. } => TnError::InvalidArg {
                what: "branch conductance",
            },
            CircuitError::InvalidCapacity { .. } => TnError::InvalidArg {
                what: "node capacity",
            },
            CircuitError::SelfLoop { .. } => TnError::Invariant {
                what: "self-looped branch",
            },
            CircuitError::UnknownId { what, .. } => TnError::InvalidArg { what },
        }
    }
}
