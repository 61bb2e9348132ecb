//! tn-circuit: thermal-circuit layer for thermanet.
//!
//! Provides:
//! - Core circuit data structures (Node, Branch, ThermalCircuit)
//! - Incremental circuit builder with validation
//! - State/algebraic node partition and input ordering for solver integration
//!
//! # Example
//!
//! ```
//! use tn_circuit::CircuitBuilder;
//!
//! let mut builder = CircuitBuilder::new();
//! let room = builder.add_node("Room air", 1.2e5);
//! let wall = builder.add_boundary_branch("Wall", 28.0, room);
//! builder.temperature_source(wall);
//! builder.select_output(room);
//! let circuit = builder.build().unwrap();
//!
//! assert_eq!(circuit.node_count(), 1);
//! assert_eq!(circuit.branch_count(), 1);
//! ```

pub mod builder;
pub mod circuit;
pub mod error;
pub mod partition;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::CircuitBuilder;
pub use circuit::{Branch, Node, ThermalCircuit};
pub use error::{CircuitError, CircuitResult};
pub use partition::{InputLayout, NodePartition, NodeRole};
