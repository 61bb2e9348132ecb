//! tn-controls: feedback post-processing for simulated trajectories.
//!
//! The simulator itself is control-free; a proportional feedback term such
//! as an HVAC heat flow is a pure function of the achieved output
//! trajectory, a setpoint, and a gain, computed after the run. The same
//! gain doubles as the controller-branch conductance when the feedback is
//! folded into the circuit (perfect control as the gain grows, free
//! running as it vanishes).

pub mod controller;
pub mod error;

pub use controller::Proportional;
pub use error::{ControlError, ControlResult};
