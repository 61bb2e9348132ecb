//! tn-envelope: a worked building-envelope model.
//!
//! Builds the thermal circuit of a cubic room with a two-layer opaque wall
//! (five faces) and a single-glazed face from an immutable physical
//! configuration: conduction, convection, linearized longwave exchange,
//! ventilation, and a proportional control branch. Also distributes
//! transmitted shortwave radiation among interior surfaces and assembles
//! input trajectories in the circuit's fixed input order.
//!
//! Weather acquisition and solar geometry stay outside; this crate
//! consumes plain numeric series (outdoor temperature, total irradiance on
//! the facade) and produces circuit inputs.

pub mod conductance;
pub mod config;
pub mod error;
pub mod inputs;
pub mod model;
pub mod shortwave;

pub use config::{
    AirProperties, CubeConfig, LongwaveExchange, RoomGeometry, ShortwaveOptics, SurfaceFilms,
    WallLayer,
};
pub use error::{EnvelopeError, EnvelopeResult};
pub use inputs::assemble_inputs;
pub use model::CubeModel;
pub use shortwave::{distribute_shortwave, ShortwaveSources};
