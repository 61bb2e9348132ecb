//! tn-core: stable foundation for thermanet.
//!
//! Contains:
//! - units (uom SI types + constructors for thermal quantities)
//! - numeric (Real + tolerances + float helpers)
//! - ids (stable compact IDs for circuit objects)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{TnError, TnResult};
pub use ids::*;
pub use numeric::*;
pub use units::*;
