//! hc-core: shared foundation for the hybrid chamber solver.
//!
//! Contains:
//! - units (uom SI types + constructors, unit conversion constants)
//! - numeric (Real, finiteness check, grid generation)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{HcError, HcResult};
pub use numeric::*;
pub use units::*;
