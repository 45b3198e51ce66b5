//! hc-fluids: oxidizer property lookups for the injector model.
//!
//! Provides:
//! - Species catalog for feed-system fluids (N2O, O2, CO2, ...)
//! - `PropertyOracle` trait with an explicit two-branch interface: a single-phase
//!   (P,T) lookup that reports `OutOfDomain` inside the two-phase dome, and a
//!   saturated (T,Q) lookup used as the documented fallback
//! - CoolProp backend (via `rfluids`)
//!
//! # Example
//!
//! ```no_run
//! use hc_fluids::{CoolPropOracle, Property, PropertyOracle, SaturatedPhase, Species};
//! use hc_core::units::{k, pa};
//!
//! let oracle = CoolPropOracle::new(Species::NitrousOxide);
//! let rho_l = oracle
//!     .evaluate_saturated(Property::Density, k(288.0), SaturatedPhase::Liquid)
//!     .unwrap();
//! let h = oracle
//!     .evaluate_or_saturated(Property::Enthalpy, pa(55e5), k(288.0), SaturatedPhase::Liquid)
//!     .unwrap();
//! println!("rho_l = {rho_l} kg/m³, h = {h} J/kg");
//! ```

pub mod coolprop;
pub mod error;
pub mod model;
pub mod species;

pub use coolprop::CoolPropOracle;
pub use error::{FluidError, FluidResult};
pub use model::{Property, PropertyOracle, SaturatedPhase};
pub use species::Species;
