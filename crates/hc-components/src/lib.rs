//! hc-components: physical building blocks of a hybrid motor.
//!
//! Provides:
//! - Dyer two-phase injector (weighted SPI + HEM flux)
//! - Fuel regression law r = a·Gox^n
//! - Pluggable feed-line pressure loss
//! - Chamber geometry derived from dimensionless ratios
//! - Nozzle expansion ratio (fixed or adapted) and thrust coefficient helpers
//!
//! # Example
//!
//! ```no_run
//! use hc_components::{DyerInjector, hole_area};
//! use hc_core::units::{k, m, pa};
//! use hc_fluids::{CoolPropOracle, Species};
//!
//! let fluid = CoolPropOracle::new(Species::NitrousOxide);
//! let injector = DyerInjector::new(0.8).unwrap();
//! let area = hole_area(m(1.5e-3), 12);
//! let mdot = injector
//!     .mdot(&fluid, pa(55e5), pa(30e5), k(288.0), area)
//!     .unwrap();
//! println!("Oxidizer flow: {} kg/s", mdot.value);
//! ```

pub mod common;
pub mod error;
pub mod geometry;
pub mod injector;
pub mod line_loss;
pub mod nozzle;
pub mod regression;

pub use error::{ComponentError, ComponentResult};
pub use geometry::{GeometryPoint, GeometryRatios};
pub use injector::{DyerInjector, FluxBreakdown, hole_area};
pub use line_loss::{ConstantLineLoss, LineLossModel};
pub use nozzle::Expansion;
pub use regression::RegressionLaw;
