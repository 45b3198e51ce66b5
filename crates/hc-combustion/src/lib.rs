//! hc-combustion: combustion-equilibrium lookups for the chamber solver.
//!
//! Provides:
//! - `EquilibriumOracle` trait returning a tagged `EquilibriumOutcome`
//!   (`Converged` chamber thermochemistry or `Failed`), never a panic
//! - `PropellantSpec` with CEA-style reactant card rendering and oxygen balance
//! - Ideal-gas isentropic nozzle relations (adapted expansion ratio, c*, CF)
//! - `AnalyticCombustion`, a smooth ideal-rocket oracle
//! - `SerializedBackend`, a single-flight adapter for non-reentrant
//!   English-unit equilibrium backends

pub mod analytic;
pub mod error;
pub mod isentropic;
pub mod legacy;
pub mod oracle;
pub mod propellant;
pub mod stoichiometry;

pub use analytic::{AnalyticCombustion, AnalyticCombustionConfig};
pub use error::{CombustionError, CombustionResult};
pub use legacy::{LegacyBackend, LegacyOutput, SerializedBackend};
pub use oracle::{ChamberThermo, EquilibriumOracle, EquilibriumOutcome};
pub use propellant::{OxidizerSpec, PropellantSpec, Reactant};
pub use stoichiometry::Composition;
