//! Shared application service layer for the hybrid chamber tools.
//!
//! Turns a persisted configuration into oracles and a solver, runs
//! single-geometry solves and full sweeps, and reports progress. Frontends
//! only talk to this crate.

pub mod error;
pub mod progress;
pub mod run_service;
pub mod runtime;

pub use error::{AppError, AppResult};
pub use progress::{RunProgressEvent, RunStage};
pub use run_service::{
    PointReport, SweepReport, run_sweep, run_sweep_from_path, save_sweep_json, solve_geometry,
};
pub use runtime::{RunRuntime, build_chemistry, build_fluid};
