//! Chamber pressure solver for a hybrid motor.
//!
//! The unknown is the chamber pressure pc. At a trial pc the performance
//! evaluator runs the injector, the regression law and the equilibrium oracle;
//! the mass-conservation residual
//!
//! F(pc) = ṁ(pc)·c*(pc)/At − pc
//!
//! vanishes at the operating point. A deterministic scan finds a starting
//! guess next to a sign change, then a damped Newton iteration with an
//! admissible band (ambient, tank) refines it. Every outcome, including
//! failure, is reported through `ConvergenceFlag`; nothing in a per-point solve
//! returns `Err`.

pub mod conditions;
pub mod convergence;
pub mod error;
pub mod newton;
pub mod performance;
pub mod point;
pub mod residual;

pub use conditions::OperatingConditions;
pub use convergence::{ConvergenceFlag, ConvergenceResult};
pub use error::{SolverError, SolverResult};
pub use newton::{PressureSolver, PressureSolverConfig};
pub use performance::{PerformanceEvaluation, PerformanceEvaluator, PerformanceState};
pub use point::{PointSolution, solve_point};
pub use residual::{
    AdmissibleBand, ChamberResidual, FAILED_RESIDUAL, PressureResidual, ResidualSample,
    ScanSettings, StartingGuess, scan_grid, starting_pressure,
};
