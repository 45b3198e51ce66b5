//! Unified error type for frontends.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Fluid backend error: {0}")]
    Fluid(String),

    #[error("Chemistry setup error: {0}")]
    Chemistry(String),

    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("Solver setup error: {0}")]
    Solver(String),

    #[error("Sweep error: {0}")]
    Sweep(String),

    #[error("Failed to write results: {path}")]
    ResultsWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for hc-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<hc_project::ProjectError> for AppError {
    fn from(err: hc_project::ProjectError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<hc_fluids::FluidError> for AppError {
    fn from(err: hc_fluids::FluidError) -> Self {
        AppError::Fluid(err.to_string())
    }
}

impl From<hc_combustion::CombustionError> for AppError {
    fn from(err: hc_combustion::CombustionError) -> Self {
        AppError::Chemistry(err.to_string())
    }
}

impl From<hc_components::ComponentError> for AppError {
    fn from(err: hc_components::ComponentError) -> Self {
        AppError::Geometry(err.to_string())
    }
}

impl From<hc_solver::SolverError> for AppError {
    fn from(err: hc_solver::SolverError) -> Self {
        AppError::Solver(err.to_string())
    }
}

impl From<hc_sweep::SweepError> for AppError {
    fn from(err: hc_sweep::SweepError) -> Self {
        AppError::Sweep(err.to_string())
    }
}
