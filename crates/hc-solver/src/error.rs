//! Error types for solver setup.
//!
//! Only configuration problems surface here. Numerical trouble during a solve
//! is classified by `ConvergenceFlag` instead.

use hc_combustion::CombustionError;
use hc_components::ComponentError;
use hc_core::error::HcError;
use hc_fluids::FluidError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Problem setup error: {what}")]
    ProblemSetup { what: String },

    #[error("Component error: {0}")]
    Component(#[from] ComponentError),

    #[error("Combustion error: {0}")]
    Combustion(#[from] CombustionError),

    #[error("Fluid error: {0}")]
    Fluid(#[from] FluidError),
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<SolverError> for HcError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::ProblemSetup { .. } => HcError::InvalidArg {
                what: "problem setup",
            },
            SolverError::Component(inner) => inner.into(),
            SolverError::Combustion(inner) => inner.into(),
            SolverError::Fluid(inner) => inner.into(),
        }
    }
}
