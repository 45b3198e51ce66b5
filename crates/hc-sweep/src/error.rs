//! Sweep setup errors.

use hc_components::ComponentError;
use hc_core::HcError;
use hc_solver::SolverError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SweepError {
    #[error("Invalid range for {axis}: {reason}")]
    InvalidRange { axis: &'static str, reason: String },

    #[error("Range for {axis} has no points")]
    EmptyAxis { axis: &'static str },

    #[error("Geometry error: {0}")]
    Geometry(#[from] ComponentError),

    #[error("Solver setup error: {0}")]
    Solver(#[from] SolverError),
}

impl From<SweepError> for HcError {
    fn from(e: SweepError) -> Self {
        match e {
            SweepError::InvalidRange { .. } | SweepError::EmptyAxis { .. } => {
                HcError::InvalidArg {
                    what: "sweep range",
                }
            }
            SweepError::Geometry(inner) => inner.into(),
            SweepError::Solver(inner) => inner.into(),
        }
    }
}
