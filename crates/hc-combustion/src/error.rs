//! Combustion errors.

use hc_core::HcError;
use thiserror::Error;

pub type CombustionResult<T> = Result<T, CombustionError>;

/// Setup errors for propellants and chemistry models.
///
/// A failed equilibrium solve is not an error: it is reported through
/// `EquilibriumOutcome::Failed`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CombustionError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Invalid propellant: {what}")]
    Propellant { what: String },

    #[error(transparent)]
    Core(#[from] HcError),
}

impl From<CombustionError> for HcError {
    fn from(err: CombustionError) -> Self {
        match err {
            CombustionError::InvalidArg { what } => HcError::InvalidArg { what },
            CombustionError::Propellant { .. } => HcError::InvalidArg {
                what: "invalid propellant",
            },
            CombustionError::Core(e) => e,
        }
    }
}
