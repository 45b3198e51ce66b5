//! Error types for component operations.

use hc_core::error::HcError;
use hc_fluids::FluidError;
use thiserror::Error;

/// Errors that can occur during component calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComponentError {
    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Fluid property error: {0}")]
    Fluid(#[from] FluidError),
}

pub type ComponentResult<T> = Result<T, ComponentError>;

impl From<ComponentError> for HcError {
    fn from(e: ComponentError) -> Self {
        match e {
            ComponentError::NonPhysical { what } => HcError::InvalidArg { what },
            ComponentError::InvalidArg { what } => HcError::InvalidArg { what },
            ComponentError::Fluid(inner) => inner.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ComponentError::NonPhysical { what: "density" };
        assert!(err.to_string().contains("density"));
    }

    #[test]
    fn fluid_errors_keep_their_message() {
        let err: ComponentError = FluidError::Backend {
            message: "state fail".into(),
        }
        .into();
        assert!(err.to_string().contains("state fail"));
    }
}
