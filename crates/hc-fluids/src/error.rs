//! Fluid property errors.

use hc_core::HcError;
use thiserror::Error;

/// Result type for fluid operations.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors that can occur during fluid property lookups.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Non-physical values (negative density, pressure, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// A single-phase query landed inside the two-phase dome (or the backend
    /// otherwise refused the state pair). Callers may retry on the saturation line.
    #[error("State out of single-phase domain: {what}")]
    OutOfDomain { what: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Operation not supported (unsupported species).
    #[error("Not supported: {what}")]
    NotSupported { what: &'static str },

    /// Backend (CoolProp) error.
    #[error("Backend error: {message}")]
    Backend { message: String },
}

impl From<FluidError> for HcError {
    fn from(err: FluidError) -> Self {
        match err {
            FluidError::NonPhysical { what } => HcError::Invariant { what },
            FluidError::OutOfDomain { what } => HcError::InvalidArg { what },
            FluidError::InvalidArg { what } => HcError::InvalidArg { what },
            FluidError::NotSupported { what } => HcError::InvalidArg { what },
            FluidError::Backend { .. } => HcError::Invariant {
                what: "fluid backend error",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FluidError::OutOfDomain {
            what: "P,T inside dome",
        };
        assert!(err.to_string().contains("dome"));

        let err = FluidError::Backend {
            message: "CoolProp failed".into(),
        };
        assert!(err.to_string().contains("CoolProp"));
    }

    #[test]
    fn error_to_hc_error() {
        let hc: HcError = FluidError::NotSupported { what: "species" }.into();
        assert!(matches!(hc, HcError::InvalidArg { .. }));
    }
}
