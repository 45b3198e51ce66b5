//! Common utilities for component calculations.

use crate::error::{ComponentError, ComponentResult};
use hc_core::numeric::ensure_finite;

/// Ensure a value is finite, returning ComponentError if not.
pub fn check_finite(value: f64, what: &'static str) -> ComponentResult<()> {
    ensure_finite(value, what).map_err(|_| ComponentError::NonPhysical { what })?;
    Ok(())
}

/// Ensure a value is finite and strictly positive.
pub fn check_positive(value: f64, what: &'static str) -> ComponentResult<()> {
    check_finite(value, what)?;
    if value <= 0.0 {
        return Err(ComponentError::InvalidArg { what });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_check() {
        assert!(check_positive(1.0, "x").is_ok());
        assert!(matches!(
            check_positive(0.0, "x"),
            Err(ComponentError::InvalidArg { .. })
        ));
        assert!(matches!(
            check_positive(f64::NAN, "x"),
            Err(ComponentError::NonPhysical { .. })
        ));
    }
}
