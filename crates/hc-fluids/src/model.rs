//! Property oracle trait and validation helpers.

use crate::error::{FluidError, FluidResult};
use hc_core::units::{Pressure, Temperature};

/// Scalar property a caller can ask the oracle for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    /// Mass density [kg/m³]
    Density,
    /// Specific enthalpy [J/kg]
    Enthalpy,
}

impl Property {
    pub fn label(self) -> &'static str {
        match self {
            Property::Density => "density",
            Property::Enthalpy => "enthalpy",
        }
    }
}

/// Which edge of the saturation dome a saturated lookup reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaturatedPhase {
    /// Saturated liquid, quality 0
    Liquid,
    /// Saturated vapor, quality 1
    Vapor,
}

impl SaturatedPhase {
    pub fn quality(self) -> f64 {
        match self {
            SaturatedPhase::Liquid => 0.0,
            SaturatedPhase::Vapor => 1.0,
        }
    }
}

/// Fluid-state property lookups.
///
/// Implementations must be thread-safe (Send + Sync): a sweep evaluates many
/// injector states concurrently.
pub trait PropertyOracle: Send + Sync {
    /// Oracle name (for logging).
    fn name(&self) -> &str;

    /// Single-phase lookup at (P, T).
    ///
    /// Returns `FluidError::OutOfDomain` when the pair lies inside the two-phase
    /// dome and no single-phase value exists.
    fn evaluate_single_phase(
        &self,
        property: Property,
        p: Pressure,
        t: Temperature,
    ) -> FluidResult<f64>;

    /// Saturated lookup at (T, Q) with Q = 0 or Q = 1.
    fn evaluate_saturated(
        &self,
        property: Property,
        t: Temperature,
        phase: SaturatedPhase,
    ) -> FluidResult<f64>;

    /// Saturation (vapor) pressure at `t`.
    fn saturation_pressure(&self, t: Temperature) -> FluidResult<Pressure>;

    /// Single-phase lookup that substitutes the saturated value on `OutOfDomain`.
    ///
    /// Any other error is returned unchanged.
    fn evaluate_or_saturated(
        &self,
        property: Property,
        p: Pressure,
        t: Temperature,
        fallback: SaturatedPhase,
    ) -> FluidResult<f64> {
        match self.evaluate_single_phase(property, p, t) {
            Err(FluidError::OutOfDomain { what }) => {
                tracing::trace!(
                    property = property.label(),
                    p_pa = p.value,
                    t_k = t.value,
                    reason = what,
                    ?fallback,
                    "single-phase lookup out of domain, using saturation line"
                );
                self.evaluate_saturated(property, t, fallback)
            }
            other => other,
        }
    }
}

/// Validation helpers for fluid properties.
pub(crate) mod validation {
    use super::*;

    /// Ensure pressure is positive and finite.
    pub fn validate_pressure(p: Pressure) -> FluidResult<()> {
        if !p.value.is_finite() || p.value <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "pressure must be positive and finite",
            });
        }
        Ok(())
    }

    /// Ensure temperature is positive and finite.
    pub fn validate_temperature(t: Temperature) -> FluidResult<()> {
        if !t.value.is_finite() || t.value <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "temperature must be positive and finite",
            });
        }
        Ok(())
    }

    /// Ensure a looked-up property value is usable.
    pub fn validate_property(property: Property, value: f64) -> FluidResult<()> {
        match property {
            Property::Density if !value.is_finite() || value <= 0.0 => {
                Err(FluidError::NonPhysical {
                    what: "density must be positive and finite",
                })
            }
            Property::Enthalpy if !value.is_finite() => Err(FluidError::NonPhysical {
                what: "enthalpy must be finite",
            }),
            _ => Ok(()),
        }
    }
}
