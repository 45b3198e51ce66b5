//! CoolProp-based property oracle.

use crate::error::{FluidError, FluidResult};
use crate::model::{Property, PropertyOracle, SaturatedPhase, validation};
use crate::species::Species;
use hc_core::units::{Pressure, Temperature, pa};
use rfluids::prelude::*;

/// CoolProp backend for a single pure feed fluid.
///
/// Thread-safe: a fresh rfluids `Fluid` is built for every lookup, so no state
/// is shared between callers.
pub struct CoolPropOracle {
    species: Species,
}

impl CoolPropOracle {
    pub fn new(species: Species) -> Self {
        Self { species }
    }

    /// Build from a CoolProp fluid name such as `"NitrousOxide"`.
    pub fn from_name(name: &str) -> FluidResult<Self> {
        name.parse::<Species>()
            .map(Self::new)
            .map_err(|_| FluidError::NotSupported {
                what: "fluid name not known to the property backend",
            })
    }

    pub fn species(&self) -> Species {
        self.species
    }

    fn fluid_at_pt(&self, p_pa: f64, t_k: f64) -> FluidResult<Fluid> {
        Fluid::from(self.species.rfluids_pure())
            .in_state(FluidInput::pressure(p_pa), FluidInput::temperature(t_k))
            .map_err(|e| {
                tracing::trace!(p_pa, t_k, error = %e, "no single-phase state at (P, T)");
                FluidError::OutOfDomain {
                    what: "no single-phase state at given pressure and temperature",
                }
            })
    }

    fn fluid_at_tq(&self, t_k: f64, quality: f64) -> FluidResult<Fluid> {
        Fluid::from(self.species.rfluids_pure())
            .in_state(FluidInput::temperature(t_k), FluidInput::quality(quality))
            .map_err(|e| FluidError::Backend {
                message: format!("rfluids error at T={} K, Q={}: {}", t_k, quality, e),
            })
    }

    fn extract(fluid: &mut Fluid, property: Property) -> FluidResult<f64> {
        let value = match property {
            Property::Density => fluid.density(),
            Property::Enthalpy => fluid.enthalpy(),
        }
        .map_err(|e| FluidError::Backend {
            message: format!("rfluids error getting {}: {}", property.label(), e),
        })?;
        validation::validate_property(property, value)?;
        Ok(value)
    }
}

impl PropertyOracle for CoolPropOracle {
    fn name(&self) -> &str {
        self.species.coolprop_name()
    }

    fn evaluate_single_phase(
        &self,
        property: Property,
        p: Pressure,
        t: Temperature,
    ) -> FluidResult<f64> {
        validation::validate_pressure(p)?;
        validation::validate_temperature(t)?;
        let mut fluid = self.fluid_at_pt(p.value, t.value)?;
        Self::extract(&mut fluid, property)
    }

    fn evaluate_saturated(
        &self,
        property: Property,
        t: Temperature,
        phase: SaturatedPhase,
    ) -> FluidResult<f64> {
        validation::validate_temperature(t)?;
        let mut fluid = self.fluid_at_tq(t.value, phase.quality())?;
        Self::extract(&mut fluid, property)
    }

    fn saturation_pressure(&self, t: Temperature) -> FluidResult<Pressure> {
        validation::validate_temperature(t)?;
        let mut fluid = self.fluid_at_tq(t.value, SaturatedPhase::Vapor.quality())?;
        let p = fluid.pressure().map_err(|e| FluidError::Backend {
            message: format!("rfluids error getting pressure: {}", e),
        })?;
        let p = pa(p);
        validation::validate_pressure(p)?;
        Ok(p)
    }
}
