//! Dyer two-phase injector model.
//!
//! Flux per unit area is a weighted blend of the single-phase incompressible
//! (SPI) and homogeneous equilibrium (HEM) correlations. The weight
//! k = √((p1 − p2)/(pv − p2)) measures how far the flow is from
//! thermodynamic equilibrium; when the vapor pressure does not exceed the
//! downstream pressure the oxidizer stays liquid and only SPI applies.
//!
//! The feed line is taken as isothermal at the tank temperature.

use crate::common::{check_finite, check_positive};
use crate::error::ComponentResult;
use hc_core::units::{Area, Length, MassRate, Pressure, Temperature, circle_area, kgps};
use hc_fluids::{Property, PropertyOracle, SaturatedPhase};

/// Total flow area of `count` round holes of diameter `diameter`.
pub fn hole_area(diameter: Length, count: u32) -> Area {
    count as f64 * circle_area(diameter)
}

/// Individual terms of one flux evaluation [kg/(s·m²)].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FluxBreakdown {
    pub spi: f64,
    /// Zero when the flow stays liquid (HEM not evaluated)
    pub hem: f64,
    /// Non-equilibrium weight, `None` when the flow stays liquid
    pub weight: Option<f64>,
    pub flux: f64,
}

impl FluxBreakdown {
    const ZERO: FluxBreakdown = FluxBreakdown {
        spi: 0.0,
        hem: 0.0,
        weight: None,
        flux: 0.0,
    };
}

/// Dyer injector with discharge coefficient `cd`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DyerInjector {
    cd: f64,
}

impl DyerInjector {
    pub fn new(cd: f64) -> ComponentResult<Self> {
        check_positive(cd, "discharge coefficient")?;
        Ok(Self { cd })
    }

    pub fn cd(&self) -> f64 {
        self.cd
    }

    /// Oxidizer mass flux [kg/(s·m²)] from upstream `p1` to downstream `p2`.
    ///
    /// Backflow (`p1 <= p2`) gives exactly zero. Single-phase lookups that land
    /// in the two-phase dome fall back to the saturation line; only genuine
    /// backend failures are returned as errors.
    pub fn mass_flux(
        &self,
        fluid: &dyn PropertyOracle,
        p1: Pressure,
        p2: Pressure,
        t: Temperature,
    ) -> ComponentResult<f64> {
        Ok(self.flux_breakdown(fluid, p1, p2, t)?.flux)
    }

    /// Mass flux together with its SPI/HEM terms.
    pub fn flux_breakdown(
        &self,
        fluid: &dyn PropertyOracle,
        p1: Pressure,
        p2: Pressure,
        t: Temperature,
    ) -> ComponentResult<FluxBreakdown> {
        check_finite(p1.value, "upstream pressure")?;
        check_finite(p2.value, "downstream pressure")?;
        if p1.value <= p2.value {
            return Ok(FluxBreakdown::ZERO);
        }

        let dp = p1.value - p2.value;
        let rho_liquid = fluid.evaluate_saturated(Property::Density, t, SaturatedPhase::Liquid)?;
        let spi = self.cd * (2.0 * rho_liquid * dp).sqrt();

        let pv = fluid.saturation_pressure(t)?.value;
        if pv <= p2.value {
            return Ok(FluxBreakdown {
                spi,
                hem: 0.0,
                weight: None,
                flux: spi,
            });
        }

        let hem = self.hem_flux(fluid, p1, p2, t)?;
        let k = (dp / (pv - p2.value)).sqrt();
        let flux = (k * spi + hem) / (k + 1.0);
        check_finite(flux, "injector mass flux")?;

        tracing::trace!(p1 = p1.value, p2 = p2.value, pv, spi, hem, k, flux, "dyer flux");
        Ok(FluxBreakdown {
            spi,
            hem,
            weight: Some(k),
            flux,
        })
    }

    /// HEM term: downstream density times the isothermal enthalpy drop.
    fn hem_flux(
        &self,
        fluid: &dyn PropertyOracle,
        p1: Pressure,
        p2: Pressure,
        t: Temperature,
    ) -> ComponentResult<f64> {
        let h1 =
            fluid.evaluate_or_saturated(Property::Enthalpy, p1, t, SaturatedPhase::Liquid)?;
        let h2 = fluid.evaluate_or_saturated(Property::Enthalpy, p2, t, SaturatedPhase::Vapor)?;
        let rho2 = fluid.evaluate_or_saturated(Property::Density, p2, t, SaturatedPhase::Vapor)?;
        Ok(self.cd * rho2 * (2.0 * (h1 - h2).abs()).sqrt())
    }

    /// Oxidizer mass flow through `area`.
    pub fn mdot(
        &self,
        fluid: &dyn PropertyOracle,
        p1: Pressure,
        p2: Pressure,
        t: Temperature,
        area: Area,
    ) -> ComponentResult<MassRate> {
        Ok(kgps(self.mass_flux(fluid, p1, p2, t)? * area.value))
    }
}
