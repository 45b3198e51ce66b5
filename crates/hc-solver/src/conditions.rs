//! Operating conditions shared by every point of a run.

use crate::error::{SolverError, SolverResult};
use hc_components::regression::check_fuel_density;
use hc_components::{DyerInjector, Expansion, RegressionLaw};
use hc_core::units::{Pressure, Temperature};

/// Tank state, ambient, injector and fuel parameters. Immutable during a run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OperatingConditions {
    pub tank_pressure: Pressure,
    pub tank_temperature: Temperature,
    pub ambient_pressure: Pressure,
    pub injector: DyerInjector,
    pub regression: RegressionLaw,
    /// Solid fuel density [kg/m³]
    pub fuel_density: f64,
    pub expansion: Expansion,
}

impl OperatingConditions {
    /// Reject inputs no solve could make sense of.
    ///
    /// Ambient pressure above tank pressure is allowed: it is a physically
    /// infeasible configuration that the solver reports per point.
    pub fn validate(&self) -> SolverResult<()> {
        let setup = |what: &str| SolverError::ProblemSetup {
            what: what.to_string(),
        };
        let p_tank = self.tank_pressure.value;
        if !p_tank.is_finite() || p_tank <= 0.0 {
            return Err(setup("tank pressure must be positive"));
        }
        let t_tank = self.tank_temperature.value;
        if !t_tank.is_finite() || t_tank <= 0.0 {
            return Err(setup("tank temperature must be positive"));
        }
        let p_amb = self.ambient_pressure.value;
        if !p_amb.is_finite() || p_amb < 0.0 {
            return Err(setup("ambient pressure must not be negative"));
        }
        if self.expansion == Expansion::Adapt && p_amb <= 0.0 {
            return Err(setup("an adapted nozzle needs a positive ambient pressure"));
        }
        check_fuel_density(self.fuel_density)?;
        Ok(())
    }
}
