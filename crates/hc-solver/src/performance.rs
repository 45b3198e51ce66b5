//! Motor performance at one trial chamber pressure.

use crate::conditions::OperatingConditions;
use hc_combustion::{EquilibriumOracle, EquilibriumOutcome};
use hc_components::nozzle::{specific_impulse, thrust_coefficient};
use hc_components::{GeometryPoint, LineLossModel};
use hc_core::units::pa;
use hc_fluids::PropertyOracle;
use serde::{Deserialize, Serialize};

/// γ used when the caller's seed is not a usable ratio of specific heats.
pub const DEFAULT_GAMMA: f64 = 1.3;

/// Complete performance snapshot. Always built in one piece by
/// `PerformanceEvaluator::evaluate`.
///
/// Mass flows are per Dt² when the geometry is normalized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceState {
    /// Injection pressure after line losses [Pa]
    pub p_inj: f64,
    /// Oxidizer mass flow [kg/s]
    pub mdot_ox: f64,
    /// Fuel mass flow [kg/s]
    pub mdot_fuel: f64,
    /// Total mass flow [kg/s]
    pub mdot: f64,
    /// Oxidizer mass flux in the port [kg/(s·m²)]
    pub gox: f64,
    /// Regression rate [m/s]
    pub r: f64,
    /// Mixture ratio
    pub mr: f64,
    /// Chamber temperature [K]
    pub tc: f64,
    /// Molecular weight [kg/kmol]
    pub mw: f64,
    pub gamma: f64,
    /// Expansion ratio actually used
    pub eps_out: f64,
    /// Characteristic velocity [m/s]
    pub cs: f64,
    pub cf_vac: f64,
    pub cf: f64,
    /// Vacuum specific impulse [s]
    pub ivac: f64,
    /// Specific impulse at ambient [s]
    pub is: f64,
}

/// Evaluator output: the snapshot and whether chemistry failed for it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerformanceEvaluation {
    pub state: PerformanceState,
    pub chemistry_failed: bool,
}

/// Chains line loss, injector, regression law and equilibrium oracle.
///
/// Infallible: injector backend errors, a vanishing fuel flow and equilibrium
/// non-convergence all come back as `chemistry_failed`.
pub struct PerformanceEvaluator<'a> {
    conditions: &'a OperatingConditions,
    fluid: &'a dyn PropertyOracle,
    chemistry: &'a dyn EquilibriumOracle,
    line_loss: &'a dyn LineLossModel,
}

impl<'a> PerformanceEvaluator<'a> {
    pub fn new(
        conditions: &'a OperatingConditions,
        fluid: &'a dyn PropertyOracle,
        chemistry: &'a dyn EquilibriumOracle,
        line_loss: &'a dyn LineLossModel,
    ) -> Self {
        Self {
            conditions,
            fluid,
            chemistry,
            line_loss,
        }
    }

    pub fn conditions(&self) -> &OperatingConditions {
        self.conditions
    }

    /// Performance at chamber pressure `pc` [Pa].
    ///
    /// `gamma_seed` only matters for an adapted nozzle, where it sets the
    /// expansion ratio before the oracle is asked for the real γ.
    pub fn evaluate(
        &self,
        geometry: &GeometryPoint,
        pc: f64,
        gamma_seed: f64,
    ) -> PerformanceEvaluation {
        let c = self.conditions;
        let seed = if gamma_seed.is_finite() && gamma_seed > 1.0 {
            gamma_seed
        } else {
            DEFAULT_GAMMA
        };
        let pamb = c.ambient_pressure.value;
        let eps_out = c.expansion.exit_area_ratio(seed, pamb, pc);

        let mut state = PerformanceState {
            p_inj: c.tank_pressure.value - self.line_loss.pressure_drop().value,
            eps_out,
            ..PerformanceState::default()
        };

        let flux = match c
            .injector
            .mass_flux(self.fluid, pa(state.p_inj), pa(pc), c.tank_temperature)
        {
            Ok(flux) => flux,
            Err(e) => {
                tracing::warn!(pc, error = %e, "injector property lookup failed");
                return Self::finish(state, pamb, pc, true);
            }
        };

        state.mdot_ox = flux * geometry.injector_area.value;
        state.gox = state.mdot_ox / geometry.port_area.value;
        state.r = c.regression.rate(state.gox);
        state.mdot_fuel =
            c.regression
                .fuel_mass_flow(c.fuel_density, geometry.burning_area.value, state.gox);
        state.mdot = state.mdot_ox + state.mdot_fuel;

        if state.mdot_fuel.is_nan() || state.mdot_fuel <= 0.0 || !state.mdot_ox.is_finite() {
            tracing::trace!(pc, mdot_fuel = state.mdot_fuel, "no fuel flow, mixture ratio undefined");
            return Self::finish(state, pamb, pc, true);
        }
        state.mr = state.mdot_ox / state.mdot_fuel;

        match self.chemistry.solve(pc, state.mr, eps_out) {
            EquilibriumOutcome::Converged(thermo) => {
                state.tc = thermo.tc_k;
                state.mw = thermo.mw;
                state.gamma = thermo.gamma;
                state.cs = thermo.cstar_m_s;
                state.cf_vac = thermo.cf_vac;
                Self::finish(state, pamb, pc, false)
            }
            EquilibriumOutcome::Failed => {
                tracing::trace!(pc, mr = state.mr, eps_out, "equilibrium did not converge");
                Self::finish(state, pamb, pc, true)
            }
        }
    }

    fn finish(
        mut state: PerformanceState,
        pamb: f64,
        pc: f64,
        chemistry_failed: bool,
    ) -> PerformanceEvaluation {
        state.cf = thrust_coefficient(state.cf_vac, state.eps_out, pamb, pc);
        state.ivac = specific_impulse(state.cs, state.cf_vac);
        state.is = specific_impulse(state.cs, state.cf);
        PerformanceEvaluation {
            state,
            chemistry_failed,
        }
    }
}

#[cfg(test)]
pub(crate) mod mocks {
    use hc_combustion::{ChamberThermo, EquilibriumOracle, EquilibriumOutcome};
    use hc_core::units::{Pressure, Temperature, pa};
    use hc_fluids::{FluidError, FluidResult, Property, PropertyOracle, SaturatedPhase};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Always-liquid oxidizer: vapor pressure far below any chamber pressure.
    pub struct LiquidOx;

    impl PropertyOracle for LiquidOx {
        fn name(&self) -> &str {
            "liquid"
        }

        fn evaluate_single_phase(
            &self,
            _property: Property,
            _p: Pressure,
            _t: Temperature,
        ) -> FluidResult<f64> {
            Ok(800.0)
        }

        fn evaluate_saturated(
            &self,
            _property: Property,
            _t: Temperature,
            _phase: SaturatedPhase,
        ) -> FluidResult<f64> {
            Ok(800.0)
        }

        fn saturation_pressure(&self, _t: Temperature) -> FluidResult<Pressure> {
            Ok(pa(1.0))
        }
    }

    /// Backend that is always broken.
    pub struct BrokenOx;

    impl PropertyOracle for BrokenOx {
        fn name(&self) -> &str {
            "broken"
        }

        fn evaluate_single_phase(
            &self,
            _property: Property,
            _p: Pressure,
            _t: Temperature,
        ) -> FluidResult<f64> {
            Err(FluidError::Backend {
                message: "offline".into(),
            })
        }

        fn evaluate_saturated(
            &self,
            _property: Property,
            _t: Temperature,
            _phase: SaturatedPhase,
        ) -> FluidResult<f64> {
            Err(FluidError::Backend {
                message: "offline".into(),
            })
        }

        fn saturation_pressure(&self, _t: Temperature) -> FluidResult<Pressure> {
            Err(FluidError::Backend {
                message: "offline".into(),
            })
        }
    }

    /// Constant chemistry that counts its calls.
    pub struct FixedChemistry {
        pub thermo: ChamberThermo,
        pub calls: AtomicUsize,
    }

    impl FixedChemistry {
        pub fn new() -> Self {
            Self {
                thermo: ChamberThermo {
                    tc_k: 3000.0,
                    mw: 25.0,
                    gamma: 1.2,
                    cstar_m_s: 1500.0,
                    cf_vac: 1.8,
                },
                calls: AtomicUsize::new(0),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl EquilibriumOracle for FixedChemistry {
        fn name(&self) -> &str {
            "fixed"
        }

        fn solve(&self, _pc_pa: f64, _mr: f64, _eps: f64) -> EquilibriumOutcome {
            self.calls.fetch_add(1, Ordering::SeqCst);
            EquilibriumOutcome::Converged(self.thermo)
        }
    }

    pub struct FailingChemistry;

    impl EquilibriumOracle for FailingChemistry {
        fn name(&self) -> &str {
            "failing"
        }

        fn solve(&self, _pc_pa: f64, _mr: f64, _eps: f64) -> EquilibriumOutcome {
            EquilibriumOutcome::Failed
        }
    }
}
