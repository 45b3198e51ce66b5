//! Build oracles and the solver from a validated configuration.

use crate::error::AppResult;
use hc_combustion::{AnalyticCombustion, AnalyticCombustionConfig, EquilibriumOracle};
use hc_components::ConstantLineLoss;
use hc_core::units::pa;
use hc_fluids::{CoolPropOracle, PropertyOracle};
use hc_project::RunConfig;
use hc_solver::{OperatingConditions, PerformanceEvaluator, PressureSolver};

/// CoolProp oracle for the configured oxidizer.
pub fn build_fluid(config: &RunConfig) -> AppResult<CoolPropOracle> {
    Ok(CoolPropOracle::from_name(
        &config.propellant.oxidizer.property_name,
    )?)
}

/// Analytic chemistry shaped by the propellant, with any configured
/// overrides applied on top.
pub fn build_chemistry(config: &RunConfig) -> AppResult<AnalyticCombustion> {
    let mut chemistry = AnalyticCombustionConfig::for_propellant(&config.propellant);
    if let Some(mr_opt) = config.chemistry.mr_opt {
        chemistry.mr_opt = mr_opt;
    }
    if let Some(tc_peak) = config.chemistry.tc_peak_k {
        chemistry.tc_peak_k = tc_peak;
    }
    Ok(AnalyticCombustion::new(chemistry)?)
}

/// Everything a run needs, owned in one place.
pub struct RunRuntime {
    conditions: OperatingConditions,
    fluid: Box<dyn PropertyOracle>,
    chemistry: Box<dyn EquilibriumOracle>,
    line_loss: ConstantLineLoss,
    solver: PressureSolver,
    gamma0: f64,
}

impl RunRuntime {
    /// CoolProp properties and analytic chemistry.
    pub fn from_config(config: &RunConfig) -> AppResult<Self> {
        let fluid = build_fluid(config)?;
        let chemistry = build_chemistry(config)?;
        Self::with_oracles(config, Box::new(fluid), Box::new(chemistry))
    }

    /// Caller-supplied oracles, e.g. an external equilibrium backend.
    pub fn with_oracles(
        config: &RunConfig,
        fluid: Box<dyn PropertyOracle>,
        chemistry: Box<dyn EquilibriumOracle>,
    ) -> AppResult<Self> {
        let conditions = config.operating_conditions()?;
        conditions.validate()?;
        tracing::debug!(
            fluid = fluid.name(),
            chemistry = chemistry.name(),
            oxidizer_card = %config.propellant.oxidizer_card().trim_end(),
            fuel_cards = %config.propellant.fuel_cards().trim_end(),
            "runtime built"
        );
        Ok(Self {
            conditions,
            fluid,
            chemistry,
            line_loss: ConstantLineLoss::new(pa(config.line_pressure_drop))?,
            solver: PressureSolver::new(config.solver),
            gamma0: config.gamma0,
        })
    }

    pub fn conditions(&self) -> &OperatingConditions {
        &self.conditions
    }

    pub fn solver(&self) -> &PressureSolver {
        &self.solver
    }

    pub fn gamma0(&self) -> f64 {
        self.gamma0
    }

    pub fn evaluator(&self) -> PerformanceEvaluator<'_> {
        PerformanceEvaluator::new(
            &self.conditions,
            self.fluid.as_ref(),
            self.chemistry.as_ref(),
            &self.line_loss,
        )
    }
}
