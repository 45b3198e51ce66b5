//! Closed-form ideal-rocket chemistry.
//!
//! Chamber temperature, molecular weight and γ vary smoothly with mixture
//! ratio around a stoichiometric-like optimum; c* and CF_vac follow from the
//! isentropic relations. Useful wherever a full equilibrium code is not
//! available, and as a deterministic oracle in tests.

use crate::error::{CombustionError, CombustionResult};
use crate::isentropic;
use crate::oracle::{ChamberThermo, EquilibriumOracle, EquilibriumOutcome};
use crate::propellant::PropellantSpec;

/// Peak temperature sits fuel-rich of stoichiometric by this factor on MR.
const FUEL_RICH_FACTOR: f64 = 0.8;

/// Shape parameters of the analytic chemistry model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnalyticCombustionConfig {
    /// Mixture ratio of peak chamber temperature
    pub mr_opt: f64,
    /// Peak chamber temperature [K]
    pub tc_peak_k: f64,
    /// Temperature far from the optimum [K]
    pub tc_floor_k: f64,
    /// Width of the temperature peak in ln(MR)
    pub width: f64,
    /// Mixture ratios outside this window do not burn
    pub mr_min: f64,
    pub mr_max: f64,
}

impl Default for AnalyticCombustionConfig {
    fn default() -> Self {
        Self {
            mr_opt: 7.0,
            tc_peak_k: 3250.0,
            tc_floor_k: 900.0,
            width: 0.75,
            mr_min: 0.5,
            mr_max: 60.0,
        }
    }
}

impl AnalyticCombustionConfig {
    /// Default shape with the optimum placed from the propellant's oxygen
    /// balance. Falls back to the default optimum when a reactant's
    /// composition is unknown.
    pub fn for_propellant(spec: &PropellantSpec) -> Self {
        let mut config = Self::default();
        match spec.stoichiometric_mixture_ratio() {
            Some(stoich) => config.mr_opt = FUEL_RICH_FACTOR * stoich,
            None => tracing::debug!(
                mr_opt = config.mr_opt,
                "propellant composition unknown, keeping default optimum"
            ),
        }
        config
    }
}

/// Analytic equilibrium oracle.
#[derive(Clone, Debug)]
pub struct AnalyticCombustion {
    config: AnalyticCombustionConfig,
}

impl AnalyticCombustion {
    pub fn new(config: AnalyticCombustionConfig) -> CombustionResult<Self> {
        let c = &config;
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(c.mr_opt) || !positive(c.width) {
            return Err(CombustionError::InvalidArg {
                what: "optimum mixture ratio and peak width must be positive",
            });
        }
        if !positive(c.tc_floor_k) || !positive(c.tc_peak_k - c.tc_floor_k) {
            return Err(CombustionError::InvalidArg {
                what: "peak temperature must exceed floor temperature",
            });
        }
        if !positive(c.mr_min) || !positive(c.mr_max - c.mr_min) {
            return Err(CombustionError::InvalidArg {
                what: "mixture ratio window must be positive and non-empty",
            });
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalyticCombustionConfig {
        &self.config
    }

    /// Chamber gas properties at `mr`, or `None` outside the burning window.
    pub fn thermo(&self, mr: f64, eps: f64) -> Option<ChamberThermo> {
        let c = &self.config;
        if !mr.is_finite() || mr < c.mr_min || mr > c.mr_max {
            return None;
        }
        let x = (mr / c.mr_opt).ln();
        let shape = (-x * x / (2.0 * c.width * c.width)).exp();

        let tc_k = c.tc_floor_k + (c.tc_peak_k - c.tc_floor_k) * shape;
        let mw = 20.0 + 10.0 * mr / (mr + c.mr_opt);
        let gamma = 1.18 + 0.12 * (1.0 - shape);
        let cstar_m_s = isentropic::characteristic_velocity(gamma, tc_k, mw);
        let cf_vac = isentropic::vacuum_thrust_coefficient(gamma, eps)?;

        let thermo = ChamberThermo {
            tc_k,
            mw,
            gamma,
            cstar_m_s,
            cf_vac,
        };
        thermo.is_physical().then_some(thermo)
    }
}

impl Default for AnalyticCombustion {
    fn default() -> Self {
        Self {
            config: AnalyticCombustionConfig::default(),
        }
    }
}

impl EquilibriumOracle for AnalyticCombustion {
    fn name(&self) -> &str {
        "analytic"
    }

    fn solve(&self, pc_pa: f64, mr: f64, eps: f64) -> EquilibriumOutcome {
        if !pc_pa.is_finite() || pc_pa <= 0.0 {
            return EquilibriumOutcome::Failed;
        }
        match self.thermo(mr, eps) {
            Some(thermo) => EquilibriumOutcome::Converged(thermo),
            None => {
                tracing::trace!(pc_pa, mr, eps, "analytic chemistry outside burning window");
                EquilibriumOutcome::Failed
            }
        }
    }
}
