//! Equilibrium oracle interface.

/// Chamber thermochemistry from one converged equilibrium solve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChamberThermo {
    /// Chamber temperature [K]
    pub tc_k: f64,
    /// Molecular weight [kg/kmol]
    pub mw: f64,
    /// Ratio of specific heats
    pub gamma: f64,
    /// Characteristic velocity [m/s]
    pub cstar_m_s: f64,
    /// Vacuum thrust coefficient
    pub cf_vac: f64,
}

impl ChamberThermo {
    /// True when every field is finite and strictly positive.
    pub fn is_physical(&self) -> bool {
        [self.tc_k, self.mw, self.gamma, self.cstar_m_s, self.cf_vac]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0)
    }
}

/// Result of one equilibrium lookup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EquilibriumOutcome {
    Converged(ChamberThermo),
    /// The backend did not converge for this (pc, MR, eps).
    Failed,
}

impl EquilibriumOutcome {
    pub fn converged(self) -> Option<ChamberThermo> {
        match self {
            EquilibriumOutcome::Converged(thermo) => Some(thermo),
            EquilibriumOutcome::Failed => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, EquilibriumOutcome::Failed)
    }
}

/// Combustion equilibrium lookup at chamber pressure `pc_pa` [Pa], mixture
/// ratio `mr` and expansion ratio `eps`.
///
/// Must be callable from several sweep workers at once.
pub trait EquilibriumOracle: Send + Sync {
    fn name(&self) -> &str;

    fn solve(&self, pc_pa: f64, mr: f64, eps: f64) -> EquilibriumOutcome;
}

impl<T: EquilibriumOracle + ?Sized> EquilibriumOracle for std::sync::Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn solve(&self, pc_pa: f64, mr: f64, eps: f64) -> EquilibriumOutcome {
        (**self).solve(pc_pa, mr, eps)
    }
}
