use hc_combustion::{
    AnalyticCombustion, EquilibriumOracle, EquilibriumOutcome, LegacyBackend, LegacyOutput,
    SerializedBackend,
};
use std::sync::Arc;

struct Stub;

impl LegacyBackend for Stub {
    fn name(&self) -> &str {
        "stub"
    }

    fn ivac_cstar_tc_mw_gamma(&mut self, _pc_psia: f64, _mr: f64, _eps: f64) -> LegacyOutput {
        LegacyOutput {
            ivac_s: 280.0,
            cstar_ft_s: 5200.0,
            tc_rankine: 5600.0,
            mw: 25.0,
            gamma: 1.22,
        }
    }
}

#[test]
fn oracles_usable_as_shared_trait_objects() {
    let oracles: Vec<Arc<dyn EquilibriumOracle>> = vec![
        Arc::new(AnalyticCombustion::default()),
        Arc::new(SerializedBackend::new(Stub)),
    ];
    for oracle in &oracles {
        match oracle.solve(40e5, 7.0, 6.0) {
            EquilibriumOutcome::Converged(thermo) => {
                assert!(thermo.is_physical(), "{} gave {thermo:?}", oracle.name());
            }
            EquilibriumOutcome::Failed => panic!("{} failed", oracle.name()),
        }
    }
}

#[test]
fn analytic_cstar_is_rocket_like_across_window() {
    let oracle = AnalyticCombustion::default();
    for mr in [1.0, 3.0, 7.0, 12.0, 30.0] {
        let thermo = oracle.solve(30e5, mr, 1.0).converged().unwrap();
        assert!(
            thermo.cstar_m_s > 700.0 && thermo.cstar_m_s < 1800.0,
            "MR {mr}: c* = {}",
            thermo.cstar_m_s
        );
        assert!(thermo.cf_vac > 1.0);
    }
}
