//! Adapter for non-reentrant equilibrium backends that work in English units.

use crate::oracle::{ChamberThermo, EquilibriumOracle, EquilibriumOutcome};
use hc_core::units::constants::{FT_TO_M, G0_MPS2, PA_TO_PSIA, RANKINE_TO_KELVIN};
use std::sync::Mutex;

/// Raw answer of a legacy rocket-equilibrium backend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegacyOutput {
    /// Vacuum specific impulse [s]
    pub ivac_s: f64,
    /// Characteristic velocity [ft/s]
    pub cstar_ft_s: f64,
    /// Chamber temperature [°R]
    pub tc_rankine: f64,
    /// Molecular weight [kg/kmol]
    pub mw: f64,
    pub gamma: f64,
}

/// A backend that keeps internal scratch state between calls and therefore
/// needs exclusive access.
pub trait LegacyBackend: Send {
    fn name(&self) -> &str;

    /// `pc_psia` in psia. A non-converged solve reports zero Ivac or c*.
    fn ivac_cstar_tc_mw_gamma(&mut self, pc_psia: f64, mr: f64, eps: f64) -> LegacyOutput;
}

/// Single-flight wrapper: every call takes the lock, so the backend only ever
/// sees one caller at a time even from a parallel sweep.
pub struct SerializedBackend<B> {
    name: String,
    backend: Mutex<B>,
}

impl<B: LegacyBackend> SerializedBackend<B> {
    pub fn new(backend: B) -> Self {
        Self {
            name: backend.name().to_string(),
            backend: Mutex::new(backend),
        }
    }

    /// Convert a raw English-unit answer into SI chamber thermochemistry.
    pub fn convert(raw: LegacyOutput) -> EquilibriumOutcome {
        if raw.ivac_s == 0.0 || raw.cstar_ft_s == 0.0 {
            return EquilibriumOutcome::Failed;
        }
        let cstar_m_s = raw.cstar_ft_s * FT_TO_M;
        let thermo = ChamberThermo {
            tc_k: raw.tc_rankine * RANKINE_TO_KELVIN,
            mw: raw.mw,
            gamma: raw.gamma,
            cstar_m_s,
            cf_vac: raw.ivac_s * G0_MPS2 / cstar_m_s,
        };
        if thermo.is_physical() {
            EquilibriumOutcome::Converged(thermo)
        } else {
            EquilibriumOutcome::Failed
        }
    }
}

impl<B: LegacyBackend> EquilibriumOracle for SerializedBackend<B> {
    fn name(&self) -> &str {
        &self.name
    }

    fn solve(&self, pc_pa: f64, mr: f64, eps: f64) -> EquilibriumOutcome {
        let mut backend = match self.backend.lock() {
            Ok(guard) => guard,
            Err(_) => {
                tracing::warn!(backend = %self.name, "equilibrium backend lock poisoned");
                return EquilibriumOutcome::Failed;
            }
        };
        let raw = backend.ivac_cstar_tc_mw_gamma(pc_pa * PA_TO_PSIA, mr, eps);
        Self::convert(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    /// Records the last pressure it saw and panics if entered concurrently.
    struct Recorder {
        last_psia: f64,
        busy: Arc<AtomicBool>,
    }

    impl LegacyBackend for Recorder {
        fn name(&self) -> &str {
            "recorder"
        }

        fn ivac_cstar_tc_mw_gamma(&mut self, pc_psia: f64, mr: f64, _eps: f64) -> LegacyOutput {
            assert!(!self.busy.swap(true, Ordering::SeqCst), "re-entered");
            self.last_psia = pc_psia;
            let out = if mr > 0.0 {
                LegacyOutput {
                    ivac_s: 300.0,
                    cstar_ft_s: 5000.0,
                    tc_rankine: 5400.0,
                    mw: 26.0,
                    gamma: 1.2,
                }
            } else {
                LegacyOutput {
                    ivac_s: 0.0,
                    cstar_ft_s: 0.0,
                    tc_rankine: 0.0,
                    mw: 0.0,
                    gamma: 0.0,
                }
            };
            self.busy.store(false, Ordering::SeqCst);
            out
        }
    }

    fn recorder() -> SerializedBackend<Recorder> {
        SerializedBackend::new(Recorder {
            last_psia: 0.0,
            busy: Arc::new(AtomicBool::new(false)),
        })
    }

    #[test]
    fn converts_english_units() {
        let oracle = recorder();
        let thermo = oracle.solve(1e6, 6.0, 5.0).converged().unwrap();
        assert!((thermo.cstar_m_s - 1524.0).abs() < 1e-9);
        assert!((thermo.tc_k - 3000.0).abs() < 1e-9);
        assert!((thermo.cf_vac - 300.0 * 9.81 / 1524.0).abs() < 1e-12);

        let last = oracle.backend.lock().unwrap().last_psia;
        assert!((last - 145.0377).abs() < 1e-3);
    }

    #[test]
    fn zero_output_is_failure() {
        assert!(recorder().solve(1e6, 0.0, 5.0).is_failed());
    }

    #[test]
    fn parallel_callers_never_overlap() {
        let oracle = Arc::new(recorder());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let oracle = Arc::clone(&oracle);
                std::thread::spawn(move || oracle.solve(1e6 + i as f64, 6.0, 5.0))
            })
            .collect();
        for handle in handles {
            assert!(!handle.join().unwrap().is_failed());
        }
    }

    #[test]
    fn poisoned_lock_reports_failure() {
        let oracle = Arc::new(recorder());
        let poisoner = Arc::clone(&oracle);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.backend.lock().unwrap();
            panic!("poison");
        })
        .join();
        assert!(oracle.solve(1e6, 6.0, 5.0).is_failed());
    }
}
