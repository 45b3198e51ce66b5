//! Damped Newton iteration on the chamber-pressure residual.

use crate::convergence::{ConvergenceFlag, ConvergenceResult};
use crate::residual::{AdmissibleBand, PressureResidual, ScanSettings, StartingGuess, starting_pressure};

/// Pressure solver configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PressureSolverConfig {
    /// Maximum Newton steps
    pub max_iterations: usize,
    /// Absolute tolerance on |F(pc)| [Pa]
    pub abs_tol: f64,
    /// Finite-difference step for dF/dpc [Pa]
    pub fd_step: f64,
    /// Slope substituted when the finite difference is exactly zero
    pub zero_slope: f64,
    /// Damping reduction per boundary hit
    pub damping_decrement: f64,
    /// Damping never drops below this
    pub damping_floor: f64,
    /// Band top as a fraction of tank pressure
    pub upper_fraction: f64,
    pub scan: ScanSettings,
}

impl Default for PressureSolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            abs_tol: 0.1,
            fd_step: 10.0,
            zero_slope: 0.01,
            damping_decrement: 0.05,
            damping_floor: 0.05,
            upper_fraction: 1.0,
            scan: ScanSettings::default(),
        }
    }
}

/// Scan-then-Newton solver for one geometry.
#[derive(Clone, Debug, Default)]
pub struct PressureSolver {
    config: PressureSolverConfig,
}

impl PressureSolver {
    pub fn new(config: PressureSolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PressureSolverConfig {
        &self.config
    }

    /// Find the starting guess, then iterate.
    pub fn solve(&self, residual: &dyn PressureResidual, gamma0: f64) -> ConvergenceResult {
        let band = AdmissibleBand::new(residual, self.config.upper_fraction);
        match starting_pressure(residual, &band, gamma0, &self.config.scan) {
            StartingGuess::Found(pc) => self.iterate_from(residual, pc, gamma0),
            StartingGuess::NoSignChange => {
                ConvergenceResult::not_started(ConvergenceFlag::NoBracketedSolution, gamma0)
            }
            StartingGuess::NoValidSample => {
                ConvergenceResult::not_started(ConvergenceFlag::ChemistryDiverged, gamma0)
            }
        }
    }

    /// Newton iteration from `pc0`, skipping the scan.
    pub fn iterate_from(
        &self,
        residual: &dyn PressureResidual,
        pc0: f64,
        gamma0: f64,
    ) -> ConvergenceResult {
        let cfg = &self.config;
        let band = AdmissibleBand::new(residual, cfg.upper_fraction);
        let ambient = residual.ambient_pressure();
        let tank = residual.tank_pressure();

        let mut pc = pc0;
        let mut gamma = gamma0;
        let mut sample = residual.residual(pc, gamma);
        if sample.chemistry_failed {
            tracing::debug!(pc, "chemistry failed at starting guess");
            return ConvergenceResult {
                pc,
                residual: sample.value,
                iterations: 0,
                gamma,
                flag: ConvergenceFlag::ChemistryDiverged,
            };
        }
        gamma = adopt_gamma(gamma, sample.gamma);

        let mut damping = 1.0;
        let mut iterations = 0;
        while sample.value.abs() > cfg.abs_tol && iterations < cfg.max_iterations {
            let slope = self.slope(residual, pc, sample.value, gamma);
            let mut next = pc - damping * sample.value / slope;

            if next.is_nan() || next <= band.lower {
                next = (1.5 * ambient).max(0.2 * tank);
                if next >= band.upper {
                    next = 0.5 * (band.lower + band.upper);
                }
                damping = (damping - cfg.damping_decrement).max(cfg.damping_floor);
                tracing::trace!(pc, damping, "step fell below ambient");
            } else if next >= band.upper {
                next = 0.75 * tank;
                if next <= band.lower || next >= band.upper {
                    next = 0.5 * (band.lower + band.upper);
                }
                damping = (damping - cfg.damping_decrement).max(cfg.damping_floor);
                tracing::trace!(pc, damping, "step rose above band top");
            }

            pc = next;
            sample = residual.residual(pc, gamma);
            if !sample.chemistry_failed {
                gamma = adopt_gamma(gamma, sample.gamma);
            }
            iterations += 1;
            tracing::trace!(iteration = iterations, pc, residual = sample.value, gamma, "newton step");
        }

        let flag = if sample.value.abs() <= cfg.abs_tol && !sample.chemistry_failed {
            ConvergenceFlag::Converged
        } else if sample.chemistry_failed {
            ConvergenceFlag::BothDiverged
        } else {
            ConvergenceFlag::PressureDiverged
        };

        ConvergenceResult {
            pc,
            residual: sample.value,
            iterations,
            gamma,
            flag,
        }
    }

    /// Forward-difference slope, falling back to a backward difference when
    /// the forward point has no chemistry.
    fn slope(&self, residual: &dyn PressureResidual, pc: f64, f: f64, gamma: f64) -> f64 {
        let h = self.config.fd_step;
        let forward = residual.residual(pc + h, gamma);
        let slope = if !forward.chemistry_failed {
            (forward.value - f) / h
        } else {
            let backward = residual.residual(pc - h, gamma);
            if backward.chemistry_failed {
                0.0
            } else {
                (f - backward.value) / h
            }
        };
        if slope == 0.0 {
            self.config.zero_slope
        } else {
            slope
        }
    }
}

/// Take the oracle's γ when it is a usable ratio of specific heats.
fn adopt_gamma(current: f64, reported: f64) -> f64 {
    if reported.is_finite() && reported > 1.0 {
        reported
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::residual::ResidualSample;
    use proptest::prelude::*;
    use std::cell::Cell;

    struct Linear {
        slope: f64,
        root: f64,
        ambient: f64,
        tank: f64,
    }

    impl PressureResidual for Linear {
        fn residual(&self, pc: f64, _gamma_seed: f64) -> ResidualSample {
            ResidualSample::ok(self.slope * (pc - self.root), 1.25)
        }

        fn ambient_pressure(&self) -> f64 {
            self.ambient
        }

        fn tank_pressure(&self) -> f64 {
            self.tank
        }
    }

    /// Square-root closure like a liquid injector: steep near the tank.
    struct SqrtFeed {
        scale: f64,
        tank: f64,
    }

    impl PressureResidual for SqrtFeed {
        fn residual(&self, pc: f64, _gamma_seed: f64) -> ResidualSample {
            if pc >= self.tank {
                return ResidualSample::failed();
            }
            ResidualSample::ok(self.scale * (self.tank - pc).sqrt() - pc, 1.2)
        }

        fn ambient_pressure(&self) -> f64 {
            1e5
        }

        fn tank_pressure(&self) -> f64 {
            self.tank
        }
    }

    /// Step residual (flat on both sides of 2 bar) that Newton cannot settle.
    /// Optionally loses chemistry after a number of calls.
    struct Flat {
        fail_after: Cell<Option<usize>>,
        calls: Cell<usize>,
    }

    impl PressureResidual for Flat {
        fn residual(&self, pc: f64, _gamma_seed: f64) -> ResidualSample {
            let n = self.calls.get();
            self.calls.set(n + 1);
            if let Some(limit) = self.fail_after.get()
                && n >= limit
            {
                return ResidualSample::failed();
            }
            ResidualSample::ok(if pc < 2e5 { -1e3 } else { 1e3 }, 1.2)
        }

        fn ambient_pressure(&self) -> f64 {
            1e5
        }

        fn tank_pressure(&self) -> f64 {
            50e5
        }
    }

    #[test]
    fn converges_on_liquid_feed_curve() {
        let r = SqrtFeed {
            scale: 3e4,
            tank: 55e5,
        };
        let out = PressureSolver::default().solve(&r, 1.3);
        assert_eq!(out.flag, ConvergenceFlag::Converged);
        assert!(out.pc > 1e5 && out.pc < 55e5);
        assert!(out.residual.abs() <= 0.1);
        assert_eq!(out.gamma, 1.2);
    }

    #[test]
    fn reinvoking_from_converged_pc_takes_no_steps() {
        let r = Linear {
            slope: -3.0,
            root: 31e5,
            ambient: 1e5,
            tank: 55e5,
        };
        let solver = PressureSolver::default();
        let first = solver.solve(&r, 1.3);
        assert_eq!(first.flag, ConvergenceFlag::Converged);

        let again = solver.iterate_from(&r, first.pc, first.gamma);
        assert_eq!(again.flag, ConvergenceFlag::Converged);
        assert_eq!(again.iterations, 0);
        assert_eq!(again.pc, first.pc);
    }

    #[test]
    fn iteration_cap_is_pressure_divergence() {
        let r = Flat {
            fail_after: Cell::new(None),
            calls: Cell::new(0),
        };
        let config = PressureSolverConfig {
            max_iterations: 20,
            ..PressureSolverConfig::default()
        };
        let out = PressureSolver::new(config).solve(&r, 1.3);
        assert_eq!(out.flag, ConvergenceFlag::PressureDiverged);
        assert_eq!(out.iterations, 20);
        assert!(out.pc > 1e5 && out.pc < 50e5);
    }

    #[test]
    fn chemistry_loss_at_cap_is_both_diverged() {
        // Scan uses 99 calls; let the start and a few steps succeed
        let r = Flat {
            fail_after: Cell::new(Some(105)),
            calls: Cell::new(0),
        };
        let config = PressureSolverConfig {
            max_iterations: 10,
            ..PressureSolverConfig::default()
        };
        let out = PressureSolver::new(config).solve(&r, 1.3);
        assert_eq!(out.flag, ConvergenceFlag::BothDiverged);
    }

    #[test]
    fn chemistry_loss_at_start_is_chemistry_diverged() {
        let r = Flat {
            fail_after: Cell::new(Some(0)),
            calls: Cell::new(0),
        };
        let out = PressureSolver::default().iterate_from(&r, 20e5, 1.3);
        assert_eq!(out.flag, ConvergenceFlag::ChemistryDiverged);
        assert_eq!(out.iterations, 0);
    }

    #[test]
    fn every_scan_failure_is_chemistry_diverged() {
        let r = Flat {
            fail_after: Cell::new(Some(0)),
            calls: Cell::new(0),
        };
        let out = PressureSolver::default().solve(&r, 1.3);
        assert_eq!(out.flag, ConvergenceFlag::ChemistryDiverged);
        assert_eq!(out.pc, 0.0);
    }

    #[test]
    fn no_bracket_reports_flag_ten() {
        let r = Linear {
            slope: 1.0,
            root: 80e5,
            ambient: 1e5,
            tank: 55e5,
        };
        let out = PressureSolver::default().solve(&r, 1.3);
        assert_eq!(out.flag, ConvergenceFlag::NoBracketedSolution);
        assert_eq!(out.pc, 0.0);
        assert_eq!(out.iterations, 0);
    }

    #[test]
    fn root_at_tank_pressure_is_not_accepted() {
        let r = Linear {
            slope: -1.0,
            root: 55e5,
            ambient: 1e5,
            tank: 55e5,
        };
        let out = PressureSolver::default().solve(&r, 1.3);
        assert_eq!(out.flag, ConvergenceFlag::NoBracketedSolution);
        assert_eq!(out.pc, 0.0);
    }

    /// Saturating residual: Newton from far away overshoots in both directions.
    struct Arctan;

    impl PressureResidual for Arctan {
        fn residual(&self, pc: f64, _gamma_seed: f64) -> ResidualSample {
            ResidualSample::ok(1e6 * ((30e5 - pc) / 1e5).atan(), 1.2)
        }

        fn ambient_pressure(&self) -> f64 {
            1e5
        }

        fn tank_pressure(&self) -> f64 {
            55e5
        }
    }

    #[test]
    fn runaway_steps_stay_inside_band() {
        let config = PressureSolverConfig {
            max_iterations: 30,
            ..PressureSolverConfig::default()
        };
        let out = PressureSolver::new(config).iterate_from(&Arctan, 5e5, 1.3);
        assert_eq!(out.flag, ConvergenceFlag::PressureDiverged);
        assert_eq!(out.iterations, 30);
        assert!(out.pc > 1e5 && out.pc < 55e5);
    }

    #[test]
    fn scan_start_tames_runaway_residual() {
        let out = PressureSolver::default().solve(&Arctan, 1.3);
        assert_eq!(out.flag, ConvergenceFlag::Converged);
        assert!((out.pc - 30e5).abs() < 1.0);
    }

    proptest! {
        #[test]
        fn linear_residual_converges_for_any_slope(
            magnitude in 1e-3f64..1e3,
            negative in any::<bool>(),
            root in 2e5f64..50e5,
        ) {
            let slope = if negative { -magnitude } else { magnitude };
            let r = Linear { slope, root, ambient: 1e5, tank: 55e5 };
            let out = PressureSolver::default().solve(&r, 1.3);
            prop_assert_eq!(out.flag, ConvergenceFlag::Converged);
            prop_assert!(out.iterations <= 3);
            prop_assert!((out.pc - root).abs() * magnitude <= 0.1);
        }
    }
}
