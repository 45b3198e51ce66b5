//! Solve one geometry and report its performance.

use crate::convergence::ConvergenceResult;
use crate::newton::PressureSolver;
use crate::performance::{PerformanceEvaluator, PerformanceState};
use crate::residual::ChamberResidual;
use hc_components::GeometryPoint;
use serde::{Deserialize, Serialize};

/// Classified solve plus the performance at the final pressure.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointSolution {
    pub convergence: ConvergenceResult,
    /// All zeros when the solve never produced a pressure
    pub performance: PerformanceState,
}

/// Solve for pc at `geometry` with γ seed `gamma0`, then re-evaluate the
/// performance at the result.
pub fn solve_point(
    evaluator: &PerformanceEvaluator<'_>,
    solver: &PressureSolver,
    geometry: GeometryPoint,
    gamma0: f64,
) -> PointSolution {
    let residual = ChamberResidual::new(evaluator, geometry);
    let convergence = solver.solve(&residual, gamma0);
    let performance = if convergence.pc != 0.0 {
        evaluator
            .evaluate(&geometry, convergence.pc, convergence.gamma)
            .state
    } else {
        PerformanceState::default()
    };
    tracing::debug!(
        pc = convergence.pc,
        iterations = convergence.iterations,
        flag = convergence.flag.code(),
        "point solved"
    );
    PointSolution {
        convergence,
        performance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::fixtures::nitrous_paraffin;
    use crate::convergence::ConvergenceFlag;
    use crate::performance::mocks::{FailingChemistry, FixedChemistry, LiquidOx};
    use hc_components::{ConstantLineLoss, GeometryRatios};
    use hc_core::units::pa;

    fn geometry(dinj_dt: f64) -> GeometryPoint {
        GeometryPoint::from_ratios(GeometryRatios {
            dport_dt: 4.0,
            dinj_dt,
            lc_dt: 9.0,
        })
        .unwrap()
    }

    #[test]
    fn converged_point_carries_performance() {
        let conditions = nitrous_paraffin();
        let chemistry = FixedChemistry::new();
        let loss = ConstantLineLoss::default();
        let eval = PerformanceEvaluator::new(&conditions, &LiquidOx, &chemistry, &loss);
        let out = solve_point(&eval, &PressureSolver::default(), geometry(0.05), 1.3);

        assert_eq!(out.convergence.flag, ConvergenceFlag::Converged);
        let pc = out.convergence.pc;
        assert!(pc > 1e5 && pc < 55e5);
        let s = out.performance;
        let closure = s.mdot * s.cs / std::f64::consts::FRAC_PI_4;
        assert!((closure - pc).abs() < 1.0);
    }

    #[test]
    fn failing_chemistry_never_converges() {
        let conditions = nitrous_paraffin();
        let loss = ConstantLineLoss::default();
        let eval = PerformanceEvaluator::new(&conditions, &LiquidOx, &FailingChemistry, &loss);
        let out = solve_point(&eval, &PressureSolver::default(), geometry(0.9), 1.3);
        assert!(matches!(
            out.convergence.flag,
            ConvergenceFlag::ChemistryDiverged | ConvergenceFlag::BothDiverged
        ));
        assert_eq!(out.performance, PerformanceState::default());
    }

    #[test]
    fn ambient_above_tank_has_no_solution() {
        let mut conditions = nitrous_paraffin();
        conditions.ambient_pressure = pa(60e5);
        let chemistry = FixedChemistry::new();
        let loss = ConstantLineLoss::default();
        let eval = PerformanceEvaluator::new(&conditions, &LiquidOx, &chemistry, &loss);
        let out = solve_point(&eval, &PressureSolver::default(), geometry(0.9), 1.3);
        assert_eq!(out.convergence.flag, ConvergenceFlag::NoBracketedSolution);
        assert_eq!(out.convergence.pc, 0.0);
        assert_eq!(chemistry.calls(), 0);
    }
}
