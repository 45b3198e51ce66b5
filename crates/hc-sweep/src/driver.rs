//! Parallel evaluation of the geometry grid.

use crate::error::SweepError;
use crate::ranges::SweepRanges;
use crate::result::{PointRecord, SweepResult};
use hc_components::{GeometryPoint, GeometryRatios};
use hc_solver::performance::DEFAULT_GAMMA;
use hc_solver::{PerformanceEvaluator, PressureSolver, solve_point};
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Run-wide sweep settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepOptions {
    /// γ seed handed to every point
    pub gamma0: f64,
    /// Evaluate points one by one on the calling thread
    pub serial: bool,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            gamma0: DEFAULT_GAMMA,
            serial: false,
        }
    }
}

/// Progress report after each finished point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SweepProgress {
    pub completed: usize,
    pub total: usize,
}

struct GridPoint {
    index: (usize, usize, usize),
    ratios: GeometryRatios,
    geometry: GeometryPoint,
}

pub struct SweepDriver<'a> {
    evaluator: &'a PerformanceEvaluator<'a>,
    solver: PressureSolver,
    options: SweepOptions,
}

impl<'a> SweepDriver<'a> {
    pub fn new(
        evaluator: &'a PerformanceEvaluator<'a>,
        solver: PressureSolver,
        options: SweepOptions,
    ) -> Self {
        Self {
            evaluator,
            solver,
            options,
        }
    }

    pub fn options(&self) -> &SweepOptions {
        &self.options
    }

    pub fn run(&self, ranges: &SweepRanges) -> Result<SweepResult, SweepError> {
        self.run_with_progress(ranges, |_| {})
    }

    /// Solve every grid point. `progress` is called once per finished point,
    /// possibly from worker threads and in completion order.
    pub fn run_with_progress<F>(
        &self,
        ranges: &SweepRanges,
        progress: F,
    ) -> Result<SweepResult, SweepError>
    where
        F: Fn(SweepProgress) + Sync,
    {
        self.evaluator.conditions().validate()?;
        let axes = ranges.axes()?;
        let (ni, nj, nk) = axes.dims();
        let total = axes.len();

        let mut points = Vec::with_capacity(total);
        for (i, &dport_dt) in axes.dport_dt.iter().enumerate() {
            for (j, &dinj_dt) in axes.dinj_dt.iter().enumerate() {
                for (k, &lc_dt) in axes.lc_dt.iter().enumerate() {
                    let ratios = GeometryRatios {
                        dport_dt,
                        dinj_dt,
                        lc_dt,
                    };
                    points.push(GridPoint {
                        index: (i, j, k),
                        ratios,
                        geometry: GeometryPoint::from_ratios(ratios)?,
                    });
                }
            }
        }

        tracing::info!(
            points = total,
            dims = ?(ni, nj, nk),
            serial = self.options.serial,
            "starting geometry sweep"
        );

        let completed = AtomicUsize::new(0);
        let solve = |point: &GridPoint| {
            let solution = solve_point(
                self.evaluator,
                &self.solver,
                point.geometry,
                self.options.gamma0,
            );
            let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
            progress(SweepProgress {
                completed: done,
                total,
            });
            PointRecord {
                index: point.index,
                dport_dt: point.ratios.dport_dt,
                dinj_dt: point.ratios.dinj_dt,
                lc_dt: point.ratios.lc_dt,
                solution,
            }
        };

        let records: Vec<PointRecord> = if self.options.serial {
            points.iter().map(solve).collect()
        } else {
            points.par_iter().map(solve).collect()
        };

        let result = SweepResult::new(axes, records);
        let counts = result.flag_counts();
        tracing::info!(
            points = total,
            converged = counts.converged,
            converged_percent = counts.converged_percent(),
            "geometry sweep finished"
        );
        Ok(result)
    }
}
