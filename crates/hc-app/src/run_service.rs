//! Single-geometry solves and full sweeps.

use crate::error::{AppError, AppResult};
use crate::progress::{RunProgressEvent, RunStage};
use crate::runtime::RunRuntime;
use hc_components::{GeometryPoint, GeometryRatios};
use hc_project::{RunConfig, load_run_config};
use hc_solver::{PointSolution, solve_point};
use hc_sweep::{FlagCounts, SweepDriver, SweepOptions, SweepResult};
use serde::Serialize;
use std::path::Path;
use std::time::Instant;

/// One solved geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointReport {
    pub dport_dt: f64,
    pub dinj_dt: f64,
    pub lc_dt: f64,
    #[serde(flatten)]
    pub solution: PointSolution,
}

#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    pub counts: FlagCounts,
    pub elapsed_wall_s: f64,
    pub result: SweepResult,
}

type ProgressCallback<'a> = Option<&'a (dyn Fn(RunProgressEvent) + Sync)>;

fn emit(
    progress: ProgressCallback<'_>,
    stage: RunStage,
    started: Instant,
    completed: usize,
    total: usize,
) {
    if let Some(cb) = progress {
        cb(RunProgressEvent {
            stage,
            elapsed_wall_s: started.elapsed().as_secs_f64(),
            completed,
            total,
        });
    }
}

/// Solve one geometry with the runtime's γ seed.
pub fn solve_geometry(runtime: &RunRuntime, ratios: GeometryRatios) -> AppResult<PointReport> {
    let geometry = GeometryPoint::from_ratios(ratios)?;
    let evaluator = runtime.evaluator();
    let solution = solve_point(&evaluator, runtime.solver(), geometry, runtime.gamma0());
    tracing::info!(
        dport_dt = ratios.dport_dt,
        dinj_dt = ratios.dinj_dt,
        lc_dt = ratios.lc_dt,
        flag = %solution.convergence.flag,
        pc = solution.convergence.pc,
        "geometry solved"
    );
    Ok(PointReport {
        dport_dt: ratios.dport_dt,
        dinj_dt: ratios.dinj_dt,
        lc_dt: ratios.lc_dt,
        solution,
    })
}

/// Sweep the configured geometry grid.
pub fn run_sweep(
    runtime: &RunRuntime,
    config: &RunConfig,
    serial: bool,
    progress: ProgressCallback<'_>,
) -> AppResult<SweepReport> {
    let started = Instant::now();
    let evaluator = runtime.evaluator();
    let driver = SweepDriver::new(
        &evaluator,
        runtime.solver().clone(),
        SweepOptions {
            gamma0: runtime.gamma0(),
            serial,
        },
    );

    let result = driver.run_with_progress(&config.ranges, |p| {
        emit(progress, RunStage::Solving, started, p.completed, p.total)
    })?;
    let total = result.len();
    emit(progress, RunStage::Completed, started, total, total);

    Ok(SweepReport {
        counts: result.flag_counts(),
        elapsed_wall_s: started.elapsed().as_secs_f64(),
        result,
    })
}

/// Load a configuration file and sweep it with CoolProp and analytic chemistry.
pub fn run_sweep_from_path(
    path: &Path,
    serial: bool,
    progress: ProgressCallback<'_>,
) -> AppResult<SweepReport> {
    let started = Instant::now();
    let config = load_run_config(path)?;
    emit(progress, RunStage::BuildingRuntime, started, 0, 0);
    let runtime = RunRuntime::from_config(&config)?;
    run_sweep(&runtime, &config, serial, progress)
}

pub fn save_sweep_json(path: &Path, report: &SweepReport) -> AppResult<()> {
    let content = serde_json::to_string_pretty(report)?;
    std::fs::write(path, content).map_err(|source| AppError::ResultsWrite {
        path: path.to_path_buf(),
        source,
    })
}
