//! Dense sweep output and flag statistics.

use crate::ranges::SweepAxes;
use hc_solver::{ConvergenceFlag, PointSolution};
use serde::Serialize;
use std::fmt;

/// One grid point: its ratios, position and solve outcome.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PointRecord {
    /// (Dport/Dt, Dinj/Dt, Lc/Dt) axis indices
    pub index: (usize, usize, usize),
    pub dport_dt: f64,
    pub dinj_dt: f64,
    pub lc_dt: f64,
    #[serde(flatten)]
    pub solution: PointSolution,
}

impl PointRecord {
    pub fn flag(&self) -> ConvergenceFlag {
        self.solution.convergence.flag
    }
}

/// Every grid point in row-major (Dport, Dinj, Lc) order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SweepResult {
    pub dport_dt: Vec<f64>,
    pub dinj_dt: Vec<f64>,
    pub lc_dt: Vec<f64>,
    pub records: Vec<PointRecord>,
}

impl SweepResult {
    pub(crate) fn new(axes: SweepAxes, records: Vec<PointRecord>) -> Self {
        Self {
            dport_dt: axes.dport_dt,
            dinj_dt: axes.dinj_dt,
            lc_dt: axes.lc_dt,
            records,
        }
    }

    pub fn dims(&self) -> (usize, usize, usize) {
        (self.dport_dt.len(), self.dinj_dt.len(), self.lc_dt.len())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Position of `(i, j, k)` in `records`, if inside the grid.
    pub fn flat_index(&self, i: usize, j: usize, k: usize) -> Option<usize> {
        let (ni, nj, nk) = self.dims();
        (i < ni && j < nj && k < nk).then(|| (i * nj + j) * nk + k)
    }

    pub fn get(&self, i: usize, j: usize, k: usize) -> Option<&PointRecord> {
        self.flat_index(i, j, k).and_then(|n| self.records.get(n))
    }

    pub fn iter(&self) -> impl Iterator<Item = &PointRecord> {
        self.records.iter()
    }

    pub fn flag_counts(&self) -> FlagCounts {
        FlagCounts::tally(self.records.iter().map(PointRecord::flag))
    }
}

/// How many points ended with each flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FlagCounts {
    pub converged: usize,
    pub pressure_diverged: usize,
    pub chemistry_diverged: usize,
    pub both_diverged: usize,
    pub no_bracketed_solution: usize,
}

impl FlagCounts {
    pub fn tally(flags: impl IntoIterator<Item = ConvergenceFlag>) -> Self {
        let mut counts = Self::default();
        for flag in flags {
            *counts.slot(flag) += 1;
        }
        counts
    }

    fn slot(&mut self, flag: ConvergenceFlag) -> &mut usize {
        match flag {
            ConvergenceFlag::Converged => &mut self.converged,
            ConvergenceFlag::PressureDiverged => &mut self.pressure_diverged,
            ConvergenceFlag::ChemistryDiverged => &mut self.chemistry_diverged,
            ConvergenceFlag::BothDiverged => &mut self.both_diverged,
            ConvergenceFlag::NoBracketedSolution => &mut self.no_bracketed_solution,
        }
    }

    pub fn get(&self, flag: ConvergenceFlag) -> usize {
        match flag {
            ConvergenceFlag::Converged => self.converged,
            ConvergenceFlag::PressureDiverged => self.pressure_diverged,
            ConvergenceFlag::ChemistryDiverged => self.chemistry_diverged,
            ConvergenceFlag::BothDiverged => self.both_diverged,
            ConvergenceFlag::NoBracketedSolution => self.no_bracketed_solution,
        }
    }

    pub fn total(&self) -> usize {
        ConvergenceFlag::ALL.iter().map(|f| self.get(*f)).sum()
    }

    /// Share of converged points in percent; 0 for an empty sweep.
    pub fn converged_percent(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => 100.0 * self.converged as f64 / total as f64,
        }
    }
}

impl fmt::Display for FlagCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for flag in ConvergenceFlag::ALL {
            writeln!(f, "{:>24}: {}", flag.to_string(), self.get(flag))?;
        }
        write!(f, "{:>24}: {:.1}%", "converged share", self.converged_percent())
    }
}
