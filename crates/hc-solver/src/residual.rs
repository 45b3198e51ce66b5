//! Mass-conservation residual and starting-guess scan.

use crate::performance::PerformanceEvaluator;
use hc_components::GeometryPoint;
use hc_core::numeric::linspace;

/// Residual assigned to a trial pressure whose chemistry failed [Pa].
pub const FAILED_RESIDUAL: f64 = 1e8;

/// One residual evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResidualSample {
    /// F(pc) [Pa], or `FAILED_RESIDUAL`
    pub value: f64,
    /// γ reported by the oracle at this pc (0 when chemistry failed)
    pub gamma: f64,
    pub chemistry_failed: bool,
}

impl ResidualSample {
    pub fn ok(value: f64, gamma: f64) -> Self {
        Self {
            value,
            gamma,
            chemistry_failed: false,
        }
    }

    pub fn failed() -> Self {
        Self {
            value: FAILED_RESIDUAL,
            gamma: 0.0,
            chemistry_failed: true,
        }
    }
}

/// Zero-function in chamber pressure plus the pressures that bound it.
pub trait PressureResidual {
    /// F(pc) with `gamma_seed` as the oracle's γ guess.
    fn residual(&self, pc: f64, gamma_seed: f64) -> ResidualSample;

    fn ambient_pressure(&self) -> f64;

    fn tank_pressure(&self) -> f64;
}

/// F(pc) = ṁ·c*/At − pc for one geometry.
pub struct ChamberResidual<'a> {
    evaluator: &'a PerformanceEvaluator<'a>,
    geometry: GeometryPoint,
}

impl<'a> ChamberResidual<'a> {
    pub fn new(evaluator: &'a PerformanceEvaluator<'a>, geometry: GeometryPoint) -> Self {
        Self {
            evaluator,
            geometry,
        }
    }
}

impl PressureResidual for ChamberResidual<'_> {
    fn residual(&self, pc: f64, gamma_seed: f64) -> ResidualSample {
        let eval = self.evaluator.evaluate(&self.geometry, pc, gamma_seed);
        if eval.chemistry_failed {
            return ResidualSample::failed();
        }
        let s = eval.state;
        let value = s.mdot * s.cs / self.geometry.throat_area.value - pc;
        if value.is_finite() {
            ResidualSample::ok(value, s.gamma)
        } else {
            ResidualSample::failed()
        }
    }

    fn ambient_pressure(&self) -> f64 {
        self.evaluator.conditions().ambient_pressure.value
    }

    fn tank_pressure(&self) -> f64 {
        self.evaluator.conditions().tank_pressure.value
    }
}

/// Open interval (lower, upper) in which an accepted pc must lie [Pa].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdmissibleBand {
    pub lower: f64,
    pub upper: f64,
}

impl AdmissibleBand {
    /// (ambient, `upper_fraction` × tank).
    pub fn new(residual: &dyn PressureResidual, upper_fraction: f64) -> Self {
        Self {
            lower: residual.ambient_pressure(),
            upper: upper_fraction * residual.tank_pressure(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lower.max(1.0) >= self.upper
    }
}

/// Shape of the starting-guess grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScanSettings {
    /// Evenly spaced points from max(ambient, 1 Pa) up to the split
    pub n_lower: usize,
    /// Points above the split, bunched geometrically toward the band top
    pub n_upper: usize,
    /// Split position as a fraction of the band top
    pub split_fraction: f64,
    /// Gap between the last interior point and the top, as a fraction of the
    /// upper segment
    pub top_gap_fraction: f64,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            n_lower: 60,
            n_upper: 40,
            split_fraction: 0.8,
            top_gap_fraction: 1e-4,
        }
    }
}

impl ScanSettings {
    /// Same split, `total` points overall.
    pub fn with_total_points(total: usize) -> Self {
        let n_lower = (total * 3 / 5).max(2);
        Self {
            n_lower,
            n_upper: total.saturating_sub(n_lower).max(3),
            ..Self::default()
        }
    }
}

/// Deterministic scan pressures.
///
/// Liquid-fed roots tend to sit just under the tank pressure, so the upper
/// segment closes in on the top geometrically.
pub fn scan_grid(band: &AdmissibleBand, settings: &ScanSettings) -> Vec<f64> {
    if band.is_empty() {
        return Vec::new();
    }
    let lo = band.lower.max(1.0);
    let top = band.upper;
    let split = settings.split_fraction * top;
    if split <= lo {
        let mut grid = linspace(lo, top, settings.n_lower + settings.n_upper);
        pull_inside(&mut grid, band);
        return grid;
    }

    let mut grid = linspace(lo, split, settings.n_lower);
    if settings.n_upper >= 2 {
        let span = top - split;
        let interior = settings.n_upper - 2;
        if interior > 0 {
            let ratio = settings.top_gap_fraction.powf(1.0 / interior as f64);
            grid.extend((1..=interior).map(|i| top - span * ratio.powi(i as i32)));
        }
        grid.push(top);
    }
    pull_inside(&mut grid, band);
    grid
}

/// Relative step that moves an edge sample into the open band.
const EDGE_STEP: f64 = 1e-9;

fn pull_inside(grid: &mut [f64], band: &AdmissibleBand) {
    for pc in grid.iter_mut() {
        if *pc <= band.lower {
            *pc = band.lower * (1.0 + EDGE_STEP);
        } else if *pc >= band.upper {
            *pc = band.upper * (1.0 - EDGE_STEP);
        }
    }
}

/// Outcome of the starting-guess scan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StartingGuess {
    /// Scan point with the smallest |F| among usable samples
    Found(f64),
    /// Usable residuals never change sign (or the band is empty)
    NoSignChange,
    /// Chemistry failed at every scan point
    NoValidSample,
}

impl StartingGuess {
    /// Starting pressure, with 0 meaning "do not iterate".
    pub fn pressure(&self) -> f64 {
        match *self {
            StartingGuess::Found(pc) => pc,
            _ => 0.0,
        }
    }
}

/// Scan the band for a usable starting pressure.
///
/// Samples whose chemistry failed are dropped. A residual of exactly zero
/// counts as a sign change.
pub fn starting_pressure(
    residual: &dyn PressureResidual,
    band: &AdmissibleBand,
    gamma0: f64,
    settings: &ScanSettings,
) -> StartingGuess {
    let grid = scan_grid(band, settings);
    if grid.is_empty() {
        return StartingGuess::NoSignChange;
    }

    let samples: Vec<(f64, f64)> = grid
        .iter()
        .map(|&pc| (pc, residual.residual(pc, gamma0)))
        .filter(|(_, sample)| !sample.chemistry_failed)
        .map(|(pc, sample)| (pc, sample.value))
        .collect();

    let Some(&(best_pc, best_f)) = samples
        .iter()
        .min_by(|a, b| a.1.abs().total_cmp(&b.1.abs()))
    else {
        return StartingGuess::NoValidSample;
    };

    let has_positive = samples.iter().any(|&(_, f)| f > 0.0);
    let has_negative = samples.iter().any(|&(_, f)| f < 0.0);
    if best_f == 0.0 || (has_positive && has_negative) {
        StartingGuess::Found(best_pc)
    } else {
        tracing::debug!(
            samples = samples.len(),
            positive = has_positive,
            "residual keeps one sign over the band"
        );
        StartingGuess::NoSignChange
    }
}
