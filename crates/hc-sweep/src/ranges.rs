//! Axis definitions for the geometry grid.

use crate::error::SweepError;
use hc_core::numeric::{arange, linspace};

/// Values along one ratio axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RatioRange {
    /// `start, start + step, ...` strictly below `stop`
    Stepped { start: f64, stop: f64, step: f64 },
    /// `points` evenly spaced values from `start` to `stop` inclusive
    Linspace { start: f64, stop: f64, points: usize },
    /// A single value
    Single(f64),
}

impl RatioRange {
    pub fn values(&self, axis: &'static str) -> Result<Vec<f64>, SweepError> {
        let values = match *self {
            RatioRange::Stepped { start, stop, step } => {
                arange(start, stop, step).map_err(|e| SweepError::InvalidRange {
                    axis,
                    reason: e.to_string(),
                })?
            }
            RatioRange::Linspace {
                start,
                stop,
                points,
            } => {
                if !start.is_finite() || !stop.is_finite() {
                    return Err(SweepError::InvalidRange {
                        axis,
                        reason: "bounds must be finite".to_string(),
                    });
                }
                linspace(start, stop, points)
            }
            RatioRange::Single(value) => vec![value],
        };
        if values.is_empty() {
            return Err(SweepError::EmptyAxis { axis });
        }
        if let Some(bad) = values.iter().find(|v| !(v.is_finite() && **v > 0.0)) {
            return Err(SweepError::InvalidRange {
                axis,
                reason: format!("ratio {bad} is not positive"),
            });
        }
        Ok(values)
    }
}

/// The three sweep axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepRanges {
    pub dport_dt: RatioRange,
    pub dinj_dt: RatioRange,
    pub lc_dt: RatioRange,
}

/// Expanded axis values.
#[derive(Clone, Debug, PartialEq)]
pub struct SweepAxes {
    pub dport_dt: Vec<f64>,
    pub dinj_dt: Vec<f64>,
    pub lc_dt: Vec<f64>,
}

impl SweepRanges {
    pub fn axes(&self) -> Result<SweepAxes, SweepError> {
        Ok(SweepAxes {
            dport_dt: self.dport_dt.values("Dport/Dt")?,
            dinj_dt: self.dinj_dt.values("Dinj/Dt")?,
            lc_dt: self.lc_dt.values("Lc/Dt")?,
        })
    }
}

impl SweepAxes {
    pub fn dims(&self) -> (usize, usize, usize) {
        (self.dport_dt.len(), self.dinj_dt.len(), self.lc_dt.len())
    }

    pub fn len(&self) -> usize {
        let (a, b, c) = self.dims();
        a * b * c
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
