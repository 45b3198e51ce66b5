//! Geometry sweeps over (Dport/Dt, Dinj/Dt, Lc/Dt).
//!
//! Every grid point is an independent chamber-pressure solve with its own
//! explicit γ seed, so points run on a rayon pool in any order and the
//! result does not depend on scheduling. Each point always produces a
//! classified record; a failing point never stops the sweep.

pub mod driver;
pub mod error;
pub mod ranges;
pub mod result;

pub use driver::{SweepDriver, SweepOptions, SweepProgress};
pub use error::SweepError;
pub use ranges::{RatioRange, SweepAxes, SweepRanges};
pub use result::{FlagCounts, PointRecord, SweepResult};
