//! Nozzle expansion and thrust coefficient.

use crate::error::{ComponentError, ComponentResult};
use hc_combustion::isentropic::adapted_expansion_ratio;
use hc_core::units::constants::G0_MPS2;
use std::fmt;
use std::str::FromStr;

/// Nozzle expansion ratio: a fixed number or adapted to ambient pressure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Expansion {
    Fixed(f64),
    /// Exit pressure matches ambient at every chamber pressure
    Adapt,
}

impl Expansion {
    pub fn fixed(eps: f64) -> ComponentResult<Self> {
        if !eps.is_finite() || eps < 1.0 {
            return Err(ComponentError::InvalidArg {
                what: "expansion ratio must be at least 1",
            });
        }
        Ok(Expansion::Fixed(eps))
    }

    /// Exit area ratio at chamber pressure `pc` and ambient `pamb` [Pa].
    pub fn exit_area_ratio(&self, gamma: f64, pamb: f64, pc: f64) -> f64 {
        match *self {
            Expansion::Fixed(eps) => eps,
            Expansion::Adapt => adapted_expansion_ratio(gamma, pamb / pc),
        }
    }
}

impl FromStr for Expansion {
    type Err = ComponentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("adapt") {
            return Ok(Expansion::Adapt);
        }
        let eps: f64 = trimmed.parse().map_err(|_| ComponentError::InvalidArg {
            what: "expansion ratio must be a number or \"adapt\"",
        })?;
        Expansion::fixed(eps)
    }
}

impl fmt::Display for Expansion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expansion::Fixed(eps) => write!(f, "{eps}"),
            Expansion::Adapt => f.write_str("adapt"),
        }
    }
}

/// Thrust coefficient at ambient pressure: CF = CF_vac − eps·pamb/pc.
pub fn thrust_coefficient(cf_vac: f64, eps: f64, pamb: f64, pc: f64) -> f64 {
    cf_vac - eps * (pamb / pc)
}

/// Specific impulse [s] from c* [m/s] and a thrust coefficient.
pub fn specific_impulse(cstar: f64, cf: f64) -> f64 {
    cstar * cf / G0_MPS2
}
