//! Feed-line pressure loss between tank and injector.

use crate::common::check_finite;
use crate::error::{ComponentError, ComponentResult};
use hc_core::units::{Pressure, pa};

/// Pressure drop along the feed line.
pub trait LineLossModel: Send + Sync {
    fn pressure_drop(&self) -> Pressure;
}

/// Fixed pressure drop, zero by default.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantLineLoss {
    drop: Pressure,
}

impl ConstantLineLoss {
    pub fn new(drop: Pressure) -> ComponentResult<Self> {
        check_finite(drop.value, "line pressure drop")?;
        if drop.value < 0.0 {
            return Err(ComponentError::InvalidArg {
                what: "line pressure drop must not be negative",
            });
        }
        Ok(Self { drop })
    }
}

impl Default for ConstantLineLoss {
    fn default() -> Self {
        Self { drop: pa(0.0) }
    }
}

impl LineLossModel for ConstantLineLoss {
    fn pressure_drop(&self) -> Pressure {
        self.drop
    }
}
