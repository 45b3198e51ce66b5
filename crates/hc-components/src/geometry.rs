//! Chamber geometry from dimensionless ratios.
//!
//! Every length is scaled by the throat diameter, which is fixed at 1 m, so
//! the areas (and the mass flows built on them) are per Dt².

use crate::common::check_positive;
use crate::error::ComponentResult;
use hc_core::units::{Area, circle_area, m, m2};

/// Reference throat diameter [m].
pub const THROAT_DIAMETER_M: f64 = 1.0;

/// One point in (Dport/Dt, Dinj/Dt, Lc/Dt) space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometryRatios {
    pub dport_dt: f64,
    pub dinj_dt: f64,
    pub lc_dt: f64,
}

/// Flow areas of one candidate motor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometryPoint {
    pub injector_area: Area,
    pub port_area: Area,
    pub throat_area: Area,
    /// Lateral surface of the cylindrical port
    pub burning_area: Area,
}

impl GeometryPoint {
    pub fn from_ratios(ratios: GeometryRatios) -> ComponentResult<Self> {
        check_positive(ratios.dport_dt, "Dport/Dt")?;
        check_positive(ratios.dinj_dt, "Dinj/Dt")?;
        check_positive(ratios.lc_dt, "Lc/Dt")?;

        let dt = THROAT_DIAMETER_M;
        let dport = ratios.dport_dt * dt;
        Ok(Self {
            injector_area: circle_area(m(ratios.dinj_dt * dt)),
            port_area: circle_area(m(dport)),
            throat_area: circle_area(m(dt)),
            burning_area: m2(std::f64::consts::PI * dport * ratios.lc_dt * dt),
        })
    }
}
