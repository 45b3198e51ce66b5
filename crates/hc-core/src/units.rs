// hc-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, Length as UomLength, MassRate as UomMassRate, Pressure as UomPressure,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type Length = UomLength;
pub type MassRate = UomMassRate;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn kgps(v: f64) -> MassRate {
    use uom::si::mass_rate::kilogram_per_second;
    MassRate::new::<kilogram_per_second>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn m2(v: f64) -> Area {
    use uom::si::area::square_meter;
    Area::new::<square_meter>(v)
}

/// Area of a circle of diameter `d`.
#[inline]
pub fn circle_area(d: Length) -> Area {
    0.25 * std::f64::consts::PI * d * d
}

pub mod constants {
    /// Gravity used to turn c*·CF into specific impulse [m/s²].
    pub const G0_MPS2: f64 = 9.81;

    /// Universal gas constant [J/(kmol·K)].
    pub const R_UNIVERSAL: f64 = 8314.462_618;

    /// Pa -> psia
    pub const PA_TO_PSIA: f64 = 1.450_377e-4;

    /// ft/s -> m/s
    pub const FT_TO_M: f64 = 0.3048;

    /// °R -> K
    pub const RANKINE_TO_KELVIN: f64 = 5.0 / 9.0;

    /// kJ/mol -> cal/mol
    pub const KJ_PER_MOL_TO_CAL_PER_MOL: f64 = 239.0057;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _p = pa(101_325.0);
        let _t = k(300.0);
        let _mdot = kgps(1.2);
        let _l = m(2.0);
        assert_eq!(m2(3.0).value, 3.0);
    }

    #[test]
    fn circle_area_of_unit_diameter() {
        let a = circle_area(m(1.0));
        assert!((a.value - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
    }

    #[test]
    fn psia_conversion_of_one_atmosphere() {
        let psia = 101_325.0 * constants::PA_TO_PSIA;
        assert!((psia - 14.696).abs() < 1e-3);
    }
}
