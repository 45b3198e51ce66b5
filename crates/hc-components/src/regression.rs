//! Solid fuel regression law.

use crate::common::check_positive;
use crate::error::ComponentResult;

/// Power-law regression rate r = a·Gox^n [m/s], Gox in kg/(s·m²).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegressionLaw {
    pub a: f64,
    pub n: f64,
}

impl RegressionLaw {
    pub fn new(a: f64, n: f64) -> ComponentResult<Self> {
        check_positive(a, "regression coefficient a")?;
        check_positive(n, "regression exponent n")?;
        Ok(Self { a, n })
    }

    /// Regression rate for oxidizer mass flux `gox`. Non-positive flux gives 0.
    pub fn rate(&self, gox: f64) -> f64 {
        if gox > 0.0 { self.a * gox.powf(self.n) } else { 0.0 }
    }

    /// Fuel mass flow [kg/s] from a burning surface of `burning_area` [m²].
    pub fn fuel_mass_flow(&self, rho_fuel: f64, burning_area: f64, gox: f64) -> f64 {
        rho_fuel * burning_area * self.rate(gox)
    }
}

/// Checks shared by callers that hold a raw fuel density.
pub fn check_fuel_density(rho_fuel: f64) -> ComponentResult<()> {
    check_positive(rho_fuel, "fuel density")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paraffin_like_rate() {
        let law = RegressionLaw::new(0.17e-3, 0.5).unwrap();
        let r = law.rate(400.0);
        assert!((r - 0.17e-3 * 20.0).abs() < 1e-15);
        assert!((law.fuel_mass_flow(850.0, 2.0, 400.0) - 850.0 * 2.0 * r).abs() < 1e-12);
    }

    #[test]
    fn no_flux_no_regression() {
        let law = RegressionLaw::new(0.17e-3, 0.5).unwrap();
        assert_eq!(law.rate(0.0), 0.0);
        assert_eq!(law.rate(-5.0), 0.0);
    }

    #[test]
    fn rejects_bad_coefficients() {
        assert!(RegressionLaw::new(0.0, 0.5).is_err());
        assert!(RegressionLaw::new(1e-4, f64::NAN).is_err());
        assert!(check_fuel_density(-1.0).is_err());
    }
}
