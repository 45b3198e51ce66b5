//! Ideal-gas isentropic nozzle relations.
//!
//! All functions take the ratio of specific heats `gamma` (> 1) and work on
//! dimensionless pressure and area ratios.

/// Vandenkerckhove function Γ(γ).
pub fn vandenkerckhove(gamma: f64) -> f64 {
    gamma.sqrt() * (2.0 / (gamma + 1.0)).powf((gamma + 1.0) / (2.0 * (gamma - 1.0)))
}

/// Exit-to-chamber pressure ratio at which the throat chokes.
pub fn critical_pressure_ratio(gamma: f64) -> f64 {
    (2.0 / (gamma + 1.0)).powf(gamma / (gamma - 1.0))
}

/// Area ratio Ae/At of a nozzle expanding to `pe_over_pc`.
pub fn area_ratio_from_pressure_ratio(gamma: f64, pe_over_pc: f64) -> f64 {
    let expansion = 1.0 - pe_over_pc.powf((gamma - 1.0) / gamma);
    let denom = (2.0 * gamma / (gamma - 1.0) * pe_over_pc.powf(2.0 / gamma) * expansion).sqrt();
    vandenkerckhove(gamma) / denom
}

/// Expansion ratio of a nozzle adapted to `pamb_over_pc` (exit pressure equals
/// ambient).
///
/// A ratio at or above the critical pressure ratio means no divergent section
/// is needed and yields 1. Non-positive or non-finite inputs also yield 1.
pub fn adapted_expansion_ratio(gamma: f64, pamb_over_pc: f64) -> f64 {
    if !gamma.is_finite() || gamma <= 1.0 || !pamb_over_pc.is_finite() || pamb_over_pc <= 0.0 {
        return 1.0;
    }
    if pamb_over_pc >= critical_pressure_ratio(gamma) {
        return 1.0;
    }
    area_ratio_from_pressure_ratio(gamma, pamb_over_pc).max(1.0)
}

/// Supersonic exit pressure ratio pe/pc for a given expansion ratio.
///
/// Bisection in log space on the supersonic branch, where the area ratio
/// decreases monotonically with pe/pc.
pub fn pressure_ratio_from_area_ratio(gamma: f64, eps: f64) -> Option<f64> {
    const MAX_ITER: usize = 200;
    const REL_TOL: f64 = 1e-12;

    if !eps.is_finite() || eps < 1.0 || !gamma.is_finite() || gamma <= 1.0 {
        return None;
    }
    let p_crit = critical_pressure_ratio(gamma);
    if eps == 1.0 {
        return Some(p_crit);
    }

    let mut lo = 1e-12_f64.ln();
    let mut hi = p_crit.ln();
    if area_ratio_from_pressure_ratio(gamma, lo.exp()) < eps {
        return None;
    }
    for _ in 0..MAX_ITER {
        let mid = 0.5 * (lo + hi);
        if area_ratio_from_pressure_ratio(gamma, mid.exp()) > eps {
            lo = mid;
        } else {
            hi = mid;
        }
        if (hi - lo).abs() < REL_TOL {
            break;
        }
    }
    Some((0.5 * (lo + hi)).exp())
}

/// Ideal characteristic velocity c* [m/s] from gas properties.
pub fn characteristic_velocity(gamma: f64, tc_k: f64, mw: f64) -> f64 {
    let r_specific = hc_core::units::constants::R_UNIVERSAL / mw;
    (r_specific * tc_k).sqrt() / vandenkerckhove(gamma)
}

/// Ideal vacuum thrust coefficient for expansion ratio `eps`.
pub fn vacuum_thrust_coefficient(gamma: f64, eps: f64) -> Option<f64> {
    let pe = pressure_ratio_from_area_ratio(gamma, eps)?;
    let momentum = vandenkerckhove(gamma)
        * (2.0 * gamma / (gamma - 1.0) * (1.0 - pe.powf((gamma - 1.0) / gamma))).sqrt();
    Some(momentum + eps * pe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn vandenkerckhove_of_air() {
        assert!((vandenkerckhove(1.4) - 0.6847).abs() < 1e-4);
    }

    #[test]
    fn critical_ratio_of_air() {
        assert!((critical_pressure_ratio(1.4) - 0.5283).abs() < 1e-4);
    }

    #[test]
    fn area_ratio_is_one_at_throat() {
        let eps = area_ratio_from_pressure_ratio(1.4, critical_pressure_ratio(1.4));
        assert!((eps - 1.0).abs() < 1e-9);
    }

    #[test]
    fn adapted_ratio_for_sea_level_at_fifty_bar() {
        // pe/pc = 0.02 for γ = 1.2 gives eps ≈ 7.05
        let eps = adapted_expansion_ratio(1.2, 1e5 / 50e5);
        assert!(eps > 6.9 && eps < 7.2, "eps = {eps}");
    }

    #[test]
    fn adapted_ratio_is_one_without_divergent_section() {
        assert_eq!(adapted_expansion_ratio(1.2, 0.9), 1.0);
        assert_eq!(adapted_expansion_ratio(1.2, 1.5), 1.0);
        assert_eq!(adapted_expansion_ratio(1.2, 0.0), 1.0);
        assert_eq!(adapted_expansion_ratio(0.0, 0.1), 1.0);
    }

    #[test]
    fn vacuum_cf_at_throat_and_beyond() {
        let cf1 = vacuum_thrust_coefficient(1.2, 1.0).unwrap();
        let cf40 = vacuum_thrust_coefficient(1.2, 40.0).unwrap();
        assert!(cf1 > 1.1 && cf1 < 1.3, "cf1 = {cf1}");
        assert!(cf40 > cf1);
        assert!(cf40 < 2.2, "cf40 = {cf40}");
        assert!(vacuum_thrust_coefficient(1.2, 0.5).is_none());
    }

    #[test]
    fn cstar_for_typical_hybrid_gas() {
        let cs = characteristic_velocity(1.2, 3200.0, 26.0);
        assert!(cs > 1500.0 && cs < 1700.0, "c* = {cs}");
    }

    proptest! {
        #[test]
        fn pressure_ratio_inverts_area_ratio(gamma in 1.1f64..1.4, pe in 1e-4f64..0.5) {
            prop_assume!(pe < critical_pressure_ratio(gamma));
            let eps = area_ratio_from_pressure_ratio(gamma, pe);
            let back = pressure_ratio_from_area_ratio(gamma, eps).unwrap();
            prop_assert!((back - pe).abs() <= 1e-6 * pe.max(1e-3));
        }
    }
}
