use hc_core::units::{k, pa};
use hc_fluids::{CoolPropOracle, Property, PropertyOracle, SaturatedPhase, Species};

#[test]
fn nitrous_vapor_pressure_near_288k() {
    let oracle = CoolPropOracle::new(Species::NitrousOxide);
    let pv = oracle.saturation_pressure(k(288.0)).unwrap();
    // About 50.8 bar at 15 °C
    assert!(pv.value > 48e5 && pv.value < 53e5, "pv = {}", pv.value);
}

#[test]
fn saturated_liquid_denser_than_vapor() {
    let oracle = CoolPropOracle::new(Species::NitrousOxide);
    let t = k(288.0);
    let rho_l = oracle
        .evaluate_saturated(Property::Density, t, SaturatedPhase::Liquid)
        .unwrap();
    let rho_v = oracle
        .evaluate_saturated(Property::Density, t, SaturatedPhase::Vapor)
        .unwrap();
    assert!(rho_l > 700.0 && rho_l < 900.0, "rho_l = {rho_l}");
    assert!(rho_v > 100.0 && rho_v < 200.0, "rho_v = {rho_v}");

    let h_l = oracle
        .evaluate_saturated(Property::Enthalpy, t, SaturatedPhase::Liquid)
        .unwrap();
    let h_v = oracle
        .evaluate_saturated(Property::Enthalpy, t, SaturatedPhase::Vapor)
        .unwrap();
    assert!(h_v > h_l);
}

#[test]
fn compressed_liquid_single_phase_lookup() {
    let oracle = CoolPropOracle::new(Species::NitrousOxide);
    let rho = oracle
        .evaluate_or_saturated(Property::Density, pa(55e5), k(288.0), SaturatedPhase::Liquid)
        .unwrap();
    assert!(rho > 700.0, "rho = {rho}");
}

#[test]
fn vapor_side_lookup_is_light() {
    let oracle = CoolPropOracle::new(Species::NitrousOxide);
    let rho = oracle
        .evaluate_or_saturated(Property::Density, pa(20e5), k(288.0), SaturatedPhase::Vapor)
        .unwrap();
    assert!(rho > 1.0 && rho < 100.0, "rho = {rho}");
}
