use hc_components::{DyerInjector, GeometryPoint, GeometryRatios};
use hc_core::units::{k, pa};
use hc_fluids::{CoolPropOracle, PropertyOracle, Species};

fn nitrous() -> CoolPropOracle {
    CoolPropOracle::new(Species::NitrousOxide)
}

#[test]
fn flashing_flow_sits_below_spi() {
    let fluid = nitrous();
    let inj = DyerInjector::new(0.8).unwrap();
    let b = inj
        .flux_breakdown(&fluid, pa(55e5), pa(30e5), k(288.0))
        .unwrap();
    assert!(b.weight.is_some());
    assert!(b.flux > 0.0);
    assert!(b.flux < b.spi, "flux {} spi {}", b.flux, b.spi);
}

#[test]
fn above_vapor_pressure_flow_is_spi() {
    let fluid = nitrous();
    let pv = fluid.saturation_pressure(k(288.0)).unwrap().value;
    let inj = DyerInjector::new(0.8).unwrap();
    let b = inj
        .flux_breakdown(&fluid, pa(pv + 10e5), pa(pv + 2e5), k(288.0))
        .unwrap();
    assert_eq!(b.weight, None);
    assert_eq!(b.flux, b.spi);
}

#[test]
fn reference_geometry_oxidizer_flow_is_finite() {
    let fluid = nitrous();
    let g = GeometryPoint::from_ratios(GeometryRatios {
        dport_dt: 4.0,
        dinj_dt: 0.9,
        lc_dt: 9.0,
    })
    .unwrap();
    let inj = DyerInjector::new(0.8).unwrap();
    let mdot = inj
        .mdot(&fluid, pa(55e5), pa(40e5), k(288.0), g.injector_area)
        .unwrap();
    assert!(mdot.value.is_finite() && mdot.value > 0.0);
}
