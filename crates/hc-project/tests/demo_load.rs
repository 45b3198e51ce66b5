use hc_components::Expansion;
use hc_project::load_run_config;
use hc_sweep::RatioRange;
use std::path::PathBuf;

fn demo(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../demos")
        .join(name)
}

#[test]
fn gui_json_config_loads() {
    let run = load_run_config(&demo("nitrous_paraffin.json")).unwrap();
    assert_eq!(run.expansion, Expansion::Adapt);
    assert_eq!(run.tank_pressure, 55e5);
    assert_eq!(run.propellant.fuels.len(), 1);
    assert_eq!(run.propellant.fuels[0].enthalpy_kj_per_mol, Some(-1860.6));

    let axes = run.ranges.axes().unwrap();
    assert_eq!(axes.dims(), (3, 4, 2));
}

#[test]
fn yaml_config_uses_linspace_axes() {
    let run = load_run_config(&demo("nitrous_paraffin_small.yaml")).unwrap();
    assert_eq!(run.expansion, Expansion::Fixed(6.0));
    assert_eq!(
        run.ranges.dport_dt,
        RatioRange::Linspace {
            start: 3.5,
            stop: 4.5,
            points: 3
        }
    );
    let conditions = run.operating_conditions().unwrap();
    assert_eq!(conditions.fuel_density, 850.0);
}
