//! Typed run inputs built from a flat configuration.

use crate::ProjectResult;
use crate::flat::FlatConfig;
use crate::keys;
use crate::validate::ValidationError;
use hc_combustion::{OxidizerSpec, PropellantSpec, Reactant};
use hc_components::{DyerInjector, Expansion, RegressionLaw};
use hc_core::units::{k, pa};
use hc_solver::performance::DEFAULT_GAMMA;
use hc_solver::{OperatingConditions, PressureSolverConfig, ScanSettings};
use hc_sweep::{RatioRange, SweepRanges};

const CUSTOM_PREFIX: &str = "Custom: ";
const DEFAULT_OXIDIZER: &str = "N2O";
const DEFAULT_OXIDIZER_PROPERTY_NAME: &str = "NitrousOxide";

/// Paraffin card used when the config names paraffin without details.
const PARAFFIN_FORMULA: &str = "C 73 H 124";
const PARAFFIN_TEMPERATURE_K: f64 = 533.0;
const PARAFFIN_ENTHALPY_KJ_PER_MOL: f64 = -1860.6;

/// Optional overrides for the analytic chemistry model.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChemistryOverrides {
    pub mr_opt: Option<f64>,
    pub tc_peak_k: Option<f64>,
}

/// Everything one optimisation run needs, validated.
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    /// Tank pressure [Pa]
    pub tank_pressure: f64,
    /// Tank temperature [K]
    pub tank_temperature: f64,
    /// Ambient pressure [Pa]
    pub ambient_pressure: f64,
    pub ranges: SweepRanges,
    pub gamma0: f64,
    pub expansion: Expansion,
    pub injector_cd: f64,
    pub regression: RegressionLaw,
    /// Solid fuel density [kg/m³]
    pub fuel_density: f64,
    pub propellant: PropellantSpec,
    /// Feed line pressure drop [Pa]
    pub line_pressure_drop: f64,
    pub solver: PressureSolverConfig,
    pub chemistry: ChemistryOverrides,
}

impl RunConfig {
    pub fn from_flat(flat: &FlatConfig) -> ProjectResult<Self> {
        let tank_pressure = flat.require_number(keys::PTANK)?;
        let tank_temperature = flat.require_number(keys::TTANK)?;
        let ambient_pressure = flat.require_number(keys::PAMB)?;

        let gamma0 = flat.number(keys::GAMMA0)?.unwrap_or(DEFAULT_GAMMA);
        if gamma0 <= 1.0 {
            return Err(ValidationError::invalid(keys::GAMMA0, gamma0, "must exceed 1").into());
        }

        let config = Self {
            tank_pressure,
            tank_temperature,
            ambient_pressure,
            ranges: sweep_ranges(flat)?,
            gamma0,
            expansion: expansion(flat)?,
            injector_cd: flat.require_number(keys::INJECTOR_CD)?,
            regression: RegressionLaw::new(
                flat.require_number(keys::REGRESSION_A)?,
                flat.require_number(keys::REGRESSION_N)?,
            )?,
            fuel_density: flat.require_number(keys::FUEL_DENSITY)?,
            propellant: propellant(flat)?,
            line_pressure_drop: flat.number(keys::LINE_PRESSURE_DROP)?.unwrap_or(0.0),
            solver: solver_config(flat)?,
            chemistry: ChemistryOverrides {
                mr_opt: flat.number(keys::CHEMISTRY_MR_OPT)?,
                tc_peak_k: flat.number(keys::CHEMISTRY_TC_PEAK)?,
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Cross-field checks that need the typed values.
    pub fn validate(&self) -> ProjectResult<()> {
        self.operating_conditions()?.validate()?;
        self.ranges.axes()?;
        self.propellant.validate()?;
        if self.line_pressure_drop < 0.0 {
            return Err(ValidationError::invalid(
                keys::LINE_PRESSURE_DROP,
                self.line_pressure_drop,
                "must not be negative",
            )
            .into());
        }
        if self.line_pressure_drop >= self.tank_pressure {
            return Err(ValidationError::invalid(
                keys::LINE_PRESSURE_DROP,
                self.line_pressure_drop,
                "leaves no injector upstream pressure",
            )
            .into());
        }
        Ok(())
    }

    pub fn operating_conditions(&self) -> ProjectResult<OperatingConditions> {
        Ok(OperatingConditions {
            tank_pressure: pa(self.tank_pressure),
            tank_temperature: k(self.tank_temperature),
            ambient_pressure: pa(self.ambient_pressure),
            injector: DyerInjector::new(self.injector_cd)?,
            regression: self.regression,
            fuel_density: self.fuel_density,
            expansion: self.expansion,
        })
    }
}

fn axis_range(
    flat: &FlatConfig,
    prefix: &str,
    points: Option<usize>,
) -> ProjectResult<RatioRange> {
    let min_key = format!("{prefix}.min");
    let max_key = format!("{prefix}.max");
    let step_key = format!("{prefix}.step");
    let start = flat.require_number(&min_key)?;
    let stop = flat.require_number(&max_key)?;
    if let Some(step) = flat.number(&step_key)? {
        return Ok(RatioRange::Stepped { start, stop, step });
    }
    match points {
        Some(points) => Ok(RatioRange::Linspace {
            start,
            stop,
            points,
        }),
        None => Err(ValidationError::Missing {
            key: format!("{step_key} or {}", keys::PARAMETER_POINTS),
        }
        .into()),
    }
}

fn sweep_ranges(flat: &FlatConfig) -> ProjectResult<SweepRanges> {
    let points = flat.count(keys::PARAMETER_POINTS)?;
    Ok(SweepRanges {
        dport_dt: axis_range(flat, keys::DPORT_DT, points)?,
        dinj_dt: axis_range(flat, keys::DINJ_DT, points)?,
        lc_dt: axis_range(flat, keys::LC_DT, points)?,
    })
}

fn expansion(flat: &FlatConfig) -> ProjectResult<Expansion> {
    if let Some(eps) = flat.number(keys::NOZZLE_EPSILON).ok().flatten() {
        return Ok(Expansion::fixed(eps)?);
    }
    let text = flat
        .text(keys::NOZZLE_EPSILON)?
        .ok_or_else(|| ValidationError::Missing {
            key: keys::NOZZLE_EPSILON.to_string(),
        })?;
    text.parse::<Expansion>().map_err(|_| {
        ValidationError::invalid(
            keys::NOZZLE_EPSILON,
            &text,
            "expected a number >= 1 or 'adapt'",
        )
        .into()
    })
}

/// Strip the GUI's `Custom: ` marker from a reactant name.
fn reactant_name(raw: &str) -> &str {
    raw.strip_prefix(CUSTOM_PREFIX).unwrap_or(raw).trim()
}

fn oxidizer(flat: &FlatConfig) -> ProjectResult<OxidizerSpec> {
    let name = flat
        .text(keys::OXIDIZER)?
        .unwrap_or_else(|| DEFAULT_OXIDIZER.to_string());
    let mut reactant = Reactant::named(reactant_name(&name))
        .with_weight_fraction(flat.number(keys::OXIDIZER_WEIGHT)?.unwrap_or(100.0));
    if let Some(formula) = flat.text(keys::OXIDIZER_FORMULA)? {
        reactant = reactant.with_formula(formula);
    }
    if let Some(t) = flat.number(keys::OXIDIZER_TEMPERATURE)? {
        reactant = reactant.with_temperature(t);
    }
    if let Some(h) = flat.number(keys::OXIDIZER_ENTHALPY)? {
        reactant = reactant.with_enthalpy(h);
    }
    Ok(OxidizerSpec {
        property_name: flat
            .text(keys::OXIDIZER_COOLPROP)?
            .unwrap_or_else(|| DEFAULT_OXIDIZER_PROPERTY_NAME.to_string()),
        reactant,
    })
}

fn fuels(flat: &FlatConfig) -> ProjectResult<Vec<Reactant>> {
    let selected = flat.list(keys::SELECTED_FUELS)?.unwrap_or(&[]);
    if selected.len() > 1 {
        let weights = flat
            .table(keys::FUEL_WEIGHT_ENTRIES)?
            .ok_or_else(|| ValidationError::Missing {
                key: keys::FUEL_WEIGHT_ENTRIES.to_string(),
            })?;
        return selected
            .iter()
            .map(|raw| -> ProjectResult<Reactant> {
                let weight = weights
                    .get(raw)
                    .and_then(|v| v.as_number())
                    .ok_or_else(|| ValidationError::Missing {
                        key: format!("{}.{raw}", keys::FUEL_WEIGHT_ENTRIES),
                    })?;
                Ok(with_known_defaults(
                    Reactant::named(reactant_name(raw)).with_weight_fraction(weight),
                ))
            })
            .collect();
    }

    let name = match selected.first() {
        Some(name) => name.clone(),
        None => flat.text(keys::FUEL)?.ok_or_else(|| ValidationError::Missing {
            key: keys::FUEL.to_string(),
        })?,
    };
    let mut fuel = Reactant::named(reactant_name(&name))
        .with_weight_fraction(flat.number(keys::FUEL_WEIGHT)?.unwrap_or(100.0));
    if let Some(formula) = flat.text(keys::FUEL_FORMULA)? {
        fuel = fuel.with_formula(formula);
    }
    if let Some(t) = flat.number(keys::FUEL_TEMPERATURE)? {
        fuel = fuel.with_temperature(t);
    }
    if let Some(h) = flat.number(keys::FUEL_ENTHALPY)? {
        fuel = fuel.with_enthalpy(h);
    }
    Ok(vec![with_known_defaults(fuel)])
}

/// Fill in the paraffin card details the equilibrium backend needs.
fn with_known_defaults(mut fuel: Reactant) -> Reactant {
    if fuel.name.eq_ignore_ascii_case("paraffin") {
        if fuel.formula.is_empty() {
            fuel.formula = PARAFFIN_FORMULA.to_string();
        }
        fuel.temperature_k.get_or_insert(PARAFFIN_TEMPERATURE_K);
        fuel.enthalpy_kj_per_mol
            .get_or_insert(PARAFFIN_ENTHALPY_KJ_PER_MOL);
    }
    fuel
}

fn propellant(flat: &FlatConfig) -> ProjectResult<PropellantSpec> {
    Ok(PropellantSpec {
        oxidizer: oxidizer(flat)?,
        fuels: fuels(flat)?,
    })
}

fn solver_config(flat: &FlatConfig) -> ProjectResult<PressureSolverConfig> {
    let mut config = PressureSolverConfig::default();
    if let Some(max_iterations) = flat.count(keys::SOLVER_MAX_ITERATIONS)? {
        config.max_iterations = max_iterations;
    }
    if let Some(tol) = flat.number(keys::SOLVER_TOLERANCE)? {
        if tol <= 0.0 {
            return Err(
                ValidationError::invalid(keys::SOLVER_TOLERANCE, tol, "must be positive").into(),
            );
        }
        config.abs_tol = tol;
    }
    if let Some(points) = flat.count(keys::SOLVER_SCAN_POINTS)? {
        if points < 5 {
            return Err(ValidationError::invalid(
                keys::SOLVER_SCAN_POINTS,
                points,
                "needs at least 5 points",
            )
            .into());
        }
        config.scan = ScanSettings::with_total_points(points);
    }
    Ok(config)
}


#[cfg(test)]
mod tests {
    use super::fixtures::reference_flat;
    use super::*;
    use crate::ProjectError;
    use crate::flat::ConfigValue;
    use std::collections::BTreeMap;

    #[test]
    fn reference_config_builds() {
        let run = RunConfig::from_flat(&reference_flat()).unwrap();
        assert_eq!(run.tank_pressure, 55e5);
        assert_eq!(run.gamma0, 1.3);
        assert_eq!(run.expansion, Expansion::Adapt);
        assert_eq!(
            run.ranges.dport_dt,
            RatioRange::Stepped {
                start: 3.5,
                stop: 5.0,
                step: 0.5
            }
        );
        assert_eq!(
            run.ranges.dinj_dt,
            RatioRange::Linspace {
                start: 0.8,
                stop: 1.0,
                points: 3
            }
        );
        assert_eq!(run.line_pressure_drop, 0.0);
        assert_eq!(run.solver, PressureSolverConfig::default());

        let fuel = &run.propellant.fuels[0];
        assert_eq!(fuel.name, "paraffin");
        assert_eq!(fuel.formula, PARAFFIN_FORMULA);
        assert_eq!(fuel.temperature_k, Some(533.0));
        assert_eq!(run.propellant.oxidizer.property_name, "NitrousOxide");
    }

    #[test]
    fn numeric_epsilon_and_solver_overrides() {
        let flat = reference_flat()
            .with(keys::NOZZLE_EPSILON, 6.0)
            .with(keys::SOLVER_MAX_ITERATIONS, 50.0)
            .with(keys::SOLVER_TOLERANCE, 1.0)
            .with(keys::SOLVER_SCAN_POINTS, 50.0)
            .with(keys::LINE_PRESSURE_DROP, 2e5)
            .with(keys::CHEMISTRY_MR_OPT, 6.5)
            .with("Window_width", 1280.0);
        let run = RunConfig::from_flat(&flat).unwrap();
        assert_eq!(run.expansion, Expansion::Fixed(6.0));
        assert_eq!(run.solver.max_iterations, 50);
        assert_eq!(run.solver.abs_tol, 1.0);
        assert_eq!(run.solver.scan.n_lower + run.solver.scan.n_upper, 50);
        assert_eq!(run.line_pressure_drop, 2e5);
        assert_eq!(run.chemistry.mr_opt, Some(6.5));
        assert_eq!(run.chemistry.tc_peak_k, None);
    }

    #[test]
    fn missing_and_invalid_entries_are_rejected() {
        let mut flat = reference_flat();
        flat.remove(keys::PTANK);
        assert!(matches!(
            RunConfig::from_flat(&flat),
            Err(ProjectError::Validation(ValidationError::Missing { .. }))
        ));

        let mut flat = reference_flat();
        flat.remove(keys::PARAMETER_POINTS);
        assert!(matches!(
            RunConfig::from_flat(&flat),
            Err(ProjectError::Validation(ValidationError::Missing { .. }))
        ));

        let flat = reference_flat().with(keys::NOZZLE_EPSILON, "wide");
        assert!(matches!(
            RunConfig::from_flat(&flat),
            Err(ProjectError::Validation(ValidationError::InvalidValue { .. }))
        ));

        let flat = reference_flat().with(keys::NOZZLE_EPSILON, 0.5);
        assert!(matches!(RunConfig::from_flat(&flat), Err(ProjectError::Component(_))));

        let flat = reference_flat().with(keys::FUEL_DENSITY, -1.0);
        assert!(RunConfig::from_flat(&flat).is_err());

        let flat = reference_flat().with(keys::PAMB, 0.0);
        assert!(matches!(RunConfig::from_flat(&flat), Err(ProjectError::Solver(_))));

        let flat = reference_flat().with(format!("{}.max", keys::LC_DT), 7.0);
        assert!(matches!(RunConfig::from_flat(&flat), Err(ProjectError::Sweep(_))));
    }

    #[test]
    fn multi_fuel_selection_uses_weight_table() {
        let mut weights: BTreeMap<String, ConfigValue> = BTreeMap::new();
        weights.insert("paraffin".to_string(), 70.0.into());
        weights.insert("Custom: HTPB".to_string(), "30".into());
        let flat = reference_flat()
            .with(
                keys::SELECTED_FUELS,
                vec!["paraffin".to_string(), "Custom: HTPB".to_string()],
            )
            .with(keys::FUEL_WEIGHT_ENTRIES, ConfigValue::Table(weights));
        let run = RunConfig::from_flat(&flat).unwrap();
        let fuels = &run.propellant.fuels;
        assert_eq!(fuels.len(), 2);
        assert_eq!(fuels[0].weight_fraction, 70.0);
        assert_eq!(fuels[1].name, "HTPB");
        assert_eq!(fuels[1].weight_fraction, 30.0);

        let mut weights: BTreeMap<String, ConfigValue> = BTreeMap::new();
        weights.insert("paraffin".to_string(), 70.0.into());
        weights.insert("Custom: HTPB".to_string(), 20.0.into());
        let flat = flat.with(keys::FUEL_WEIGHT_ENTRIES, crate::ConfigValue::Table(weights));
        assert!(matches!(RunConfig::from_flat(&flat), Err(ProjectError::Combustion(_))));
    }
}
