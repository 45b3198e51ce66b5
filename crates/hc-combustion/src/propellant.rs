//! Propellant description and reactant card rendering.

use crate::error::{CombustionError, CombustionResult};
use hc_core::units::constants::KJ_PER_MOL_TO_CAL_PER_MOL;
use serde::{Deserialize, Serialize};

/// One reactant as the equilibrium backend sees it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reactant {
    /// Equilibrium-backend name (e.g. `"N2O"`, `"paraffin"`)
    pub name: String,
    /// Weight fraction [%]
    pub weight_fraction: f64,
    /// Expanded formula (e.g. `"C 73 H 124"`); empty when the backend knows the name
    #[serde(default)]
    pub formula: String,
    /// Injection temperature [K]
    #[serde(default)]
    pub temperature_k: Option<f64>,
    /// Specific enthalpy of formation [kJ/mol]
    #[serde(default)]
    pub enthalpy_kj_per_mol: Option<f64>,
}

impl Reactant {
    /// Reactant known to the backend by name, at 100 wt%.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            weight_fraction: 100.0,
            formula: String::new(),
            temperature_k: None,
            enthalpy_kj_per_mol: None,
        }
    }

    pub fn with_formula(mut self, formula: impl Into<String>) -> Self {
        self.formula = formula.into();
        self
    }

    pub fn with_weight_fraction(mut self, weight_fraction: f64) -> Self {
        self.weight_fraction = weight_fraction;
        self
    }

    pub fn with_temperature(mut self, temperature_k: f64) -> Self {
        self.temperature_k = Some(temperature_k);
        self
    }

    pub fn with_enthalpy(mut self, enthalpy_kj_per_mol: f64) -> Self {
        self.enthalpy_kj_per_mol = Some(enthalpy_kj_per_mol);
        self
    }

    /// Render one card: `<kind> NAME FORMULA wt%= W [t,k= T] [h,cal= H]`.
    fn write_card(&self, kind: &str, out: &mut String) {
        out.push_str(&format!(
            "{kind} {}    {}    wt%=    {}",
            self.name, self.formula, self.weight_fraction
        ));
        if let Some(t) = self.temperature_k {
            out.push_str(&format!("    t,k= {t}"));
        }
        if let Some(h) = self.enthalpy_kj_per_mol {
            out.push_str(&format!("    h,cal= {}", h * KJ_PER_MOL_TO_CAL_PER_MOL));
        }
        out.push('\n');
    }

    fn validate(&self, role: &str) -> CombustionResult<()> {
        if self.name.trim().is_empty() {
            return Err(CombustionError::Propellant {
                what: format!("{role} name is empty"),
            });
        }
        if !self.weight_fraction.is_finite()
            || self.weight_fraction <= 0.0
            || self.weight_fraction > 100.0
        {
            return Err(CombustionError::Propellant {
                what: format!(
                    "{role} '{}' weight fraction {} outside (0, 100]",
                    self.name, self.weight_fraction
                ),
            });
        }
        if let Some(t) = self.temperature_k
            && (!t.is_finite() || t <= 0.0)
        {
            return Err(CombustionError::Propellant {
                what: format!("{role} '{}' temperature must be positive", self.name),
            });
        }
        if let Some(h) = self.enthalpy_kj_per_mol
            && !h.is_finite()
        {
            return Err(CombustionError::Propellant {
                what: format!("{role} '{}' enthalpy must be finite", self.name),
            });
        }
        Ok(())
    }
}

/// Oxidizer: one reactant plus the name the fluid-property backend knows it by.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OxidizerSpec {
    /// Property-backend fluid name (e.g. `"NitrousOxide"`)
    pub property_name: String,
    pub reactant: Reactant,
}

/// Full propellant combination. Immutable for the duration of a run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropellantSpec {
    pub oxidizer: OxidizerSpec,
    pub fuels: Vec<Reactant>,
}

/// Fuel weight fractions must add to 100 within this margin [%].
const WEIGHT_SUM_TOL: f64 = 1e-6;

impl PropellantSpec {
    /// Nitrous oxide with a single fuel.
    pub fn nitrous_with(fuel: Reactant) -> Self {
        Self {
            oxidizer: OxidizerSpec {
                property_name: "NitrousOxide".to_string(),
                reactant: Reactant::named("N2O"),
            },
            fuels: vec![fuel],
        }
    }

    pub fn validate(&self) -> CombustionResult<()> {
        if self.oxidizer.property_name.trim().is_empty() {
            return Err(CombustionError::Propellant {
                what: "oxidizer property name is empty".to_string(),
            });
        }
        self.oxidizer.reactant.validate("oxidizer")?;
        if self.fuels.is_empty() {
            return Err(CombustionError::Propellant {
                what: "at least one fuel is required".to_string(),
            });
        }
        for fuel in &self.fuels {
            fuel.validate("fuel")?;
        }
        let total: f64 = self.fuels.iter().map(|f| f.weight_fraction).sum();
        if (total - 100.0).abs() > WEIGHT_SUM_TOL {
            return Err(CombustionError::Propellant {
                what: format!("fuel weight fractions sum to {total}, expected 100"),
            });
        }
        Ok(())
    }

    /// Oxidizer card for the equilibrium backend.
    pub fn oxidizer_card(&self) -> String {
        let mut card = String::new();
        self.oxidizer.reactant.write_card("oxid", &mut card);
        card
    }

    /// Fuel cards, one line per fuel.
    pub fn fuel_cards(&self) -> String {
        let mut cards = String::new();
        for fuel in &self.fuels {
            fuel.write_card("fuel", &mut cards);
        }
        cards
    }
}
