//! Elemental composition and oxygen balance of reactants.

use crate::propellant::{PropellantSpec, Reactant};
use std::collections::BTreeMap;

struct Element {
    symbol: &'static str,
    /// [g/mol]
    atomic_mass: f64,
    /// O atoms bound per atom in its usual combustion product
    oxygen_demand: f64,
}

const ELEMENTS: &[Element] = &[
    Element {
        symbol: "C",
        atomic_mass: 12.011,
        oxygen_demand: 2.0,
    },
    Element {
        symbol: "H",
        atomic_mass: 1.008,
        oxygen_demand: 0.5,
    },
    Element {
        symbol: "O",
        atomic_mass: 15.999,
        oxygen_demand: -1.0,
    },
    Element {
        symbol: "N",
        atomic_mass: 14.007,
        oxygen_demand: 0.0,
    },
    Element {
        symbol: "Al",
        atomic_mass: 26.982,
        oxygen_demand: 1.5,
    },
    Element {
        symbol: "Mg",
        atomic_mass: 24.305,
        oxygen_demand: 1.0,
    },
    Element {
        symbol: "B",
        atomic_mass: 10.81,
        oxygen_demand: 1.5,
    },
];

fn element(symbol: &str) -> Option<&'static Element> {
    ELEMENTS.iter().find(|e| e.symbol == symbol)
}

/// Atom counts of one molecule, keyed by element symbol.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Composition {
    atoms: BTreeMap<String, f64>,
}

impl Composition {
    /// Card-style formula with alternating symbols and counts, e.g. `"C 73 H 124"`.
    pub fn parse(formula: &str) -> Option<Self> {
        let tokens: Vec<&str> = formula.split_whitespace().collect();
        if tokens.is_empty() || tokens.len() % 2 != 0 {
            return None;
        }
        let mut composition = Self::default();
        for pair in tokens.chunks(2) {
            let count: f64 = pair[1].parse().ok()?;
            composition.add(pair[0], count)?;
        }
        Some(composition)
    }

    /// Compact species name such as `"N2O"` or `"Al(cr)"`. Phase marks in
    /// parentheses are ignored.
    pub fn parse_compact(name: &str) -> Option<Self> {
        let name = name.split('(').next().unwrap_or_default().trim();
        let mut composition = Self::default();
        let mut chars = name.chars().peekable();
        while let Some(c) = chars.next() {
            if !c.is_ascii_uppercase() {
                return None;
            }
            let mut symbol = c.to_string();
            while let Some(&l) = chars.peek().filter(|l| l.is_ascii_lowercase()) {
                symbol.push(l);
                chars.next();
            }
            let mut digits = String::new();
            while let Some(&d) = chars.peek().filter(|d| d.is_ascii_digit()) {
                digits.push(d);
                chars.next();
            }
            let count = if digits.is_empty() {
                1.0
            } else {
                digits.parse().ok()?
            };
            composition.add(&symbol, count)?;
        }
        (!composition.atoms.is_empty()).then_some(composition)
    }

    fn add(&mut self, symbol: &str, count: f64) -> Option<()> {
        element(symbol)?;
        if !count.is_finite() || count <= 0.0 {
            return None;
        }
        *self.atoms.entry(symbol.to_string()).or_default() += count;
        Some(())
    }

    pub fn count(&self, symbol: &str) -> f64 {
        self.atoms.get(symbol).copied().unwrap_or(0.0)
    }

    /// [g/mol]
    pub fn molar_mass(&self) -> f64 {
        self.sum(|e| e.atomic_mass)
    }

    /// O atoms per molecule still needed for complete oxidation. Negative
    /// for net oxygen carriers.
    pub fn oxygen_demand(&self) -> f64 {
        self.sum(|e| e.oxygen_demand)
    }

    /// Oxygen demand per gram [mol O/g].
    pub fn specific_oxygen_demand(&self) -> f64 {
        self.oxygen_demand() / self.molar_mass()
    }

    fn sum(&self, per_atom: impl Fn(&Element) -> f64) -> f64 {
        self.atoms
            .iter()
            .filter_map(|(symbol, count)| element(symbol).map(|e| per_atom(e) * count))
            .sum()
    }
}

impl Reactant {
    /// Composition from the formula, or from the name when no formula is given.
    pub fn composition(&self) -> Option<Composition> {
        if self.formula.trim().is_empty() {
            Composition::parse_compact(&self.name)
        } else {
            Composition::parse(&self.formula)
        }
    }
}

impl PropellantSpec {
    /// Oxidizer-to-fuel mass ratio that exactly burns the fuel blend.
    ///
    /// `None` when any reactant's composition is unknown or the oxidizer
    /// carries no spare oxygen.
    pub fn stoichiometric_mixture_ratio(&self) -> Option<f64> {
        let supply = -self.oxidizer.reactant.composition()?.specific_oxygen_demand();
        if supply.is_nan() || supply <= 0.0 {
            return None;
        }
        let mut need = 0.0;
        for fuel in &self.fuels {
            need += fuel.weight_fraction / 100.0 * fuel.composition()?.specific_oxygen_demand();
        }
        (need > 0.0).then(|| need / supply)
    }
}
