//! Feed-system fluids the property backend knows about.

/// Fluids that can sit in the run tank and feed the injector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    /// Nitrous oxide (N₂O), the usual self-pressurizing oxidizer
    NitrousOxide,
    /// Oxygen (O₂)
    O2,
    /// Carbon dioxide (CO₂), self-pressurizing cold-flow simulant
    CO2,
    /// Nitrogen (N₂)
    N2,
    /// Air (pseudo-pure backend fluid)
    Air,
    /// Water (H₂O), liquid cold-flow simulant
    H2O,
    /// Ethane
    Ethane,
    /// Propane
    Propane,
}

impl Species {
    pub const ALL: [Species; 8] = [
        Species::NitrousOxide,
        Species::O2,
        Species::CO2,
        Species::N2,
        Species::Air,
        Species::H2O,
        Species::Ethane,
        Species::Propane,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Species::NitrousOxide => "N2O",
            Species::O2 => "O2",
            Species::CO2 => "CO2",
            Species::N2 => "N2",
            Species::Air => "Air",
            Species::H2O => "H2O",
            Species::Ethane => "Ethane",
            Species::Propane => "Propane",
        }
    }

    /// CoolProp fluid name, as written in persisted configurations.
    pub fn coolprop_name(&self) -> &'static str {
        match self {
            Species::NitrousOxide => "NitrousOxide",
            Species::O2 => "Oxygen",
            Species::CO2 => "CarbonDioxide",
            Species::N2 => "Nitrogen",
            Species::Air => "Air",
            Species::H2O => "Water",
            Species::Ethane => "Ethane",
            Species::Propane => "n-Propane",
        }
    }

    /// Map to the rfluids substance used by the CoolProp backend.
    pub(crate) fn rfluids_pure(&self) -> rfluids::substance::Pure {
        use rfluids::substance::Pure;
        match self {
            Species::NitrousOxide => Pure::NitrousOxide,
            Species::O2 => Pure::Oxygen,
            Species::CO2 => Pure::CarbonDioxide,
            Species::N2 => Pure::Nitrogen,
            Species::Air => Pure::Air,
            Species::H2O => Pure::Water,
            Species::Ethane => Pure::Ethane,
            Species::Propane => Pure::nPropane,
        }
    }
}

impl std::str::FromStr for Species {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "N2O" | "NITROUSOXIDE" | "NITROUS OXIDE" => Ok(Species::NitrousOxide),
            "O2" | "OXYGEN" => Ok(Species::O2),
            "CO2" | "CARBONDIOXIDE" | "CARBON DIOXIDE" => Ok(Species::CO2),
            "N2" | "NITROGEN" => Ok(Species::N2),
            "AIR" => Ok(Species::Air),
            "H2O" | "WATER" => Ok(Species::H2O),
            "ETHANE" | "C2H6" => Ok(Species::Ethane),
            "PROPANE" | "N-PROPANE" | "C3H8" => Ok(Species::Propane),
            _ => Err("unknown species"),
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.coolprop_name())
    }
}
