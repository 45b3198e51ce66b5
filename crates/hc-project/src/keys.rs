//! Configuration keys as the GUI writes them.

pub const PTANK: &str = "Optimization_ptank";
pub const TTANK: &str = "Optimization_Ttank";
pub const PAMB: &str = "Optimization_pamb";
pub const GAMMA0: &str = "Optimization_gamma0";
pub const PARAMETER_POINTS: &str = "Optimization_parameter_points";

/// Key prefixes of the three sweep axes; suffixed with `.min`, `.max`, `.step`.
pub const DPORT_DT: &str = "Optimization_Dport-Dt";
pub const DINJ_DT: &str = "Optimization_Dinj-Dt";
pub const LC_DT: &str = "Optimization_Lc-Dt";

pub const NOZZLE_EPSILON: &str = "Nozzle_epsilon";
pub const INJECTOR_CD: &str = "Injector_CD";
pub const LINE_PRESSURE_DROP: &str = "Line_pressure_drop";

pub const REGRESSION_A: &str = "Fuel & Oxidiser_a";
pub const REGRESSION_N: &str = "Fuel & Oxidiser_n";
pub const FUEL_DENSITY: &str = "Fuel & Oxidiser_rho.fuel";

pub const OXIDIZER: &str = "Fuel & Oxidiser_Oxidizer";
pub const OXIDIZER_COOLPROP: &str = "Fuel & Oxidiser_Oxidizer_CoolProp";
pub const OXIDIZER_WEIGHT: &str = "Fuel & Oxidiser_Oxidizer_WeightFraction";
pub const OXIDIZER_TEMPERATURE: &str = "Fuel & Oxidiser_Oxidizer_Temperature";
pub const OXIDIZER_ENTHALPY: &str = "Fuel & Oxidiser_Oxidizer_SpecificEnthalpy";
pub const OXIDIZER_FORMULA: &str = "Fuel & Oxidiser_Oxidizer_ExpandedFormula";

pub const FUEL: &str = "Fuel & Oxidiser_Fuel";
pub const FUEL_WEIGHT: &str = "Fuel & Oxidiser_Fuel_WeightFraction";
pub const FUEL_TEMPERATURE: &str = "Fuel & Oxidiser_Fuel_Temperature";
pub const FUEL_ENTHALPY: &str = "Fuel & Oxidiser_Fuel_SpecificEnthalpy";
pub const FUEL_FORMULA: &str = "Fuel & Oxidiser_Fuel_ExpandedFormula";
pub const SELECTED_FUELS: &str = "selected_fuels";
pub const FUEL_WEIGHT_ENTRIES: &str = "fuel_weight_entries";

pub const SOLVER_MAX_ITERATIONS: &str = "Solver_max_iterations";
pub const SOLVER_TOLERANCE: &str = "Solver_tolerance";
pub const SOLVER_SCAN_POINTS: &str = "Solver_scan_points";

pub const CHEMISTRY_MR_OPT: &str = "Chemistry_MR.opt";
pub const CHEMISTRY_TC_PEAK: &str = "Chemistry_Tc.peak";
