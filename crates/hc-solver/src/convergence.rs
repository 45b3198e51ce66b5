//! Outcome classification of one chamber-pressure solve.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a single solve ended. The integer codes are part of the output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum ConvergenceFlag {
    /// |F(pc)| within tolerance
    Converged,
    /// Iteration cap reached with usable chemistry at the last step
    PressureDiverged,
    /// Chemistry failed at the starting guess (or at every scan sample)
    ChemistryDiverged,
    /// Iteration cap reached and chemistry failed at the last step
    BothDiverged,
    /// The residual never changes sign over the admissible band
    NoBracketedSolution,
}

impl ConvergenceFlag {
    pub const ALL: [ConvergenceFlag; 5] = [
        ConvergenceFlag::Converged,
        ConvergenceFlag::PressureDiverged,
        ConvergenceFlag::ChemistryDiverged,
        ConvergenceFlag::BothDiverged,
        ConvergenceFlag::NoBracketedSolution,
    ];

    pub fn code(self) -> i32 {
        match self {
            ConvergenceFlag::Converged => 0,
            ConvergenceFlag::PressureDiverged => 1,
            ConvergenceFlag::ChemistryDiverged => -1,
            ConvergenceFlag::BothDiverged => 2,
            ConvergenceFlag::NoBracketedSolution => 10,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ConvergenceFlag::Converged => "converged",
            ConvergenceFlag::PressureDiverged => "pressure diverged",
            ConvergenceFlag::ChemistryDiverged => "chemistry diverged",
            ConvergenceFlag::BothDiverged => "both diverged",
            ConvergenceFlag::NoBracketedSolution => "no bracketed solution",
        }
    }

    pub fn is_converged(self) -> bool {
        self == ConvergenceFlag::Converged
    }
}

impl From<ConvergenceFlag> for i32 {
    fn from(flag: ConvergenceFlag) -> Self {
        flag.code()
    }
}

impl TryFrom<i32> for ConvergenceFlag {
    type Error = String;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        ConvergenceFlag::ALL
            .into_iter()
            .find(|flag| flag.code() == code)
            .ok_or_else(|| format!("unknown convergence flag {code}"))
    }
}

impl fmt::Display for ConvergenceFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.code())
    }
}

/// Final state of one pressure solve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConvergenceResult {
    /// Chamber pressure [Pa]; 0 when no starting guess exists
    pub pc: f64,
    /// Residual F(pc) at the final iterate [Pa]
    pub residual: f64,
    pub iterations: usize,
    /// Last usable γ, fed to the next oracle call
    pub gamma: f64,
    pub flag: ConvergenceFlag,
}

impl ConvergenceResult {
    /// Result for a solve that never started iterating.
    pub(crate) fn not_started(flag: ConvergenceFlag, gamma: f64) -> Self {
        Self {
            pc: 0.0,
            residual: 0.0,
            iterations: 0,
            gamma,
            flag,
        }
    }
}
