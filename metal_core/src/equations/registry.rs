//! # Formula Registry
//!
//! Central registry of the weight formulas the calculator uses. Each formula
//! carries metadata (plain-text form, variables, assumptions) so the CLI, the JSON results and the chat assistant's
//! instructions all quote the same text.
//!
//! ## Usage
//!
//! ```rust
//! use metal_core::equations::registry::Formula;
//!
//! let meta = Formula::Rebar.metadata();
//! assert_eq!(meta.formula_plain, "D² / 162 × L");
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in a formula.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "D", "L", "S")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "mm", "m")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Formula Metadata
// ============================================================================

/// Complete metadata for a weight formula.
#[derive(Debug, Clone)]
pub struct FormulaMetadata {
    /// Human-readable name (e.g., "Round Pipe")
    pub name: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
}

// ============================================================================
// Formula Enum
// ============================================================================

/// Every weight formula, one per calculator shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Formula {
    /// D² / 162 × L
    Rebar,
    /// (D' − S) × S × 0.02466 × L
    Pipe,
    /// L × (W / 1000) × T × 7.85
    Sheet,
    /// ((W + H) × 2 × S) × 0.00785 × L
    RectTube,
    /// (2W − T) × T × 0.00785 × L
    Angle,
}

const LENGTH: Variable = Variable::new("L", "Stock length", "m");
const DIAMETER: Variable = Variable::new("D", "Outside diameter", "mm");
const WIDTH: Variable = Variable::new("W", "Width (leg length for angles)", "mm");
const HEIGHT: Variable = Variable::new("H", "Height", "mm");
const THICKNESS: Variable = Variable::new("T", "Thickness", "mm");
const WALL: Variable = Variable::new("S", "Wall thickness", "mm");

impl Formula {
    /// Get the complete metadata for this formula
    pub fn metadata(&self) -> FormulaMetadata {
        match self {
            Formula::Rebar => FormulaMetadata {
                name: "Rebar",
                formula_plain: "D² / 162 × L",
                variables: vec![DIAMETER, LENGTH],
                assumptions: vec!["Linear-mass approximation for round steel bar"],
            },
            Formula::Pipe => FormulaMetadata {
                name: "Round Pipe",
                formula_plain: "(D - S) × S × 0.02466 × L",
                variables: vec![DIAMETER, WALL, LENGTH],
                assumptions: vec![
                    "D is raised to S + 0.1 mm when the wall reaches the diameter",
                ],
            },
            Formula::Sheet => FormulaMetadata {
                name: "Steel Sheet",
                formula_plain: "L × (W / 1000) × T × 7.85",
                variables: vec![LENGTH, WIDTH, THICKNESS],
                assumptions: vec!["Width converted to meters, thickness kept in mm"],
            },
            Formula::RectTube => FormulaMetadata {
                name: "Rectangular Tube",
                formula_plain: "((W + H) × 2 × S) × 0.00785 × L",
                variables: vec![WIDTH, HEIGHT, WALL, LENGTH],
                assumptions: vec!["Thin-shell perimeter approximation, corners not corrected"],
            },
            Formula::Angle => FormulaMetadata {
                name: "Equal-Leg Angle",
                formula_plain: "(2W - T) × T × 0.00785 × L",
                variables: vec![WIDTH, THICKNESS, LENGTH],
                assumptions: vec!["Both legs are W wide"],
            },
        }
    }

    /// Plain-text formula, shorthand for `metadata().formula_plain`
    pub fn plain(&self) -> &'static str {
        self.metadata().formula_plain
    }
}

/// All registered formulas, in calculator order.
pub static ALL_FORMULAS: &[Formula] = &[
    Formula::Rebar,
    Formula::Pipe,
    Formula::Sheet,
    Formula::RectTube,
    Formula::Angle,
];

/// Render the formula list as markdown bullets
/// (`- Name: formula = kg (variables). Assumptions`).
pub fn formulas_markdown() -> String {
    ALL_FORMULAS
        .iter()
        .map(|f| {
            let meta = f.metadata();
            let vars = meta
                .variables
                .iter()
                .map(|v| format!("{} {}, {}", v.symbol, v.description.to_lowercase(), v.units))
                .collect::<Vec<_>>()
                .join("; ");
            let mut line = format!("- {}: {} = kg ({})", meta.name, meta.formula_plain, vars);
            for note in &meta.assumptions {
                line.push_str(". ");
                line.push_str(note);
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_formulas_have_metadata() {
        for formula in ALL_FORMULAS {
            let meta = formula.metadata();
            assert!(!meta.name.is_empty());
            assert!(meta.formula_plain.contains('L'), "{:?} should scale with length", formula);
            assert!(!meta.variables.is_empty());
            assert!(!meta.assumptions.is_empty());
        }
    }

    #[test]
    fn test_serialization_names() {
        let json = serde_json::to_string(&Formula::RectTube).unwrap();
        assert_eq!(json, "\"rect_tube\"");
    }

    #[test]
    fn test_formulas_markdown() {
        let md = formulas_markdown();
        assert_eq!(md.lines().count(), ALL_FORMULAS.len());
        assert!(md.contains("- Rebar: D² / 162 × L = kg"));
        assert!(md.contains("S wall thickness, mm"));
        assert!(md.contains("D is raised to S + 0.1 mm when the wall reaches the diameter"));
    }
}
