//! # Weight Calculation
//!
//! Mass of one piece of steel stock from its profile dimensions.
//!
//! The engine is total: it never fails and never returns a negative weight.
//! Degenerate geometry is handled by the per-formula guards in
//! [`crate::equations::profile`] and by flooring the result at zero. The
//! result is rounded to two decimals ([`Kilograms::rounded`]).
//!
//! ## Example
//!
//! ```rust
//! use metal_core::calculations::weight::{compute_weight, compute_weight_for};
//! use metal_core::calculations::{Shape, StockProfile};
//! use metal_core::dimensions::DimensionInput;
//!
//! let tube = StockProfile::RectTube {
//!     width_mm: 40.0,
//!     height_mm: 40.0,
//!     wall_mm: 2.0,
//!     length_m: 1.0,
//! };
//! assert_eq!(compute_weight(&tube).0, 2.51);
//!
//! let input = DimensionInput { diameter: 12.0, length: 1.0, ..Default::default() };
//! assert_eq!(compute_weight_for(Shape::Rebar, &input).0, 0.89);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::{Shape, StockProfile};
use crate::dimensions::DimensionInput;
use crate::equations::profile::{angle_weight, pipe_weight, rebar_weight, rect_tube_weight, sheet_weight};
use crate::units::Kilograms;

/// Raw (unrounded, unclamped) weight of a profile in kilograms
fn raw_weight_kg(profile: &StockProfile) -> f64 {
    match *profile {
        StockProfile::Rebar { diameter_mm, length_m } => rebar_weight(diameter_mm, length_m),
        StockProfile::Pipe {
            diameter_mm,
            wall_mm,
            length_m,
        } => pipe_weight(diameter_mm, wall_mm, length_m),
        StockProfile::Sheet {
            length_m,
            width_mm,
            thickness_mm,
        } => sheet_weight(length_m, width_mm, thickness_mm),
        StockProfile::RectTube {
            width_mm,
            height_mm,
            wall_mm,
            length_m,
        } => rect_tube_weight(width_mm, height_mm, wall_mm, length_m),
        StockProfile::Angle {
            width_mm,
            thickness_mm,
            length_m,
        } => angle_weight(width_mm, thickness_mm, length_m),
    }
}

/// Weight of one piece: floored at zero, rounded to 2 decimals.
pub fn compute_weight(profile: &StockProfile) -> Kilograms {
    Kilograms::rounded(raw_weight_kg(profile))
}

/// Weight for a shape read from the shared six-field record.
///
/// Fields the shape does not use are ignored.
pub fn compute_weight_for(shape: Shape, input: &DimensionInput) -> Kilograms {
    compute_weight(&input.to_profile(shape))
}

/// Weight for a shape given by name.
///
/// An unrecognized name computes to zero rather than failing.
pub fn compute_weight_by_name(shape: &str, input: &DimensionInput) -> Kilograms {
    match Shape::from_str_flexible(shape) {
        Ok(shape) => compute_weight_for(shape, input),
        Err(_) => Kilograms(0.0),
    }
}

/// Result of a weight calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "shape": "rect_tube",
///   "weight_kg": 2.51,
///   "length_m": 1.0,
///   "formula": "((W + H) × 2 × S) × 0.00785 × L"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightResult {
    /// Profile the weight was computed for
    pub shape: Shape,
    /// Weight of one piece (kg, 2 decimals, ≥ 0)
    pub weight_kg: f64,
    /// Stock length the weight covers (m)
    pub length_m: f64,
    /// Formula used, in plain text
    pub formula: String,
}

impl WeightResult {
    /// Weight per meter of stock, if the length is positive
    pub fn kg_per_meter(&self) -> Option<f64> {
        (self.length_m > 0.0).then(|| self.weight_kg / self.length_m)
    }
}

/// Calculate a weight with its context for display or JSON output.
pub fn calculate(profile: &StockProfile) -> WeightResult {
    let shape = profile.shape();
    WeightResult {
        shape,
        weight_kg: compute_weight(profile).value(),
        length_m: profile.length().value(),
        formula: shape.formula().plain().to_string(),
    }
}
