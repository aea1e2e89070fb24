//! # Stock Profile Weight Formulas
//!
//! Closed-form weight formulas for steel stock, one per profile. All
//! functions return the raw weight in kilograms; flooring and rounding are
//! applied by the weight engine, not here.
//!
//! ## Notation
//!
//! - `D` = outside diameter (mm)
//! - `L` = stock length (m)
//! - `W` = width / leg length (mm)
//! - `T` = thickness (mm)
//! - `H` = height (mm)
//! - `S` = wall thickness (mm)
//!
//! The constants below fold steel density (7850 kg/m³) and the mm/m unit
//! conversions into a single factor per profile, matching conventional
//! steel mass tables.

use crate::units::{Meters, Millimeters};

/// Nominal steel density (kg/m³) the factors below are derived from
pub const STEEL_DENSITY_KG_M3: f64 = 7850.0;

/// Rebar linear mass divisor: D² / 162 ≈ kg per meter
pub const REBAR_DIVISOR: f64 = 162.0;

/// Sheet factor: kg per m² per mm of thickness
pub const SHEET_FACTOR: f64 = 7.85;

/// Round pipe factor: π × 7850 / 10⁶
pub const PIPE_FACTOR: f64 = 0.02466;

/// Rolled/welded profile factor: 7850 / 10⁶, kg per mm² of section per meter
pub const PROFILE_FACTOR: f64 = 0.00785;

/// Minimum clearance enforced between pipe diameter and wall (mm)
pub const PIPE_MIN_WALL_CLEARANCE_MM: f64 = 0.1;

/// Round bar (rebar) weight.
///
/// # Formula
/// m = D² / 162 × L
///
/// # Example
/// ```rust
/// use metal_core::equations::profile::rebar_weight;
///
/// // 12 mm bar, 1 m long
/// let kg = rebar_weight(12.0, 1.0);
/// assert!((kg - 0.8889).abs() < 0.001);
/// ```
#[inline]
pub fn rebar_weight(diameter_mm: f64, length_m: f64) -> f64 {
    (diameter_mm * diameter_mm / REBAR_DIVISOR) * length_m
}

/// Flat sheet weight.
///
/// # Formula
/// m = L × (W / 1000) × T × 7.85
///
/// Width is converted to meters; thickness stays in millimeters and the
/// 7.85 factor absorbs the mismatch.
#[inline]
pub fn sheet_weight(length_m: f64, width_mm: f64, thickness_mm: f64) -> f64 {
    let width_m: Meters = Millimeters(width_mm).into();
    length_m * width_m.value() * thickness_mm * SHEET_FACTOR
}

/// Effective pipe diameter after the degenerate-wall guard.
///
/// D' = max(D, S + 0.1)
///
/// This masks wall ≥ diameter instead of rejecting it. It is an input
/// policy, not a physical correction.
#[inline]
pub fn pipe_effective_diameter(diameter_mm: f64, wall_mm: f64) -> f64 {
    diameter_mm.max(wall_mm + PIPE_MIN_WALL_CLEARANCE_MM)
}

/// Round pipe weight.
///
/// # Formula
/// m = (D' − S) × S × 0.02466 × L, with D' from [`pipe_effective_diameter`]
///
/// # Example
/// ```rust
/// use metal_core::equations::profile::pipe_weight;
///
/// // 57 mm pipe, 3 mm wall, 1 m
/// let kg = pipe_weight(57.0, 3.0, 1.0);
/// assert!((kg - 3.995).abs() < 0.001);
/// ```
#[inline]
pub fn pipe_weight(diameter_mm: f64, wall_mm: f64, length_m: f64) -> f64 {
    let d = pipe_effective_diameter(diameter_mm, wall_mm);
    (d - wall_mm) * wall_mm * PIPE_FACTOR * length_m
}

/// Rectangular (profile) tube weight.
///
/// # Formula
/// m = ((W + H) × 2 × S) × 0.00785 × L
///
/// Thin-shell approximation: perimeter × wall, corners counted twice.
#[inline]
pub fn rect_tube_weight(width_mm: f64, height_mm: f64, wall_mm: f64, length_m: f64) -> f64 {
    ((width_mm + height_mm) * 2.0 * wall_mm) * PROFILE_FACTOR * length_m
}

/// Equal-leg angle weight.
///
/// # Formula
/// m = (2W − T) × T × 0.00785 × L
///
/// Both legs are `W` wide; `T` is the leg thickness.
#[inline]
pub fn angle_weight(width_mm: f64, thickness_mm: f64, length_m: f64) -> f64 {
    (width_mm + width_mm - thickness_mm) * thickness_mm * PROFILE_FACTOR * length_m
}
