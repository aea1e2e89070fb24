//! # Unit Types
//!
//! Type-safe wrappers for the units the calculator works in. These provide
//! compile-time safety against unit confusion while remaining lightweight
//! (just f64 wrappers).
//!
//! Steel tables only ever mix three units, so plain newtypes are enough;
//! each serializes as a bare number.
//!
//! ## Units
//!
//! - Cross-section dimensions: millimeters (mm)
//! - Stock length: meters (m)
//! - Weight: kilograms (kg)
//!
//! ## Example
//!
//! ```rust
//! use metal_core::units::{Kilograms, Meters, Millimeters};
//!
//! let width = Millimeters(1250.0);
//! let width_m: Meters = width.into();
//! assert_eq!(width_m.0, 1.25);
//!
//! let weight = Kilograms::rounded(0.8888);
//! assert_eq!(weight.0, 0.89);
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

// ============================================================================
// Mass Units
// ============================================================================

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

/// Decimal places kept in a reported weight
pub const WEIGHT_DECIMALS: u32 = 2;

impl Kilograms {
    /// Apply the reporting policy to a raw weight.
    ///
    /// Non-finite values become zero, negatives are floored at zero, and the
    /// result is rounded half away from zero to [`WEIGHT_DECIMALS`] places.
    pub fn rounded(raw_kg: f64) -> Self {
        if !raw_kg.is_finite() {
            return Kilograms(0.0);
        }
        let raw_kg = raw_kg.max(0.0);
        // Rounds the exact decimal value of the double; `raw × 100` can land
        // on a false midpoint (7.0649999... × 100 == 706.5).
        let rounded = match Decimal::from_f64_retain(raw_kg) {
            Some(exact) => {
                let d = exact.round_dp_with_strategy(WEIGHT_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
                d.mantissa() as f64 / 10f64.powi(d.scale() as i32)
            }
            // Beyond Decimal's range the cents are below f64 resolution anyway
            None => raw_kg,
        };
        // -0.0 never leaves this function
        Kilograms(rounded + 0.0)
    }
}

impl std::fmt::Display for Kilograms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} kg", self.0)
    }
}

macro_rules! impl_value {
    ($($type:ty),*) => {
        $(
            impl $type {
                /// Raw f64 value
                pub fn value(self) -> f64 {
                    self.0
                }
            }
        )*
    };
}

impl_value!(Millimeters, Meters, Kilograms);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mm_to_m() {
        let mm = Millimeters(1500.0);
        let m: Meters = mm.into();
        assert_eq!(m.0, 1.5);
    }

    #[test]
    fn test_m_to_mm() {
        let m = Meters(2.5);
        let mm: Millimeters = m.into();
        assert_eq!(mm.0, 2500.0);
    }

    #[test]
    fn test_value_accessor() {
        assert_eq!(Meters::from(Millimeters(250.0)).value(), 0.25);
        assert_eq!(Kilograms(3.01).value(), 3.01);
    }

    #[test]
    fn test_rounding_policy() {
        assert_eq!(Kilograms::rounded(0.888_888).0, 0.89);
        assert_eq!(Kilograms::rounded(2.512).0, 2.51);
        assert_eq!(Kilograms::rounded(0.004).0, 0.0);
    }

    #[test]
    fn test_rounding_uses_exact_double_value() {
        // 7.065 is stored as 7.06499999..., so it rounds down
        assert_eq!(Kilograms::rounded(7.065).0, 7.06);
    }

    #[test]
    fn test_rounding_exact_midpoint_goes_away_from_zero() {
        // 0.125 and 1.375 are exact in binary
        assert_eq!(Kilograms::rounded(0.125).0, 0.13);
        assert_eq!(Kilograms::rounded(1.375).0, 1.38);
    }

    #[test]
    fn test_rounding_floors_negatives_at_zero() {
        let w = Kilograms::rounded(-3.7);
        assert_eq!(w.0, 0.0);
        assert!(w.0.is_sign_positive());
    }

    #[test]
    fn test_rounding_non_finite_is_zero() {
        assert_eq!(Kilograms::rounded(f64::NAN).0, 0.0);
        assert_eq!(Kilograms::rounded(f64::INFINITY).0, 0.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Kilograms(7.85).to_string(), "7.85 kg");
    }

    #[test]
    fn test_serialization() {
        let kg = Kilograms(2.51);
        let json = serde_json::to_string(&kg).unwrap();
        assert_eq!(json, "2.51");

        let roundtrip: Kilograms = serde_json::from_str(&json).unwrap();
        assert_eq!(kg, roundtrip);
    }
}
