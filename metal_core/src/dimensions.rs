//! # Dimension Input Model
//!
//! The calculator form keeps one six-field record shared by every shape.
//! Switching shape only changes which fields are shown; the stored values
//! survive so a user can flip between profiles without retyping.
//!
//! Every write is clamped to `max(0, value)` before it reaches the record,
//! so the weight engine never sees a negative dimension from this path.
//!
//! ## Example
//!
//! ```rust
//! use metal_core::calculations::Shape;
//! use metal_core::dimensions::{DimensionField, DimensionModel};
//!
//! let mut model = DimensionModel::new(Shape::Rebar);
//! model.set(DimensionField::Diameter, -4.0);
//! assert_eq!(model.get(DimensionField::Diameter), 0.0);
//!
//! model.set(DimensionField::Diameter, 12.0);
//! model.set(DimensionField::Length, 1.0);
//! assert_eq!(model.weight().0, 0.89);
//! ```

use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calculations::{compute_weight, Shape, StockProfile};
use crate::errors::{MetalError, MetalResult};
use crate::i18n::{tr, Language};
use crate::units::Kilograms;

/// Range offered by the length slider (m). The engine accepts any length ≥ 0.
pub const LENGTH_SLIDER_RANGE_M: RangeInclusive<f64> = 1.0..=12.0;

/// Step of the length slider (m)
pub const LENGTH_SLIDER_STEP_M: f64 = 0.1;

/// One of the six calculator inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionField {
    /// Outside diameter (mm)
    Diameter,
    /// Stock length (m)
    Length,
    /// Width or leg length (mm)
    Width,
    /// Sheet or angle thickness (mm)
    Thickness,
    /// Tube height (mm)
    Height,
    /// Wall thickness of hollow profiles (mm)
    Wall,
}

impl DimensionField {
    pub const ALL: [DimensionField; 6] = [
        DimensionField::Diameter,
        DimensionField::Length,
        DimensionField::Width,
        DimensionField::Thickness,
        DimensionField::Height,
        DimensionField::Wall,
    ];

    /// Field name as used in JSON and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            DimensionField::Diameter => "diameter",
            DimensionField::Length => "length",
            DimensionField::Width => "width",
            DimensionField::Thickness => "thickness",
            DimensionField::Height => "height",
            DimensionField::Wall => "wall",
        }
    }

    /// Unit symbol (`mm` or `m`)
    pub fn unit(&self) -> &'static str {
        match self {
            DimensionField::Length => "m",
            _ => "mm",
        }
    }

    /// Localized form label
    pub fn label(&self, language: Language) -> &'static str {
        tr(self.name()).map(|l| l.get(language)).unwrap_or(self.name())
    }
}

impl FromStr for DimensionField {
    type Err = MetalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "diameter" | "d" => Ok(DimensionField::Diameter),
            "length" | "l" => Ok(DimensionField::Length),
            "width" | "w" | "a" => Ok(DimensionField::Width),
            "thickness" | "t" => Ok(DimensionField::Thickness),
            "height" | "h" | "b" => Ok(DimensionField::Height),
            "wall" | "s" => Ok(DimensionField::Wall),
            _ => Err(MetalError::invalid_input("field", s, "Unknown dimension field")),
        }
    }
}

impl std::fmt::Display for DimensionField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.unit())
    }
}

/// The shared six-field dimension record.
///
/// Passed by value into the engine. Fields that the current shape does not
/// use are kept, not reset.
///
/// ## JSON Example
///
/// ```json
/// {
///   "diameter": 12.0,
///   "length": 1.0,
///   "width": 1000.0,
///   "thickness": 1.0,
///   "height": 40.0,
///   "wall": 2.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DimensionInput {
    /// Outside diameter (mm)
    pub diameter: f64,
    /// Stock length (m)
    pub length: f64,
    /// Width or leg length (mm)
    pub width: f64,
    /// Thickness (mm)
    pub thickness: f64,
    /// Height (mm)
    pub height: f64,
    /// Wall thickness (mm)
    pub wall: f64,
}

impl Default for DimensionInput {
    /// The calculator's initial form values
    fn default() -> Self {
        Self {
            diameter: 12.0,
            length: 1.0,
            width: 1000.0,
            thickness: 1.0,
            height: 40.0,
            wall: 2.0,
        }
    }
}

impl DimensionInput {
    /// Read one field
    pub fn get(&self, field: DimensionField) -> f64 {
        match field {
            DimensionField::Diameter => self.diameter,
            DimensionField::Length => self.length,
            DimensionField::Width => self.width,
            DimensionField::Thickness => self.thickness,
            DimensionField::Height => self.height,
            DimensionField::Wall => self.wall,
        }
    }

    fn slot(&mut self, field: DimensionField) -> &mut f64 {
        match field {
            DimensionField::Diameter => &mut self.diameter,
            DimensionField::Length => &mut self.length,
            DimensionField::Width => &mut self.width,
            DimensionField::Thickness => &mut self.thickness,
            DimensionField::Height => &mut self.height,
            DimensionField::Wall => &mut self.wall,
        }
    }

    /// Project the record onto the payload of one shape.
    pub fn to_profile(&self, shape: Shape) -> StockProfile {
        match shape {
            Shape::Rebar => StockProfile::Rebar {
                diameter_mm: self.diameter,
                length_m: self.length,
            },
            Shape::Pipe => StockProfile::Pipe {
                diameter_mm: self.diameter,
                wall_mm: self.wall,
                length_m: self.length,
            },
            Shape::Sheet => StockProfile::Sheet {
                length_m: self.length,
                width_mm: self.width,
                thickness_mm: self.thickness,
            },
            Shape::RectTube => StockProfile::RectTube {
                width_mm: self.width,
                height_mm: self.height,
                wall_mm: self.wall,
                length_m: self.length,
            },
            Shape::Angle => StockProfile::Angle {
                width_mm: self.width,
                thickness_mm: self.thickness,
                length_m: self.length,
            },
        }
    }
}

/// Clamp a user-entered value: negatives and non-numbers become zero.
pub fn clamp_dimension(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.max(0.0)
    }
}

/// Calculator form state: selected shape plus the shared record.
///
/// Deserialized models are clamped the same way as [`DimensionModel::set`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredModel")]
pub struct DimensionModel {
    pub shape: Shape,
    input: DimensionInput,
}

/// Wire form of [`DimensionModel`], before clamping
#[derive(Deserialize)]
struct StoredModel {
    shape: Shape,
    #[serde(default)]
    input: DimensionInput,
}

impl From<StoredModel> for DimensionModel {
    fn from(stored: StoredModel) -> Self {
        DimensionModel::with_input(stored.shape, stored.input)
    }
}

impl Default for DimensionModel {
    fn default() -> Self {
        Self::new(Shape::Rebar)
    }
}

impl DimensionModel {
    /// Start a form on `shape` with the default values
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            input: DimensionInput::default(),
        }
    }

    /// Start a form from an existing record, clamping every field
    pub fn with_input(shape: Shape, input: DimensionInput) -> Self {
        let mut model = Self::new(shape);
        for field in DimensionField::ALL {
            model.set(field, input.get(field));
        }
        model
    }

    pub fn get(&self, field: DimensionField) -> f64 {
        self.input.get(field)
    }

    /// Write a field, clamped to `max(0, value)`
    pub fn set(&mut self, field: DimensionField, value: f64) {
        *self.input.slot(field) = clamp_dimension(value);
    }

    /// Write a field from text typed into a numeric box.
    ///
    /// Blank text counts as zero. Text that is not a number is rejected and
    /// the stored value is left as it was.
    pub fn set_str(&mut self, field: DimensionField, text: &str) -> MetalResult<()> {
        let trimmed = text.trim();
        let value = if trimmed.is_empty() {
            0.0
        } else {
            trimmed.replace(',', ".").parse::<f64>().map_err(|_| {
                MetalError::invalid_input(field.name(), text, "Not a number")
            })?
        };
        self.set(field, value);
        Ok(())
    }

    /// Change shape; stored values are preserved
    pub fn switch_shape(&mut self, shape: Shape) {
        self.shape = shape;
    }

    /// Fields shown for the current shape
    pub fn visible_fields(&self) -> &'static [DimensionField] {
        self.shape.active_fields()
    }

    /// Copy of the record as the engine consumes it
    pub fn snapshot(&self) -> DimensionInput {
        self.input
    }

    /// Current record as the selected shape's payload
    pub fn profile(&self) -> StockProfile {
        self.input.to_profile(self.shape)
    }

    /// Recompute the weight from scratch
    pub fn weight(&self) -> Kilograms {
        compute_weight(&self.profile())
    }
}
