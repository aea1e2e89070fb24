//! # Shapes and Stock Profiles
//!
//! [`Shape`] is the closed set of profiles the calculator knows.
//! [`StockProfile`] pairs a shape with exactly the dimensions its formula
//! reads, so there is never a question of which fields are live.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dimensions::DimensionField;
use crate::equations::Formula;
use crate::errors::{MetalError, MetalResult};
use crate::i18n::{Language, Localized};
use crate::units::Meters;

/// Cross-sectional stock profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// Round reinforcing bar
    Rebar,
    /// Round pipe
    Pipe,
    /// Flat sheet
    Sheet,
    /// Rectangular (profile) tube
    RectTube,
    /// Equal-leg angle
    Angle,
}

impl Shape {
    /// All shapes in calculator tab order
    pub const ALL: [Shape; 5] = [
        Shape::Rebar,
        Shape::Pipe,
        Shape::Sheet,
        Shape::RectTube,
        Shape::Angle,
    ];

    /// Serialized id (`rebar`, `rect_tube`, ...)
    pub fn id(&self) -> &'static str {
        match self {
            Shape::Rebar => "rebar",
            Shape::Pipe => "pipe",
            Shape::Sheet => "sheet",
            Shape::RectTube => "rect_tube",
            Shape::Angle => "angle",
        }
    }

    /// Parse from common string representations, including the storefront's
    /// calculator tab ids (`armatura`, `truba`, `list`, `profil`, `ugolnik`).
    pub fn from_str_flexible(s: &str) -> MetalResult<Self> {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "rebar" | "round_bar" | "bar" | "armatura" => Ok(Shape::Rebar),
            "pipe" | "round_pipe" | "truba" => Ok(Shape::Pipe),
            "sheet" | "plate" | "list" => Ok(Shape::Sheet),
            "rect_tube" | "recttube" | "rectangular_tube" | "profile" | "profil" => {
                Ok(Shape::RectTube)
            }
            "angle" | "equal_angle" | "ugolnik" => Ok(Shape::Angle),
            _ => Err(MetalError::unknown_shape(s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Shape::Rebar => "Rebar",
            Shape::Pipe => "Pipe",
            Shape::Sheet => "Sheet",
            Shape::RectTube => "Rectangular Tube",
            Shape::Angle => "Angle",
        }
    }

    /// Localized tab label
    pub fn label(&self, language: Language) -> &'static str {
        let text = match self {
            Shape::Rebar => Localized::new("Armatura", "Арматура"),
            Shape::Pipe => Localized::new("Truba", "Труба"),
            Shape::Sheet => Localized::new("List", "Лист"),
            Shape::RectTube => Localized::new("Profil", "Профиль"),
            Shape::Angle => Localized::new("Ugolnik", "Уголок"),
        };
        text.get(language)
    }

    /// Fields the formula for this shape reads, in form order
    pub fn active_fields(&self) -> &'static [DimensionField] {
        match self {
            Shape::Rebar => &[DimensionField::Diameter, DimensionField::Length],
            Shape::Pipe => &[
                DimensionField::Diameter,
                DimensionField::Wall,
                DimensionField::Length,
            ],
            Shape::Sheet => &[
                DimensionField::Width,
                DimensionField::Thickness,
                DimensionField::Length,
            ],
            Shape::RectTube => &[
                DimensionField::Width,
                DimensionField::Height,
                DimensionField::Wall,
                DimensionField::Length,
            ],
            Shape::Angle => &[
                DimensionField::Width,
                DimensionField::Thickness,
                DimensionField::Length,
            ],
        }
    }

    /// Weight formula for this shape
    pub fn formula(&self) -> Formula {
        match self {
            Shape::Rebar => Formula::Rebar,
            Shape::Pipe => Formula::Pipe,
            Shape::Sheet => Formula::Sheet,
            Shape::RectTube => Formula::RectTube,
            Shape::Angle => Formula::Angle,
        }
    }
}

impl FromStr for Shape {
    type Err = MetalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Shape::from_str_flexible(s)
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A unit of stock described by exactly the dimensions its shape uses.
///
/// ## JSON Example
///
/// ```json
/// { "shape": "pipe", "diameter_mm": 57.0, "wall_mm": 3.0, "length_m": 6.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum StockProfile {
    Rebar {
        diameter_mm: f64,
        length_m: f64,
    },
    Pipe {
        diameter_mm: f64,
        wall_mm: f64,
        length_m: f64,
    },
    Sheet {
        length_m: f64,
        width_mm: f64,
        thickness_mm: f64,
    },
    RectTube {
        width_mm: f64,
        height_mm: f64,
        wall_mm: f64,
        length_m: f64,
    },
    Angle {
        width_mm: f64,
        thickness_mm: f64,
        length_m: f64,
    },
}

impl StockProfile {
    /// Shape of this profile
    pub fn shape(&self) -> Shape {
        match self {
            StockProfile::Rebar { .. } => Shape::Rebar,
            StockProfile::Pipe { .. } => Shape::Pipe,
            StockProfile::Sheet { .. } => Shape::Sheet,
            StockProfile::RectTube { .. } => Shape::RectTube,
            StockProfile::Angle { .. } => Shape::Angle,
        }
    }

    /// Stock length
    pub fn length(&self) -> Meters {
        match *self {
            StockProfile::Rebar { length_m, .. }
            | StockProfile::Pipe { length_m, .. }
            | StockProfile::Sheet { length_m, .. }
            | StockProfile::RectTube { length_m, .. }
            | StockProfile::Angle { length_m, .. } => Meters(length_m),
        }
    }

    /// Same profile with a different length
    pub fn with_length(mut self, length: Meters) -> Self {
        match &mut self {
            StockProfile::Rebar { length_m, .. }
            | StockProfile::Pipe { length_m, .. }
            | StockProfile::Sheet { length_m, .. }
            | StockProfile::RectTube { length_m, .. }
            | StockProfile::Angle { length_m, .. } => *length_m = length.value(),
        }
        self
    }
}
