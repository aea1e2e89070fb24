//! # Weight Equations
//!
//! All stock weight formulas live here. Having them in one place enables:
//! - Easy verification against published steel mass tables
//! - Documentation of unit conventions
//! - One source for the formula text shown to users and to the chat assistant
//!
//! ## Modules
//!
//! - [`profile`] - Per-profile weight formulas and their constants
//! - [`registry`] - Formula metadata
//!
//! ## Unit Conventions
//!
//! - Cross-section dimensions in millimeters
//! - Length in meters
//! - Results in kilograms, unrounded

pub mod profile;
pub mod registry;

pub use profile::{
    angle_weight,
    pipe_effective_diameter,
    pipe_weight,
    rebar_weight,
    rect_tube_weight,
    sheet_weight,
    PIPE_FACTOR,
    PIPE_MIN_WALL_CLEARANCE_MM,
    PROFILE_FACTOR,
    REBAR_DIVISOR,
    SHEET_FACTOR,
    STEEL_DENSITY_KG_M3,
};

pub use registry::{formulas_markdown, Formula, FormulaMetadata, Variable, ALL_FORMULAS};
