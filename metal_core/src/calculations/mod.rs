//! # Weight Calculations
//!
//! The calculator follows the pattern:
//!
//! - [`StockProfile`] - Input (one variant per shape, JSON-serializable)
//! - [`WeightResult`] - Calculation result (JSON-serializable)
//! - [`calculate`] / [`compute_weight`] - Pure calculation functions
//!
//! ## Available Shapes
//!
//! - Rebar, Pipe, Sheet, RectTube, Angle (see [`Shape`])

pub mod shape;
pub mod weight;

// Re-export commonly used types
pub use shape::{Shape, StockProfile};
pub use weight::{calculate, compute_weight, compute_weight_by_name, compute_weight_for, WeightResult};
