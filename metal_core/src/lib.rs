//! # metal_core - Metal Stock Weight Engine
//!
//! `metal_core` is the computational heart of the Sofmetall storefront: the
//! unit-weight calculator for steel stock, plus the plain in-memory state the
//! storefront keeps around it (catalog, cart, translations). All inputs and
//! outputs are JSON-serializable, making it easy to drive from a CLI, a UI,
//! or an AI assistant.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: The weight engine is a pure function of its input
//! - **Total**: Weights are never negative and the engine never fails
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types for the parts that can fail
//!
//! ## Quick Start
//!
//! ```rust
//! use metal_core::calculations::{compute_weight, StockProfile};
//!
//! let pipe = StockProfile::Pipe { diameter_mm: 57.0, wall_mm: 3.0, length_m: 6.0 };
//! let kg = compute_weight(&pipe);
//! assert_eq!(kg.0, 23.97);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Shapes, stock profiles and the weight engine
//! - [`equations`] - Per-profile formulas and their metadata
//! - [`dimensions`] - The calculator's clamped six-field input model
//! - [`catalog`] - Products, categories and search
//! - [`cart`] - Cart line items and totals
//! - [`i18n`] - Uzbek/Russian labels
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod cart;
pub mod catalog;
pub mod dimensions;
pub mod equations;
pub mod errors;
pub mod i18n;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{compute_weight, compute_weight_for, Shape, StockProfile, WeightResult};
pub use dimensions::{DimensionField, DimensionInput, DimensionModel};
pub use errors::{MetalError, MetalResult};
pub use i18n::Language;
pub use units::Kilograms;
