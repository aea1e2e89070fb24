//! # Error Types
//!
//! Failures of metal_core, serializable so a UI or an assistant can show
//! the field and value that were rejected.
//!
//! The weight engine itself never returns an error: degenerate geometry is
//! clamped and unknown shape names compute to zero. Errors here come from
//! parsing user text, catalog lookups, and cart bookkeeping.
//!
//! ## Example
//!
//! ```rust
//! use metal_core::errors::{MetalError, MetalResult};
//!
//! fn parse_quantity(text: &str) -> MetalResult<u32> {
//!     text.trim().parse().map_err(|_| {
//!         MetalError::invalid_input("quantity", text, "Quantity must be a whole number")
//!     })
//! }
//!
//! assert!(parse_quantity("3").is_ok());
//! assert_eq!(parse_quantity("three").unwrap_err().error_code(), "INVALID_INPUT");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for metal_core operations
pub type MetalResult<T> = Result<T, MetalError>;

/// Structured error type for storefront and calculator operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum MetalError {
    /// An input value could not be understood
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Shape name is not one of the calculator profiles
    #[error("Unknown shape: {name}")]
    UnknownShape { name: String },

    /// Product id not present in the catalog
    #[error("Product not found: {product_id}")]
    ProductNotFound { product_id: String },

    /// Product id not present in the cart
    #[error("Cart has no line for product {product_id}")]
    CartItemNotFound { product_id: String },

    /// No translation registered under this key
    #[error("Missing translation: {key}")]
    TranslationMissing { key: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl MetalError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        MetalError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownShape error
    pub fn unknown_shape(name: impl Into<String>) -> Self {
        MetalError::UnknownShape { name: name.into() }
    }

    /// Create a ProductNotFound error
    pub fn product_not_found(product_id: impl Into<String>) -> Self {
        MetalError::ProductNotFound {
            product_id: product_id.into(),
        }
    }

    /// Create a CartItemNotFound error
    pub fn cart_item_not_found(product_id: impl Into<String>) -> Self {
        MetalError::CartItemNotFound {
            product_id: product_id.into(),
        }
    }

    /// Create a TranslationMissing error
    pub fn translation_missing(key: impl Into<String>) -> Self {
        MetalError::TranslationMissing { key: key.into() }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            MetalError::InvalidInput { .. } => "INVALID_INPUT",
            MetalError::UnknownShape { .. } => "UNKNOWN_SHAPE",
            MetalError::ProductNotFound { .. } => "PRODUCT_NOT_FOUND",
            MetalError::CartItemNotFound { .. } => "CART_ITEM_NOT_FOUND",
            MetalError::TranslationMissing { .. } => "TRANSLATION_MISSING",
            MetalError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for MetalError {
    fn from(err: serde_json::Error) -> Self {
        MetalError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = MetalError::invalid_input("diameter", "abc", "Not a number");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: MetalError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(MetalError::unknown_shape("hexagon").error_code(), "UNKNOWN_SHAPE");
        assert_eq!(MetalError::product_not_found("99").error_code(), "PRODUCT_NOT_FOUND");
        assert_eq!(MetalError::cart_item_not_found("1").error_code(), "CART_ITEM_NOT_FOUND");
        assert_eq!(MetalError::translation_missing("nope").error_code(), "TRANSLATION_MISSING");
    }

    #[test]
    fn test_display_message() {
        let error = MetalError::unknown_shape("hexagon");
        assert_eq!(error.to_string(), "Unknown shape: hexagon");
    }

    #[test]
    fn test_from_serde_error() {
        let err = serde_json::from_str::<u32>("not json").unwrap_err();
        let metal: MetalError = err.into();
        assert_eq!(metal.error_code(), "SERIALIZATION_ERROR");
    }
}
