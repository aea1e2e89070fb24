//! # Shopping Cart
//!
//! In-memory line-item store for the storefront. Nothing is persisted and
//! checkout is not wired to anything; the cart only keeps quantities and
//! totals.
//!
//! ## Example
//!
//! ```rust
//! use metal_core::cart::Cart;
//! use metal_core::catalog::find_product;
//!
//! let mut cart = Cart::new();
//! let rebar = find_product("1").unwrap();
//! cart.add_product(rebar);
//! cart.add_product(rebar);
//! assert_eq!(cart.item_count(), 2);
//! assert_eq!(cart.total_price(), 17_000);
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::errors::{MetalError, MetalResult};

/// One cart line: a product snapshot and how many units of it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// price × quantity (so'm)
    pub fn line_total(&self) -> u64 {
        self.product.price * u64::from(self.quantity)
    }
}

/// The cart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product: bump an existing line or append a new one
    pub fn add_product(&mut self, product: &Product) {
        match self.items.iter_mut().find(|item| item.product.id == product.id) {
            Some(item) => item.quantity += 1,
            None => self.items.push(CartItem {
                product: product.clone(),
                quantity: 1,
            }),
        }
    }

    /// Change a line's quantity by `delta`.
    ///
    /// A change that would take the quantity to zero or below is ignored;
    /// use [`Cart::remove_item`] to drop a line.
    pub fn update_quantity(&mut self, product_id: &str, delta: i64) -> MetalResult<u32> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.product.id == product_id)
            .ok_or_else(|| MetalError::cart_item_not_found(product_id))?;

        let new_quantity = i64::from(item.quantity) + delta;
        if new_quantity > 0 {
            item.quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        }
        Ok(item.quantity)
    }

    /// Remove a line entirely
    pub fn remove_item(&mut self, product_id: &str) -> MetalResult<CartItem> {
        let index = self
            .items
            .iter()
            .position(|item| item.product.id == product_id)
            .ok_or_else(|| MetalError::cart_item_not_found(product_id))?;
        Ok(self.items.remove(index))
    }

    /// Lines in insertion order
    pub fn lines(&self) -> &[CartItem] {
        &self.items
    }

    /// Total number of units (badge count)
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Σ price × quantity (so'm)
    pub fn total_price(&self) -> u64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Format a so'm amount with space-separated thousands (`450 000`).
pub fn format_som(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_product;

    fn cart_with(ids: &[&str]) -> Cart {
        let mut cart = Cart::new();
        for id in ids {
            cart.add_product(find_product(id).unwrap());
        }
        cart
    }

    #[test]
    fn test_add_merges_lines() {
        let cart = cart_with(&["1", "2", "1"]);
        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.lines()[1].quantity, 1);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_total_price() {
        // 2 x 8 500 + 1 x 450 000
        let cart = cart_with(&["1", "3", "1"]);
        assert_eq!(cart.total_price(), 467_000);
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = cart_with(&["4"]);
        assert_eq!(cart.update_quantity("4", 4).unwrap(), 5);
        assert_eq!(cart.update_quantity("4", -2).unwrap(), 3);
    }

    #[test]
    fn test_update_quantity_never_reaches_zero() {
        let mut cart = cart_with(&["4"]);
        assert_eq!(cart.update_quantity("4", -1).unwrap(), 1);
        assert_eq!(cart.update_quantity("4", -10).unwrap(), 1);
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_update_unknown_line() {
        let mut cart = cart_with(&["4"]);
        let err = cart.update_quantity("99", 1).unwrap_err();
        assert_eq!(err.error_code(), "CART_ITEM_NOT_FOUND");
    }

    #[test]
    fn test_remove_item() {
        let mut cart = cart_with(&["1", "2"]);
        let removed = cart.remove_item("1").unwrap();
        assert_eq!(removed.product.id, "1");
        assert_eq!(cart.lines().len(), 1);
        assert!(cart.remove_item("1").is_err());
    }

    #[test]
    fn test_empty_cart() {
        let mut cart = cart_with(&["1"]);
        assert!(!cart.is_empty());
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_price(), 0);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_format_som() {
        assert_eq!(format_som(0), "0");
        assert_eq!(format_som(950), "950");
        assert_eq!(format_som(8_500), "8 500");
        assert_eq!(format_som(450_000), "450 000");
        assert_eq!(format_som(1_234_567), "1 234 567");
    }
}
