//! Cart Models
//!
//! Data structures as they are stored under the cart's `localStorage` key.

use serde::{Deserialize, Serialize};

/// One product entry with its chosen quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Opaque catalog identifier, unique within a cart
    pub id: String,
    pub name: String,
    /// Unit price, never negative
    pub price: f64,
    /// Product image URL
    pub image: String,
    /// Always at least 1 while the item is in a cart
    pub quantity: u32,
}

impl LineItem {
    /// Create a line item with quantity 1
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64, image: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: sanitize_price(price),
            image: image.into(),
            quantity: 1,
        }
    }

    /// Price times quantity, unrounded
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Highest unit price accepted; keeps subtotals finite at any quantity
pub const MAX_PRICE: f64 = 1_000_000_000.0;

/// Clamp negative and non-finite prices to zero, oversized ones to `MAX_PRICE`
pub(crate) fn sanitize_price(price: f64) -> f64 {
    if price.is_finite() && price > 0.0 {
        price.min(MAX_PRICE)
    } else {
        0.0
    }
}
