//! Render Projection
//!
//! Everything the page needs to draw the cart, precomputed so the UI layer
//! only places strings into elements.

use crate::cart::Cart;
use crate::config::CartConfig;

/// One rendered cart row
#[derive(Debug, Clone, PartialEq)]
pub struct CartRow {
    pub id: String,
    pub name: String,
    pub image: String,
    /// Unit price, e.g. `$9.99`
    pub price_label: String,
    pub quantity: u32,
}

/// Snapshot of the cart as displayed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartView {
    pub rows: Vec<CartRow>,
    /// Text for the count badge
    pub count_label: String,
    /// Text for the subtotal label, `$0.00` when empty
    pub subtotal_label: String,
    /// Set only when the cart is empty
    pub empty_message: Option<String>,
}

impl CartView {
    pub fn project(cart: &Cart, config: &CartConfig) -> Self {
        let symbol = config.currency_symbol.as_str();
        let rows = cart
            .items()
            .iter()
            .map(|item| CartRow {
                id: item.id.clone(),
                name: item.name.clone(),
                image: item.image.clone(),
                price_label: format_price(item.price, symbol),
                quantity: item.quantity,
            })
            .collect();

        Self {
            rows,
            count_label: cart.total_item_count().to_string(),
            subtotal_label: format_price(cart.subtotal(), symbol),
            empty_message: cart.is_empty().then(|| config.empty_message.clone()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Format an amount with two decimals, e.g. `format_price(19.98, "$")` -> `$19.98`
pub fn format_price(amount: f64, symbol: &str) -> String {
    format!("{}{:.2}", symbol, amount)
}
