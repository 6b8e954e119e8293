//! Cart Configuration
//!
//! Every field has a default, so a page can override only what it needs.

use serde::{Deserialize, Serialize};

use crate::error::{CartError, CartResult};

/// `localStorage` key holding the serialized cart
pub const DEFAULT_STORAGE_KEY: &str = "tap_cart";

/// Checkout entry point the shopper is sent to
pub const DEFAULT_CHECKOUT_URL: &str = "checkout.html";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartConfig {
    pub storage_key: String,
    pub checkout_url: String,
    pub currency_symbol: String,
    /// Shown in the cart body when there are no items
    pub empty_message: String,
    /// Blocking notification for checkout with an empty cart
    pub empty_checkout_alert: String,
    /// Open the drawer after an item is added
    pub open_on_add: bool,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            checkout_url: DEFAULT_CHECKOUT_URL.to_string(),
            currency_symbol: "$".to_string(),
            empty_message: "Your cart is empty".to_string(),
            empty_checkout_alert: "Your cart is empty!".to_string(),
            open_on_add: true,
        }
    }
}

impl CartConfig {
    /// Parse a JSON override block; absent fields keep their defaults.
    pub fn from_json(raw: &str) -> CartResult<Self> {
        let config: CartConfig =
            serde_json::from_str(raw).map_err(|e| CartError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CartResult<()> {
        if self.storage_key.trim().is_empty() {
            return Err(CartError::Config("storage_key must not be empty".to_string()));
        }
        if self.checkout_url.trim().is_empty() {
            return Err(CartError::Config("checkout_url must not be empty".to_string()));
        }
        Ok(())
    }
}
