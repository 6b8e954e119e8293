//! Cart Store
//!
//! The cart plus its storage backend. Created once when the page starts and
//! handed to whichever UI layer drives it; every mutation writes the whole
//! cart back before returning.

use crate::cart::{Cart, CartChange};
use crate::codec::{decode_cart, encode_cart};
use crate::config::CartConfig;
use crate::error::{CartError, CartResult};
use crate::models::LineItem;
use crate::storage::CartStorage;
use crate::surface::{CheckoutOutcome, DisplaySurface};
use crate::view::CartView;

pub struct CartStore<S: CartStorage> {
    cart: Cart,
    storage: S,
    config: CartConfig,
    last_save_error: Option<CartError>,
}

impl<S: CartStorage> CartStore<S> {
    /// Load the cart saved under `config.storage_key`.
    ///
    /// Never fails: a missing, unreadable or malformed entry yields an empty cart.
    pub fn load(storage: S, config: CartConfig) -> Self {
        let items = match storage.read(&config.storage_key) {
            Ok(Some(raw)) => decode_cart(&raw),
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("could not read stored cart, starting empty: {}", e);
                Vec::new()
            }
        };
        log::debug!("loaded cart with {} line items", items.len());
        Self {
            cart: Cart::from_items(items),
            storage,
            config,
            last_save_error: None,
        }
    }

    // ========================
    // Mutations
    // ========================

    pub fn add(&mut self, id: &str, name: &str, price: f64, image: &str) -> CartChange {
        let change = self.cart.add(LineItem::new(id, name, price, image));
        log::debug!("add {}: {:?}", id, change);
        self.persist();
        change
    }

    /// Remove a line item; unknown ids are not an error.
    pub fn remove(&mut self, id: &str) -> CartChange {
        let change = self.cart.remove(id);
        log::debug!("remove {}: {:?}", id, change);
        self.persist();
        change
    }

    /// Adjust a quantity by `delta`, removing the line at zero or below.
    /// Unknown ids leave both the cart and storage untouched.
    pub fn set_quantity_delta(&mut self, id: &str, delta: i64) -> CartChange {
        let change = self.cart.set_quantity_delta(id, delta);
        log::debug!("quantity {} {:+}: {:?}", id, delta, change);
        if change != CartChange::Unchanged {
            self.persist();
        }
        change
    }

    /// Empty the cart and drop its storage entry; a later load starts empty.
    pub fn clear(&mut self) -> CartChange {
        let change = self.cart.clear();
        let result = self.storage.remove(&self.config.storage_key);
        self.record_save(result);
        change
    }

    /// Write-through after a mutation. A failed write keeps the in-memory
    /// change and is remembered until the next successful save.
    fn persist(&mut self) {
        let result = encode_cart(self.cart.items())
            .and_then(|json| self.storage.write(&self.config.storage_key, &json));
        self.record_save(result);
    }

    fn record_save(&mut self, result: CartResult<()>) {
        match result {
            Ok(()) => self.last_save_error = None,
            Err(e) => {
                log::error!("failed to save cart: {}", e);
                self.last_save_error = Some(e);
            }
        }
    }

    // ========================
    // Reads
    // ========================

    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.cart.get(id)
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    pub fn total_item_count(&self) -> u32 {
        self.cart.total_item_count()
    }

    pub fn subtotal(&self) -> f64 {
        self.cart.subtotal()
    }

    /// Render projection of the current state
    pub fn view(&self) -> CartView {
        CartView::project(&self.cart, &self.config)
    }

    pub fn config(&self) -> &CartConfig {
        &self.config
    }

    /// Error from the most recent save, if it failed
    pub fn last_save_error(&self) -> Option<&CartError> {
        self.last_save_error.as_ref()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    // ========================
    // Surface
    // ========================

    /// Flip the drawer; returns the new state, or `None` without a drawer.
    pub fn toggle_display(&self, surface: &dyn DisplaySurface) -> Option<bool> {
        let open = !surface.is_open()?;
        surface.set_open(open);
        Some(open)
    }

    /// Open the drawer if it is present and closed
    pub fn reveal(&self, surface: &dyn DisplaySurface) {
        if surface.is_open() == Some(false) {
            surface.set_open(true);
        }
    }

    pub fn checkout(&self, surface: &dyn DisplaySurface) -> CheckoutOutcome {
        if self.cart.is_empty() {
            surface.alert(&self.config.empty_checkout_alert);
            return CheckoutOutcome::EmptyCart;
        }
        let url = self.config.checkout_url.clone();
        log::debug!("handing off {} items to {}", self.cart.total_item_count(), url);
        surface.navigate(&url);
        CheckoutOutcome::Redirected(url)
    }
}
