//! Cart App Handle
//!
//! Owns the `CartStore` for the page. Event handlers take it by value;
//! components read it from the Leptos context set up at mount time.

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use reactive_stores::Store;
use tap_cart_core::{CartChange, CartConfig, CartStore, CheckoutOutcome};

use crate::storage::BrowserStorage;
use crate::store::{store_sync, CartState, CartStateStore};
use crate::surface::DomSurface;

/// Copyable handle to the page's cart
#[derive(Clone, Copy)]
pub struct CartApp {
    cart: StoredValue<CartStore<BrowserStorage>, LocalStorage>,
    state: CartStateStore,
    surface: DomSurface,
}

impl CartApp {
    /// Load the saved cart and build the reactive state from it
    pub fn init(config: CartConfig) -> Self {
        let cart = CartStore::load(BrowserStorage::local(), config);
        web_sys::console::log_1(
            &format!("[CART] Loaded {} line items ({} units)", cart.items().len(), cart.total_item_count()).into(),
        );
        let state = Store::new(CartState { snapshot: cart.view() });
        Self {
            cart: StoredValue::new_local(cart),
            state,
            surface: DomSurface,
        }
    }

    pub fn state(&self) -> CartStateStore {
        self.state
    }

    // ========================
    // Operations
    // ========================

    /// Add one unit, then open the drawer so the shopper sees it
    pub fn add(&self, id: &str, name: &str, price: f64, image: &str) {
        let change = self.mutate(|cart| cart.add(id, name, price, image));
        let open_on_add = self.cart.with_value(|cart| cart.config().open_on_add);
        if change.is_addition() && open_on_add {
            self.cart.with_value(|cart| cart.reveal(&self.surface));
        }
    }

    pub fn remove(&self, id: &str) {
        self.mutate(|cart| cart.remove(id));
    }

    /// Empty the cart and forget the saved entry
    pub fn clear(&self) {
        self.mutate(|cart| cart.clear());
    }

    pub fn update_quantity(&self, id: &str, delta: i64) {
        self.mutate(|cart| cart.set_quantity_delta(id, delta));
    }

    pub fn toggle(&self) {
        if self.cart.with_value(|cart| cart.toggle_display(&self.surface)).is_none() {
            web_sys::console::log_1(&"[CART] No drawer on this page".into());
        }
    }

    pub fn checkout(&self) -> CheckoutOutcome {
        self.cart.with_value(|cart| cart.checkout(&self.surface))
    }

    /// Push the current cart into the reactive state
    pub fn render(&self) {
        let snapshot = self.cart.with_value(|cart| cart.view());
        store_sync(&self.state, snapshot);
    }

    /// Run a mutation, report a failed save, and re-render
    fn mutate(&self, f: impl FnOnce(&mut CartStore<BrowserStorage>) -> CartChange) -> CartChange {
        let outcome = self.cart.try_update_value(|cart| {
            let change = f(cart);
            let save_error = cart.last_save_error().map(|e| e.to_string());
            (change, save_error)
        });
        let Some((change, save_error)) = outcome else {
            web_sys::console::error_1(&"[CART] Cart store already disposed".into());
            return CartChange::Unchanged;
        };
        if let Some(e) = save_error {
            web_sys::console::error_1(&format!("[CART] Cart not saved: {}", e).into());
        }
        self.render();
        change
    }
}

/// The cart handle provided to the mounted components
pub fn use_cart_app() -> CartApp {
    expect_context::<CartApp>()
}
