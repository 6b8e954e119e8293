//! Reactive Cart State
//!
//! Uses Leptos reactive_stores so mounted components re-render when the
//! cart snapshot is replaced.

use leptos::prelude::*;
use reactive_stores::Store;
use tap_cart_core::CartView;

/// What the mounted components draw from
#[derive(Clone, Debug, Default, Store)]
pub struct CartState {
    /// Latest render projection of the cart
    pub snapshot: CartView,
}

/// Type alias for the store
pub type CartStateStore = Store<CartState>;

/// Replace the snapshot after a cart mutation
pub fn store_sync(store: &CartStateStore, snapshot: CartView) {
    *store.snapshot().write() = snapshot;
}
