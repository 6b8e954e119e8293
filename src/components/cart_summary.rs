//! Cart Summary Components
//!
//! Count badge and subtotal label, mounted into separate page elements.

use leptos::prelude::*;

use crate::app::use_cart_app;
use crate::store::CartStateStoreFields;

/// Total units in the cart
#[component]
pub fn CartCount() -> impl IntoView {
    let state = use_cart_app().state();
    move || state.snapshot().with(|snapshot| snapshot.count_label.clone())
}

/// Formatted subtotal, `$0.00` when empty
#[component]
pub fn CartSubtotal() -> impl IntoView {
    let state = use_cart_app().state();
    move || state.snapshot().with(|snapshot| snapshot.subtotal_label.clone())
}
