//! Cart Body Component
//!
//! Rows for every line item, or the empty-cart message.

use leptos::prelude::*;

use crate::app::use_cart_app;
use crate::components::CartItemRow;
use crate::store::CartStateStoreFields;

#[component]
pub fn CartBody() -> impl IntoView {
    let state = use_cart_app().state();

    move || {
        let snapshot = state.snapshot().get();
        match snapshot.empty_message {
            Some(message) => view! {
                <div class="empty-cart-icon">"🛒"</div>
                <div class="empty-cart-msg">{message}</div>
            }
            .into_any(),
            None => snapshot
                .rows
                .into_iter()
                .map(|row| view! { <CartItemRow row=row /> })
                .collect_view()
                .into_any(),
        }
    }
}
