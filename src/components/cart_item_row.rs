//! Cart Item Row Component
//!
//! Image, name, unit price, quantity controls and a remove control.

use leptos::prelude::*;
use tap_cart_core::CartRow;

use crate::app::use_cart_app;

#[component]
pub fn CartItemRow(row: CartRow) -> impl IntoView {
    let app = use_cart_app();
    let CartRow { id, name, image, price_label, quantity } = row;
    let decrement_id = id.clone();
    let increment_id = id.clone();
    let remove_id = id;

    view! {
        <div class="cart-item">
            <img src=image alt=name.clone() />
            <div class="cart-item-details">
                <h4>{name}</h4>
                <p>{price_label}</p>
                <div class="cart-item-controls">
                    <button on:click=move |ev| {
                        ev.stop_propagation();
                        app.update_quantity(&decrement_id, -1);
                    }>
                        "-"
                    </button>
                    <span>{quantity}</span>
                    <button on:click=move |ev| {
                        ev.stop_propagation();
                        app.update_quantity(&increment_id, 1);
                    }>
                        "+"
                    </button>
                </div>
            </div>
            <div
                class="cart-item-remove"
                on:click=move |ev| {
                    ev.stop_propagation();
                    app.remove(&remove_id);
                }
            >
                "×"
            </div>
        </div>
    }
}
