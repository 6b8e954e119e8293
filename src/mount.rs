//! Cart Mounting
//!
//! Attaches the components to whichever cart elements the page has. A page
//! without, say, a subtotal label still gets a working badge and body.

use leptos::mount::mount_to;
use leptos::prelude::*;

use crate::app::CartApp;
use crate::components::{CartBody, CartCount, CartSubtotal};
use crate::surface::{query, BODY_SELECTOR, COUNT_SELECTOR, SUBTOTAL_SELECTOR};

pub fn mount_cart(app: CartApp) {
    mount_into(BODY_SELECTOR, move || {
        provide_context(app);
        view! { <CartBody /> }
    });
    mount_into(COUNT_SELECTOR, move || {
        provide_context(app);
        view! { <CartCount /> }
    });
    mount_into(SUBTOTAL_SELECTOR, move || {
        provide_context(app);
        view! { <CartSubtotal /> }
    });
}

/// Replace the element's server-rendered placeholder with a live view
fn mount_into<F, N>(selector: &str, f: F)
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    match query(selector) {
        Some(el) => {
            el.set_inner_html("");
            mount_to(el, f).forget();
        }
        None => {
            web_sys::console::log_1(&format!("[SURFACE] {} not on this page, skipping", selector).into());
        }
    }
}
