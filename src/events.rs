//! Page Event Wiring
//!
//! One delegated click listener on the document serves every cart control
//! outside the drawer rows:
//! - `data-cart-add` with `data-id`, `data-name`, `data-price`, `data-image`
//! - `data-cart-toggle` (and the overlay itself)
//! - `data-cart-checkout`
//! - `data-cart-clear`

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::app::CartApp;
use crate::surface::OVERLAY_SELECTOR;

const ADD_SELECTOR: &str = "[data-cart-add]";
const CHECKOUT_SELECTOR: &str = "[data-cart-checkout]";
const CLEAR_SELECTOR: &str = "[data-cart-clear]";

/// Parsed "add to cart" button
#[derive(Debug, Clone, PartialEq)]
pub struct AddRequest {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
}

impl AddRequest {
    /// Build from `data-*` attributes; `None` without an id or a numeric price
    pub fn from_attributes(attr: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let id = attr("data-id").filter(|id| !id.trim().is_empty())?;
        let price = attr("data-price")?.trim().parse::<f64>().ok()?;
        Some(Self {
            id,
            name: attr("data-name").unwrap_or_default(),
            price,
            image: attr("data-image").unwrap_or_default(),
        })
    }
}

/// Cart control hit by a click
#[derive(Debug, Clone, PartialEq)]
enum CartControl {
    Add(AddRequest),
    Toggle,
    Checkout,
    Clear,
}

impl CartControl {
    fn from_target(target: &web_sys::Element) -> Option<Self> {
        if let Some(button) = closest(target, ADD_SELECTOR) {
            let request = AddRequest::from_attributes(|name| button.get_attribute(name));
            if request.is_none() {
                web_sys::console::error_1(&"[EVENTS] Add button without data-id or data-price".into());
            }
            return request.map(CartControl::Add);
        }
        if closest(target, &format!("[data-cart-toggle], {}", OVERLAY_SELECTOR)).is_some() {
            return Some(CartControl::Toggle);
        }
        if closest(target, CHECKOUT_SELECTOR).is_some() {
            return Some(CartControl::Checkout);
        }
        if closest(target, CLEAR_SELECTOR).is_some() {
            return Some(CartControl::Clear);
        }
        None
    }
}

fn closest(target: &web_sys::Element, selector: &str) -> Option<web_sys::Element> {
    target.closest(selector).ok().flatten()
}

fn dispatch(app: CartApp, control: CartControl) {
    match control {
        CartControl::Add(req) => {
            web_sys::console::log_1(&format!("[EVENTS] Add {} ({})", req.id, req.name).into());
            app.add(&req.id, &req.name, req.price, &req.image);
        }
        CartControl::Toggle => app.toggle(),
        CartControl::Checkout => {
            let outcome = app.checkout();
            web_sys::console::log_1(&format!("[EVENTS] Checkout: {:?}", outcome).into());
        }
        CartControl::Clear => {
            web_sys::console::log_1(&"[EVENTS] Clear cart".into());
            app.clear();
        }
    }
}

/// Bind the document click listener for cart controls
pub fn bind_cart_controls(app: CartApp) {
    let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
            return;
        };
        if let Some(control) = CartControl::from_target(&target) {
            ev.prevent_default();
            dispatch(app, control);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            if let Err(e) = doc.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
                web_sys::console::error_1(&format!("[EVENTS] Could not bind cart controls: {:?}", e).into());
            }
        }
    }
    on_click.forget();
}

/// Run `f` once the document has been parsed
pub fn on_ready(f: impl FnOnce() + 'static) {
    let Some(doc) = web_sys::window().and_then(|win| win.document()) else {
        return;
    };
    if doc.ready_state() != "loading" {
        f();
        return;
    }
    let callback = Closure::once_into_js(f);
    if let Err(e) = doc.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref()) {
        web_sys::console::error_1(&format!("[EVENTS] Could not wait for DOMContentLoaded: {:?}", e).into());
    }
}
