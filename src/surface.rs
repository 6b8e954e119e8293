//! DOM Surface
//!
//! Fixed page structure the cart renders into. Elements are looked up on
//! every call so the script can load before or after the cart markup.

use tap_cart_core::{CartConfig, DisplaySurface};
use wasm_bindgen::JsCast;

pub const DRAWER_SELECTOR: &str = ".cart-drawer";
pub const OVERLAY_SELECTOR: &str = ".cart-overlay";
pub const BODY_SELECTOR: &str = ".cart-body";
pub const COUNT_SELECTOR: &str = ".cart-count";
pub const SUBTOTAL_SELECTOR: &str = ".cart-subtotal span:last-child";
pub const CONFIG_SELECTOR: &str = "script#tap-cart-config";

/// Class toggled on drawer and overlay
const OPEN_CLASS: &str = "open";

/// First element matching `selector`, if the page has one
pub fn query(selector: &str) -> Option<web_sys::HtmlElement> {
    let document = web_sys::window()?.document()?;
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
}

/// Read page overrides from `<script id="tap-cart-config" type="application/json">`
pub fn load_config() -> CartConfig {
    let Some(raw) = query(CONFIG_SELECTOR).and_then(|el| el.text_content()) else {
        return CartConfig::default();
    };
    match CartConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            web_sys::console::error_1(&format!("[SURFACE] Ignoring cart config: {}", e).into());
            CartConfig::default()
        }
    }
}

/// Drawer, overlay and window effects of the live page
#[derive(Clone, Copy, Debug, Default)]
pub struct DomSurface;

impl DisplaySurface for DomSurface {
    fn is_open(&self) -> Option<bool> {
        // Both halves must exist for the drawer to be usable
        let drawer = query(DRAWER_SELECTOR)?;
        query(OVERLAY_SELECTOR)?;
        Some(drawer.class_list().contains(OPEN_CLASS))
    }

    fn set_open(&self, open: bool) {
        for selector in [DRAWER_SELECTOR, OVERLAY_SELECTOR] {
            if let Some(el) = query(selector) {
                if let Err(e) = el.class_list().toggle_with_force(OPEN_CLASS, open) {
                    web_sys::console::error_1(&format!("[SURFACE] Could not toggle {}: {:?}", selector, e).into());
                }
            }
        }
    }

    fn alert(&self, message: &str) {
        if let Some(win) = web_sys::window() {
            if let Err(e) = win.alert_with_message(message) {
                web_sys::console::error_1(&format!("[SURFACE] Alert failed: {:?}", e).into());
            }
        }
    }

    fn navigate(&self, url: &str) {
        if let Some(win) = web_sys::window() {
            if let Err(e) = win.location().set_href(url) {
                web_sys::console::error_1(&format!("[SURFACE] Navigation to {} failed: {:?}", url, e).into());
            }
        }
    }
}
