//! Browser Storage
//!
//! `CartStorage` over `window.localStorage`.

use tap_cart_core::{CartError, CartResult, CartStorage};
use wasm_bindgen::JsValue;

/// `localStorage` handle, or nothing when storage is disabled (private mode,
/// sandboxed iframes). Without a handle reads are empty and writes fail.
pub struct BrowserStorage {
    inner: Option<web_sys::Storage>,
}

impl BrowserStorage {
    pub fn local() -> Self {
        let inner = web_sys::window().and_then(|win| win.local_storage().ok().flatten());
        if inner.is_none() {
            web_sys::console::error_1(&"[STORAGE] localStorage unavailable, cart will not persist".into());
        }
        Self { inner }
    }

    fn handle(&self) -> CartResult<&web_sys::Storage> {
        self.inner
            .as_ref()
            .ok_or_else(|| CartError::Storage("localStorage unavailable".to_string()))
    }
}

impl CartStorage for BrowserStorage {
    fn read(&self, key: &str) -> CartResult<Option<String>> {
        self.handle()?.get_item(key).map_err(js_error)
    }

    fn write(&mut self, key: &str, value: &str) -> CartResult<()> {
        self.handle()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&mut self, key: &str) -> CartResult<()> {
        self.handle()?.remove_item(key).map_err(js_error)
    }
}

/// Convert a thrown DOMException (e.g. QuotaExceededError) into a cart error
fn js_error(err: JsValue) -> CartError {
    let message = err
        .as_string()
        .or_else(|| js_sys::Reflect::get(&err, &"message".into()).ok().and_then(|m| m.as_string()))
        .unwrap_or_else(|| format!("{:?}", err));
    CartError::Storage(message)
}
