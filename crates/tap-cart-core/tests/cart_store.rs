//! Cart Store Integration Tests
//!
//! Exercises `CartStore` against in-memory storage and a recording surface.

use std::cell::{Cell, RefCell};

use tap_cart_core::{
    CartChange, CartConfig, CartStorage, CartStore, CheckoutOutcome, DisplaySurface, MemoryStorage,
};

/// Records every page effect instead of touching a DOM
#[derive(Default)]
struct RecordingSurface {
    open: Cell<Option<bool>>,
    alerts: RefCell<Vec<String>>,
    navigations: RefCell<Vec<String>>,
}

impl RecordingSurface {
    fn with_drawer(open: bool) -> Self {
        let surface = Self::default();
        surface.open.set(Some(open));
        surface
    }
}

impl DisplaySurface for RecordingSurface {
    fn is_open(&self) -> Option<bool> {
        self.open.get()
    }

    fn set_open(&self, open: bool) {
        if self.open.get().is_some() {
            self.open.set(Some(open));
        }
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn navigate(&self, url: &str) {
        self.navigations.borrow_mut().push(url.to_string());
    }
}

fn empty_store() -> CartStore<MemoryStorage> {
    CartStore::load(MemoryStorage::new(), CartConfig::default())
}

#[test]
fn test_add_twice_counts_and_subtotal() {
    let mut store = empty_store();
    store.add("A", "Classic Card", 9.99, "/img/a.png");
    store.add("A", "Classic Card", 9.99, "/img/a.png");

    assert_eq!(store.items().len(), 1);
    assert_eq!(store.total_item_count(), 2);
    assert_eq!(store.view().subtotal_label, "$19.98");
}

#[test]
fn test_every_mutation_is_persisted() {
    let mut store = empty_store();
    store.add("A", "Classic Card", 9.99, "a.png");
    let saved = store.storage().get("tap_cart").expect("written after add").to_string();
    assert!(saved.contains(r#""quantity":1"#));

    store.set_quantity_delta("A", 2);
    let saved = store.storage().get("tap_cart").unwrap().to_string();
    assert!(saved.contains(r#""quantity":3"#));

    store.remove("A");
    assert_eq!(store.storage().get("tap_cart"), Some("[]"));
}

#[test]
fn test_reload_round_trip() {
    let mut store = empty_store();
    store.add("A", "Classic Card", 9.99, "a.png");
    store.add("B", "Metal Card", 120.5, "https://cdn.example/b.png");
    store.add("A", "Classic Card", 9.99, "a.png");
    let before = store.items().to_vec();

    let reloaded = CartStore::load(store.into_storage(), CartConfig::default());
    assert_eq!(reloaded.items(), before.as_slice());
}

#[test]
fn test_remove_nonexistent_leaves_cart_unchanged() {
    let mut store = empty_store();
    store.add("A", "Classic Card", 9.99, "a.png");
    let before = store.items().to_vec();

    assert_eq!(store.remove("ghost"), CartChange::Unchanged);
    assert_eq!(store.items(), before.as_slice());
}

#[test]
fn test_delta_of_negative_quantity_removes_item() {
    let mut store = empty_store();
    store.add("A", "Classic Card", 9.99, "a.png");
    store.add("A", "Classic Card", 9.99, "a.png");
    store.add("B", "Metal Card", 1.0, "b.png");

    let quantity = store.get("A").unwrap().quantity;
    assert!(matches!(store.set_quantity_delta("A", -i64::from(quantity)), CartChange::Removed(_)));
    assert!(store.get("A").is_none());
    assert_eq!(store.total_item_count(), 1);
}

#[test]
fn test_delta_for_unknown_id_does_not_write() {
    let mut storage = MemoryStorage::new();
    storage.write("tap_cart", r#"[{"id":"A","quantity":1}]"#).unwrap();
    let mut store = CartStore::load(storage, CartConfig::default());

    assert_eq!(store.set_quantity_delta("ghost", 1), CartChange::Unchanged);
    assert_eq!(store.storage().get("tap_cart"), Some(r#"[{"id":"A","quantity":1}]"#));
}

#[test]
fn test_malformed_storage_loads_empty() {
    let storage = MemoryStorage::with_entry("tap_cart", "definitely not json");
    let store = CartStore::load(storage, CartConfig::default());
    assert!(store.is_empty());
    assert_eq!(store.view().subtotal_label, "$0.00");
}

#[test]
fn test_custom_storage_key() {
    let config = CartConfig {
        storage_key: "other_cart".to_string(),
        ..CartConfig::default()
    };
    let mut store = CartStore::load(MemoryStorage::new(), config);
    store.add("A", "Classic Card", 9.99, "a.png");
    assert!(store.storage().get("other_cart").is_some());
    assert!(store.storage().get("tap_cart").is_none());
}

#[test]
fn test_failed_write_keeps_in_memory_change() {
    let mut storage = MemoryStorage::new();
    storage.set_fail_writes(true);
    let mut store = CartStore::load(storage, CartConfig::default());

    assert_eq!(store.add("A", "Classic Card", 9.99, "a.png"), CartChange::Added);
    assert_eq!(store.total_item_count(), 1);
    assert!(store.last_save_error().is_some());
}

#[test]
fn test_clear_empties_and_drops_entry() {
    let mut store = empty_store();
    store.add("A", "Classic Card", 9.99, "a.png");
    assert!(store.storage().get("tap_cart").is_some());

    assert_eq!(store.clear(), CartChange::Cleared);
    assert!(store.is_empty());
    assert_eq!(store.storage().get("tap_cart"), None);

    let reloaded = CartStore::load(store.into_storage(), CartConfig::default());
    assert!(reloaded.is_empty());
}

#[test]
fn test_checkout_empty_cart_alerts_and_stays() {
    let store = empty_store();
    let surface = RecordingSurface::default();

    assert_eq!(store.checkout(&surface), CheckoutOutcome::EmptyCart);
    assert_eq!(surface.alerts.borrow().as_slice(), ["Your cart is empty!"]);
    assert!(surface.navigations.borrow().is_empty());
}

#[test]
fn test_checkout_with_items_redirects() {
    let mut store = empty_store();
    store.add("A", "Classic Card", 9.99, "a.png");
    let surface = RecordingSurface::default();

    assert_eq!(store.checkout(&surface), CheckoutOutcome::Redirected("checkout.html".to_string()));
    assert_eq!(surface.navigations.borrow().as_slice(), ["checkout.html"]);
    assert!(surface.alerts.borrow().is_empty());
}

#[test]
fn test_toggle_display() {
    let store = empty_store();
    let surface = RecordingSurface::with_drawer(false);

    assert_eq!(store.toggle_display(&surface), Some(true));
    assert_eq!(store.toggle_display(&surface), Some(false));
}

#[test]
fn test_toggle_without_drawer_is_noop() {
    let store = empty_store();
    let surface = RecordingSurface::default();
    assert_eq!(store.toggle_display(&surface), None);
    assert_eq!(surface.open.get(), None);
}

#[test]
fn test_reveal_only_opens() {
    let store = empty_store();
    let closed = RecordingSurface::with_drawer(false);
    store.reveal(&closed);
    assert_eq!(closed.open.get(), Some(true));

    let open = RecordingSurface::with_drawer(true);
    store.reveal(&open);
    assert_eq!(open.open.get(), Some(true));
}
