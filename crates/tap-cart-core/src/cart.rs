//! Cart
//!
//! In-memory line items in insertion order. Mutations keep the invariants
//! (unique ids, quantity >= 1) and report what changed; persistence lives in
//! `CartStore`.

use crate::models::LineItem;

/// Outcome of a single cart mutation
#[derive(Debug, Clone, PartialEq)]
pub enum CartChange {
    /// A new line item was appended
    Added,
    /// An existing line item's quantity went up through `add`
    Incremented { quantity: u32 },
    /// Quantity adjusted through `set_quantity_delta`
    QuantityChanged { quantity: u32 },
    /// The line item was taken out of the cart
    Removed(LineItem),
    Cleared,
    /// Nothing matched; the cart is as it was
    Unchanged,
}

impl CartChange {
    /// Whether the change should open the cart drawer
    pub fn is_addition(&self) -> bool {
        matches!(self, CartChange::Added | CartChange::Incremented { .. })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from already-normalized items (see `decode_cart`)
    pub fn from_items(items: Vec<LineItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Increment an existing line by one, or append a new line.
    ///
    /// Name, price and image of an existing line are left untouched.
    pub fn add(&mut self, item: LineItem) -> CartChange {
        match self.items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(1);
                CartChange::Incremented { quantity: existing.quantity }
            }
            None => {
                self.items.push(LineItem { quantity: 1, ..item });
                CartChange::Added
            }
        }
    }

    pub fn remove(&mut self, id: &str) -> CartChange {
        match self.items.iter().position(|item| item.id == id) {
            Some(index) => CartChange::Removed(self.items.remove(index)),
            None => CartChange::Unchanged,
        }
    }

    /// Adjust a line's quantity; dropping to zero or below removes the line.
    pub fn set_quantity_delta(&mut self, id: &str, delta: i64) -> CartChange {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return CartChange::Unchanged;
        };
        let next = i64::from(item.quantity).saturating_add(delta);
        if next <= 0 {
            return self.remove(id);
        }
        item.quantity = u32::try_from(next).unwrap_or(u32::MAX);
        CartChange::QuantityChanged { quantity: item.quantity }
    }

    pub fn clear(&mut self) -> CartChange {
        self.items.clear();
        CartChange::Cleared
    }

    /// Sum of quantities across all lines
    pub fn total_item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |sum, item| sum.saturating_add(item.quantity))
    }

    /// Sum of price times quantity, rounded to cents
    pub fn subtotal(&self) -> f64 {
        let raw: f64 = self.items.iter().map(LineItem::line_total).sum();
        (raw * 100.0).round() / 100.0
    }
}
