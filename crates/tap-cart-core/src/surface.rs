//! Display Surface
//!
//! The part of the page the cart controls besides its rendered rows: the
//! drawer's open state, blocking notifications and navigation.

/// Page-level effects the cart store can trigger
pub trait DisplaySurface {
    /// Current drawer state, `None` when the drawer is not on the page
    fn is_open(&self) -> Option<bool>;

    fn set_open(&self, open: bool);

    /// Blocking user notification
    fn alert(&self, message: &str);

    fn navigate(&self, url: &str);
}

/// Result of a checkout attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Nothing to buy; the shopper was notified and stays on the page
    EmptyCart,
    /// Control was handed to the checkout entry point
    Redirected(String),
}
