//! UI Components
//!
//! Leptos components mounted into the storefront's cart markup.

mod cart_body;
mod cart_item_row;
mod cart_summary;

pub use cart_body::CartBody;
pub use cart_item_row::CartItemRow;
pub use cart_summary::{CartCount, CartSubtotal};
