//! Tap Cart Core
//!
//! Browser-independent cart logic:
//! - models: line items as stored in `localStorage`
//! - cart: the ordered, id-unique item list and its mutations
//! - store: `CartStore`, the cart plus write-through persistence
//! - view: projection of the cart into display rows and labels

mod cart;
mod codec;
mod config;
mod error;
mod models;
mod storage;
mod store;
mod surface;
mod view;

pub use cart::{Cart, CartChange};
pub use codec::{decode_cart, encode_cart};
pub use config::{CartConfig, DEFAULT_CHECKOUT_URL, DEFAULT_STORAGE_KEY};
pub use error::{CartError, CartResult};
pub use models::{LineItem, MAX_PRICE};
pub use storage::{CartStorage, MemoryStorage};
pub use store::CartStore;
pub use surface::{CheckoutOutcome, DisplaySurface};
pub use view::{format_price, CartRow, CartView};
