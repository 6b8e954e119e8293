//! Cart Errors

use thiserror::Error;

/// Common result type for cart operations
pub type CartResult<T> = Result<T, CartError>;

/// Errors surfaced by the cart store.
///
/// Loading never produces one of these: unreadable or malformed state is
/// logged and treated as an empty cart.
#[derive(Debug, Error)]
pub enum CartError {
    /// The storage backend rejected a read or write (quota, disabled storage).
    #[error("storage error: {0}")]
    Storage(String),

    #[error("failed to serialize cart: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid cart configuration: {0}")]
    Config(String),
}
