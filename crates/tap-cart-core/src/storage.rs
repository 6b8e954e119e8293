//! Cart Storage - Core Trait
//!
//! Key/value persistence the cart is written through to. The browser
//! implementation wraps `window.localStorage`; `MemoryStorage` backs tests.

use std::collections::HashMap;

use crate::error::{CartError, CartResult};

/// Synchronous string key/value storage
pub trait CartStorage {
    /// Read a value; `Ok(None)` when the key was never written
    fn read(&self, key: &str) -> CartResult<Option<String>>;

    fn write(&mut self, key: &str, value: &str) -> CartResult<()>;

    fn remove(&mut self, key: &str) -> CartResult<()>;
}

/// In-memory storage with an optional write failure switch
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.entries.insert(key.to_string(), value.to_string());
        storage
    }

    /// Make subsequent writes fail, like a full or disabled `localStorage`
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl CartStorage for MemoryStorage {
    fn read(&self, key: &str) -> CartResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> CartResult<()> {
        if self.fail_writes {
            return Err(CartError::Storage(format!("quota exceeded writing {}", key)));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> CartResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}
