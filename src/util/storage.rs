//! Durable key/value storage behind a small trait.
//!
//! The browser backend wraps `localStorage`; the in-memory backend serves
//! native tests and server-side rendering, where no durable medium exists.
//! Consumers never reach for `web_sys` directly — they go through an
//! injected `StorageBackend`, so everything above this module runs
//! unchanged on both targets.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// The storage medium itself failed (quota, disabled localStorage, ...).
///
/// Reads never produce this: a missing or unreadable value is `None`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("storage unavailable: {0}")]
pub struct StorageError(String);

impl StorageError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// A durable string-keyed store.
pub trait StorageBackend: Send + Sync {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}

/// Process-local backend for tests and SSR.
#[derive(Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

/// `localStorage`-backed store. Requires a browser environment; every
/// accessor tolerates its absence.
#[cfg(feature = "hydrate")]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "hydrate")]
impl StorageBackend for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        Self::local_storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::local_storage()
            .ok_or_else(|| StorageError::new("localStorage is not available"))?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::new(format!("localStorage write failed for `{key}`")))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// The backend the running target actually persists to.
pub fn default_backend() -> Arc<dyn StorageBackend> {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(BrowserStorage)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Arc::new(MemoryStorage::default())
    }
}
