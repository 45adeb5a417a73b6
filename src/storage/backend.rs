//! Key-value backends for durable client-side storage.
//!
//! The browser backend acquires `window.localStorage` on every call rather
//! than holding a handle, so the type stays `Send + Sync` and usable from
//! Leptos context. Outside the browser (SSR, native tests) the in-memory
//! backend stands in.

use std::collections::HashMap;
use std::sync::Mutex;

/// Minimal durable key-value contract. Reads fail soft (`None`); writes and
/// removals are best-effort and never propagate storage errors.
pub trait StorageBackend: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory backend for tests and non-browser execution contexts.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    values: Mutex<HashMap<String, String>>,
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.remove(key);
        }
    }
}

/// Backend over `window.localStorage`. Requires a browser environment.
#[cfg(feature = "hydrate")]
#[derive(Debug, Default)]
pub struct LocalStorageBackend;

#[cfg(feature = "hydrate")]
impl LocalStorageBackend {
    /// Whether `localStorage` can actually be reached from this context.
    pub fn available() -> bool {
        Self::storage().is_some()
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(feature = "hydrate")]
impl StorageBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
