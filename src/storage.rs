//! Storage capability
//!
//! Thin injectable wrapper over a string key/value store. The browser
//! implementation sits on `window.localStorage`; tests use the in-memory
//! implementation. Callers distinguish "key absent" (`Ok(None)`) from "no
//! store at all" (`Err(Unavailable)`).

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::StorageEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// No storage device in this context (non-browser, or access denied).
    Unavailable,
    /// The device exists but the operation failed, e.g. quota exceeded.
    Backend(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "storage unavailable"),
            StorageError::Backend(msg) => write!(f, "storage operation failed: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}

pub trait StorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// The browser's origin-scoped localStorage.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn raw() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

fn js_error(value: JsValue) -> StorageError {
    StorageError::Backend(
        value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}")),
    )
}

impl StorageBackend for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::raw()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::raw()?.set_item(key, value).map_err(js_error)
    }
}

/// In-memory store for tests. Clones share the same cells, so one handle can
/// play the part of another tab writing to the same device.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    cells: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.cells.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.cells.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Guard for a window "storage" listener. Dropping it detaches the listener.
pub struct StorageSubscription {
    window: web_sys::Window,
    listener: Closure<dyn FnMut(StorageEvent)>,
}

impl Drop for StorageSubscription {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("storage", self.listener.as_ref().unchecked_ref());
    }
}

/// Invoke `callback` whenever another tab on this origin writes `key` (or
/// clears the whole store). Same-tab writes do not fire; callers refresh
/// their own state after mutating. Returns `None` outside a browser.
pub fn subscribe(key: &'static str, callback: impl Fn() + 'static) -> Option<StorageSubscription> {
    let window = web_sys::window()?;
    let listener = Closure::<dyn FnMut(StorageEvent)>::new(move |event: StorageEvent| {
        // A null key means the store was cleared wholesale.
        match event.key() {
            Some(changed) if changed != key => {}
            _ => callback(),
        }
    });
    window
        .add_event_listener_with_callback("storage", listener.as_ref().unchecked_ref())
        .ok()?;
    Some(StorageSubscription { window, listener })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("k"), Ok(None));

        storage.set("k", "v").expect("Write failed");
        assert_eq!(storage.get("k"), Ok(Some("v".to_string())));

        storage.set("k", "v2").expect("Overwrite failed");
        assert_eq!(storage.get("k"), Ok(Some("v2".to_string())));
    }

    #[test]
    fn test_memory_storage_clones_share_cells() {
        let a = MemoryStorage::new();
        let b = a.clone();

        a.set("k", "from-a").expect("Write failed");
        assert_eq!(b.get("k"), Ok(Some("from-a".to_string())));
    }
}
