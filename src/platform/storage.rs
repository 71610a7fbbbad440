//! Key/value persistence for small integers
//!
//! Reads never fail: a missing or garbled value falls back to the caller's
//! default. Writes are best-effort.

use std::collections::HashMap;

/// Integer key/value store
pub trait PersistentStore {
    fn get_int(&self, key: &str, default: i64) -> i64;
    fn set_int(&mut self, key: &str, value: i64);
}

fn parse_int(key: &str, raw: &str, default: i64) -> i64 {
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            log::warn!("Ignoring unparseable value for {key}: {raw:?}");
            default
        }
    }
}

/// In-memory store (native builds and tests)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a raw string, as another program might have written it
    pub fn with_raw(mut self, key: &str, raw: &str) -> Self {
        self.values.insert(key.to_string(), raw.to_string());
        self
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl PersistentStore for MemoryStore {
    fn get_int(&self, key: &str, default: i64) -> i64 {
        self.values
            .get(key)
            .map(|raw| parse_int(key, raw, default))
            .unwrap_or(default)
    }

    fn set_int(&mut self, key: &str, value: i64) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Browser LocalStorage
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct LocalStore;

#[cfg(target_arch = "wasm32")]
impl LocalStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl PersistentStore for LocalStore {
    fn get_int(&self, key: &str, default: i64) -> i64 {
        let Some(storage) = Self::storage() else {
            log::warn!("LocalStorage unavailable, using default for {key}");
            return default;
        };
        match storage.get_item(key) {
            Ok(Some(raw)) => parse_int(key, &raw, default),
            _ => default,
        }
    }

    fn set_int(&mut self, key: &str, value: i64) {
        let Some(storage) = Self::storage() else {
            log::warn!("LocalStorage unavailable, {key} not saved");
            return;
        };
        if storage.set_item(key, &value.to_string()).is_err() {
            log::warn!("Failed to save {key}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_uses_default() {
        let store = MemoryStore::new();
        assert_eq!(store.get_int("bestScore", 0), 0);
        assert_eq!(store.get_int("bestScore", 7), 7);
    }

    #[test]
    fn test_set_then_get() {
        let mut store = MemoryStore::new();
        store.set_int("bestScore", 12);
        assert_eq!(store.get_int("bestScore", 0), 12);
        assert_eq!(store.raw("bestScore"), Some("12"));
    }

    #[test]
    fn test_garbage_uses_default() {
        let store = MemoryStore::new()
            .with_raw("a", "twelve")
            .with_raw("b", "")
            .with_raw("c", " 9 ");
        assert_eq!(store.get_int("a", 0), 0);
        assert_eq!(store.get_int("b", 0), 0);
        assert_eq!(store.get_int("c", 0), 9);
    }
}
