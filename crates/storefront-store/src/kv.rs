//! Typed cache wrapper with automatic serialization.

use serde::{de::DeserializeOwned, Serialize};

use crate::{KeyValueStore, StoreError};

/// Type-safe cache over any [`KeyValueStore`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
#[derive(Debug, Clone)]
pub struct Cache<S> {
    store: S,
}

impl<S: KeyValueStore> Cache<S> {
    /// Wrap a raw store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist and an error if the stored
    /// bytes are not a valid `T`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let cart: Option<CartState> = cache.get("cart")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.store.get(key)? {
            Some(bytes) => {
                let value: T = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a value in the cache, overwriting any previous value.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(value)?;
        self.store.set(key, &bytes)
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.store.delete(key)
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, StoreError> {
        self.store.exists(key)
    }

    /// Get all keys in the cache.
    pub fn keys(&self) -> Result<Vec<String>, StoreError> {
        self.store.keys()
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Entry {
        name: String,
        count: u32,
    }

    #[test]
    fn test_typed_roundtrip() {
        let cache = Cache::new(MemoryStore::new());
        let entry = Entry {
            name: "headphones".to_string(),
            count: 2,
        };

        cache.set("entry", &entry).unwrap();
        assert_eq!(cache.get::<Entry>("entry").unwrap(), Some(entry));
    }

    #[test]
    fn test_missing_is_none() {
        let cache = Cache::new(MemoryStore::new());
        assert_eq!(cache.get::<Entry>("entry").unwrap(), None);
    }

    #[test]
    fn test_malformed_value_is_error() {
        let store = MemoryStore::new();
        store.set("entry", b"not json").unwrap();

        let cache = Cache::new(store);
        assert!(matches!(
            cache.get::<Entry>("entry"),
            Err(StoreError::SerializeError(_))
        ));
    }

    #[test]
    fn test_shares_underlying_store() {
        let store = MemoryStore::new();
        let cache = Cache::new(store.clone());
        cache.set("entry", &Entry { name: "x".into(), count: 1 }).unwrap();

        assert!(store.exists("entry").unwrap());
        assert_eq!(cache.keys().unwrap(), vec!["entry".to_string()]);

        cache.delete("entry").unwrap();
        assert!(!cache.exists("entry").unwrap());
    }
}
