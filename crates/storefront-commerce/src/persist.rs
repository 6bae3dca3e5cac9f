//! Bridge between in-memory state and durable key-value storage.
//!
//! Reads never fail: absent or unreadable data falls back to the default
//! state. Writes replace the whole value at the key.

use serde::{de::DeserializeOwned, Serialize};
use storefront_store::{Cache, KeyValueStore};

use crate::error::CommerceError;

/// Read the state stored at `key`, or the default state if it is absent or
/// does not decode.
pub fn load<S, T>(cache: &Cache<S>, key: &str) -> T
where
    S: KeyValueStore,
    T: DeserializeOwned + Default,
{
    match cache.get::<T>(key) {
        Ok(Some(state)) => {
            tracing::debug!(key, "loaded stored state");
            state
        }
        Ok(None) => {
            tracing::debug!(key, "no stored state, starting empty");
            T::default()
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "discarding unreadable stored state");
            T::default()
        }
    }
}

/// Serialize `state` and write it to `key`, overwriting any previous value.
pub fn save<S, T>(cache: &Cache<S>, key: &str, state: &T) -> Result<(), CommerceError>
where
    S: KeyValueStore,
    T: Serialize,
{
    cache.set(key, state)?;
    tracing::debug!(key, "persisted state");
    Ok(())
}

/// A state value mirrored to one storage key.
///
/// The in-memory value is replaced only after the new value has been
/// written, so memory and storage agree after every call.
#[derive(Debug)]
pub struct Persisted<S, T> {
    cache: Cache<S>,
    key: String,
    state: T,
}

impl<S, T> Persisted<S, T>
where
    S: KeyValueStore,
    T: Serialize + DeserializeOwned + Default,
{
    /// Load the state stored at `key`.
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let cache = Cache::new(store);
        let key = key.into();
        let state = load(&cache, &key);
        Self { cache, key, state }
    }

    /// The current state.
    pub fn get(&self) -> &T {
        &self.state
    }

    /// The storage key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Write `next` to storage, then make it the current state.
    pub fn replace(&mut self, next: T) -> Result<(), CommerceError> {
        save(&self.cache, &self.key, &next)?;
        self.state = next;
        Ok(())
    }

    /// Re-read the state from storage, discarding the in-memory copy.
    pub fn reload(&mut self) {
        self.state = load(&self.cache, &self.key);
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        self.cache.store()
    }
}
