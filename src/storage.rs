//! Durable client storage abstraction.
//!
//! Session tokens, the signed-in user, the onboarding draft and the selected
//! tenant are all persisted through a [`KeyValueStore`]: a flat string-keyed,
//! string-valued store with the same contract as browser local storage. Writes
//! are synchronous, so a value is durable as soon as the call returns.
//!
//! Backends: [`MemoryStore`] (tests, ephemeral sessions) and
//! [`FileStore`](file_store::FileStore) (TOML file with owner-only permissions).
//! Wrap either in a [`SharedStore`] to hand the same store to the API client
//! and to every context.

pub mod file_store;

pub use file_store::FileStore;

use crate::error::{JewelLinkError, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Storage keys shared with the web front-end.
pub mod keys {
    pub const ACCESS_TOKEN: &str = "access_token";
    pub const REFRESH_TOKEN: &str = "refresh_token";
    pub const USER: &str = "user";
    pub const SELECTED_ROLE: &str = "selected_role";
    pub const ONBOARDING_DATA: &str = "onboarding_data";
    pub const ONBOARDING_STEP: &str = "onboarding_step";
    pub const TENANT_ID: &str = "tenantId";

    /// Keys that together make up a persisted session.
    pub const SESSION_KEYS: [&str; 3] = [ACCESS_TOKEN, REFRESH_TOKEN, USER];

    /// Keys cleared when the onboarding wizard finishes or is abandoned.
    pub const ONBOARDING_KEYS: [&str; 2] = [ONBOARDING_DATA, ONBOARDING_STEP];
}

/// Trait for durable key/value storage backends.
///
/// # Example Implementation
///
/// ```rust,ignore
/// use jewel_link::storage::KeyValueStore;
///
/// struct MyStore;
///
/// impl KeyValueStore for MyStore {
///     fn get_item(&self, key: &str) -> Result<Option<String>> { Ok(None) }
///     fn set_item(&mut self, key: &str, value: &str) -> Result<()> { Ok(()) }
///     fn remove_item(&mut self, key: &str) -> Result<()> { Ok(()) }
///     fn keys(&self) -> Result<Vec<String>> { Ok(vec![]) }
/// }
/// ```
pub trait KeyValueStore {
    /// Read a value. Returns `Ok(None)` when the key is absent.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, overwriting any previous value for the key.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Returns `Ok(())` even if the key was absent.
    fn remove_item(&mut self, key: &str) -> Result<()>;

    /// List all stored keys.
    fn keys(&self) -> Result<Vec<String>>;

    /// Check if a key is present
    fn contains_key(&self, key: &str) -> Result<bool> {
        Ok(self.get_item(key)?.is_some())
    }

    /// Remove several keys in one call.
    fn remove_items(&mut self, keys: &[&str]) -> Result<()> {
        for key in keys {
            self.remove_item(key)?;
        }
        Ok(())
    }

    /// Serialize `value` as JSON and store it under `key`.
    fn set_json<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()>
    where
        Self: Sized,
    {
        let json = serde_json::to_string(value)?;
        self.set_item(key, &json)
    }

    /// Read and decode a JSON value. Malformed JSON is an error.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>>
    where
        Self: Sized,
    {
        match self.get_item(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }
}

/// In-memory store for tests and sessions that must not outlive the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.items.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.items.keys().cloned().collect())
    }
}

/// A store shared between the API client and the contexts.
pub type SharedStore<S> = Arc<Mutex<S>>;

/// Wrap a store so it can be cloned into several owners.
pub fn shared<S: KeyValueStore>(store: S) -> SharedStore<S> {
    Arc::new(Mutex::new(store))
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> JewelLinkError {
    JewelLinkError::StorageError("storage lock poisoned".to_string())
}

impl<S: KeyValueStore> KeyValueStore for Arc<Mutex<S>> {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.lock().map_err(poisoned)?.get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.lock().map_err(poisoned)?.set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.lock().map_err(poisoned)?.remove_item(key)
    }

    fn keys(&self) -> Result<Vec<String>> {
        self.lock().map_err(poisoned)?.keys()
    }
}
