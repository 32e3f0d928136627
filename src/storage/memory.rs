//! In-memory storage backend
//!
//! Keeps values in a process-local map. Nothing survives the process.

use super::{StorageBackend, StorageError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Map-backed storage backend
#[derive(Debug, Default)]
pub struct MemoryStorageBackend {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorageBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend pre-populated with one value
    ///
    /// # Example
    ///
    /// ```rust
    /// use swaggly_sdk::storage::MemoryStorageBackend;
    ///
    /// let empty = r#"{"models":[],"routes":[]}"#;
    /// let backend = MemoryStorageBackend::with_value("swagglyOpenApiData", empty);
    /// assert!(backend.snapshot("swagglyOpenApiData").is_some());
    /// ```
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut values = HashMap::new();
        values.insert(key.into(), value.into());
        Self {
            values: Mutex::new(values),
        }
    }

    /// Current value under `key`, read synchronously
    pub fn snapshot(&self, key: &str) -> Option<String> {
        self.lock().ok().and_then(|values| values.get(key).cloned())
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.values
            .lock()
            .map_err(|e| StorageError::BackendError(format!("Storage lock poisoned: {}", e)))
    }
}

#[async_trait(?Send)]
impl StorageBackend for MemoryStorageBackend {
    async fn read(&self, key: &str) -> Result<String, StorageError> {
        self.lock()?
            .get(key)
            .cloned()
            .ok_or_else(|| StorageError::KeyNotFound(key.to_string()))
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.lock()?.contains_key(key))
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.lock()?.remove(key);
        Ok(())
    }
}
