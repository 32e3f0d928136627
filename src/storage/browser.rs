//! Browser storage backend
//!
//! Implements StorageBackend on top of `window.localStorage`.
//! Used by WASM builds of the editor, where the document lives in the
//! browser between sessions.

use super::{StorageBackend, StorageError};
use async_trait::async_trait;
use web_sys::Storage;

/// Browser storage backend using localStorage
pub struct BrowserStorageBackend {
    prefix: String,
}

impl BrowserStorageBackend {
    /// Create a new browser storage backend
    ///
    /// # Arguments
    ///
    /// * `prefix` - Prepended to every key, empty for none
    ///
    /// # Example
    ///
    /// ```rust
    /// use swaggly_sdk::storage::browser::BrowserStorageBackend;
    ///
    /// let backend = BrowserStorageBackend::new("");
    /// ```
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }

    /// Get localStorage instance
    fn get_local_storage(&self) -> Result<Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::BackendError("Window not available".to_string()))?;

        window
            .local_storage()
            .map_err(|e| {
                StorageError::BackendError(format!("localStorage not available: {:?}", e))
            })?
            .ok_or_else(|| StorageError::BackendError("localStorage is None".to_string()))
    }
}

#[async_trait(?Send)]
impl StorageBackend for BrowserStorageBackend {
    async fn read(&self, key: &str) -> Result<String, StorageError> {
        let storage = self.get_local_storage()?;
        storage
            .get_item(&self.key(key))
            .map_err(|e| {
                StorageError::BackendError(format!("Failed to read from localStorage: {:?}", e))
            })?
            .ok_or_else(|| StorageError::KeyNotFound(key.to_string()))
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.get_local_storage()?;
        storage.set_item(&self.key(key), value).map_err(|e| {
            StorageError::BackendError(format!("Failed to write to localStorage: {:?}", e))
        })
    }

    async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        match self.read(key).await {
            Ok(_) => Ok(true),
            Err(StorageError::KeyNotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let storage = self.get_local_storage()?;
        storage.remove_item(&self.key(key)).map_err(|e| {
            StorageError::BackendError(format!("Failed to remove from localStorage: {:?}", e))
        })
    }
}
