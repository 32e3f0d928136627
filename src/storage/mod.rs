//! Storage backend abstraction
//!
//! Defines the StorageBackend trait and implementations for different storage systems:
//! - MemoryStorageBackend: In-process map (tests, ephemeral sessions)
//! - FileSystemStorageBackend: Native file system (for the CLI and native apps)
//! - BrowserStorageBackend: Browser localStorage (for WASM apps)
//!
//! A backend is a flat key-value store of text blobs. The document store
//! keeps the whole document under a single key.

use async_trait::async_trait;

/// Error type for storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Key not found: {0}")]
    KeyNotFound(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
    #[error("Storage backend error: {0}")]
    BackendError(String),
}

/// Trait for storage backends
///
/// This trait abstracts reading and writing named text blobs across different
/// storage systems (memory, file system, browser storage).
#[async_trait(?Send)]
pub trait StorageBackend: Send + Sync {
    /// Read the value stored under `key`
    async fn read(&self, key: &str) -> Result<String, StorageError>;

    /// Write `value` under `key`, replacing any previous value
    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Check if a value exists under `key`
    async fn exists(&self, key: &str) -> Result<bool, StorageError>;

    /// Remove the value stored under `key`; removing a missing key succeeds
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Shared handle, so a caller can keep inspecting a backend a store owns
#[async_trait(?Send)]
impl<B: StorageBackend> StorageBackend for std::sync::Arc<B> {
    async fn read(&self, key: &str) -> Result<String, StorageError> {
        self.as_ref().read(key).await
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.as_ref().write(key, value).await
    }

    async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        self.as_ref().exists(key).await
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.as_ref().remove(key).await
    }
}

pub mod memory;

// Storage backend implementations
#[cfg(feature = "native-fs")]
pub mod filesystem;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub mod browser;

pub use memory::MemoryStorageBackend;
