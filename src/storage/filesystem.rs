//! File system storage backend
//!
//! Implements StorageBackend for native file system operations.
//! Each key maps to one file under the base directory.
//!
//! ## Security
//!
//! All keys are validated to prevent path traversal attacks.
//! Keys containing ".." are rejected, and all resolved paths are verified
//! to remain within the base directory.

use super::{StorageBackend, StorageError};
use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// File system storage backend
pub struct FileSystemStorageBackend {
    base_path: PathBuf,
    extension: Option<String>,
}

impl FileSystemStorageBackend {
    /// Create a new file system storage backend
    ///
    /// # Arguments
    ///
    /// * `base_path` - Base directory path for all stored values
    ///
    /// # Example
    ///
    /// ```rust
    /// use swaggly_sdk::storage::filesystem::FileSystemStorageBackend;
    ///
    /// let backend = FileSystemStorageBackend::new("/workspace/swaggly").with_extension("json");
    /// ```
    pub fn new(base_path: impl AsRef<Path>) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
            extension: None,
        }
    }

    /// Append `extension` to every key when mapping it to a file name
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Resolve a key to a path under the base path with security checks.
    ///
    /// # Security
    ///
    /// - Rejects keys containing ".." components
    /// - Verifies the resolved path stays within base_path
    fn resolve_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        let normalized = key.trim_start_matches('/');

        if normalized.is_empty() {
            return Err(StorageError::PermissionDenied(
                "Empty storage key".to_string(),
            ));
        }

        if normalized.contains("..") {
            return Err(StorageError::PermissionDenied(
                "Path traversal (..) not allowed".to_string(),
            ));
        }

        let file_name = match &self.extension {
            Some(ext) => format!("{}.{}", normalized, ext),
            None => normalized.to_string(),
        };
        let full = self.base_path.join(file_name);

        for component in full.components() {
            if matches!(component, Component::ParentDir) {
                return Err(StorageError::PermissionDenied(
                    "Path traversal not allowed".to_string(),
                ));
            }
        }

        if full.exists() {
            let canonical = full
                .canonicalize()
                .map_err(|e| StorageError::IoError(format!("Failed to resolve path: {}", e)))?;

            let base_canonical = self
                .base_path
                .canonicalize()
                .unwrap_or_else(|_| self.base_path.clone());

            if !canonical.starts_with(&base_canonical) {
                return Err(StorageError::PermissionDenied(
                    "Path escapes base directory".to_string(),
                ));
            }

            return Ok(canonical);
        }

        Ok(full)
    }
}

#[async_trait(?Send)]
impl StorageBackend for FileSystemStorageBackend {
    async fn read(&self, key: &str) -> Result<String, StorageError> {
        let full_path = self.resolve_path(key)?;

        fs::read_to_string(&full_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::KeyNotFound(key.to_string())
            } else {
                StorageError::IoError(format!("Failed to read {}: {}", key, e))
            }
        })
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let full_path = self.resolve_path(key)?;

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                StorageError::IoError(format!("Failed to create directory for {}: {}", key, e))
            })?;
        }

        fs::write(&full_path, value)
            .await
            .map_err(|e| StorageError::IoError(format!("Failed to write {}: {}", key, e)))?;
        debug!("Wrote {} bytes to {}", value.len(), full_path.display());
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        let full_path = self.resolve_path(key)?;

        match fs::metadata(&full_path).await {
            Ok(metadata) => Ok(metadata.is_file()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StorageError::IoError(format!(
                "Failed to check existence of {}: {}",
                key, e
            ))),
        }
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let full_path = self.resolve_path(key)?;

        match fs::remove_file(&full_path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::IoError(format!(
                "Failed to remove {}: {}",
                key, e
            ))),
        }
    }
}
