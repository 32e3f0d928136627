//! CLI support for the swaggly binary
//!
//! The binary keeps its document in a data directory through
//! [`FileSystemStorageBackend`], one JSON file per storage key.

pub mod commands;
pub mod error;
pub mod output;

pub use error::CliError;

use crate::config::SwagglyConfig;
use crate::notifications::Notify;
use crate::storage::filesystem::FileSystemStorageBackend;
use crate::store::DocumentStore;
use std::path::Path;

/// Open the document store kept under `data_dir`
pub async fn open_store(
    data_dir: &Path,
    config: &SwagglyConfig,
    notifier: &mut dyn Notify,
) -> Result<DocumentStore<FileSystemStorageBackend>, CliError> {
    std::fs::create_dir_all(data_dir)
        .map_err(|e| CliError::FileWriteError(data_dir.to_path_buf(), e.to_string()))?;
    let backend = FileSystemStorageBackend::new(data_dir).with_extension("json");
    Ok(DocumentStore::open(backend, config, notifier).await?)
}
