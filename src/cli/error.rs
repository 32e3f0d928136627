//! Error types for the swaggly CLI

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;
use crate::export::ExportError;
use crate::import::ImportError;
use crate::store::StoreError;

/// Errors surfaced by CLI commands
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Input file could not be read
    #[error("Failed to read {0}: {1}")]
    FileReadError(PathBuf, String),

    /// Output file could not be written
    #[error("Failed to write {0}: {1}")]
    FileWriteError(PathBuf, String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Export(#[from] ExportError),

    /// The document failed validation
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// A named model or route does not exist
    #[error("{0} not found")]
    NotFound(String),
}
