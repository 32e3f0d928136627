//! Swaggly SDK - document model and converters for a visual OpenAPI editor
//!
//! Provides:
//! - The editable document (models and routes) and its persistent store
//! - Storage backends (memory, file system, browser localStorage)
//! - Form transforms between flat UI records and nested schema structures
//! - OpenAPI export (YAML/JSON) and import
//! - Name and reference validation
//! - Transient user notifications

pub mod config;
pub mod export;
pub mod import;
pub mod models;
pub mod notifications;
pub mod storage;
pub mod store;
pub mod transform;
pub mod validation;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export commonly used types
pub use config::{ExportConfig, SwagglyConfig};
pub use storage::{MemoryStorageBackend, StorageBackend, StorageError};
#[cfg(feature = "native-fs")]
pub use storage::filesystem::FileSystemStorageBackend;
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub use storage::browser::BrowserStorageBackend;

pub use export::{ExportError, OpenApiExporter};
pub use import::{ImportError, OpenApiImporter};
pub use notifications::{Notification, NotificationQueue, Notify, Severity};
pub use store::{DocumentStore, StoreError};
pub use validation::{ModelInUse, ValidationError};

// Re-export models
pub use models::enums::*;
pub use models::{Document, Model, ModelProperty, Route, SchemaObject, SchemaOrReference};
