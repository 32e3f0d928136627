//! Configuration for the document store, notifications and export

use serde::{Deserialize, Serialize};

use crate::notifications::{DEFAULT_CAPACITY, DEFAULT_TTL_SECS};

/// Storage key the document is persisted under
pub const DEFAULT_STORAGE_KEY: &str = "swagglyOpenApiData";

/// File name offered for exported documents
pub const DEFAULT_EXPORT_FILE_NAME: &str = "swagger.yaml";

/// Settings for the info block and version of exported documents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportConfig {
    /// `openapi` version string written to the document
    pub openapi_version: String,
    pub title: String,
    pub version: String,
    pub description: String,
    pub file_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            openapi_version: "3.0.0".to_string(),
            title: "Swaggly API".to_string(),
            version: "1.0.0".to_string(),
            description: "API documentation generated with Swaggly".to_string(),
            file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SwagglyConfig {
    /// Key of the persisted document blob
    pub storage_key: String,

    /// Maximum notifications visible at once
    pub notification_capacity: usize,

    /// Seconds before a notification is dismissed
    pub notification_ttl_secs: u64,

    pub export: ExportConfig,
}

impl Default for SwagglyConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            notification_capacity: DEFAULT_CAPACITY,
            notification_ttl_secs: DEFAULT_TTL_SECS,
            export: ExportConfig::default(),
        }
    }
}

impl SwagglyConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> SwagglyConfigBuilder {
        SwagglyConfigBuilder::default()
    }

    /// Build a notification queue sized by this configuration
    pub fn notification_queue(&self) -> crate::notifications::NotificationQueue {
        crate::notifications::NotificationQueue::new(
            self.notification_capacity,
            self.notification_ttl_secs,
        )
    }

    /// Parse a configuration from TOML; missing keys take their defaults
    #[cfg(feature = "toml")]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load a TOML configuration file
    #[cfg(feature = "toml")]
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }
}

/// Error loading a configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(String),
    #[error("Failed to parse config: {0}")]
    Parse(String),
}

/// Builder for SwagglyConfig
#[derive(Debug, Default)]
pub struct SwagglyConfigBuilder {
    config: SwagglyConfig,
}

impl SwagglyConfigBuilder {
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.config.storage_key = key.into();
        self
    }

    /// At least one notification is always kept
    pub fn notification_capacity(mut self, capacity: usize) -> Self {
        self.config.notification_capacity = capacity.max(1);
        self
    }

    pub fn notification_ttl_secs(mut self, secs: u64) -> Self {
        self.config.notification_ttl_secs = secs;
        self
    }

    pub fn export_title(mut self, title: impl Into<String>) -> Self {
        self.config.export.title = title.into();
        self
    }

    pub fn export_version(mut self, version: impl Into<String>) -> Self {
        self.config.export.version = version.into();
        self
    }

    pub fn export_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.config.export.file_name = file_name.into();
        self
    }

    pub fn build(self) -> SwagglyConfig {
        self.config
    }
}
