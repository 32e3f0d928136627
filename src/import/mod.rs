//! Import functionality
//!
//! Parses OpenAPI YAML or JSON and converts it back into an editable document.

pub mod openapi;

/// Message shown after a successful import
pub const IMPORT_SUCCESS_MESSAGE: &str = "Swagger file imported successfully.";

/// Error during import
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("{0}")]
    ParseError(String),
    #[error("Store error: {0}")]
    StoreError(#[from] crate::store::StoreError),
}

impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        ImportError::ParseError(err.to_string())
    }
}

impl From<serde_yaml::Error> for ImportError {
    fn from(err: serde_yaml::Error) -> Self {
        ImportError::ParseError(err.to_string())
    }
}

pub use openapi::OpenApiImporter;
