//! Validation functionality
//!
//! Provides validation logic for:
//! - Model and route names (non-empty, unique) and route paths
//! - Model references held by routes (blocking deletion of models in use)
//! - Whole documents arriving from an import

pub mod document;
pub mod names;
pub mod references;

pub use document::{RenamedRoute, dedupe_route_names, unique_name, validate_document};
pub use names::{EntityKind, ValidationError, validate_name, validate_path};
pub use references::{ModelInUse, ModelUsage, find_model_usage};
