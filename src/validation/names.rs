//! Name and path validation for models and routes
//!
//! Names are trimmed before comparison and storage. Validation runs before
//! the store is touched, so a rejected mutation leaves the document as it was.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Kind of entity a name belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Model,
    Route,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Model => f.write_str("Model"),
            EntityKind::Route => f.write_str("Route"),
        }
    }
}

/// Errors that can occur during name/path validation
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum ValidationError {
    /// Name is empty or whitespace only
    #[error("{0} name cannot be empty")]
    EmptyName(EntityKind),

    /// Another entity of the same kind already uses the name
    #[error("{kind} \"{name}\" already exists")]
    DuplicateName { kind: EntityKind, name: String },

    /// Route path is empty or whitespace only
    #[error("Route path cannot be empty")]
    EmptyPath,
}

/// Trim `name` and check it is non-empty and not taken
///
/// `taken` yields the names of the *other* entities of the same kind.
///
/// # Example
///
/// ```rust
/// use swaggly_sdk::validation::{EntityKind, validate_name};
///
/// let existing = ["User", "Order"];
/// assert_eq!(validate_name(EntityKind::Model, "  Pet ", existing).unwrap(), "Pet");
/// assert!(validate_name(EntityKind::Model, " User", existing).is_err());
/// assert!(validate_name(EntityKind::Model, "   ", existing).is_err());
/// ```
pub fn validate_name<'a>(
    kind: EntityKind,
    name: &str,
    taken: impl IntoIterator<Item = &'a str>,
) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName(kind));
    }
    if taken.into_iter().any(|existing| existing == trimmed) {
        return Err(ValidationError::DuplicateName {
            kind,
            name: trimmed.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

/// Trim a route path and check it is non-empty
pub fn validate_path(path: &str) -> Result<String, ValidationError> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyPath);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_name_rejected() {
        let result = validate_name(EntityKind::Route, " \t ", std::iter::empty());
        assert_eq!(result, Err(ValidationError::EmptyName(EntityKind::Route)));
    }

    #[test]
    fn test_duplicate_detected_after_trim() {
        let result = validate_name(EntityKind::Model, "User  ", ["User"]);
        assert!(matches!(
            result,
            Err(ValidationError::DuplicateName { name, .. }) if name == "User"
        ));
    }

    #[test]
    fn test_path_trimmed() {
        assert_eq!(validate_path(" /users ").unwrap(), "/users");
        assert_eq!(validate_path(""), Err(ValidationError::EmptyPath));
    }
}
