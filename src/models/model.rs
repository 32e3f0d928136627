//! Model (component schema) definition for the SDK

use super::schema::SchemaOrReference;
use serde::{Deserialize, Serialize};

/// A single named property of a model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelProperty {
    pub name: String,
    #[serde(default)]
    pub required: bool,
    pub schema: SchemaOrReference,
}

/// A reusable data model, published as `components.schemas.<name>`
///
/// # Example
///
/// ```rust
/// use swaggly_sdk::models::{Model, ModelProperty, SchemaOrReference, SchemaType};
///
/// let model = Model::new("User").with_property(ModelProperty {
///     name: "id".to_string(),
///     required: true,
///     schema: SchemaOrReference::of_type(SchemaType::Integer),
/// });
/// assert_eq!(model.properties.len(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Model {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub properties: Vec<ModelProperty>,
}

impl Model {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            properties: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_property(mut self, property: ModelProperty) -> Self {
        self.properties.push(property);
        self
    }

    /// Names of the properties flagged as required, in declaration order
    pub fn required_property_names(&self) -> Vec<String> {
        self.properties
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name.clone())
            .collect()
    }
}
