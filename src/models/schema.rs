//! Schema model for the SDK
//!
//! Mirrors the subset of the OpenAPI Schema Object the editor works with.
//! A schema position holds either an inline [`SchemaObject`] or a
//! [`ReferenceObject`] pointing at a named model.

use super::enums::{Format, SchemaType};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// Path prefix under which models are published as component schemas
pub const SCHEMA_REF_PREFIX: &str = "#/components/schemas/";

/// A `$ref` to a component schema
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReferenceObject {
    #[serde(rename = "$ref")]
    pub reference: String,
}

impl ReferenceObject {
    /// Build a reference to the model with the given name
    pub fn to_model(name: &str) -> Self {
        Self {
            reference: format!("{}{}", SCHEMA_REF_PREFIX, name),
        }
    }

    /// Name of the referenced model (last `/` segment of the path)
    pub fn model_name(&self) -> &str {
        self.reference
            .rsplit('/')
            .next()
            .unwrap_or(self.reference.as_str())
    }
}

/// Inline schema definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SchemaObject {
    /// Types outside [`SchemaType`] (`null`, `file`, ...) read as untyped;
    /// a type list keeps its first known entry
    #[serde(
        rename = "type",
        default,
        deserialize_with = "known_schema_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub schema_type: Option<SchemaType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,

    // string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    // number / integer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<Number>,

    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,

    // array
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaOrReference>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_items: Option<bool>,

    // object
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, SchemaOrReference>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_properties: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_properties: Option<u64>,
}

fn known_schema_type<'de, D>(deserializer: D) -> Result<Option<SchemaType>, D::Error>
where
    D: Deserializer<'de>,
{
    let known = |value: &Value| value.as_str().and_then(|s| s.parse::<SchemaType>().ok());
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(types)) => types.iter().find_map(known),
        Some(value) => known(&value),
        None => None,
    })
}

impl SchemaObject {
    /// A schema carrying only a type
    pub fn of_type(schema_type: SchemaType) -> Self {
        Self {
            schema_type: Some(schema_type),
            ..Default::default()
        }
    }
}

/// Either an inline schema or a reference to a model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SchemaOrReference {
    Reference(ReferenceObject),
    Schema(Box<SchemaObject>),
}

impl SchemaOrReference {
    pub fn reference(path: impl Into<String>) -> Self {
        SchemaOrReference::Reference(ReferenceObject {
            reference: path.into(),
        })
    }

    pub fn schema(schema: SchemaObject) -> Self {
        SchemaOrReference::Schema(Box::new(schema))
    }

    pub fn of_type(schema_type: SchemaType) -> Self {
        Self::schema(SchemaObject::of_type(schema_type))
    }

    pub fn as_reference(&self) -> Option<&ReferenceObject> {
        match self {
            SchemaOrReference::Reference(r) => Some(r),
            SchemaOrReference::Schema(_) => None,
        }
    }

    pub fn as_schema(&self) -> Option<&SchemaObject> {
        match self {
            SchemaOrReference::Schema(s) => Some(s),
            SchemaOrReference::Reference(_) => None,
        }
    }

    /// Whether this schema points at `model_name`, directly or through
    /// nested `items` / `properties`
    pub fn references_model(&self, model_name: &str) -> bool {
        match self {
            SchemaOrReference::Reference(r) => r.model_name() == model_name,
            SchemaOrReference::Schema(schema) => {
                if let Some(items) = &schema.items
                    && items.references_model(model_name)
                {
                    return true;
                }
                schema
                    .properties
                    .as_ref()
                    .is_some_and(|props| props.values().any(|p| p.references_model(model_name)))
            }
        }
    }
}

impl From<SchemaObject> for SchemaOrReference {
    fn from(schema: SchemaObject) -> Self {
        SchemaOrReference::schema(schema)
    }
}

impl From<ReferenceObject> for SchemaOrReference {
    fn from(reference: ReferenceObject) -> Self {
        SchemaOrReference::Reference(reference)
    }
}
