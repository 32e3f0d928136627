//! Property schema and model form transforms

use super::{
    enum_to_csv, join_csv, json_text, non_blank, parse_enum_csv, parse_json_field, split_csv,
};
use crate::models::{
    DefinitionKind, Format, Model, ModelProperty, ObjectDefinitionKind, SchemaObject,
    SchemaOrReference, SchemaType,
};
use crate::notifications::Notify;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Flat form record for one property schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertySchemaForm {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    pub format: Option<Format>,
    pub description: Option<String>,
    pub example_str: Option<String>,
    pub default_str: Option<String>,
    pub enum_csv: Option<String>,
    pub nullable: bool,
    pub deprecated: bool,

    pub min_length: Option<u64>,
    pub max_length: Option<u64>,
    pub pattern: Option<String>,

    pub minimum: Option<Number>,
    pub maximum: Option<Number>,

    pub items_definition_type: DefinitionKind,
    pub items_simple_type: Option<SchemaType>,
    pub items_ref_path: Option<String>,
    pub min_items: Option<u64>,
    pub max_items: Option<u64>,
    pub unique_items: bool,

    pub object_definition_type: ObjectDefinitionKind,
    pub object_ref_path: Option<String>,
    pub object_properties_json: Option<String>,
    pub object_required_csv: Option<String>,
    pub min_properties: Option<u64>,
    pub max_properties: Option<u64>,
}

impl Default for PropertySchemaForm {
    fn default() -> Self {
        Self {
            schema_type: SchemaType::String,
            format: None,
            description: None,
            example_str: None,
            default_str: None,
            enum_csv: None,
            nullable: false,
            deprecated: false,
            min_length: None,
            max_length: None,
            pattern: None,
            minimum: None,
            maximum: None,
            items_definition_type: DefinitionKind::Simple,
            items_simple_type: None,
            items_ref_path: None,
            min_items: None,
            max_items: None,
            unique_items: false,
            object_definition_type: ObjectDefinitionKind::Inline,
            object_ref_path: None,
            object_properties_json: None,
            object_required_csv: None,
            min_properties: None,
            max_properties: None,
        }
    }
}

/// Form record for one model property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PropertyForm {
    pub name: String,
    pub required: bool,
    pub schema: PropertySchemaForm,
}

/// Form record for a whole model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ModelForm {
    pub name: String,
    pub description: Option<String>,
    pub properties: Vec<PropertyForm>,
}

/// Populate a property form from a schema
///
/// A `$ref` becomes an object-typed form with the reference discriminator;
/// every other field keeps its default.
pub fn schema_to_form(schema: &SchemaOrReference) -> PropertySchemaForm {
    let mut form = PropertySchemaForm::default();

    let schema = match schema {
        SchemaOrReference::Reference(reference) => {
            form.schema_type = SchemaType::Object;
            form.object_definition_type = ObjectDefinitionKind::Reference;
            form.object_ref_path = Some(reference.reference.clone());
            return form;
        }
        SchemaOrReference::Schema(schema) => schema,
    };

    form.schema_type = schema.schema_type.unwrap_or_default();
    form.format = schema.format.clone();
    form.description = schema.description.clone();
    form.example_str = schema.example.as_ref().map(json_text);
    form.default_str = schema.default.as_ref().map(json_text);
    form.enum_csv = schema.enum_values.as_deref().map(enum_to_csv);
    form.nullable = schema.nullable.unwrap_or(false);
    form.deprecated = schema.deprecated.unwrap_or(false);

    match schema.schema_type {
        Some(SchemaType::String) => {
            form.min_length = schema.min_length;
            form.max_length = schema.max_length;
            form.pattern = schema.pattern.clone();
        }
        Some(SchemaType::Number) | Some(SchemaType::Integer) => {
            form.minimum = schema.minimum.clone();
            form.maximum = schema.maximum.clone();
        }
        Some(SchemaType::Array) => {
            form.min_items = schema.min_items;
            form.max_items = schema.max_items;
            form.unique_items = schema.unique_items.unwrap_or(false);
            match schema.items.as_deref() {
                Some(SchemaOrReference::Reference(reference)) => {
                    form.items_definition_type = DefinitionKind::Reference;
                    form.items_ref_path = Some(reference.reference.clone());
                }
                Some(SchemaOrReference::Schema(items)) => {
                    form.items_definition_type = DefinitionKind::Simple;
                    form.items_simple_type = items.schema_type;
                }
                None => {
                    form.items_definition_type = DefinitionKind::Simple;
                    form.items_simple_type = Some(SchemaType::String);
                }
            }
        }
        Some(SchemaType::Object) => {
            form.object_definition_type = ObjectDefinitionKind::Inline;
            form.object_properties_json = schema
                .properties
                .as_ref()
                .and_then(|props| serde_json::to_string_pretty(props).ok());
            form.object_required_csv = schema.required.as_deref().map(join_csv);
            form.min_properties = schema.min_properties;
            form.max_properties = schema.max_properties;
        }
        Some(SchemaType::Boolean) | None => {}
    }

    form
}

/// Rebuild a schema from a property form
///
/// JSON-text fields that fail to parse are reported to `notifier` and left out.
pub fn schema_from_form(form: &PropertySchemaForm, notifier: &mut dyn Notify) -> SchemaOrReference {
    if form.schema_type == SchemaType::Object
        && form.object_definition_type == ObjectDefinitionKind::Reference
        && let Some(path) = non_blank(&form.object_ref_path)
    {
        return SchemaOrReference::reference(path);
    }

    let mut schema = SchemaObject::of_type(form.schema_type);
    schema.format = form.format.clone();
    schema.description = non_blank(&form.description);
    schema.example = parse_json_field(form.example_str.as_deref(), "example", notifier);
    schema.default = parse_json_field(form.default_str.as_deref(), "default", notifier);
    schema.enum_values = form.enum_csv.as_deref().and_then(parse_enum_csv);
    schema.nullable = form.nullable.then_some(true);
    schema.deprecated = form.deprecated.then_some(true);

    match form.schema_type {
        SchemaType::String => {
            schema.min_length = form.min_length;
            schema.max_length = form.max_length;
            schema.pattern = non_blank(&form.pattern);
        }
        SchemaType::Number | SchemaType::Integer => {
            schema.minimum = form.minimum.clone();
            schema.maximum = form.maximum.clone();
        }
        SchemaType::Array => {
            schema.items = match form.items_definition_type {
                DefinitionKind::Simple => form.items_simple_type.map(SchemaOrReference::of_type),
                DefinitionKind::Reference => {
                    non_blank(&form.items_ref_path).map(SchemaOrReference::reference)
                }
            }
            .map(Box::new);
            schema.min_items = form.min_items;
            schema.max_items = form.max_items;
            schema.unique_items = form.unique_items.then_some(true);
        }
        SchemaType::Object => {
            schema.properties = parse_json_field::<IndexMap<String, SchemaOrReference>>(
                form.object_properties_json.as_deref(),
                "object properties",
                notifier,
            );
            schema.required = form
                .object_required_csv
                .as_deref()
                .map(split_csv)
                .filter(|required| !required.is_empty());
            schema.min_properties = form.min_properties;
            schema.max_properties = form.max_properties;
        }
        SchemaType::Boolean => {}
    }

    SchemaOrReference::schema(schema)
}

pub fn property_to_form(property: &ModelProperty) -> PropertyForm {
    PropertyForm {
        name: property.name.clone(),
        required: property.required,
        schema: schema_to_form(&property.schema),
    }
}

/// Build a model property from its form; the name is trimmed
pub fn property_to_payload(form: &PropertyForm, notifier: &mut dyn Notify) -> ModelProperty {
    ModelProperty {
        name: form.name.trim().to_string(),
        required: form.required,
        schema: schema_from_form(&form.schema, notifier),
    }
}

pub fn model_to_form(model: &Model) -> ModelForm {
    ModelForm {
        name: model.name.clone(),
        description: model.description.clone(),
        properties: model.properties.iter().map(property_to_form).collect(),
    }
}

/// Build a model from its form
///
/// The name is passed through untouched; the store trims and validates it.
pub fn model_to_payload(form: &ModelForm, notifier: &mut dyn Notify) -> Model {
    Model {
        name: form.name.clone(),
        description: non_blank(&form.description),
        properties: form
            .properties
            .iter()
            .map(|p| property_to_payload(p, notifier))
            .collect(),
    }
}
