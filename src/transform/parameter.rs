//! Parameter form transforms

use super::{json_text, non_blank, parse_json_field};
use crate::models::{DefinitionKind, Parameter, ParameterIn, SchemaOrReference, SchemaType};
use crate::notifications::Notify;
use serde::{Deserialize, Serialize};

/// Flat form record for one route parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ParameterForm {
    pub name: String,
    #[serde(rename = "in")]
    pub location: ParameterIn,
    pub description: Option<String>,
    pub required: bool,
    pub deprecated: bool,
    pub allow_empty_value: bool,
    pub schema_definition_type: DefinitionKind,
    pub schema_simple_type: SchemaType,
    pub schema_ref_path: Option<String>,
    pub example_str: Option<String>,
}

pub fn parameter_to_form(parameter: &Parameter) -> ParameterForm {
    let mut form = ParameterForm {
        name: parameter.name.clone(),
        location: parameter.location,
        description: parameter.description.clone(),
        required: parameter.required.unwrap_or(false),
        deprecated: parameter.deprecated.unwrap_or(false),
        allow_empty_value: parameter.allow_empty_value.unwrap_or(false),
        example_str: parameter.example.as_ref().map(json_text),
        ..Default::default()
    };

    match &parameter.schema {
        Some(SchemaOrReference::Reference(reference)) => {
            form.schema_definition_type = DefinitionKind::Reference;
            form.schema_ref_path = Some(reference.reference.clone());
        }
        Some(SchemaOrReference::Schema(schema)) => {
            form.schema_simple_type = schema.schema_type.unwrap_or_default();
        }
        None => {}
    }

    form
}

/// Build a parameter from its form
///
/// Flags are emitted only when set; a reference without a path falls back to
/// the simple type.
pub fn parameter_to_payload(form: &ParameterForm, notifier: &mut dyn Notify) -> Parameter {
    let schema = match form.schema_definition_type {
        DefinitionKind::Reference => non_blank(&form.schema_ref_path)
            .map(SchemaOrReference::reference)
            .unwrap_or_else(|| SchemaOrReference::of_type(form.schema_simple_type)),
        DefinitionKind::Simple => SchemaOrReference::of_type(form.schema_simple_type),
    };

    Parameter {
        name: form.name.trim().to_string(),
        location: form.location,
        description: non_blank(&form.description),
        required: form.required.then_some(true),
        deprecated: form.deprecated.then_some(true),
        allow_empty_value: form.allow_empty_value.then_some(true),
        schema: Some(schema),
        example: parse_json_field(form.example_str.as_deref(), "parameter example", notifier),
        examples: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::Severity;
    use serde_json::json;

    fn sink() -> Vec<(Severity, String)> {
        Vec::new()
    }

    #[test]
    fn test_path_parameter_round_trip() {
        let parameter = Parameter {
            description: Some("User id".to_string()),
            required: Some(true),
            schema: Some(SchemaOrReference::of_type(SchemaType::Integer)),
            example: Some(json!(42)),
            ..Parameter::new("id", ParameterIn::Path)
        };

        let form = parameter_to_form(&parameter);
        assert_eq!(form.schema_simple_type, SchemaType::Integer);
        assert_eq!(form.example_str.as_deref(), Some("42"));
        assert_eq!(parameter_to_payload(&form, &mut sink()), parameter);
    }

    #[test]
    fn test_reference_schema() {
        let parameter = Parameter {
            schema: Some(SchemaOrReference::reference("#/components/schemas/Filter")),
            ..Parameter::new("filter", ParameterIn::Query)
        };
        let form = parameter_to_form(&parameter);
        assert_eq!(form.schema_definition_type, DefinitionKind::Reference);
        assert_eq!(parameter_to_payload(&form, &mut sink()), parameter);
    }

    #[test]
    fn test_defaults() {
        let form = ParameterForm {
            name: " q ".to_string(),
            ..Default::default()
        };
        let parameter = parameter_to_payload(&form, &mut sink());
        assert_eq!(parameter.name, "q");
        assert_eq!(parameter.location, ParameterIn::Query);
        assert_eq!(parameter.required, None);
        assert_eq!(
            parameter.schema,
            Some(SchemaOrReference::of_type(SchemaType::String))
        );
    }

    #[test]
    fn test_empty_reference_falls_back_to_simple_type() {
        let form = ParameterForm {
            name: "x".to_string(),
            schema_definition_type: DefinitionKind::Reference,
            schema_simple_type: SchemaType::Boolean,
            ..Default::default()
        };
        let parameter = parameter_to_payload(&form, &mut sink());
        assert_eq!(
            parameter.schema,
            Some(SchemaOrReference::of_type(SchemaType::Boolean))
        );
    }
}
