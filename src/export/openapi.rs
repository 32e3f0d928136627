//! OpenAPI exporter
//!
//! Builds an OpenAPI 3 document from the editable document: every model is
//! published under `components.schemas`, every route becomes an operation on
//! its path.

use crate::config::ExportConfig;
use crate::export::ExportError;
use crate::models::{
    Components, Document, Info, Model, OpenApiDocument, OpenApiFormat, Operation, PathItem,
    ResponseObject, Route, SchemaObject, SchemaType,
};
use indexmap::IndexMap;
use tracing::{debug, info};

/// OpenAPI Exporter
#[derive(Debug, Clone, Default)]
pub struct OpenApiExporter {
    config: ExportConfig,
}

impl OpenApiExporter {
    /// Create an exporter with the default info block
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an exporter with a custom info block
    pub fn with_config(config: ExportConfig) -> Self {
        Self { config }
    }

    /// File name offered for the exported document
    pub fn file_name(&self) -> &str {
        &self.config.file_name
    }

    /// Build the OpenAPI document
    ///
    /// When two routes share a path and method the later one wins.
    ///
    /// # Example
    ///
    /// ```rust
    /// use swaggly_sdk::export::OpenApiExporter;
    /// use swaggly_sdk::models::{Document, Method, Model, Route};
    ///
    /// let document = Document {
    ///     models: vec![Model::new("User")],
    ///     routes: vec![Route::new("listUsers", "/users", Method::Get)],
    /// };
    /// let openapi = OpenApiExporter::new().build(&document);
    /// assert_eq!(openapi.openapi, "3.0.0");
    /// assert!(openapi.components.schemas.contains_key("User"));
    /// assert!(openapi.paths["/users"].get.is_some());
    /// ```
    pub fn build(&self, document: &Document) -> OpenApiDocument {
        let schemas = document
            .models
            .iter()
            .map(|model| (model.name.clone(), model_schema(model)))
            .collect();

        let mut paths: IndexMap<String, PathItem> = IndexMap::new();
        for route in &document.routes {
            let item = paths.entry(route.path.clone()).or_default();
            if item.operation(route.method).is_some() {
                debug!("Route '{}' replaces an earlier {}", route.name, route.label());
            }
            item.set_operation(route.method, route_operation(route));
        }

        OpenApiDocument {
            openapi: self.config.openapi_version.clone(),
            info: Info {
                title: self.config.title.clone(),
                version: self.config.version.clone(),
                description: Some(self.config.description.clone()),
            },
            paths,
            components: Components { schemas },
        }
    }

    pub fn to_yaml(&self, openapi: &OpenApiDocument) -> Result<String, ExportError> {
        Ok(serde_yaml::to_string(openapi)?)
    }

    pub fn to_json(&self, openapi: &OpenApiDocument) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(openapi)?)
    }

    /// Build and serialize the document in the requested format
    pub fn export(
        &self,
        document: &Document,
        format: OpenApiFormat,
    ) -> Result<String, ExportError> {
        let openapi = self.build(document);
        let content = match format {
            OpenApiFormat::Yaml => self.to_yaml(&openapi)?,
            OpenApiFormat::Json => self.to_json(&openapi)?,
        };
        info!(
            "Exported {} schemas and {} paths as {}",
            openapi.components.schemas.len(),
            openapi.paths.len(),
            format.extension()
        );
        Ok(content)
    }
}

/// Object schema for a model; `required` is listed only when non-empty
fn model_schema(model: &Model) -> SchemaObject {
    let required = model.required_property_names();
    SchemaObject {
        schema_type: Some(SchemaType::Object),
        description: model.description.clone().filter(|d| !d.is_empty()),
        properties: Some(
            model
                .properties
                .iter()
                .map(|p| (p.name.clone(), p.schema.clone()))
                .collect(),
        ),
        required: (!required.is_empty()).then_some(required),
        ..Default::default()
    }
}

fn route_operation(route: &Route) -> Operation {
    Operation {
        summary: route.summary.clone().filter(|s| !s.is_empty()),
        description: route.description.clone().filter(|d| !d.is_empty()),
        tags: route.tags.clone().filter(|t| !t.is_empty()),
        parameters: route.parameters.clone().filter(|p| !p.is_empty()),
        request_body: route.request_body.clone(),
        responses: route
            .responses
            .iter()
            .map(|r| {
                (
                    r.status_code.clone(),
                    ResponseObject {
                        description: r.description.clone(),
                        content: r.content.clone(),
                    },
                )
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Method, ModelProperty, Response, SchemaOrReference};

    fn sample_document() -> Document {
        Document {
            models: vec![
                Model::new("User")
                    .with_property(ModelProperty {
                        name: "id".to_string(),
                        required: true,
                        schema: SchemaOrReference::of_type(SchemaType::Integer),
                    })
                    .with_property(ModelProperty {
                        name: "nickname".to_string(),
                        required: false,
                        schema: SchemaOrReference::of_type(SchemaType::String),
                    }),
                Model::new("Empty"),
            ],
            routes: vec![Route {
                summary: Some(String::new()),
                tags: Some(Vec::new()),
                responses: vec![Response {
                    status_code: "200".to_string(),
                    description: "OK".to_string(),
                    content: None,
                }],
                ..Route::new("listUsers", "/users", Method::Get)
            }],
        }
    }

    #[test]
    fn test_model_schemas() {
        let openapi = OpenApiExporter::new().build(&sample_document());

        let user = &openapi.components.schemas["User"];
        assert_eq!(user.schema_type, Some(SchemaType::Object));
        assert_eq!(user.required, Some(vec!["id".to_string()]));
        assert_eq!(user.properties.as_ref().map(|p| p.len()), Some(2));

        let empty = &openapi.components.schemas["Empty"];
        assert_eq!(empty.properties.as_ref().map(|p| p.len()), Some(0));
        assert!(empty.required.is_none());
    }

    #[test]
    fn test_empty_operation_fields_are_omitted() {
        let openapi = OpenApiExporter::new().build(&sample_document());
        let operation = openapi.paths["/users"].get.as_ref().unwrap();
        assert!(operation.summary.is_none());
        assert!(operation.tags.is_none());
        assert_eq!(operation.responses["200"].description, "OK");
    }

    #[test]
    fn test_same_path_and_method_last_wins() {
        let mut document = sample_document();
        document.routes.push(Route {
            summary: Some("second".to_string()),
            ..Route::new("listUsersAgain", "/users", Method::Get)
        });
        document
            .routes
            .push(Route::new("createUser", "/users", Method::Post));

        let openapi = OpenApiExporter::new().build(&document);
        assert_eq!(openapi.paths.len(), 1);
        let item = &openapi.paths["/users"];
        assert_eq!(
            item.get.as_ref().and_then(|op| op.summary.as_deref()),
            Some("second")
        );
        assert!(item.post.is_some());
    }

    #[test]
    fn test_info_block_from_config() {
        let exporter = OpenApiExporter::with_config(ExportConfig {
            title: "Pet Store".to_string(),
            ..Default::default()
        });
        let yaml = exporter
            .export(&Document::default(), OpenApiFormat::Yaml)
            .unwrap();
        assert!(yaml.contains("3.0.0"));
        assert!(yaml.contains("title: Pet Store"));
        assert!(yaml.contains("description: API documentation generated with Swaggly"));
        assert_eq!(exporter.file_name(), "swagger.yaml");
    }

    #[test]
    fn test_json_output() {
        let json = OpenApiExporter::new()
            .export(&sample_document(), OpenApiFormat::Json)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["info"]["title"], "Swaggly API");
        assert_eq!(
            value["components"]["schemas"]["User"]["properties"]["id"]["type"],
            "integer"
        );
    }
}
