//! OpenAPI importer
//!
//! Parses OpenAPI YAML or JSON into an [`OpenApiDocument`] and converts it
//! into an editable [`Document`]. Only the parts the editor understands are
//! read: component schemas and the seven supported operations of each path.

use crate::import::{IMPORT_SUCCESS_MESSAGE, ImportError};
use crate::models::{
    Document, Model, ModelProperty, OpenApiDocument, OpenApiFormat, Response, Route,
};
use crate::notifications::{Notify, Severity};
use crate::storage::StorageBackend;
use crate::store::DocumentStore;
use crate::validation::dedupe_route_names;
use tracing::{info, warn};

/// OpenAPI Importer
#[derive(Debug, Default)]
pub struct OpenApiImporter;

impl OpenApiImporter {
    pub fn new() -> Self {
        Self
    }

    /// Detect format (YAML or JSON) from content
    ///
    /// Content that parses as JSON is JSON; everything else is treated as YAML.
    pub fn detect_format(&self, content: &str) -> OpenApiFormat {
        if serde_json::from_str::<serde_json::Value>(content).is_ok() {
            OpenApiFormat::Json
        } else {
            OpenApiFormat::Yaml
        }
    }

    /// Pick the format for an uploaded file
    ///
    /// `.json` means JSON and `.yaml`/`.yml` mean YAML; any other name falls
    /// back to [`detect_format`](Self::detect_format).
    pub fn format_for_file(&self, file_name: &str, content: &str) -> OpenApiFormat {
        OpenApiFormat::from_file_name(file_name).unwrap_or_else(|| self.detect_format(content))
    }

    /// Parse OpenAPI content
    pub fn parse(
        &self,
        content: &str,
        format: OpenApiFormat,
    ) -> Result<OpenApiDocument, ImportError> {
        let openapi = match format {
            OpenApiFormat::Json => serde_json::from_str(content)?,
            OpenApiFormat::Yaml => serde_yaml::from_str(content)?,
        };
        Ok(openapi)
    }

    /// Convert a parsed OpenAPI document into an editable document
    ///
    /// Route names come from the operation summary, or `METHOD /path` when
    /// there is none. Names are not deduplicated here.
    ///
    /// # Example
    ///
    /// ```rust
    /// use swaggly_sdk::import::OpenApiImporter;
    /// use swaggly_sdk::models::OpenApiFormat;
    ///
    /// let importer = OpenApiImporter::new();
    /// let yaml = r#"
    /// openapi: 3.0.0
    /// paths:
    ///   /users:
    ///     get:
    ///       responses:
    ///         "200":
    ///           description: OK
    /// "#;
    /// let openapi = importer.parse(yaml, OpenApiFormat::Yaml).unwrap();
    /// let document = importer.to_document(&openapi);
    /// assert_eq!(document.routes[0].name, "GET /users");
    /// ```
    pub fn to_document(&self, openapi: &OpenApiDocument) -> Document {
        let models = openapi
            .components
            .schemas
            .iter()
            .map(|(name, schema)| {
                let required = schema.required.as_deref().unwrap_or_default();
                Model {
                    name: name.clone(),
                    description: Some(schema.description.clone().unwrap_or_default()),
                    properties: schema
                        .properties
                        .iter()
                        .flatten()
                        .map(|(prop_name, prop_schema)| ModelProperty {
                            name: prop_name.clone(),
                            required: required.contains(prop_name),
                            schema: prop_schema.clone(),
                        })
                        .collect(),
                }
            })
            .collect();

        let mut routes = Vec::new();
        for (path, item) in &openapi.paths {
            for (method, operation) in item.operations() {
                let mut route = Route::new("", path.clone(), method);
                let label = route.label();
                route.name = operation
                    .summary
                    .as_deref()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map_or(label, str::to_string);
                route.summary = Some(operation.summary.clone().unwrap_or_default());
                route.description = Some(operation.description.clone().unwrap_or_default());
                route.tags = Some(operation.tags.clone().unwrap_or_default());
                route.parameters = Some(operation.parameters.clone().unwrap_or_default());
                route.request_body = operation.request_body.clone();
                route.responses = operation
                    .responses
                    .iter()
                    .map(|(status_code, response)| Response {
                        status_code: status_code.clone(),
                        description: response.description.clone(),
                        content: response.content.clone(),
                    })
                    .collect();
                routes.push(route);
            }
        }

        Document { models, routes }
    }

    /// Parse a file's content and convert it
    pub fn import(&self, file_name: &str, content: &str) -> Result<Document, ImportError> {
        let format = self.format_for_file(file_name, content);
        let openapi = self.parse(content, format)?;
        Ok(self.to_document(&openapi))
    }

    /// Import a file into `store`, replacing its document
    ///
    /// Routes sharing a name are renamed with a ` (n)` suffix and a warning is
    /// raised for each. On failure the store is left unchanged. Either way the
    /// outcome is reported to `notifier`.
    pub async fn import_into<B: StorageBackend>(
        &self,
        store: &mut DocumentStore<B>,
        file_name: &str,
        content: &str,
        notifier: &mut dyn Notify,
    ) -> Result<(), ImportError> {
        let result = async {
            let mut document = self.import(file_name, content)?;
            let renamed = dedupe_route_names(&mut document);
            let counts = (document.models.len(), document.routes.len());
            store.replace_document(document).await?;
            Ok::<_, ImportError>((counts, renamed))
        }
        .await;

        match result {
            Ok(((models, routes), renamed)) => {
                info!(
                    "Imported '{}': {} models, {} routes",
                    file_name, models, routes
                );
                for route in renamed {
                    warn!("Renamed duplicate route '{}' to '{}'", route.from, route.to);
                    notifier.notify(
                        Severity::Warning,
                        format!(
                            "Route \"{}\" already exists, imported as \"{}\"",
                            route.from, route.to
                        ),
                    );
                }
                notifier.notify(Severity::Success, IMPORT_SUCCESS_MESSAGE.to_string());
                Ok(())
            }
            Err(e) => {
                warn!("Failed to import '{}': {}", file_name, e);
                notifier.notify(
                    Severity::Error,
                    format!("Error parsing Swagger file: {}", e),
                );
                Err(e)
            }
        }
    }
}
