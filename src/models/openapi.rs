//! OpenAPI document model
//!
//! The exported/imported document shape. Only the parts the editor
//! produces are modelled; unknown keys are ignored on import.

use super::enums::Method;
use super::route::{Content, Parameter, RequestBody};
use super::schema::SchemaObject;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// OpenAPI file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenApiFormat {
    Yaml,
    Json,
}

impl OpenApiFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OpenApiFormat::Yaml => "yaml",
            OpenApiFormat::Json => "json",
        }
    }

    /// Format implied by a file name's extension, if any
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let lower = file_name.to_lowercase();
        if lower.ends_with(".json") {
            Some(OpenApiFormat::Json)
        } else if lower.ends_with(".yaml") || lower.ends_with(".yml") {
            Some(OpenApiFormat::Yaml)
        } else {
            None
        }
    }
}

impl std::str::FromStr for OpenApiFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(OpenApiFormat::Yaml),
            "json" => Ok(OpenApiFormat::Json),
            _ => Err(format!("Invalid format: {}. Expected: yaml, json", s)),
        }
    }
}

/// Top-level OpenAPI document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OpenApiDocument {
    #[serde(default)]
    pub openapi: String,
    #[serde(default)]
    pub info: Info,
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,
    #[serde(default)]
    pub components: Components,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Info {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Components {
    #[serde(default)]
    pub schemas: IndexMap<String, SchemaObject>,
}

/// Operations available on one path
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PathItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<Operation>,
}

impl PathItem {
    pub fn operation(&self, method: Method) -> Option<&Operation> {
        match method {
            Method::Get => self.get.as_ref(),
            Method::Post => self.post.as_ref(),
            Method::Put => self.put.as_ref(),
            Method::Delete => self.delete.as_ref(),
            Method::Patch => self.patch.as_ref(),
            Method::Options => self.options.as_ref(),
            Method::Head => self.head.as_ref(),
        }
    }

    /// Set the operation for `method`, replacing any existing one
    pub fn set_operation(&mut self, method: Method, operation: Operation) {
        let slot = match method {
            Method::Get => &mut self.get,
            Method::Post => &mut self.post,
            Method::Put => &mut self.put,
            Method::Delete => &mut self.delete,
            Method::Patch => &mut self.patch,
            Method::Options => &mut self.options,
            Method::Head => &mut self.head,
        };
        *slot = Some(operation);
    }

    /// Defined operations in method order
    pub fn operations(&self) -> impl Iterator<Item = (Method, &Operation)> {
        Method::ALL
            .into_iter()
            .filter_map(|m| self.operation(m).map(|op| (m, op)))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,
    #[serde(default)]
    pub responses: IndexMap<String, ResponseObject>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ResponseObject {
    #[serde(default)]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
}
