//! Model reference validation
//!
//! A model cannot be removed while a route still points at it from a
//! parameter schema, a request body media type or a response media type.
//! Model-to-model references inside `components.schemas` are not checked.

use crate::models::{Content, Route, SchemaOrReference};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where in a route a model is referenced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "location", rename_all = "camelCase")]
pub enum ModelUsage {
    Parameter { name: String },
    RequestBody,
    Response { status_code: String },
}

impl fmt::Display for ModelUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelUsage::Parameter { name } => write!(f, "parameter \"{}\"", name),
            ModelUsage::RequestBody => f.write_str("request body"),
            ModelUsage::Response { status_code } => write!(f, "response \"{}\"", status_code),
        }
    }
}

/// A route location that blocks deleting a model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "camelCase")]
#[error("Model is in use by {usage} in route \"{route}\".")]
pub struct ModelInUse {
    pub model: String,
    /// `METHOD /path` of the blocking route
    pub route: String,
    pub usage: ModelUsage,
}

fn content_references(content: &Content, model_name: &str) -> bool {
    Route::content_schemas(content).any(|schema| schema.references_model(model_name))
}

fn schema_references(schema: Option<&SchemaOrReference>, model_name: &str) -> bool {
    schema.is_some_and(|s| s.references_model(model_name))
}

/// Find the first route location referencing `model_name`
///
/// Routes are scanned in order; within a route parameters come first, then the
/// request body, then responses.
pub fn find_model_usage(routes: &[Route], model_name: &str) -> Option<ModelInUse> {
    let in_use = |route: &Route, usage: ModelUsage| ModelInUse {
        model: model_name.to_string(),
        route: route.label(),
        usage,
    };

    for route in routes {
        if let Some(parameters) = &route.parameters
            && let Some(param) = parameters
                .iter()
                .find(|p| schema_references(p.schema.as_ref(), model_name))
        {
            return Some(in_use(
                route,
                ModelUsage::Parameter {
                    name: param.name.clone(),
                },
            ));
        }

        if let Some(body) = &route.request_body
            && content_references(&body.content, model_name)
        {
            return Some(in_use(route, ModelUsage::RequestBody));
        }

        for response in &route.responses {
            if let Some(content) = &response.content
                && content_references(content, model_name)
            {
                return Some(in_use(
                    route,
                    ModelUsage::Response {
                        status_code: response.status_code.clone(),
                    },
                ));
            }
        }
    }

    None
}
