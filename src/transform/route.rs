//! Route form transforms

use super::body::{
    RequestBodyForm, ResponseForm, request_body_to_form, request_body_to_payload,
    response_to_form, response_to_payload,
};
use super::parameter::{ParameterForm, parameter_to_form, parameter_to_payload};
use super::{join_csv, non_blank, split_csv};
use crate::models::{Method, Route};
use crate::notifications::Notify;
use serde::{Deserialize, Serialize};

/// Form record for a whole route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteForm {
    pub name: String,
    pub path: String,
    pub method: Method,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub tags_csv: String,
    pub parameters: Vec<ParameterForm>,
    pub request_body: Option<RequestBodyForm>,
    pub responses: Vec<ResponseForm>,
}

impl Default for RouteForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            path: "/".to_string(),
            method: Method::Get,
            summary: None,
            description: None,
            tags_csv: String::new(),
            parameters: Vec::new(),
            request_body: None,
            responses: Vec::new(),
        }
    }
}

pub fn route_to_form(route: &Route) -> RouteForm {
    RouteForm {
        name: route.name.clone(),
        path: route.path.clone(),
        method: route.method,
        summary: route.summary.clone(),
        description: route.description.clone(),
        tags_csv: route.tags.as_deref().map(join_csv).unwrap_or_default(),
        parameters: route
            .parameters
            .iter()
            .flatten()
            .map(parameter_to_form)
            .collect(),
        request_body: route.request_body.as_ref().map(request_body_to_form),
        responses: route.responses.iter().map(response_to_form).collect(),
    }
}

/// Build a route from its form
///
/// Blank summary and description are dropped, as are empty tag and
/// parameter lists. Name and path are left for the store to validate.
pub fn route_to_payload(form: &RouteForm, notifier: &mut dyn Notify) -> Route {
    let tags = split_csv(&form.tags_csv);
    let parameters: Vec<_> = form
        .parameters
        .iter()
        .map(|p| parameter_to_payload(p, notifier))
        .collect();

    Route {
        name: form.name.clone(),
        path: form.path.clone(),
        method: form.method,
        summary: non_blank(&form.summary),
        description: non_blank(&form.description),
        tags: (!tags.is_empty()).then_some(tags),
        parameters: (!parameters.is_empty()).then_some(parameters),
        request_body: form
            .request_body
            .as_ref()
            .map(|body| request_body_to_payload(body, notifier)),
        responses: form
            .responses
            .iter()
            .map(|r| response_to_payload(r, notifier))
            .collect(),
    }
}
