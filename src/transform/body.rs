//! Request body and response form transforms

use super::{json_text, non_blank, parse_json_field};
use crate::models::{
    Content, DEFAULT_MEDIA_TYPE, DefinitionKind, MediaTypeObject, RequestBody, Response,
    SchemaOrReference, SchemaType,
};
use crate::notifications::Notify;
use serde::{Deserialize, Serialize};

/// Status code offered for a new response
pub const DEFAULT_STATUS_CODE: &str = "200";

/// The single media-type entry a body or response is edited through
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentForm {
    pub media_type: String,
    pub schema_definition_type: DefinitionKind,
    pub schema_simple_type: SchemaType,
    pub schema_ref_path: Option<String>,
    pub example_str: Option<String>,
}

impl Default for ContentForm {
    fn default() -> Self {
        Self {
            media_type: DEFAULT_MEDIA_TYPE.to_string(),
            schema_definition_type: DefinitionKind::Simple,
            schema_simple_type: SchemaType::Object,
            schema_ref_path: None,
            example_str: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RequestBodyForm {
    pub description: Option<String>,
    pub required: bool,
    pub content: ContentForm,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseForm {
    pub status_code: String,
    pub description: String,
    /// Whether a content block is emitted at all
    pub has_content: bool,
    pub content: ContentForm,
}

impl Default for ResponseForm {
    fn default() -> Self {
        Self {
            status_code: DEFAULT_STATUS_CODE.to_string(),
            description: String::new(),
            has_content: true,
            content: ContentForm::default(),
        }
    }
}

/// Populate a content form from the first media type of `content`
fn content_to_form(content: Option<&Content>) -> ContentForm {
    let mut form = ContentForm::default();
    let Some((media_type, media)) = content.and_then(|c| c.first()) else {
        return form;
    };

    if !media_type.trim().is_empty() {
        form.media_type = media_type.clone();
    }
    match &media.schema {
        Some(SchemaOrReference::Reference(reference)) => {
            form.schema_definition_type = DefinitionKind::Reference;
            form.schema_ref_path = Some(reference.reference.clone());
        }
        Some(SchemaOrReference::Schema(schema)) => {
            form.schema_simple_type = schema.schema_type.unwrap_or(SchemaType::Object);
        }
        None => {}
    }
    form.example_str = media.example.as_ref().map(json_text);
    form
}

fn content_to_payload(form: &ContentForm, field: &str, notifier: &mut dyn Notify) -> Content {
    let media_type = match form.media_type.trim() {
        "" => DEFAULT_MEDIA_TYPE.to_string(),
        media_type => media_type.to_string(),
    };

    let schema = match form.schema_definition_type {
        DefinitionKind::Reference => non_blank(&form.schema_ref_path)
            .map(SchemaOrReference::reference)
            .unwrap_or_else(|| SchemaOrReference::of_type(form.schema_simple_type)),
        DefinitionKind::Simple => SchemaOrReference::of_type(form.schema_simple_type),
    };

    let mut content = Content::new();
    content.insert(
        media_type,
        MediaTypeObject {
            schema: Some(schema),
            example: parse_json_field(form.example_str.as_deref(), field, notifier),
        },
    );
    content
}

pub fn request_body_to_form(body: &RequestBody) -> RequestBodyForm {
    RequestBodyForm {
        description: body.description.clone(),
        required: body.required.unwrap_or(false),
        content: content_to_form(Some(&body.content)),
    }
}

pub fn request_body_to_payload(form: &RequestBodyForm, notifier: &mut dyn Notify) -> RequestBody {
    RequestBody {
        description: non_blank(&form.description),
        required: form.required.then_some(true),
        content: content_to_payload(&form.content, "request body example", notifier),
    }
}

pub fn response_to_form(response: &Response) -> ResponseForm {
    ResponseForm {
        status_code: response.status_code.clone(),
        description: response.description.clone(),
        has_content: response.content.as_ref().is_some_and(|c| !c.is_empty()),
        content: content_to_form(response.content.as_ref()),
    }
}

/// Build a response from its form; content is emitted only when `has_content` is set
pub fn response_to_payload(form: &ResponseForm, notifier: &mut dyn Notify) -> Response {
    let status_code = match form.status_code.trim() {
        "" => DEFAULT_STATUS_CODE.to_string(),
        code => code.to_string(),
    };

    Response {
        status_code,
        description: form.description.clone(),
        content: form
            .has_content
            .then(|| content_to_payload(&form.content, "response example", notifier)),
    }
}
