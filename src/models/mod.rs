//! Models module for the SDK
//!
//! Defines the editable document (models and routes), the schema union they
//! share, and the OpenAPI document shape used for import/export.

pub mod document;
pub mod enums;
pub mod model;
pub mod openapi;
pub mod route;
pub mod schema;

pub use document::Document;
pub use enums::*;
pub use model::{Model, ModelProperty};
pub use openapi::{
    Components, Info, OpenApiDocument, OpenApiFormat, Operation, PathItem, ResponseObject,
};
pub use route::{Content, ExampleObject, MediaTypeObject, Parameter, RequestBody, Response, Route};
pub use schema::{ReferenceObject, SCHEMA_REF_PREFIX, SchemaObject, SchemaOrReference};
