//! OpenAPI export/import tests

use std::collections::BTreeSet;
use std::sync::Arc;

use serde_json::Number;
use swaggly_sdk::config::SwagglyConfig;
use swaggly_sdk::export::OpenApiExporter;
use swaggly_sdk::import::{ImportError, OpenApiImporter};
use swaggly_sdk::models::{
    Content, Document, Format, MediaTypeObject, Method, Model, ModelProperty, OpenApiFormat,
    Parameter, ParameterIn, RequestBody, Response, Route, SchemaObject, SchemaOrReference,
    SchemaType,
};
use swaggly_sdk::notifications::Severity;
use swaggly_sdk::storage::MemoryStorageBackend;
use swaggly_sdk::store::DocumentStore;
use tokio::runtime::Runtime;

fn runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

fn json_content(schema: SchemaOrReference) -> Content {
    let mut content = Content::new();
    content.insert(
        "application/json".to_string(),
        MediaTypeObject {
            schema: Some(schema),
            example: None,
        },
    );
    content
}

fn sample_document() -> Document {
    let user = Model::new("User")
        .with_description("A registered user")
        .with_property(ModelProperty {
            name: "id".to_string(),
            required: true,
            schema: SchemaOrReference::schema(SchemaObject {
                schema_type: Some(SchemaType::Integer),
                format: Some(Format::Int64),
                minimum: Some(Number::from(1)),
                ..Default::default()
            }),
        })
        .with_property(ModelProperty {
            name: "email".to_string(),
            required: true,
            schema: SchemaOrReference::schema(SchemaObject {
                schema_type: Some(SchemaType::String),
                format: Some(Format::Other("email".to_string())),
                ..Default::default()
            }),
        })
        .with_property(ModelProperty {
            name: "tags".to_string(),
            required: false,
            schema: SchemaOrReference::schema(SchemaObject {
                schema_type: Some(SchemaType::Array),
                items: Some(Box::new(SchemaOrReference::of_type(SchemaType::String))),
                ..Default::default()
            }),
        });
    let error = Model::new("Error").with_property(ModelProperty {
        name: "message".to_string(),
        required: false,
        schema: SchemaOrReference::of_type(SchemaType::String),
    });

    let user_ref = SchemaOrReference::reference("#/components/schemas/User");
    let routes = vec![
        Route {
            summary: Some("Get user".to_string()),
            tags: Some(vec!["users".to_string()]),
            parameters: Some(vec![Parameter {
                required: Some(true),
                schema: Some(SchemaOrReference::of_type(SchemaType::Integer)),
                ..Parameter::new("id", ParameterIn::Path)
            }]),
            responses: vec![
                Response {
                    status_code: "200".to_string(),
                    description: "The user".to_string(),
                    content: Some(json_content(user_ref.clone())),
                },
                Response {
                    status_code: "404".to_string(),
                    description: "Not found".to_string(),
                    content: Some(json_content(SchemaOrReference::reference(
                        "#/components/schemas/Error",
                    ))),
                },
            ],
            ..Route::new("getUser", "/users/{id}", Method::Get)
        },
        Route {
            request_body: Some(RequestBody {
                description: None,
                required: Some(true),
                content: json_content(user_ref),
            }),
            responses: vec![Response {
                status_code: "201".to_string(),
                description: "Created".to_string(),
                content: None,
            }],
            ..Route::new("createUser", "/users", Method::Post)
        },
        Route {
            responses: vec![Response {
                status_code: "204".to_string(),
                description: "Deleted".to_string(),
                content: None,
            }],
            ..Route::new("deleteUser", "/users/{id}", Method::Delete)
        },
    ];

    Document {
        models: vec![user, error],
        routes,
    }
}

fn route_keys(document: &Document) -> BTreeSet<(String, String, String)> {
    document
        .routes
        .iter()
        .flat_map(|route| {
            route
                .responses
                .iter()
                .map(|r| (route.path.clone(), route.method.to_string(), r.status_code.clone()))
        })
        .collect()
}

fn model_shapes(document: &Document) -> BTreeSet<(String, String, bool)> {
    document
        .models
        .iter()
        .flat_map(|model| {
            model
                .properties
                .iter()
                .map(|p| (model.name.clone(), p.name.clone(), p.required))
        })
        .collect()
}

fn assert_round_trip(format: OpenApiFormat, file_name: &str) {
    let original = sample_document();
    let content = OpenApiExporter::new().export(&original, format).unwrap();
    let imported = OpenApiImporter::new().import(file_name, &content).unwrap();

    let names = |d: &Document| d.models.iter().map(|m| m.name.clone()).collect::<BTreeSet<_>>();
    assert_eq!(names(&imported), names(&original));
    assert_eq!(model_shapes(&imported), model_shapes(&original));
    assert_eq!(route_keys(&imported), route_keys(&original));

    // Schemas survive unchanged
    let user = imported.models.iter().find(|m| m.name == "User").unwrap();
    assert_eq!(user.properties, original.models[0].properties);
    assert_eq!(user.description.as_deref(), Some("A registered user"));

    // Imported routes are named after their summary, or METHOD /path
    let mut route_names: Vec<_> = imported.routes.iter().map(|r| r.name.as_str()).collect();
    route_names.sort_unstable();
    assert_eq!(
        route_names,
        vec!["DELETE /users/{id}", "Get user", "POST /users"]
    );
}

#[test]
fn test_yaml_round_trip() {
    assert_round_trip(OpenApiFormat::Yaml, "swagger.yaml");
}

#[test]
fn test_json_round_trip() {
    assert_round_trip(OpenApiFormat::Json, "swagger.json");
}

#[test]
fn test_export_is_stable_across_import() {
    let exporter = OpenApiExporter::new();
    let importer = OpenApiImporter::new();

    let first = exporter.build(&sample_document());
    let reimported = importer.to_document(&first);
    let second = exporter.build(&reimported);
    assert_eq!(first.paths, second.paths);
    assert_eq!(first.components, second.components);
}

#[test]
fn test_import_into_replaces_store() {
    let rt = runtime();
    rt.block_on(async {
        let backend = Arc::new(MemoryStorageBackend::new());
        let mut messages: Vec<(Severity, String)> = Vec::new();
        let mut store =
            DocumentStore::open(backend.clone(), &SwagglyConfig::default(), &mut messages)
                .await
                .unwrap();
        store.add_model(Model::new("Stale")).await.unwrap();

        let yaml = OpenApiExporter::new()
            .export(&sample_document(), OpenApiFormat::Yaml)
            .unwrap();
        OpenApiImporter::new()
            .import_into(&mut store, "swagger.yml", &yaml, &mut messages)
            .await
            .unwrap();

        assert!(store.model("Stale").is_none());
        assert_eq!(store.models().len(), 2);
        assert_eq!(store.routes().len(), 3);
        assert_eq!(
            messages,
            vec![(
                Severity::Success,
                "Swagger file imported successfully.".to_string()
            )]
        );

        let persisted: Document =
            serde_json::from_str(&backend.snapshot("swagglyOpenApiData").unwrap()).unwrap();
        assert_eq!(&persisted, store.document());
    });
}

#[test]
fn test_malformed_import_leaves_store_unchanged() {
    let rt = runtime();
    rt.block_on(async {
        let backend = Arc::new(MemoryStorageBackend::new());
        let mut messages: Vec<(Severity, String)> = Vec::new();
        let mut store = DocumentStore::open(backend, &SwagglyConfig::default(), &mut messages)
            .await
            .unwrap();
        store.add_model(Model::new("User")).await.unwrap();
        let before = store.document().clone();

        let importer = OpenApiImporter::new();
        for (file_name, content) in [
            ("broken.json", "{ \"openapi\": "),
            ("broken.yaml", "paths:\n  /users: [unclosed\n"),
        ] {
            let result = importer
                .import_into(&mut store, file_name, content, &mut messages)
                .await;
            assert!(matches!(result, Err(ImportError::ParseError(_))));
        }

        assert_eq!(store.document(), &before);
        assert_eq!(messages.len(), 2);
        for (severity, message) in &messages {
            assert_eq!(*severity, Severity::Error);
            assert!(message.starts_with("Error parsing Swagger file: "));
        }
    });
}

#[test]
fn test_import_renames_routes_sharing_a_summary() {
    let rt = runtime();
    rt.block_on(async {
        let mut messages: Vec<(Severity, String)> = Vec::new();
        let mut store = DocumentStore::open(
            MemoryStorageBackend::new(),
            &SwagglyConfig::default(),
            &mut messages,
        )
        .await
        .unwrap();

        let yaml = r#"
openapi: 3.0.0
paths:
  /a:
    get:
      summary: Get item
      responses: {}
  /b:
    get:
      summary: Get item
      responses: {}
"#;
        OpenApiImporter::new()
            .import_into(&mut store, "items.yaml", yaml, &mut messages)
            .await
            .unwrap();

        let names: Vec<_> = store.routes().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Get item", "Get item (2)"]);
        assert_eq!(store.route("Get item (2)").unwrap().path, "/b");
        assert_eq!(
            messages,
            vec![
                (
                    Severity::Warning,
                    "Route \"Get item\" already exists, imported as \"Get item (2)\"".to_string()
                ),
                (
                    Severity::Success,
                    "Swagger file imported successfully.".to_string()
                ),
            ]
        );

        assert!(store.delete_route("Get item").await.unwrap());
        assert_eq!(store.routes().len(), 1);
        assert_eq!(store.routes()[0].path, "/b");
    });
}

#[test]
fn test_import_tolerates_unknown_schema_types() {
    let yaml = r#"
openapi: 3.0.0
paths: {}
components:
  schemas:
    Upload:
      type: object
      properties:
        data:
          type: file
        note:
          type: [string, "null"]
        size:
          type: integer
          minimum: 1
"#;
    let document = OpenApiImporter::new().import("upload.yaml", yaml).unwrap();
    let upload = &document.models[0];
    let types: Vec<_> = upload
        .properties
        .iter()
        .map(|p| p.schema.as_schema().unwrap().schema_type)
        .collect();
    assert_eq!(types, vec![None, Some(SchemaType::String), Some(SchemaType::Integer)]);

    let exported = OpenApiExporter::new()
        .export(&document, OpenApiFormat::Yaml)
        .unwrap();
    assert!(exported.contains("minimum: 1\n"));
    assert!(!exported.contains("minimum: 1.0"));
}
