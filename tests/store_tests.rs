//! Document store tests

use std::sync::Arc;

use async_trait::async_trait;
use swaggly_sdk::config::SwagglyConfig;
use swaggly_sdk::models::{
    Content, Document, MediaTypeObject, Method, Model, ModelProperty, Parameter, ParameterIn,
    RequestBody, Response, Route, SchemaObject, SchemaOrReference, SchemaType,
};
use swaggly_sdk::notifications::Severity;
use swaggly_sdk::storage::{MemoryStorageBackend, StorageBackend, StorageError};
use swaggly_sdk::store::{DocumentStore, StoreError};
use swaggly_sdk::validation::{ModelUsage, ValidationError};
use tokio::runtime::Runtime;

const KEY: &str = "swagglyOpenApiData";

fn runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

async fn open_empty() -> (DocumentStore<Arc<MemoryStorageBackend>>, Arc<MemoryStorageBackend>) {
    let backend = Arc::new(MemoryStorageBackend::new());
    let mut messages: Vec<(Severity, String)> = Vec::new();
    let store = DocumentStore::open(backend.clone(), &SwagglyConfig::default(), &mut messages)
        .await
        .unwrap();
    assert!(messages.is_empty());
    (store, backend)
}

fn user_ref() -> SchemaOrReference {
    SchemaOrReference::reference("#/components/schemas/User")
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

#[test]
fn test_blank_model_name_rejected() {
    let rt = runtime();
    rt.block_on(async {
        let (mut store, backend) = open_empty().await;

        for name in ["", "   ", "\t"] {
            let result = store.add_model(Model::new(name)).await;
            assert!(matches!(
                result,
                Err(StoreError::Validation(ValidationError::EmptyName(_)))
            ));
        }
        assert!(store.models().is_empty());
        assert!(backend.snapshot(KEY).is_none());
    });
}

#[test]
fn test_duplicate_model_name_rejected() {
    let rt = runtime();
    rt.block_on(async {
        let (mut store, _) = open_empty().await;

        let added = store.add_model(Model::new("  User ")).await.unwrap();
        assert_eq!(added.name, "User");

        let result = store.add_model(Model::new("User  ")).await;
        assert!(matches!(
            result,
            Err(StoreError::Validation(ValidationError::DuplicateName { .. }))
        ));
        assert_eq!(store.models().len(), 1);
    });
}

#[test]
fn test_mutations_are_persisted() {
    let rt = runtime();
    rt.block_on(async {
        let (mut store, backend) = open_empty().await;
        store.add_model(Model::new("User")).await.unwrap();
        store
            .add_route(Route::new("listUsers", " /users ", Method::Get))
            .await
            .unwrap();

        let persisted: Document = serde_json::from_str(&backend.snapshot(KEY).unwrap()).unwrap();
        assert_eq!(&persisted, store.document());
        assert_eq!(persisted.routes[0].path, "/users");

        // A second store over the same backend sees the same document
        let mut messages: Vec<(Severity, String)> = Vec::new();
        let reopened =
            DocumentStore::open(backend.clone(), &SwagglyConfig::default(), &mut messages)
                .await
                .unwrap();
        assert_eq!(reopened.document(), store.document());
    });
}

#[test]
fn test_update_model() {
    let rt = runtime();
    rt.block_on(async {
        let (mut store, _) = open_empty().await;
        store.add_model(Model::new("User")).await.unwrap();
        store.add_model(Model::new("Order")).await.unwrap();

        // Keeping its own name is fine
        let updated = store
            .update_model("User", Model::new("User").with_description("A user"))
            .await
            .unwrap();
        assert!(updated);
        assert_eq!(
            store.model("User").unwrap().description.as_deref(),
            Some("A user")
        );

        // Taking another model's name is not
        let result = store.update_model("User", Model::new("Order")).await;
        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert!(store.model("User").is_some());

        assert!(!store.update_model("Missing", Model::new("X")).await.unwrap());
        assert!(store.model("X").is_none());
    });
}

#[test]
fn test_delete_model_blocked_by_parameter() {
    let rt = runtime();
    rt.block_on(async {
        let (mut store, _) = open_empty().await;
        store.add_model(Model::new("User")).await.unwrap();
        store
            .add_route(Route {
                parameters: Some(vec![Parameter {
                    schema: Some(user_ref()),
                    ..Parameter::new("id", ParameterIn::Path)
                }]),
                ..Route::new("getUser", "/users/{id}", Method::Get)
            })
            .await
            .unwrap();

        let err = store.delete_model("User").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Model is in use by parameter \"id\" in route \"GET /users/{id}\"."
        );
        match err {
            StoreError::ModelInUse(in_use) => {
                assert_eq!(in_use.model, "User");
                assert_eq!(
                    in_use.usage,
                    ModelUsage::Parameter {
                        name: "id".to_string()
                    }
                );
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(store.model("User").is_some());
    });
}

#[test]
fn test_delete_model_blocked_by_nested_reference() {
    let rt = runtime();
    rt.block_on(async {
        let (mut store, _) = open_empty().await;
        store.add_model(Model::new("User")).await.unwrap();

        let array_of_users = SchemaOrReference::schema(SchemaObject {
            schema_type: Some(SchemaType::Array),
            items: Some(Box::new(user_ref())),
            ..Default::default()
        });
        store
            .add_route(Route {
                responses: vec![Response {
                    status_code: "200".to_string(),
                    description: "OK".to_string(),
                    content: Some(json_content(array_of_users)),
                }],
                ..Route::new("listUsers", "/users", Method::Get)
            })
            .await
            .unwrap();

        let mut properties = indexmap::IndexMap::new();
        properties.insert("owner".to_string(), user_ref());
        let wrapper = SchemaOrReference::schema(SchemaObject {
            schema_type: Some(SchemaType::Object),
            properties: Some(properties),
            ..Default::default()
        });
        store
            .add_route(Route {
                request_body: Some(RequestBody {
                    content: json_content(wrapper),
                    ..Default::default()
                }),
                ..Route::new("createPet", "/pets", Method::Post)
            })
            .await
            .unwrap();

        let err = store.delete_model("User").await.unwrap_err();
        assert!(err.to_string().contains("response \"200\""));

        store.delete_route("listUsers").await.unwrap();
        let err = store.delete_model("User").await.unwrap_err();
        assert!(err.to_string().contains("request body"));

        store.delete_route("createPet").await.unwrap();
        assert!(store.delete_model("User").await.unwrap());
        assert!(store.models().is_empty());
    });
}

#[test]
fn test_model_to_model_references_do_not_block_delete() {
    let rt = runtime();
    rt.block_on(async {
        let (mut store, _) = open_empty().await;
        store.add_model(Model::new("User")).await.unwrap();
        store
            .add_model(Model::new("Order").with_property(ModelProperty {
                name: "buyer".to_string(),
                required: true,
                schema: user_ref(),
            }))
            .await
            .unwrap();

        assert!(store.delete_model("User").await.unwrap());
        assert!(!store.delete_model("User").await.unwrap());
    });
}

#[test]
fn test_route_validation() {
    let rt = runtime();
    rt.block_on(async {
        let (mut store, _) = open_empty().await;

        let result = store.add_route(Route::new("ping", "  ", Method::Get)).await;
        assert!(matches!(
            result,
            Err(StoreError::Validation(ValidationError::EmptyPath))
        ));
        let result = store.add_route(Route::new(" ", "/ping", Method::Get)).await;
        assert!(matches!(
            result,
            Err(StoreError::Validation(ValidationError::EmptyName(_)))
        ));

        store
            .add_route(Route::new("ping", "/ping", Method::Get))
            .await
            .unwrap();
        let result = store.add_route(Route::new("ping", "/pong", Method::Get)).await;
        assert!(matches!(
            result,
            Err(StoreError::Validation(ValidationError::DuplicateName { .. }))
        ));

        assert!(
            store
                .update_route("ping", Route::new("health", "/health", Method::Head))
                .await
                .unwrap()
        );
        assert!(store.route("ping").is_none());
        assert_eq!(store.route("health").unwrap().method, Method::Head);
        assert!(!store.delete_route("ping").await.unwrap());
    });
}

#[test]
fn test_malformed_persisted_data_is_cleared() {
    let rt = runtime();
    rt.block_on(async {
        let backend = Arc::new(MemoryStorageBackend::with_value(KEY, "{ not json"));
        let mut messages: Vec<(Severity, String)> = Vec::new();
        let store = DocumentStore::open(backend.clone(), &SwagglyConfig::default(), &mut messages)
            .await
            .unwrap();

        assert!(store.document().is_empty());
        assert!(backend.snapshot(KEY).is_none());
        assert_eq!(
            messages,
            vec![(
                Severity::Error,
                "Error reading from local storage.".to_string()
            )]
        );
    });
}

#[test]
fn test_reset() {
    let rt = runtime();
    rt.block_on(async {
        let (mut store, backend) = open_empty().await;
        store.add_model(Model::new("User")).await.unwrap();

        let mut messages: Vec<(Severity, String)> = Vec::new();
        store.reset(&mut messages).await.unwrap();

        assert!(store.document().is_empty());
        assert_eq!(backend.snapshot(KEY).as_deref(), Some(r#"{"models":[],"routes":[]}"#));
        assert_eq!(
            messages,
            vec![(Severity::Info, "Local data cleared.".to_string())]
        );
    });
}

/// Backend whose writes always fail
struct ReadOnlyBackend;

#[async_trait(?Send)]
impl StorageBackend for ReadOnlyBackend {
    async fn read(&self, key: &str) -> Result<String, StorageError> {
        Err(StorageError::KeyNotFound(key.to_string()))
    }

    async fn write(&self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::PermissionDenied(key.to_string()))
    }

    async fn exists(&self, _key: &str) -> Result<bool, StorageError> {
        Ok(false)
    }

    async fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

#[test]
fn test_failed_write_leaves_document_unchanged() {
    let rt = runtime();
    rt.block_on(async {
        let mut messages: Vec<(Severity, String)> = Vec::new();
        let mut store =
            DocumentStore::open(ReadOnlyBackend, &SwagglyConfig::default(), &mut messages)
                .await
                .unwrap();

        let result = store.add_model(Model::new("User")).await;
        assert!(matches!(result, Err(StoreError::Storage(_))));
        assert!(store.models().is_empty());
    });
}
