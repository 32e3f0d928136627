//! Document store
//!
//! Holds the single editable [`Document`] and persists it through a
//! [`StorageBackend`] after every mutation. Each mutation validates first,
//! builds the next document, writes it, and only then swaps it in, so a
//! failed validation or write leaves the in-memory document unchanged.

use crate::config::SwagglyConfig;
use crate::models::{Document, Model, Route};
use crate::notifications::{Notify, Severity};
use crate::storage::{StorageBackend, StorageError};
use crate::validation::{
    EntityKind, ModelInUse, ValidationError, find_model_usage, validate_name, validate_path,
};
use tracing::{debug, info, warn};

/// Message shown when the persisted document cannot be read back
pub const STORAGE_READ_ERROR_MESSAGE: &str = "Error reading from local storage.";

/// Message shown after the document has been cleared
pub const RESET_MESSAGE: &str = "Local data cleared.";

/// Error returned by store mutations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    ModelInUse(#[from] ModelInUse),
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serialization(e.to_string())
    }
}

/// Persistent store for the editable document
pub struct DocumentStore<B: StorageBackend> {
    backend: B,
    storage_key: String,
    document: Document,
}

impl<B: StorageBackend> DocumentStore<B> {
    /// Open the store, rehydrating any document already persisted
    ///
    /// A missing value yields an empty document. A value that cannot be read
    /// or parsed is discarded: the key is removed, the document starts empty
    /// and an error notification is raised.
    pub async fn open(
        backend: B,
        config: &SwagglyConfig,
        notifier: &mut dyn Notify,
    ) -> Result<Self, StoreError> {
        let storage_key = config.storage_key.clone();

        let document = match backend.read(&storage_key).await {
            Ok(text) => match serde_json::from_str::<Document>(&text) {
                Ok(document) => {
                    info!(
                        "Loaded {} models and {} routes from '{}'",
                        document.models.len(),
                        document.routes.len(),
                        storage_key
                    );
                    document
                }
                Err(e) => {
                    warn!("Discarding unreadable document in '{}': {}", storage_key, e);
                    notifier.notify(Severity::Error, STORAGE_READ_ERROR_MESSAGE.to_string());
                    if let Err(e) = backend.remove(&storage_key).await {
                        warn!("Failed to clear '{}': {}", storage_key, e);
                    }
                    Document::default()
                }
            },
            Err(StorageError::KeyNotFound(_)) => {
                debug!("No persisted document under '{}'", storage_key);
                Document::default()
            }
            Err(e) => {
                warn!("Failed to read '{}': {}", storage_key, e);
                notifier.notify(Severity::Error, STORAGE_READ_ERROR_MESSAGE.to_string());
                Document::default()
            }
        };

        Ok(Self {
            backend,
            storage_key,
            document,
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn models(&self) -> &[Model] {
        &self.document.models
    }

    pub fn routes(&self) -> &[Route] {
        &self.document.routes
    }

    pub fn model(&self, name: &str) -> Option<&Model> {
        self.document.model(name)
    }

    pub fn route(&self, name: &str) -> Option<&Route> {
        self.document.route(name)
    }

    /// Persist `next` and make it the current document
    async fn commit(&mut self, next: Document) -> Result<(), StoreError> {
        let text = serde_json::to_string(&next)?;
        self.backend.write(&self.storage_key, &text).await?;
        self.document = next;
        debug!("Persisted document to '{}'", self.storage_key);
        Ok(())
    }

    /// Add a model; the name is trimmed and must be non-empty and unused
    pub async fn add_model(&mut self, model: Model) -> Result<Model, StoreError> {
        let name = validate_name(
            EntityKind::Model,
            &model.name,
            self.document.models.iter().map(|m| m.name.as_str()),
        )?;
        let model = Model { name, ..model };

        let mut next = self.document.clone();
        next.models.push(model.clone());
        self.commit(next).await?;

        info!("Added model '{}'", model.name);
        Ok(model)
    }

    /// Replace the model named `original_name`
    ///
    /// Returns `Ok(false)` without touching anything if no such model exists.
    pub async fn update_model(
        &mut self,
        original_name: &str,
        model: Model,
    ) -> Result<bool, StoreError> {
        let Some(index) = self
            .document
            .models
            .iter()
            .position(|m| m.name == original_name)
        else {
            debug!("update_model: no model named '{}'", original_name);
            return Ok(false);
        };

        let name = validate_name(
            EntityKind::Model,
            &model.name,
            self.document
                .models
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != index)
                .map(|(_, m)| m.name.as_str()),
        )?;

        let mut next = self.document.clone();
        next.models[index] = Model { name, ..model };
        self.commit(next).await?;

        info!("Updated model '{}'", original_name);
        Ok(true)
    }

    /// Delete a model unless a route still references it
    ///
    /// Returns `Ok(false)` if no model has that name.
    pub async fn delete_model(&mut self, name: &str) -> Result<bool, StoreError> {
        if let Some(in_use) = find_model_usage(&self.document.routes, name) {
            warn!("Refusing to delete model '{}': {}", name, in_use);
            return Err(in_use.into());
        }

        if self.document.model(name).is_none() {
            return Ok(false);
        }

        let mut next = self.document.clone();
        next.models.retain(|m| m.name != name);
        self.commit(next).await?;

        info!("Deleted model '{}'", name);
        Ok(true)
    }

    /// Add a route; name and path are trimmed and must be non-empty, the name unused
    pub async fn add_route(&mut self, route: Route) -> Result<Route, StoreError> {
        let name = validate_name(
            EntityKind::Route,
            &route.name,
            self.document.routes.iter().map(|r| r.name.as_str()),
        )?;
        let path = validate_path(&route.path)?;
        let route = Route { name, path, ..route };

        let mut next = self.document.clone();
        next.routes.push(route.clone());
        self.commit(next).await?;

        info!("Added route '{}' ({})", route.name, route.label());
        Ok(route)
    }

    /// Replace the route named `original_name`
    ///
    /// Returns `Ok(false)` without touching anything if no such route exists.
    pub async fn update_route(
        &mut self,
        original_name: &str,
        route: Route,
    ) -> Result<bool, StoreError> {
        let Some(index) = self
            .document
            .routes
            .iter()
            .position(|r| r.name == original_name)
        else {
            debug!("update_route: no route named '{}'", original_name);
            return Ok(false);
        };

        let name = validate_name(
            EntityKind::Route,
            &route.name,
            self.document
                .routes
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != index)
                .map(|(_, r)| r.name.as_str()),
        )?;
        let path = validate_path(&route.path)?;

        let mut next = self.document.clone();
        next.routes[index] = Route { name, path, ..route };
        self.commit(next).await?;

        info!("Updated route '{}'", original_name);
        Ok(true)
    }

    /// Delete a route by name; returns whether one was removed
    pub async fn delete_route(&mut self, name: &str) -> Result<bool, StoreError> {
        if self.document.route(name).is_none() {
            return Ok(false);
        }

        let mut next = self.document.clone();
        next.routes.retain(|r| r.name != name);
        self.commit(next).await?;

        info!("Deleted route '{}'", name);
        Ok(true)
    }

    /// Replace the whole document (used by import)
    pub async fn replace_document(&mut self, document: Document) -> Result<(), StoreError> {
        let (models, routes) = (document.models.len(), document.routes.len());
        self.commit(document).await?;
        info!("Replaced document ({} models, {} routes)", models, routes);
        Ok(())
    }

    /// Clear the document and tell the user
    pub async fn reset(&mut self, notifier: &mut dyn Notify) -> Result<(), StoreError> {
        self.commit(Document::default()).await?;
        notifier.notify(Severity::Info, RESET_MESSAGE.to_string());
        Ok(())
    }
}
