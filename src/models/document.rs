//! The single editable document persisted by the store

use super::model::Model;
use super::route::Route;
use serde::{Deserialize, Serialize};

/// All models and routes being edited
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Document {
    #[serde(default)]
    pub models: Vec<Model>,
    #[serde(default)]
    pub routes: Vec<Route>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty() && self.routes.is_empty()
    }

    pub fn model(&self, name: &str) -> Option<&Model> {
        self.models.iter().find(|m| m.name == name)
    }

    pub fn route(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.name == name)
    }
}
