//! Resource — a schedulable fleet asset.

use serde::{Deserialize, Serialize};

use super::ids::ResourceId;

/// An aircraft on the flight line, identified for humans by its tail number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,
    pub tail: String,
    /// Aircraft type, e.g. "DR400". Display only.
    #[serde(default)]
    pub model: Option<String>,
}

impl Resource {
    pub fn new(id: impl Into<String>, tail: impl Into<String>) -> Self {
        Self {
            id: ResourceId::new(id),
            tail: tail.into(),
            model: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}
