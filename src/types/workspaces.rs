//! Workspace data models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Workspace descriptor as returned by the workspaces endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    /// Server-assigned workspace identifier
    pub id: String,
    /// Opaque metadata supplied at creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
    /// Any other fields the server sent
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
