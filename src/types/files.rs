//! File data models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Content of a workspace file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileContent {
    /// Full file content
    #[serde(default)]
    pub content: String,
    /// Any other fields the server sent
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
