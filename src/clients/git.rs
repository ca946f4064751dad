//! Workspace git client.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::error::Error;
use crate::transport::HttpTransport;

/// Client for git operations run server-side in one workspace.
///
/// Payloads are passed through as the server sends them.
#[derive(Debug, Clone)]
pub struct GitClient {
    transport: Arc<HttpTransport>,
    path: String,
}

impl GitClient {
    /// Create a new git client.
    pub fn new(transport: Arc<HttpTransport>, account_id: &str, workspace_id: &str) -> Self {
        Self {
            transport,
            path: format!("/accounts/{account_id}/workspaces/{workspace_id}/git"),
        }
    }

    /// Working tree status.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server reports an error.
    pub async fn status(&self) -> Result<Value, Error> {
        self.transport.get(&format!("{}/status", self.path), None).await
    }

    /// Diff of uncommitted changes.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server reports an error.
    pub async fn diff(&self) -> Result<Value, Error> {
        self.transport.get(&format!("{}/diff", self.path), None).await
    }

    /// Initialise a repository in the workspace.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server reports an error.
    pub async fn init(&self) -> Result<Value, Error> {
        self.transport
            .post(&format!("{}/init", self.path), &json!({}))
            .await
    }

    /// Push to the configured origin.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server reports an error.
    pub async fn push(&self) -> Result<Value, Error> {
        self.transport
            .post(&format!("{}/push", self.path), &json!({}))
            .await
    }

    /// Point `origin` at `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server reports an error.
    pub async fn set_origin(&self, url: &str) -> Result<Value, Error> {
        self.transport
            .post(&format!("{}/origin", self.path), &json!({ "url": url }))
            .await
    }

    /// Full URL of this resource.
    #[must_use]
    pub fn base_url(&self) -> String {
        self.transport.url(&self.path)
    }
}
