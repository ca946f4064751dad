//! Workspace collection client.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::envelope::{list_field, required};
use crate::error::Error;
use crate::transport::HttpTransport;
use crate::types::Workspace;

/// Client for the workspaces owned by one account.
#[derive(Debug, Clone)]
pub struct WorkspacesClient {
    transport: Arc<HttpTransport>,
    account_id: String,
    path: String,
}

impl WorkspacesClient {
    /// Create a new workspaces client.
    pub fn new(transport: Arc<HttpTransport>, account_id: &str) -> Self {
        Self {
            transport,
            account_id: account_id.to_string(),
            path: format!("/accounts/{account_id}/workspaces"),
        }
    }

    /// List the account's workspaces.
    ///
    /// # Returns
    ///
    /// Workspaces in server order; empty when the server reports none.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server reports an error.
    pub async fn all(&self) -> Result<Vec<Workspace>, Error> {
        let data = self.transport.get(&self.path, None).await?;
        list_field(&data, "workspaces")
    }

    /// Create a workspace.
    ///
    /// # Arguments
    ///
    /// * `meta` - Optional opaque metadata stored with the workspace
    ///
    /// # Returns
    ///
    /// The server-assigned workspace descriptor.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server reports an error.
    pub async fn create(&self, meta: Option<Value>) -> Result<Workspace, Error> {
        let body = match meta {
            Some(meta) => json!({ "meta": meta }),
            None => json!({}),
        };

        let data = self.transport.post(&self.path, &body).await?;
        required(data)
    }

    /// Get the account ID.
    #[must_use]
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// Full URL of this collection.
    #[must_use]
    pub fn base_url(&self) -> String {
        self.transport.url(&self.path)
    }
}
