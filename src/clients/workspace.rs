//! Single workspace client.

use std::sync::Arc;

use crate::clients::{FileClient, GitClient};
use crate::envelope::required;
use crate::error::Error;
use crate::transport::HttpTransport;
use crate::types::Workspace;

/// Client for one workspace.
#[derive(Debug, Clone)]
pub struct WorkspaceClient {
    transport: Arc<HttpTransport>,
    account_id: String,
    workspace_id: String,
    path: String,
}

impl WorkspaceClient {
    /// Create a new workspace client.
    pub fn new(transport: Arc<HttpTransport>, account_id: &str, workspace_id: &str) -> Self {
        Self {
            transport,
            account_id: account_id.to_string(),
            workspace_id: workspace_id.to_string(),
            path: format!("/accounts/{account_id}/workspaces/{workspace_id}"),
        }
    }

    /// Get workspace details.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server reports an error.
    pub async fn get(&self) -> Result<Workspace, Error> {
        let data = self.transport.get(&self.path, None).await?;
        required(data)
    }

    /// Delete the workspace.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server reports an error.
    pub async fn remove(&self) -> Result<(), Error> {
        self.transport.delete(&self.path).await?;
        Ok(())
    }

    /// A file (or folder) inside this workspace.
    #[must_use]
    pub fn file(&self, file_path: &str) -> FileClient {
        FileClient::new(
            Arc::clone(&self.transport),
            &self.account_id,
            &self.workspace_id,
            file_path,
        )
    }

    /// Git operations on this workspace.
    #[must_use]
    pub fn git(&self) -> GitClient {
        GitClient::new(Arc::clone(&self.transport), &self.account_id, &self.workspace_id)
    }

    /// Get the account ID.
    #[must_use]
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// Get the workspace ID.
    #[must_use]
    pub fn workspace_id(&self) -> &str {
        &self.workspace_id
    }

    /// Full URL of this workspace.
    #[must_use]
    pub fn base_url(&self) -> String {
        self.transport.url(&self.path)
    }
}
