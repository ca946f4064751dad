//! Workspace file client.

use std::sync::Arc;

use serde_json::json;

use crate::envelope::required;
use crate::error::Error;
use crate::transport::HttpTransport;
use crate::types::FileContent;

/// Client for one path inside a workspace.
#[derive(Debug, Clone)]
pub struct FileClient {
    transport: Arc<HttpTransport>,
    file_path: String,
    workspace_path: String,
}

impl FileClient {
    /// Create a new file client.
    pub fn new(
        transport: Arc<HttpTransport>,
        account_id: &str,
        workspace_id: &str,
        file_path: &str,
    ) -> Self {
        Self {
            transport,
            file_path: file_path.to_string(),
            workspace_path: format!("/accounts/{account_id}/workspaces/{workspace_id}"),
        }
    }

    /// Read the file.
    ///
    /// The path travels percent-encoded in the `filePath` query parameter,
    /// with a space sent as `%20`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server reports an error.
    pub async fn read(&self) -> Result<FileContent, Error> {
        let params = [("filePath", self.file_path.as_str())];
        let data = self
            .transport
            .get(&format!("{}/files", self.workspace_path), Some(&params))
            .await?;

        required(data)
    }

    /// Create or overwrite the file with `content`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server reports an error.
    pub async fn write(&self, content: &str) -> Result<(), Error> {
        self.transport
            .post(
                &format!("{}/files", self.workspace_path),
                &json!({ "filePath": self.file_path, "content": content }),
            )
            .await?;

        Ok(())
    }

    /// Create a folder at this path.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server reports an error.
    pub async fn create_folder(&self) -> Result<(), Error> {
        self.transport
            .post(
                &format!("{}/folders", self.workspace_path),
                &json!({ "filePath": self.file_path }),
            )
            .await?;

        Ok(())
    }

    /// Get the file path.
    #[must_use]
    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    /// URL of the files endpoint, without the path query.
    #[must_use]
    pub fn base_url(&self) -> String {
        self.transport.url(&format!("{}/files", self.workspace_path))
    }

    /// Get the underlying HTTP transport.
    #[must_use]
    pub fn transport(&self) -> &Arc<HttpTransport> {
        &self.transport
    }
}
