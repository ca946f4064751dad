//! Account-scoped GitHub client.

use std::sync::Arc;

use serde_json::json;

use crate::envelope::{list_field, required};
use crate::error::Error;
use crate::transport::HttpTransport;
use crate::types::{CloneResult, GithubRepo};

/// Client for the GitHub integration of one account.
#[derive(Debug, Clone)]
pub struct AccountGithubClient {
    transport: Arc<HttpTransport>,
    account_id: String,
    path: String,
}

impl AccountGithubClient {
    /// Create a new account GitHub client.
    pub fn new(transport: Arc<HttpTransport>, account_id: &str) -> Self {
        Self {
            transport,
            account_id: account_id.to_string(),
            path: format!("/accounts/{account_id}/github"),
        }
    }

    /// List repositories linked to the account.
    ///
    /// # Returns
    ///
    /// The repositories in server order; empty when the server reports none.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server reports an error.
    pub async fn repos(&self) -> Result<Vec<GithubRepo>, Error> {
        let data = self
            .transport
            .get(&format!("{}/repos", self.path), None)
            .await?;

        list_field(&data, "repos")
    }

    /// Link a GitHub access token to the account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server reports an error.
    pub async fn connect(&self, github_access_token: &str) -> Result<(), Error> {
        self.transport
            .post(
                &format!("{}/connect", self.path),
                &json!({ "githubAccessToken": github_access_token }),
            )
            .await?;

        Ok(())
    }

    /// Start cloning a repository into a new workspace.
    ///
    /// # Arguments
    ///
    /// * `path` - Repository path, e.g. `owner/name`
    ///
    /// # Returns
    ///
    /// The new workspace ID and the clone status.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server reports an error.
    pub async fn clone_repo(&self, path: &str) -> Result<CloneResult, Error> {
        let data = self
            .transport
            .post(&format!("{}/clone", self.path), &json!({ "path": path }))
            .await?;

        required(data)
    }

    /// Get the account ID.
    #[must_use]
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// Full URL of this resource.
    #[must_use]
    pub fn base_url(&self) -> String {
        self.transport.url(&self.path)
    }
}
