//! Account-scoped client.

use std::sync::Arc;

use crate::clients::{AccountGithubClient, WorkspaceClient, WorkspacesClient};
use crate::transport::HttpTransport;

/// Client for one account. Only hands out child clients.
#[derive(Debug, Clone)]
pub struct AccountClient {
    transport: Arc<HttpTransport>,
    account_id: String,
}

impl AccountClient {
    /// Create a new account client.
    pub fn new(transport: Arc<HttpTransport>, account_id: &str) -> Self {
        Self {
            transport,
            account_id: account_id.to_string(),
        }
    }

    /// GitHub integration for this account.
    #[must_use]
    pub fn github(&self) -> AccountGithubClient {
        AccountGithubClient::new(Arc::clone(&self.transport), &self.account_id)
    }

    /// The account's workspace collection.
    #[must_use]
    pub fn workspaces(&self) -> WorkspacesClient {
        WorkspacesClient::new(Arc::clone(&self.transport), &self.account_id)
    }

    /// A single workspace of this account.
    #[must_use]
    pub fn workspace(&self, workspace_id: &str) -> WorkspaceClient {
        WorkspaceClient::new(Arc::clone(&self.transport), &self.account_id, workspace_id)
    }

    /// Get the account ID.
    #[must_use]
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// Full URL of this account.
    #[must_use]
    pub fn base_url(&self) -> String {
        self.transport.url(&format!("/accounts/{}", self.account_id))
    }
}
