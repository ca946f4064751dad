//! Account-independent GitHub client.

use std::sync::Arc;

use serde_json::json;

use crate::envelope::{required, string_field};
use crate::error::Error;
use crate::transport::HttpTransport;
use crate::types::GithubAuth;

/// Client for the GitHub OAuth endpoints. Needs only credentials.
#[derive(Debug, Clone)]
pub struct GithubClient {
    transport: Arc<HttpTransport>,
}

impl GithubClient {
    /// Path of the GitHub endpoints.
    const PATH: &'static str = "/github";

    /// Create a new GitHub client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Authenticate with a GitHub OAuth code.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server reports an error.
    pub async fn auth_by_code(&self, code: &str) -> Result<GithubAuth, Error> {
        let data = self
            .transport
            .post(&format!("{}/auth-by-code", Self::PATH), &json!({ "code": code }))
            .await?;

        required(data)
    }

    /// Exchange a GitHub OAuth code for an access token.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server reports an error or
    /// the response carries no `accessToken`.
    pub async fn access_token_by_code(&self, code: &str) -> Result<String, Error> {
        let data = self
            .transport
            .post(&format!("{}/github", Self::PATH), &json!({ "code": code }))
            .await?;

        string_field(&data, "accessToken")
    }

    /// Full URL of this resource.
    #[must_use]
    pub fn base_url(&self) -> String {
        self.transport.url(Self::PATH)
    }

    /// Get the underlying HTTP transport.
    #[must_use]
    pub fn transport(&self) -> &Arc<HttpTransport> {
        &self.transport
    }
}
