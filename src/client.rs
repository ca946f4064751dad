//! Reptoid SDK root client.
//!
//! Holds the credentials and hands out resource clients scoped to accounts
//! and to the GitHub integration.

use std::env;
use std::fmt;
use std::sync::Arc;

use crate::clients::{AccountClient, GithubClient};
use crate::error::Error;
use crate::transport::HttpTransport;

/// Default API host used when none is configured.
pub const DEFAULT_API_HOST: &str = "https://api.codebases.reptoid.com";

/// Environment variable holding the access token.
pub const ACCESS_TOKEN_ENV: &str = "REPTOID_ACCESS_TOKEN";

/// Environment variable overriding the API host.
pub const API_HOST_ENV: &str = "REPTOID_API_HOST";

/// API host and bearer token, fixed at construction and shared by every
/// resource client derived from the root.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_host: String,
    access_token: String,
}

impl Credentials {
    /// Create credentials, falling back to [`DEFAULT_API_HOST`].
    ///
    /// A trailing `/` on the host is dropped so joined paths stay clean.
    pub fn new(api_host: Option<&str>, access_token: &str) -> Self {
        let api_host = api_host.unwrap_or(DEFAULT_API_HOST);
        Self {
            api_host: api_host.trim_end_matches('/').to_string(),
            access_token: access_token.to_string(),
        }
    }

    /// Get the API host.
    #[must_use]
    pub fn api_host(&self) -> &str {
        &self.api_host
    }

    /// Get the access token.
    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_host", &self.api_host)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

/// Plain configuration for [`ReptoidClient::with_config`].
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// API host (default: <https://api.codebases.reptoid.com>)
    pub api_host: Option<String>,
    /// Bearer token sent with every request
    pub access_token: String,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// * `REPTOID_ACCESS_TOKEN` - Bearer token (required)
    /// * `REPTOID_API_HOST` - API host (optional)
    ///
    /// # Errors
    ///
    /// Returns an error if the access token is not set.
    pub fn from_env() -> Result<Self, Error> {
        let access_token = env::var(ACCESS_TOKEN_ENV).map_err(|_| {
            Error::Configuration(format!("{ACCESS_TOKEN_ENV} environment variable not set"))
        })?;

        let api_host = env::var(API_HOST_ENV).ok().filter(|h| !h.is_empty());

        Ok(Self {
            api_host,
            access_token,
        })
    }
}

/// Root client for the Reptoid API.
///
/// # Example
///
/// ```rust,no_run
/// use reptoid::ReptoidClient;
///
/// # async fn run() -> Result<(), reptoid::Error> {
/// let client = ReptoidClient::new(None, "my-access-token")?;
///
/// let workspace = client.account("acc-1").workspaces().create(None).await?;
/// client
///     .account("acc-1")
///     .workspace(&workspace.id)
///     .file("src/main.rs")
///     .write("fn main() {}")
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReptoidClient {
    transport: Arc<HttpTransport>,
}

impl ReptoidClient {
    /// Create a new Reptoid client.
    ///
    /// # Arguments
    ///
    /// * `api_host` - API host (default: <https://api.codebases.reptoid.com>).
    ///   Trailing `/` characters are dropped, so `credentials().api_host()`
    ///   returns `http://h:1` for `http://h:1/`; the rest is kept verbatim.
    /// * `access_token` - Bearer token sent with every request
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP transport cannot be created.
    pub fn new(api_host: Option<&str>, access_token: &str) -> Result<Self, Error> {
        let transport = HttpTransport::new(Credentials::new(api_host, access_token))?;

        Ok(Self {
            transport: Arc::new(transport),
        })
    }

    /// Create a client from a [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP transport cannot be created.
    pub fn with_config(config: &ClientConfig) -> Result<Self, Error> {
        Self::new(config.api_host.as_deref(), &config.access_token)
    }

    /// Create a client from `REPTOID_ACCESS_TOKEN` and `REPTOID_API_HOST`.
    ///
    /// # Errors
    ///
    /// Returns an error if the access token is not set.
    pub fn from_env() -> Result<Self, Error> {
        Self::with_config(&ClientConfig::from_env()?)
    }

    /// Client scoped to one account.
    #[must_use]
    pub fn account(&self, account_id: &str) -> AccountClient {
        AccountClient::new(Arc::clone(&self.transport), account_id)
    }

    /// Client for the account-independent GitHub endpoints.
    #[must_use]
    pub fn github(&self) -> GithubClient {
        GithubClient::new(Arc::clone(&self.transport))
    }

    /// Get the credentials shared with every derived client.
    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        self.transport.credentials()
    }

    /// Get the underlying HTTP transport (for advanced use cases).
    #[must_use]
    pub fn transport(&self) -> &Arc<HttpTransport> {
        &self.transport
    }
}
