//! HTTP Transport for the Reptoid SDK.
//!
//! Joins API paths onto the configured host, attaches the bearer token,
//! issues exactly one request per call and decodes the response envelope.
//! No retries, no timeouts and no status-code branching: whatever body the
//! server returns is read as an envelope.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde_json::Value;
use tracing::{debug, warn};

use crate::client::Credentials;
use crate::envelope::ResponseEnvelope;
use crate::error::Error;

/// Path prefix of every API endpoint.
pub const API_PREFIX: &str = "/api/v1";

/// Characters left as-is in query keys and values: alphanumerics plus
/// `- _ . ! ~ * ' ( )`. A space becomes `%20`, never `+`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode query parameters into `k1=v1&k2=v2`.
pub(crate) fn encode_query(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                utf8_percent_encode(key, QUERY_COMPONENT),
                utf8_percent_encode(value, QUERY_COMPONENT)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// HTTP transport shared by every resource client derived from one root.
#[derive(Debug)]
pub struct HttpTransport {
    credentials: Credentials,
    client: Client,
}

impl HttpTransport {
    /// Create a new HTTP transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(credentials: Credentials) -> Result<Self, Error> {
        let client = Client::builder()
            .build()
            .map_err(|e| Error::Transport(e.to_string()))?;

        Ok(Self {
            credentials,
            client,
        })
    }

    /// Full URL for an API path such as `/accounts/a1/workspaces`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{API_PREFIX}{path}", self.credentials.api_host())
    }

    /// `GET` with optional query parameters.
    ///
    /// # Errors
    ///
    /// See [`HttpTransport::request`].
    pub async fn get(&self, path: &str, params: Option<&[(&str, &str)]>) -> Result<Value, Error> {
        self.request(Method::GET, path, params, None).await
    }

    /// `POST` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`HttpTransport::request`].
    pub async fn post(&self, path: &str, body: &Value) -> Result<Value, Error> {
        self.request(Method::POST, path, None, Some(body)).await
    }

    /// `DELETE` without a body.
    ///
    /// # Errors
    ///
    /// See [`HttpTransport::request`].
    pub async fn delete(&self, path: &str) -> Result<Value, Error> {
        self.request(Method::DELETE, path, None, None).await
    }

    /// Issue one request and decode its envelope.
    ///
    /// # Returns
    ///
    /// The envelope's `data` (`Value::Null` when the server sent none).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the request fails or the body is not a
    /// valid envelope, and [`Error::Server`] if the envelope reports an error.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        params: Option<&[(&str, &str)]>,
        body: Option<&Value>,
    ) -> Result<Value, Error> {
        let mut url = self.url(path);
        if let Some(p) = params.filter(|p| !p.is_empty()) {
            url.push('?');
            url.push_str(&encode_query(p));
        }
        debug!(%method, %url, "sending request");

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(self.credentials.access_token());

        if let Some(b) = body {
            request = request.json(b);
        }

        let response = request.send().await?;
        let status = response.status();

        let envelope: ResponseEnvelope = response
            .json()
            .await
            .map_err(|e| Error::Transport(format!("Failed to parse response: {e}")))?;

        debug!(%method, %url, status = status.as_u16(), result = %envelope.result, "received envelope");

        envelope.into_data().inspect_err(|e| {
            if let Some(reason) = e.reason() {
                warn!(%method, %url, reason, "server reported error");
            }
        })
    }

    /// Get the credentials sent with every request.
    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Get the API host.
    #[must_use]
    pub fn api_host(&self) -> &str {
        self.credentials.api_host()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_transport(host: &str) -> HttpTransport {
        HttpTransport::new(Credentials::new(Some(host), "token-123"))
            .expect("transport creation should succeed")
    }

    #[test]
    fn test_url_joins_prefix() {
        let transport = create_test_transport("https://api.example.test");

        assert_eq!(
            transport.url("/accounts/a1/workspaces"),
            "https://api.example.test/api/v1/accounts/a1/workspaces"
        );
    }

    #[test]
    fn test_url_keeps_host_verbatim() {
        let transport = create_test_transport("http://127.0.0.1:9999/proxy");

        assert_eq!(transport.api_host(), "http://127.0.0.1:9999/proxy");
        assert_eq!(
            transport.url("/github"),
            "http://127.0.0.1:9999/proxy/api/v1/github"
        );
    }

    #[test]
    fn test_encode_query_matches_uri_component_rules() {
        assert_eq!(encode_query(&[("filePath", "my notes.md")]), "filePath=my%20notes.md");
        assert_eq!(
            encode_query(&[("filePath", "docs/my notes & ideas?.md")]),
            "filePath=docs%2Fmy%20notes%20%26%20ideas%3F.md"
        );
        assert_eq!(
            encode_query(&[("filePath", "a+b=c#d")]),
            "filePath=a%2Bb%3Dc%23d"
        );
        assert_eq!(
            encode_query(&[("filePath", "keep-_.!~*'()")]),
            "filePath=keep-_.!~*'()"
        );
        assert_eq!(encode_query(&[("filePath", "é")]), "filePath=%C3%A9");
        assert_eq!(encode_query(&[("a", "1"), ("b", "2")]), "a=1&b=2");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .and_then(|listener| listener.local_addr())
            .expect("free port")
            .port();
        let transport = create_test_transport(&format!("http://127.0.0.1:{port}"));

        let err = transport
            .get("/accounts/a1/workspaces", None)
            .await
            .expect_err("nothing is listening");
        assert!(err.is_transport());
    }
}
