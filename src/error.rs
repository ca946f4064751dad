//! Error types for the Reptoid SDK.
//!
//! Failures fall in two camps: the request never produced a valid response
//! envelope (`Transport`), or the server answered with `result: "error"`
//! (`Server`). Only the first is worth retrying.

use thiserror::Error;

/// Main error type for the Reptoid SDK.
#[derive(Error, Debug)]
pub enum Error {
    /// The request failed before a valid envelope was received
    /// (connection refused, body not JSON, envelope shape invalid).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with a well-formed error envelope.
    #[error(transparent)]
    Server(#[from] ServerError),

    /// The envelope was `ok` but a field the operation projects was missing.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// JSON (de)serialization of a payload failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// True when the request never reached a valid envelope.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// True when the server reported the failure itself.
    #[must_use]
    pub fn is_server(&self) -> bool {
        matches!(self, Self::Server(_))
    }

    /// The server's reason string, for server-reported errors.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Server(e) => Some(e.reason()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.to_string())
    }
}

/// Error reported by the server through a `{result: "error", reason}` envelope.
///
/// Displays as `Error:<reason>`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Error:{reason}")]
pub struct ServerError {
    reason: String,
}

impl ServerError {
    /// Create a server error carrying the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// The reason string exactly as the server sent it.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}
