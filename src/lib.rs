//! Reptoid SDK for Rust
//!
//! Client for the Reptoid codebases API: accounts own workspaces, workspaces
//! hold files and a git repository, and accounts can link GitHub.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use reptoid::ReptoidClient;
//!
//! # async fn run() -> Result<(), reptoid::Error> {
//! let client = ReptoidClient::new(None, "my-access-token")?;
//! let account = client.account("acc-1");
//!
//! for workspace in account.workspaces().all().await? {
//!     println!("{}", workspace.id);
//! }
//!
//! let file = account.workspace("w1").file("README.md");
//! file.write("# Hello").await?;
//! assert_eq!(file.read().await?.content, "# Hello");
//! # Ok(())
//! # }
//! ```
//!
//! Every call performs exactly one HTTP request. Server-reported failures
//! surface as [`Error::Server`] with the message `Error:<reason>`; requests
//! that never produced a valid response surface as [`Error::Transport`].

pub mod client;
pub mod clients;
pub mod envelope;
pub mod error;
pub mod testing;
pub mod transport;
pub mod types;

// Re-exports
pub use client::{ClientConfig, Credentials, ReptoidClient, DEFAULT_API_HOST};
pub use clients::{
    AccountClient, AccountGithubClient, FileClient, GitClient, GithubClient, WorkspaceClient,
    WorkspacesClient,
};
pub use envelope::ResponseEnvelope;
pub use error::{Error, ServerError};
pub use transport::HttpTransport;
pub use types::{CloneResult, CloneStatus, FileContent, GithubAuth, GithubRepo, Workspace};
