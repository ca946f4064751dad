//! Resource clients for the Reptoid SDK.
//!
//! Each client is a plain addressing value: the shared transport plus the
//! identifiers of its place in the resource tree. Factory methods build a
//! fresh child on every call.

pub mod account;
pub mod account_github;
pub mod file;
pub mod git;
pub mod github;
pub mod workspace;
pub mod workspaces;

// Re-exports
pub use account::AccountClient;
pub use account_github::AccountGithubClient;
pub use file::FileClient;
pub use git::GitClient;
pub use github::GithubClient;
pub use workspace::WorkspaceClient;
pub use workspaces::WorkspacesClient;
