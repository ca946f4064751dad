//! Data model types for the Reptoid SDK.
//!
//! Descriptors keep fields they do not model in a flattened `extra` map, so
//! nothing the server sends is dropped.

pub mod files;
pub mod github;
pub mod workspaces;

// Re-exports
pub use files::FileContent;
pub use github::{CloneResult, CloneStatus, GithubAuth, GithubRepo};
pub use workspaces::Workspace;
