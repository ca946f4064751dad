//! Testing utilities for the Reptoid SDK.
//!
//! Provides an in-memory mock client for testing applications that use the
//! SDK without a server.

mod mock;

pub use mock::{
    MockAccountClient, MockAccountGithubClient, MockCall, MockFileClient, MockGitClient,
    MockGithubClient, MockReptoidClient, MockResponse, MockWorkspaceClient, MockWorkspacesClient,
    MOCK_ACCESS_TOKEN,
};
