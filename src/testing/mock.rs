//! Mock Reptoid client for testing.
//!
//! `MockReptoidClient` mirrors the real client tree without network access.
//! Workspaces and files live in memory, so a write followed by a read returns
//! what was written. Every call is recorded, and any method can be forced to
//! return configured data or a server error.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};

use crate::error::{Error, ServerError};
use crate::types::{CloneResult, CloneStatus, FileContent, GithubAuth, GithubRepo, Workspace};

/// Access token returned by the mock GitHub client.
pub const MOCK_ACCESS_TOKEN: &str = "mock-access-token";

/// Record of a method call.
#[derive(Debug, Clone)]
pub struct MockCall {
    /// Method name (e.g., "workspaces.create", "file.write")
    pub method: String,
    /// Arguments passed to the method
    pub args: Vec<String>,
    /// Timestamp of the call
    pub timestamp: DateTime<Utc>,
}

impl MockCall {
    /// Create a new mock call record.
    pub fn new(method: &str, args: Vec<String>) -> Self {
        Self {
            method: method.to_string(),
            args,
            timestamp: Utc::now(),
        }
    }
}

/// Configured response for one method.
#[derive(Debug, Clone, Default)]
pub struct MockResponse {
    /// The value the mocked method returns, already projected the way the
    /// real client projects `data`: the bare array for `repos`/`all`, the
    /// token string for `access_token_by_code`, the object otherwise
    pub data: Option<Value>,
    /// Reason of a server error to return instead
    pub reason: Option<String>,
    /// Number of times this response has been used
    pub call_count: u32,
}

impl MockResponse {
    /// Create a mock response returning `data`.
    pub fn with_data(data: Value) -> Self {
        Self {
            data: Some(data),
            ..Self::default()
        }
    }

    /// Create a mock response failing with a server error.
    pub fn with_error(reason: &str) -> Self {
        Self {
            reason: Some(reason.to_string()),
            ..Self::default()
        }
    }

    /// Configured result, or `None` to fall through to the default behavior.
    fn get_result<T: DeserializeOwned>(&mut self) -> Result<Option<T>, Error> {
        self.call_count += 1;
        if let Some(reason) = &self.reason {
            return Err(ServerError::new(reason.clone()).into());
        }
        match &self.data {
            Some(data) => Ok(Some(serde_json::from_value(data.clone())?)),
            None => Ok(None),
        }
    }
}

/// (account, workspace, path)
type FileKey = (String, String, String);

/// Internal state shared by every mock client derived from one root.
#[derive(Default)]
struct MockClientState {
    calls: Vec<MockCall>,
    responses: BTreeMap<String, MockResponse>,
    workspaces: BTreeMap<(String, String), Workspace>,
    files: BTreeMap<FileKey, String>,
    folders: BTreeSet<FileKey>,
    next_workspace: u64,
}

impl MockClientState {
    fn record_call(&mut self, method: &str, args: Vec<String>) {
        self.calls.push(MockCall::new(method, args));
    }

    /// Record the call, then answer with the configured response if there is
    /// one, else with `default`.
    fn respond<T, F>(&mut self, method: &str, args: Vec<String>, default: F) -> Result<T, Error>
    where
        T: DeserializeOwned,
        F: FnOnce(&mut Self) -> Result<T, Error>,
    {
        self.record_call(method, args);
        if let Some(response) = self.responses.get_mut(method) {
            if let Some(value) = response.get_result()? {
                return Ok(value);
            }
        }
        default(self)
    }

    fn insert_workspace(&mut self, account_id: &str, meta: Option<Value>) -> Workspace {
        self.next_workspace += 1;
        let workspace = Workspace {
            id: format!("mock-workspace-{}", self.next_workspace),
            meta,
            extra: Map::new(),
        };
        self.workspaces.insert(
            (account_id.to_string(), workspace.id.clone()),
            workspace.clone(),
        );
        workspace
    }
}

fn lock(state: &Mutex<MockClientState>) -> MutexGuard<'_, MockClientState> {
    state.lock().unwrap_or_else(|e| e.into_inner())
}

/// Mock root client.
#[derive(Clone, Default)]
pub struct MockReptoidClient {
    state: Arc<Mutex<MockClientState>>,
}

impl MockReptoidClient {
    /// Create a new mock client with empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock account client.
    #[must_use]
    pub fn account(&self, account_id: &str) -> MockAccountClient {
        MockAccountClient {
            state: Arc::clone(&self.state),
            account_id: account_id.to_string(),
        }
    }

    /// Mock account-independent GitHub client.
    #[must_use]
    pub fn github(&self) -> MockGithubClient {
        MockGithubClient {
            state: Arc::clone(&self.state),
        }
    }

    /// Configure the response for every call of `method`.
    ///
    /// # Arguments
    ///
    /// * `method` - Method name (e.g., "file.read", "account_github.clone_repo")
    /// * `response` - Data or error to return
    pub fn configure(&self, method: &str, response: MockResponse) {
        lock(&self.state)
            .responses
            .insert(method.to_string(), response);
    }

    /// Check if a method was called.
    #[must_use]
    pub fn was_called(&self, method: &str) -> bool {
        lock(&self.state).calls.iter().any(|call| call.method == method)
    }

    /// Get the number of times a method was called.
    #[must_use]
    pub fn call_count(&self, method: &str) -> usize {
        lock(&self.state)
            .calls
            .iter()
            .filter(|call| call.method == method)
            .count()
    }

    /// Get recorded calls, optionally filtered by method.
    #[must_use]
    pub fn get_calls(&self, method: Option<&str>) -> Vec<MockCall> {
        let state = lock(&self.state);
        match method {
            Some(m) => state.calls.iter().filter(|call| call.method == m).cloned().collect(),
            None => state.calls.clone(),
        }
    }

    /// Reset recorded calls and configured responses. Stored workspaces and
    /// files are kept.
    pub fn reset(&self) {
        let mut state = lock(&self.state);
        state.calls.clear();
        state.responses.clear();
    }
}

/// Mock account client.
#[derive(Clone)]
pub struct MockAccountClient {
    state: Arc<Mutex<MockClientState>>,
    account_id: String,
}

impl MockAccountClient {
    /// Mock GitHub integration of this account.
    #[must_use]
    pub fn github(&self) -> MockAccountGithubClient {
        MockAccountGithubClient {
            state: Arc::clone(&self.state),
            account_id: self.account_id.clone(),
        }
    }

    /// Mock workspace collection.
    #[must_use]
    pub fn workspaces(&self) -> MockWorkspacesClient {
        MockWorkspacesClient {
            state: Arc::clone(&self.state),
            account_id: self.account_id.clone(),
        }
    }

    /// Mock single workspace.
    #[must_use]
    pub fn workspace(&self, workspace_id: &str) -> MockWorkspaceClient {
        MockWorkspaceClient {
            state: Arc::clone(&self.state),
            account_id: self.account_id.clone(),
            workspace_id: workspace_id.to_string(),
        }
    }
}

/// Mock account GitHub client.
#[derive(Clone)]
pub struct MockAccountGithubClient {
    state: Arc<Mutex<MockClientState>>,
    account_id: String,
}

impl MockAccountGithubClient {
    /// Mock repos method. Empty unless configured.
    pub fn repos(&self) -> Result<Vec<GithubRepo>, Error> {
        lock(&self.state).respond(
            "account_github.repos",
            vec![self.account_id.clone()],
            |_| Ok(Vec::new()),
        )
    }

    /// Mock connect method.
    pub fn connect(&self, github_access_token: &str) -> Result<(), Error> {
        lock(&self.state).respond(
            "account_github.connect",
            vec![self.account_id.clone(), github_access_token.to_string()],
            |_| Ok(()),
        )
    }

    /// Mock clone method.
    ///
    /// Succeeds locally with status `CLONING` and registers the new workspace.
    pub fn clone_repo(&self, path: &str) -> Result<CloneResult, Error> {
        let account_id = self.account_id.clone();
        lock(&self.state).respond(
            "account_github.clone_repo",
            vec![account_id.clone(), path.to_string()],
            |state| {
                let workspace = state.insert_workspace(&account_id, Some(json!({ "clonedFrom": path })));
                Ok(CloneResult {
                    workspace_id: workspace.id,
                    status: CloneStatus::Cloning,
                })
            },
        )
    }
}

/// Mock workspace collection client.
#[derive(Clone)]
pub struct MockWorkspacesClient {
    state: Arc<Mutex<MockClientState>>,
    account_id: String,
}

impl MockWorkspacesClient {
    /// Mock all method. Returns the account's stored workspaces.
    pub fn all(&self) -> Result<Vec<Workspace>, Error> {
        let account_id = self.account_id.clone();
        lock(&self.state).respond("workspaces.all", vec![account_id.clone()], |state| {
            Ok(state
                .workspaces
                .iter()
                .filter(|((account, _), _)| *account == account_id)
                .map(|(_, workspace)| workspace.clone())
                .collect())
        })
    }

    /// Mock create method. Stores a workspace with a generated ID.
    pub fn create(&self, meta: Option<Value>) -> Result<Workspace, Error> {
        let account_id = self.account_id.clone();
        let args = vec![account_id.clone(), format!("{meta:?}")];
        lock(&self.state).respond("workspaces.create", args, |state| {
            Ok(state.insert_workspace(&account_id, meta))
        })
    }
}

/// Mock single workspace client.
#[derive(Clone)]
pub struct MockWorkspaceClient {
    state: Arc<Mutex<MockClientState>>,
    account_id: String,
    workspace_id: String,
}

impl MockWorkspaceClient {
    fn key(&self) -> (String, String) {
        (self.account_id.clone(), self.workspace_id.clone())
    }

    /// Mock get method. Fails with `workspace-not-found` for unknown IDs.
    pub fn get(&self) -> Result<Workspace, Error> {
        let key = self.key();
        lock(&self.state).respond("workspace.get", vec![key.0.clone(), key.1.clone()], |state| {
            state
                .workspaces
                .get(&key)
                .cloned()
                .ok_or_else(|| ServerError::new("workspace-not-found").into())
        })
    }

    /// Mock remove method. Drops the workspace together with its files.
    pub fn remove(&self) -> Result<(), Error> {
        let key = self.key();
        lock(&self.state).respond("workspace.remove", vec![key.0.clone(), key.1.clone()], |state| {
            state
                .workspaces
                .remove(&key)
                .ok_or_else(|| Error::from(ServerError::new("workspace-not-found")))?;
            state.files.retain(|(a, w, _), _| (a, w) != (&key.0, &key.1));
            state.folders.retain(|(a, w, _)| (a, w) != (&key.0, &key.1));
            Ok(())
        })
    }

    /// Mock file client.
    #[must_use]
    pub fn file(&self, file_path: &str) -> MockFileClient {
        MockFileClient {
            state: Arc::clone(&self.state),
            key: (
                self.account_id.clone(),
                self.workspace_id.clone(),
                file_path.to_string(),
            ),
        }
    }

    /// Mock git client.
    #[must_use]
    pub fn git(&self) -> MockGitClient {
        MockGitClient {
            state: Arc::clone(&self.state),
            workspace: self.key(),
        }
    }
}

/// Mock file client.
#[derive(Clone)]
pub struct MockFileClient {
    state: Arc<Mutex<MockClientState>>,
    key: FileKey,
}

impl MockFileClient {
    fn args(&self) -> Vec<String> {
        vec![self.key.0.clone(), self.key.1.clone(), self.key.2.clone()]
    }

    /// Mock read method. Fails with `file-not-found` for unwritten paths.
    pub fn read(&self) -> Result<FileContent, Error> {
        let key = self.key.clone();
        lock(&self.state).respond("file.read", self.args(), |state| {
            state
                .files
                .get(&key)
                .map(|content| FileContent {
                    content: content.clone(),
                    extra: Map::new(),
                })
                .ok_or_else(|| ServerError::new("file-not-found").into())
        })
    }

    /// Mock write method.
    pub fn write(&self, content: &str) -> Result<(), Error> {
        let key = self.key.clone();
        let mut args = self.args();
        args.push(content.to_string());
        lock(&self.state).respond("file.write", args, |state| {
            state.files.insert(key, content.to_string());
            Ok(())
        })
    }

    /// Mock create_folder method.
    pub fn create_folder(&self) -> Result<(), Error> {
        let key = self.key.clone();
        lock(&self.state).respond("file.create_folder", self.args(), |state| {
            state.folders.insert(key);
            Ok(())
        })
    }
}

/// Mock git client. Returns `null` payloads unless configured.
#[derive(Clone)]
pub struct MockGitClient {
    state: Arc<Mutex<MockClientState>>,
    workspace: (String, String),
}

impl MockGitClient {
    fn call(&self, method: &str, mut args: Vec<String>) -> Result<Value, Error> {
        let mut full = vec![self.workspace.0.clone(), self.workspace.1.clone()];
        full.append(&mut args);
        lock(&self.state).respond(method, full, |_| Ok(Value::Null))
    }

    /// Mock status method.
    pub fn status(&self) -> Result<Value, Error> {
        self.call("git.status", Vec::new())
    }

    /// Mock diff method.
    pub fn diff(&self) -> Result<Value, Error> {
        self.call("git.diff", Vec::new())
    }

    /// Mock init method.
    pub fn init(&self) -> Result<Value, Error> {
        self.call("git.init", Vec::new())
    }

    /// Mock push method.
    pub fn push(&self) -> Result<Value, Error> {
        self.call("git.push", Vec::new())
    }

    /// Mock set_origin method.
    pub fn set_origin(&self, url: &str) -> Result<Value, Error> {
        self.call("git.set_origin", vec![url.to_string()])
    }
}

/// Mock account-independent GitHub client.
#[derive(Clone)]
pub struct MockGithubClient {
    state: Arc<Mutex<MockClientState>>,
}

impl MockGithubClient {
    /// Mock auth_by_code method.
    pub fn auth_by_code(&self, code: &str) -> Result<GithubAuth, Error> {
        lock(&self.state).respond("github.auth_by_code", vec![code.to_string()], |_| {
            Ok(GithubAuth {
                access_token: Some(MOCK_ACCESS_TOKEN.to_string()),
                extra: Map::new(),
            })
        })
    }

    /// Mock access_token_by_code method.
    pub fn access_token_by_code(&self, code: &str) -> Result<String, Error> {
        lock(&self.state).respond("github.access_token_by_code", vec![code.to_string()], |_| {
            Ok(MOCK_ACCESS_TOKEN.to_string())
        })
    }
}
