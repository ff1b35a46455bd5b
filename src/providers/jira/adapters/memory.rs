//! In-memory Jira connector for tests.

use crate::providers::jira::{
    domain::{JiraClientConfig, JiraIssue},
    ports::{JiraClient, JiraConnector},
};
use crate::providers::vendor::{VendorError, VendorResult};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

#[derive(Debug, Default)]
struct JiraState {
    connections: Vec<JiraClientConfig>,
    issues: BTreeMap<String, JiraIssue>,
    reject_with: Option<String>,
}

/// Records every connection attempt and serves issues from memory.
///
/// Clones share state, so a test can keep one handle for assertions while
/// the hook owns another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryJiraConnector {
    state: Arc<RwLock<JiraState>>,
}

impl InMemoryJiraConnector {
    /// Creates a connector that accepts every connection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a connector that rejects every connection with `message`.
    #[must_use]
    pub fn rejecting(message: impl Into<String>) -> Self {
        let connector = Self::new();
        if let Ok(mut state) = connector.state.write() {
            state.reject_with = Some(message.into());
        }
        connector
    }

    /// Stores an issue served by connected clients.
    ///
    /// # Errors
    ///
    /// Returns a vendor error when lock acquisition fails.
    pub fn insert_issue(&self, issue: JiraIssue) -> VendorResult<()> {
        let mut state = self.state.write().map_err(VendorError::lock)?;
        state.issues.insert(issue.key.clone(), issue);
        Ok(())
    }

    /// Returns every configuration passed to [`JiraConnector::connect`].
    ///
    /// # Errors
    ///
    /// Returns a vendor error when lock acquisition fails.
    pub fn connections(&self) -> VendorResult<Vec<JiraClientConfig>> {
        let state = self.state.read().map_err(VendorError::lock)?;
        Ok(state.connections.clone())
    }
}

impl JiraConnector for InMemoryJiraConnector {
    type Client = InMemoryJiraClient;

    fn connect(&self, config: JiraClientConfig) -> VendorResult<Self::Client> {
        let mut state = self.state.write().map_err(VendorError::lock)?;
        state.connections.push(config.clone());
        if let Some(message) = &state.reject_with {
            return Err(VendorError::rejected(message.clone()));
        }
        Ok(InMemoryJiraClient {
            config,
            state: Arc::clone(&self.state),
        })
    }
}

/// Client produced by [`InMemoryJiraConnector`].
#[derive(Debug)]
pub struct InMemoryJiraClient {
    config: JiraClientConfig,
    state: Arc<RwLock<JiraState>>,
}

impl InMemoryJiraClient {
    /// Returns the settings the client was built with.
    #[must_use]
    pub const fn config(&self) -> &JiraClientConfig {
        &self.config
    }
}

impl JiraClient for InMemoryJiraClient {
    fn server(&self) -> &str {
        &self.config.server
    }

    fn issue(&self, key: &str) -> VendorResult<JiraIssue> {
        let state = self.state.read().map_err(VendorError::lock)?;
        state
            .issues
            .get(key)
            .cloned()
            .ok_or_else(|| VendorError::rejected(format!("issue {key} does not exist")))
    }
}
