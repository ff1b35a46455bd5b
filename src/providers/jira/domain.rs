//! Jira hook configuration and client settings.

use crate::connection::domain::ExtraOptions;
use crate::providers::credentials::BasicCredentials;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Extra key that disables TLS certificate verification when `"false"`.
pub const VERIFY_KEY: &str = "verify";
/// Extra key that skips the session check when `"false"`.
pub const VALIDATE_KEY: &str = "validate";
/// Extra key that skips the server-info fetch when `"false"`.
pub const SERVER_INFO_KEY: &str = "get_server_info";

/// Caller-supplied Jira hook configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JiraHookConfig {
    /// Connection profile identifier.
    pub connection_id: String,
    /// Proxy URLs keyed by scheme (`http`, `https`, or `all`).
    ///
    /// These replace any proxy the profile would otherwise imply.
    #[serde(default)]
    pub proxies: BTreeMap<String, String>,
}

impl JiraHookConfig {
    /// Creates a configuration with no proxies.
    #[must_use]
    pub fn new(connection_id: impl Into<String>) -> Self {
        Self {
            connection_id: connection_id.into(),
            proxies: BTreeMap::new(),
        }
    }

    /// Adds a proxy for `scheme`.
    #[must_use]
    pub fn with_proxy(mut self, scheme: impl Into<String>, url: impl Into<String>) -> Self {
        self.proxies.insert(scheme.into(), url.into());
        self
    }
}

/// Settings handed to a [`JiraConnector`](super::ports::JiraConnector).
#[derive(Debug, Clone, PartialEq)]
pub struct JiraClientConfig {
    /// Server base URL.
    pub server: String,
    /// Basic-auth credentials, present when the profile has a login.
    pub basic_auth: Option<BasicCredentials>,
    /// Verify TLS certificates.
    pub verify: bool,
    /// Check the session while connecting.
    pub validate: bool,
    /// Fetch server information while connecting.
    pub get_server_info: bool,
    /// Remaining profile extras, passed to the client untouched.
    pub options: ExtraOptions,
    /// Proxy URLs keyed by scheme.
    pub proxies: BTreeMap<String, String>,
}

/// A Jira issue as returned by the REST API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JiraIssue {
    /// Numeric issue identifier.
    pub id: String,
    /// Human-readable key such as `OPS-42`.
    pub key: String,
    /// Issue fields.
    #[serde(default)]
    pub fields: Map<String, Value>,
}
