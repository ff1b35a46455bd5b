//! Jenkins hook configuration and job data.

use crate::providers::credentials::BasicCredentials;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Extra key selecting `https` when truthy.
pub const USE_HTTPS_KEY: &str = "use_https";

/// Caller-supplied Jenkins hook configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JenkinsHookConfig {
    /// Connection profile identifier.
    pub connection_id: String,
}

impl JenkinsHookConfig {
    /// Creates a configuration.
    #[must_use]
    pub fn new(connection_id: impl Into<String>) -> Self {
        Self {
            connection_id: connection_id.into(),
        }
    }
}

/// Settings handed to a [`JenkinsConnector`](super::ports::JenkinsConnector).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JenkinsServerConfig {
    /// `http[s]://host[:port]`.
    pub url: String,
    /// Credentials, present when the profile has a login.
    pub credentials: Option<BasicCredentials>,
}

/// Reference to a build inside a job description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildRef {
    /// Build number.
    pub number: u64,
}

/// Job description returned by the JSON API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobInfo {
    /// Job name.
    pub name: String,
    /// Most recent build, absent when the job never ran.
    #[serde(default)]
    pub last_build: Option<BuildRef>,
}

/// Build description returned by the JSON API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildInfo {
    /// Build number.
    pub number: u64,
    /// `true` while the build is still running.
    pub building: bool,
    /// Final result such as `SUCCESS`, absent while building.
    #[serde(default)]
    pub result: Option<String>,
    /// Start time.
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl BuildInfo {
    /// Creates a build record with no result or timestamp.
    #[must_use]
    pub const fn new(number: u64, building: bool) -> Self {
        Self {
            number,
            building,
            result: None,
            timestamp: None,
        }
    }
}
