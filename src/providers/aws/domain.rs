//! AWS hook configuration, client settings, and EMR data.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Extra key holding the default region.
pub const REGION_KEY: &str = "region_name";
/// Extra key holding a temporary session token.
pub const SESSION_TOKEN_KEY: &str = "aws_session_token";
/// Extra key overriding the service endpoint.
pub const ENDPOINT_URL_KEY: &str = "endpoint_url";

/// AWS service a client is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AwsService {
    /// Elastic `MapReduce`.
    Emr,
    /// Relational Database Service.
    Rds,
}

impl AwsService {
    /// Returns the service name used by the SDK.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Emr => "emr",
            Self::Rds => "rds",
        }
    }
}

impl fmt::Display for AwsService {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Caller-supplied AWS hook configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwsHookConfig {
    /// Credentials profile identifier.
    pub connection_id: String,
    /// Region override, taking precedence over the profile's `region_name`.
    #[serde(default)]
    pub region_name: Option<String>,
}

impl AwsHookConfig {
    /// Creates a configuration with no region override.
    #[must_use]
    pub fn new(connection_id: impl Into<String>) -> Self {
        Self {
            connection_id: connection_id.into(),
            region_name: None,
        }
    }

    /// Sets the region override.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region_name = Some(region.into());
        self
    }
}

/// Caller-supplied EMR hook configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmrHookConfig {
    /// Credentials profile identifier.
    pub connection_id: String,
    /// Region override.
    #[serde(default)]
    pub region_name: Option<String>,
    /// Profile whose extra map is the job-flow template.
    #[serde(default)]
    pub emr_connection_id: Option<String>,
}

impl EmrHookConfig {
    /// Creates a configuration with no template profile.
    #[must_use]
    pub fn new(connection_id: impl Into<String>) -> Self {
        Self {
            connection_id: connection_id.into(),
            region_name: None,
            emr_connection_id: None,
        }
    }

    /// Sets the template profile.
    #[must_use]
    pub fn with_emr_connection(mut self, emr_connection_id: impl Into<String>) -> Self {
        self.emr_connection_id = Some(emr_connection_id.into());
        self
    }

    /// Sets the region override.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region_name = Some(region.into());
        self
    }
}

/// Settings handed to an [`AwsConnector`](super::ports::AwsConnector).
///
/// Absent credentials or region leave the SDK's default chain in charge.
#[derive(Clone, PartialEq, Eq)]
pub struct AwsClientConfig {
    /// Target service.
    pub service: AwsService,
    /// Access key identifier.
    pub access_key_id: Option<String>,
    /// Secret access key.
    pub secret_access_key: Option<String>,
    /// Temporary session token.
    pub session_token: Option<String>,
    /// Region.
    pub region: Option<String>,
    /// Endpoint override.
    pub endpoint_url: Option<String>,
}

impl fmt::Debug for AwsClientConfig {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("AwsClientConfig")
            .field("service", &self.service)
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &self.secret_access_key.as_ref().map(|_| "***"))
            .field("session_token", &self.session_token.as_ref().map(|_| "***"))
            .field("region", &self.region)
            .field("endpoint_url", &self.endpoint_url)
            .finish()
    }
}

/// EMR cluster lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClusterState {
    /// Provisioning instances.
    Starting,
    /// Running bootstrap actions.
    Bootstrapping,
    /// Running steps.
    Running,
    /// Idle and kept alive.
    Waiting,
    /// Shutting down.
    Terminating,
    /// Shut down.
    Terminated,
    /// Shut down after a failure.
    TerminatedWithErrors,
}

/// Cluster listing entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClusterSummary {
    /// Cluster identifier, `j-...`.
    pub id: String,
    /// Cluster name.
    pub name: String,
    /// Current state.
    pub state: ClusterState,
}

/// Result of launching a job flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobFlow {
    /// Identifier of the new cluster.
    pub job_flow_id: String,
}
