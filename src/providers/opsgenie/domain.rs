//! Opsgenie hook configuration and alert payloads.

use crate::hook::domain::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// API URL used when the profile has no host.
pub const DEFAULT_API_URL: &str = "https://api.opsgenie.com";

/// Longest accepted alert message, in characters.
pub const MAX_MESSAGE_CHARS: usize = 130;

/// Caller-supplied Opsgenie hook configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpsgenieHookConfig {
    /// Connection profile identifier.
    pub connection_id: String,
}

impl OpsgenieHookConfig {
    /// Creates a configuration.
    #[must_use]
    pub fn new(connection_id: impl Into<String>) -> Self {
        Self {
            connection_id: connection_id.into(),
        }
    }
}

/// Settings handed to an [`OpsgenieConnector`](super::ports::OpsgenieConnector).
#[derive(Clone, PartialEq, Eq)]
pub struct OpsgenieClientConfig {
    /// API base URL.
    pub api_url: String,
    /// API key sent as `GenieKey`.
    pub api_key: String,
}

impl fmt::Debug for OpsgenieClientConfig {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("OpsgenieClientConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &"***")
            .finish()
    }
}

/// Alert priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    /// Critical.
    P1,
    /// High.
    P2,
    /// Moderate.
    #[default]
    P3,
    /// Low.
    P4,
    /// Informational.
    P5,
}

/// How [`close_alert`](super::ports::OpsgenieAlerts::close_alert) interprets
/// the identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierType {
    /// Alert identifier.
    #[default]
    Id,
    /// Caller-defined alias.
    Alias,
    /// Short numeric identifier.
    Tiny,
}

impl IdentifierType {
    /// Returns the query-parameter spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Alias => "alias",
            Self::Tiny => "tiny",
        }
    }
}

/// Request body for creating an alert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAlertPayload {
    /// Alert text, required and at most 130 characters.
    pub message: String,
    /// Deduplication key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Teams or users to notify.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub responders: Vec<Responder>,
    /// Teams or users that can see the alert.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub visible_to: Vec<Responder>,
    /// Custom action names.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<String>,
    /// Tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Custom key/value properties.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub details: BTreeMap<String, String>,
    /// Affected entity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
    /// Alert source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Priority.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    /// Requesting user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Note attached on creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl CreateAlertPayload {
    /// Creates a payload with only a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the alias.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Checks the message is present and short enough.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidValue`] for a blank or overlong
    /// message.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.message.trim().is_empty() {
            return Err(ConfigurationError::invalid_value(
                "message",
                "alert message must not be empty",
            ));
        }
        let length = self.message.chars().count();
        if length > MAX_MESSAGE_CHARS {
            return Err(ConfigurationError::invalid_value(
                "message",
                format!("alert message has {length} characters, limit is {MAX_MESSAGE_CHARS}"),
            ));
        }
        Ok(())
    }
}

/// A team, user, escalation, or schedule reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Responder {
    /// `team`, `user`, `escalation`, or `schedule`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Name, used when no identifier is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Request body for closing an alert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloseAlertPayload {
    /// Requesting user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Request source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Note attached on close.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Asynchronous request acknowledgement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertResponse {
    /// Status text.
    pub result: String,
    /// Server-side processing time in seconds.
    #[serde(default)]
    pub took: f64,
    /// Identifier for polling the request status.
    pub request_id: Uuid,
}
