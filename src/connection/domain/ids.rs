//! Identifier and tag types for connection profiles.

use super::ConnectionDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated logical connection identifier.
///
/// Identifiers are unique per store. Surrounding whitespace is trimmed but
/// case is preserved, so `"Jira_Prod"` and `"jira_prod"` are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ConnectionId(String);

impl ConnectionId {
    /// Creates a validated connection identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionDomainError::EmptyConnectionId`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, ConnectionDomainError> {
        let normalized = value.into().trim().to_owned();
        if normalized.is_empty() {
            return Err(ConnectionDomainError::EmptyConnectionId);
        }
        Ok(Self(normalized))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ConnectionId {
    type Error = ConnectionDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ConnectionId> for String {
    fn from(value: ConnectionId) -> Self {
        value.0
    }
}

impl AsRef<str> for ConnectionId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Connection type tag such as `jira`, `docker`, or `aws`.
///
/// URI schemes use dashes where tags use underscores; the tag is stored in
/// its underscore form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ConnectionType(String);

impl ConnectionType {
    /// Creates a connection type tag.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionDomainError::EmptyConnectionType`] when the value
    /// is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, ConnectionDomainError> {
        let normalized = value.into().trim().replace('-', "_");
        if normalized.is_empty() {
            return Err(ConnectionDomainError::EmptyConnectionType);
        }
        Ok(Self(normalized))
    }

    /// Returns the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ConnectionType {
    type Error = ConnectionDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ConnectionType> for String {
    fn from(value: ConnectionType) -> Self {
        value.0
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
