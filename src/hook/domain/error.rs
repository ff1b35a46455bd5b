//! Error types shared by every hook.

use crate::connection::{domain::ConnectionId, ports::ConnectionStoreError};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Result type for hook operations.
pub type HookResult<T> = Result<T, HookError>;

/// Profile fields a hook may require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    /// Host name or base URL.
    Host,
    /// Login or access key.
    Login,
    /// Password, token, or secret key.
    Password,
    /// Schema or path component.
    Schema,
}

impl ProfileField {
    /// Returns the lowercase field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Host => "host",
            Self::Login => "login",
            Self::Password => "password",
            Self::Schema => "schema",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Caller or stored-data problems detected before any vendor call.
#[derive(Debug, Clone, Error)]
pub enum ConfigurationError {
    /// The hook was built without a connection identifier.
    #[error("a connection id is required")]
    MissingConnectionId,

    /// The store holds no profile for the identifier.
    #[error("connection '{0}' is not defined")]
    ConnectionNotFound(ConnectionId),

    /// A profile field required by the hook is absent.
    #[error("connection '{connection_id}' has no {field}")]
    MissingField {
        /// Profile identifier.
        connection_id: ConnectionId,
        /// Absent field.
        field: ProfileField,
    },

    /// A caller-supplied hook option is absent.
    #[error("{service} hook requires the '{option}' option")]
    MissingOption {
        /// Service the hook wraps.
        service: &'static str,
        /// Option name.
        option: &'static str,
    },

    /// A supplied value failed validation.
    #[error("invalid {name}: {reason}")]
    InvalidValue {
        /// Name of the offending value.
        name: String,
        /// Validation failure description.
        reason: String,
    },

    /// The connection store could not be read.
    #[error(transparent)]
    Store(#[from] ConnectionStoreError),
}

impl ConfigurationError {
    /// Builds an [`ConfigurationError::InvalidValue`].
    pub fn invalid_value(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// A failure raised by a vendor client or its constructor.
///
/// The vendor error is kept as the `source` so callers can walk the chain;
/// vendor types themselves never cross the hook boundary. When a source is
/// present the rendered message holds only the context, leaving the vendor
/// text to the next link of the chain.
#[derive(Debug, Clone)]
pub struct IntegrationError {
    context: String,
    message: String,
    source: Option<Arc<dyn std::error::Error + Send + Sync>>,
}

impl IntegrationError {
    /// Wraps a vendor error under `context`.
    pub fn new(
        context: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            context: context.into(),
            message: err.to_string(),
            source: Some(Arc::new(err)),
        }
    }

    /// Creates an error with no underlying vendor error.
    pub fn message(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Returns the operation that failed.
    #[must_use]
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Returns the original failure message.
    #[must_use]
    pub fn detail(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for IntegrationError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.source.is_some() {
            formatter.write_str(&self.context)
        } else {
            write!(formatter, "{}: {}", self.context, self.message)
        }
    }
}

impl std::error::Error for IntegrationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|err| err as &(dyn std::error::Error + 'static))
    }
}

/// Any failure surfaced by a hook.
#[derive(Debug, Clone, Error)]
pub enum HookError {
    /// The profile, options, or store were unusable.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// The vendor client failed.
    #[error(transparent)]
    Integration(#[from] IntegrationError),
}

impl HookError {
    /// Returns `true` for configuration failures.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Returns `true` for integration failures.
    #[must_use]
    pub const fn is_integration(&self) -> bool {
        matches!(self, Self::Integration(_))
    }
}

impl From<ConnectionStoreError> for HookError {
    fn from(value: ConnectionStoreError) -> Self {
        Self::Configuration(ConfigurationError::Store(value))
    }
}
