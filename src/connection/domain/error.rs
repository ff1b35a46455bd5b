//! Error types for connection profile validation and parsing.

use thiserror::Error;

/// Errors returned while constructing connection domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConnectionDomainError {
    /// The connection identifier is empty after trimming.
    #[error("connection id must not be empty")]
    EmptyConnectionId,

    /// The connection type tag is empty after trimming.
    #[error("connection type must not be empty")]
    EmptyConnectionType,

    /// A connection URI could not be parsed.
    #[error("invalid connection URI: {0}")]
    InvalidUri(String),

    /// A port value is not a valid TCP port.
    #[error("invalid port '{0}'")]
    InvalidPort(String),

    /// A field-form entry is malformed.
    #[error("invalid connection fields: {0}")]
    InvalidFields(String),

    /// The extra options document is not a JSON object.
    #[error("extra options must be a JSON object: {0}")]
    InvalidExtra(String),
}
