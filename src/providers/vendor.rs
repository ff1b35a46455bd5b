//! Error type returned by vendor ports.

use std::sync::Arc;
use thiserror::Error;

/// Result type for vendor port calls.
pub type VendorResult<T> = Result<T, VendorError>;

/// Failure reported by a vendor client.
///
/// Hooks never return this type directly; they wrap it in an
/// [`IntegrationError`](crate::hook::domain::IntegrationError).
#[derive(Debug, Clone, Error)]
pub enum VendorError {
    /// The service answered but refused or could not serve the request.
    #[error("{0}")]
    Rejected(String),

    /// The service could not be reached or answered with unusable data.
    #[error("{0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl VendorError {
    /// Creates a rejection with a service-supplied message.
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }

    /// Wraps a transport or decoding failure.
    #[must_use]
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Wraps a poisoned-lock failure from an in-memory adapter.
    pub(crate) fn lock(err: impl std::fmt::Display) -> Self {
        Self::transport(std::io::Error::other(err.to_string()))
    }
}
