//! Store port for connection profile lookup.

use crate::connection::domain::{ConnectionId, ConnectionProfile};
use std::sync::Arc;
use thiserror::Error;

/// Result type for connection store operations.
pub type ConnectionStoreResult<T> = Result<T, ConnectionStoreError>;

/// Keyed, read-only lookup of connection profiles.
pub trait ConnectionStore: Send + Sync {
    /// Finds the profile registered under `id`.
    ///
    /// Returns `Ok(None)` when no profile exists.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionStoreError`] when the backing store cannot be read
    /// or holds data that does not form a valid profile.
    fn find(&self, id: &ConnectionId) -> ConnectionStoreResult<Option<ConnectionProfile>>;
}

impl<S: ConnectionStore + ?Sized> ConnectionStore for Arc<S> {
    fn find(&self, id: &ConnectionId) -> ConnectionStoreResult<Option<ConnectionProfile>> {
        (**self).find(id)
    }
}

impl<S: ConnectionStore + ?Sized> ConnectionStore for Box<S> {
    fn find(&self, id: &ConnectionId) -> ConnectionStoreResult<Option<ConnectionProfile>> {
        (**self).find(id)
    }
}

/// Errors returned by connection store implementations.
#[derive(Debug, Clone, Error)]
pub enum ConnectionStoreError {
    /// Stored data could not be reconstructed into a profile.
    #[error("invalid stored connection '{id}': {source}")]
    InvalidStoredData {
        /// Identifier of the offending entry.
        id: String,
        /// Underlying decoding or validation failure.
        source: Arc<dyn std::error::Error + Send + Sync>,
    },

    /// The backing store could not be read.
    #[error("connection store backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl ConnectionStoreError {
    /// Wraps a decoding or validation failure for the entry `id`.
    pub fn invalid_stored_data(
        id: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::InvalidStoredData {
            id: id.into(),
            source: Arc::new(err),
        }
    }

    /// Wraps a backend read failure.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
