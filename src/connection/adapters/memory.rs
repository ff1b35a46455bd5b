//! In-memory connection store.

use crate::connection::{
    domain::{ConnectionId, ConnectionProfile},
    ports::{ConnectionStore, ConnectionStoreError, ConnectionStoreResult},
};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory connection store.
///
/// Suitable for tests and for embedding callers that assemble profiles in
/// code. Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryConnectionStore {
    state: Arc<RwLock<HashMap<ConnectionId, ConnectionProfile>>>,
}

impl InMemoryConnectionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `profiles`.
    ///
    /// Later profiles replace earlier ones with the same identifier.
    #[must_use]
    pub fn with_profiles(profiles: impl IntoIterator<Item = ConnectionProfile>) -> Self {
        let map = profiles
            .into_iter()
            .map(|profile| (profile.id().clone(), profile))
            .collect();
        Self {
            state: Arc::new(RwLock::new(map)),
        }
    }

    /// Inserts or replaces a profile, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns a backend error when lock acquisition fails.
    pub fn merge(
        &self,
        profile: ConnectionProfile,
    ) -> ConnectionStoreResult<Option<ConnectionProfile>> {
        let mut state = self.state.write().map_err(|err| {
            ConnectionStoreError::backend(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.insert(profile.id().clone(), profile))
    }

    /// Removes a profile, returning it when it existed.
    ///
    /// # Errors
    ///
    /// Returns a backend error when lock acquisition fails.
    pub fn remove(&self, id: &ConnectionId) -> ConnectionStoreResult<Option<ConnectionProfile>> {
        let mut state = self.state.write().map_err(|err| {
            ConnectionStoreError::backend(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.remove(id))
    }
}

impl ConnectionStore for InMemoryConnectionStore {
    fn find(&self, id: &ConnectionId) -> ConnectionStoreResult<Option<ConnectionProfile>> {
        let state = self.state.read().map_err(|err| {
            ConnectionStoreError::backend(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.get(id).cloned())
    }
}
