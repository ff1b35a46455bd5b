//! Environment-variable connection store.

use super::models::StoredConnection;
use crate::connection::{
    domain::{ConnectionId, ConnectionProfile},
    ports::{ConnectionStore, ConnectionStoreError, ConnectionStoreResult},
};
use std::fmt;
use std::sync::Arc;

/// Default variable prefix; `HOOKWRIGHT_CONN_JIRA_DEFAULT` holds `jira_default`.
pub const DEFAULT_ENV_PREFIX: &str = "HOOKWRIGHT_CONN_";

type Lookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Reads profiles from variables named `<prefix><ID uppercased>`.
///
/// A variable holds either a connection URI or a JSON object of fields.
/// The lookup function defaults to the process environment and may be
/// replaced for deterministic tests.
#[derive(Clone)]
pub struct EnvConnectionStore {
    prefix: String,
    lookup: Lookup,
}

impl EnvConnectionStore {
    /// Creates a store reading the process environment with `prefix`.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::with_lookup(prefix, |name| std::env::var(name).ok())
    }

    /// Creates a store reading variables through `lookup`.
    #[must_use]
    pub fn with_lookup(
        prefix: impl Into<String>,
        lookup: impl Fn(&str) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            lookup: Arc::new(lookup),
        }
    }

    /// Returns the variable name consulted for `id`.
    #[must_use]
    pub fn variable_name(&self, id: &ConnectionId) -> String {
        format!("{}{}", self.prefix, id.as_str().to_uppercase())
    }
}

impl Default for EnvConnectionStore {
    fn default() -> Self {
        Self::new(DEFAULT_ENV_PREFIX)
    }
}

impl fmt::Debug for EnvConnectionStore {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("EnvConnectionStore")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

impl ConnectionStore for EnvConnectionStore {
    fn find(&self, id: &ConnectionId) -> ConnectionStoreResult<Option<ConnectionProfile>> {
        let Some(value) = (self.lookup)(&self.variable_name(id)) else {
            return Ok(None);
        };
        let stored = StoredConnection::from_text(&value)
            .map_err(|err| ConnectionStoreError::invalid_stored_data(id.as_str(), err))?;
        stored
            .into_profile(id.clone())
            .map(Some)
            .map_err(|err| ConnectionStoreError::invalid_stored_data(id.as_str(), err))
    }
}
