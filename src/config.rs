//! Settings for assembling a connection store outside of tests.
//!
//! A settings file is a JSON document such as:
//!
//! ```json
//! {
//!   "connections": {
//!     "env_prefix": "HOOKWRIGHT_CONN_",
//!     "connections_file": "/etc/hookwright/connections.json"
//!   },
//!   "log_filter": "hookwright=debug"
//! }
//! ```
//!
//! Every field is optional.

use crate::connection::adapters::{
    DEFAULT_ENV_PREFIX, EnvConnectionStore, JsonFileConnectionStore, LayeredConnectionStore,
};
use crate::connection::ports::ConnectionStoreError;
use crate::fs_utils;
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Log filter used when neither `RUST_LOG` nor the settings file set one.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Failure to load a settings file.
#[derive(Debug, Clone, Error)]
pub enum SettingsError {
    /// The file could not be read.
    #[error("failed to read settings file '{path}': {source}")]
    Read {
        /// Settings file path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: Arc<std::io::Error>,
    },

    /// The file is not a valid settings document.
    #[error("failed to parse settings file '{path}': {source}")]
    Parse {
        /// Settings file path.
        path: Utf8PathBuf,
        /// Underlying decoding error.
        source: Arc<serde_json::Error>,
    },
}

/// Where connection profiles are looked up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionSourceSettings {
    /// Prefix of the environment variables holding profiles.
    pub env_prefix: String,
    /// Optional JSON document of profiles, consulted after the environment.
    pub connections_file: Option<Utf8PathBuf>,
}

impl Default for ConnectionSourceSettings {
    fn default() -> Self {
        Self {
            env_prefix: DEFAULT_ENV_PREFIX.to_owned(),
            connections_file: None,
        }
    }
}

impl ConnectionSourceSettings {
    /// Assembles the layered store: environment first, then the file.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionStoreError::Backend`] when the connections file
    /// cannot be read or parsed.
    pub fn build_store(&self) -> Result<LayeredConnectionStore, ConnectionStoreError> {
        let mut layered = LayeredConnectionStore::new()
            .with_layer("env", EnvConnectionStore::new(self.env_prefix.clone()));
        if let Some(path) = &self.connections_file {
            layered.push(path.as_str(), JsonFileConnectionStore::open(path)?);
        }
        Ok(layered)
    }
}

/// Settings for the `connection_probe` binary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeSettings {
    /// Connection sources.
    pub connections: ConnectionSourceSettings,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: Option<String>,
}

impl ProbeSettings {
    /// Loads settings from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when the file cannot be read or parsed.
    pub fn load(path: &Utf8Path) -> Result<Self, SettingsError> {
        let text = fs_utils::read_to_string(path).map_err(|err| SettingsError::Read {
            path: path.to_owned(),
            source: Arc::new(err),
        })?;
        Self::from_json_str(path, &text)
    }

    /// Parses settings already read from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Parse`] when the document is invalid.
    pub fn from_json_str(path: &Utf8Path, text: &str) -> Result<Self, SettingsError> {
        serde_json::from_str(text).map_err(|err| SettingsError::Parse {
            path: path.to_owned(),
            source: Arc::new(err),
        })
    }

    /// Returns the configured log filter or [`DEFAULT_LOG_FILTER`].
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
