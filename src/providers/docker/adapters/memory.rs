//! Recording Docker runtime for tests.

use crate::providers::docker::{
    domain::{DockerApiConfig, RegistryLogin},
    ports::{DockerClient, DockerRuntime},
};
use crate::providers::vendor::{VendorError, VendorResult};
use std::sync::{Arc, RwLock};

#[derive(Debug, Default)]
struct DockerState {
    connections: Vec<DockerApiConfig>,
    logins: Vec<RegistryLogin>,
    refuse_connect: Option<String>,
    refuse_login: Option<String>,
}

/// Records daemon connections and registry logins.
///
/// Clones share state. Either step can be told to fail so tests can
/// exercise the error paths.
#[derive(Debug, Clone, Default)]
pub struct RecordingDockerRuntime {
    state: Arc<RwLock<DockerState>>,
}

impl RecordingDockerRuntime {
    /// Creates a runtime that accepts every request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every daemon connection fail with `message`.
    ///
    /// # Errors
    ///
    /// Returns a vendor error when lock acquisition fails.
    pub fn refuse_connections(&self, message: impl Into<String>) -> VendorResult<()> {
        let mut state = self.state.write().map_err(VendorError::lock)?;
        state.refuse_connect = Some(message.into());
        Ok(())
    }

    /// Makes every registry login fail with `message`.
    ///
    /// # Errors
    ///
    /// Returns a vendor error when lock acquisition fails.
    pub fn refuse_logins(&self, message: impl Into<String>) -> VendorResult<()> {
        let mut state = self.state.write().map_err(VendorError::lock)?;
        state.refuse_login = Some(message.into());
        Ok(())
    }

    /// Returns every configuration passed to [`DockerRuntime::connect`].
    ///
    /// # Errors
    ///
    /// Returns a vendor error when lock acquisition fails.
    pub fn connections(&self) -> VendorResult<Vec<DockerApiConfig>> {
        let state = self.state.read().map_err(VendorError::lock)?;
        Ok(state.connections.clone())
    }

    /// Returns every login attempt, successful or not.
    ///
    /// # Errors
    ///
    /// Returns a vendor error when lock acquisition fails.
    pub fn logins(&self) -> VendorResult<Vec<RegistryLogin>> {
        let state = self.state.read().map_err(VendorError::lock)?;
        Ok(state.logins.clone())
    }
}

impl DockerRuntime for RecordingDockerRuntime {
    type Client = RecordingDockerClient;

    fn connect(&self, config: DockerApiConfig) -> VendorResult<Self::Client> {
        let mut state = self.state.write().map_err(VendorError::lock)?;
        state.connections.push(config.clone());
        if let Some(message) = &state.refuse_connect {
            return Err(VendorError::rejected(message.clone()));
        }
        Ok(RecordingDockerClient {
            config,
            state: Arc::clone(&self.state),
        })
    }
}

/// Client produced by [`RecordingDockerRuntime`].
#[derive(Debug)]
pub struct RecordingDockerClient {
    config: DockerApiConfig,
    state: Arc<RwLock<DockerState>>,
}

impl RecordingDockerClient {
    /// Returns the daemon settings the client was built with.
    #[must_use]
    pub const fn config(&self) -> &DockerApiConfig {
        &self.config
    }
}

impl DockerClient for RecordingDockerClient {
    fn login(&self, login: &RegistryLogin) -> VendorResult<()> {
        let mut state = self.state.write().map_err(VendorError::lock)?;
        state.logins.push(login.clone());
        state
            .refuse_login
            .as_ref()
            .map_or(Ok(()), |message| Err(VendorError::rejected(message.clone())))
    }
}
