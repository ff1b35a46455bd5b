//! Vendor ports for a Docker daemon.

use super::domain::{DockerApiConfig, RegistryLogin};
use crate::providers::vendor::VendorResult;

/// Builds Docker API clients.
pub trait DockerRuntime: Send + Sync {
    /// Client produced by this runtime.
    type Client: DockerClient;

    /// Builds a client for the daemon described by `config`.
    ///
    /// # Errors
    ///
    /// Returns a vendor error when the client cannot be created.
    fn connect(&self, config: DockerApiConfig) -> VendorResult<Self::Client>;
}

/// Operations on a Docker API client.
pub trait DockerClient {
    /// Logs into a registry.
    ///
    /// # Errors
    ///
    /// Returns a vendor error when the registry refuses the credentials.
    fn login(&self, login: &RegistryLogin) -> VendorResult<()>;
}
