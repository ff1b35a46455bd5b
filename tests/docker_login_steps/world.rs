//! Shared world state for Docker registry login BDD scenarios.

use eyre::eyre;
use hookwright::connection::domain::ConnectionProfile;
use hookwright::hook::domain::{ConfigurationError, HookError};
use hookwright::providers::docker::{adapters::RecordingDockerRuntime, domain::RegistryLogin};
use rstest::fixture;

/// Scenario world for Docker login behaviour tests.
#[derive(Default)]
pub struct DockerWorld {
    /// Profile being assembled by `Given` steps.
    pub profile: Option<ConnectionProfile>,
    /// Runtime shared with the hook under test.
    pub runtime: RecordingDockerRuntime,
    /// Result of the last `get_client` call.
    pub client_result: Option<Result<(), HookError>>,
    /// Error raised while constructing the hook.
    pub construction_error: Option<ConfigurationError>,
}

impl DockerWorld {
    /// Replaces the pending profile with `update(profile)`.
    ///
    /// # Errors
    ///
    /// Returns an error when no profile has been started.
    pub fn update_profile(
        &mut self,
        update: impl FnOnce(ConnectionProfile) -> ConnectionProfile,
    ) -> Result<(), eyre::Report> {
        let current = self
            .profile
            .take()
            .ok_or_else(|| eyre!("no docker connection in scenario world"))?;
        self.profile = Some(update(current));
        Ok(())
    }

    /// Returns the only registry login recorded so far.
    ///
    /// # Errors
    ///
    /// Returns an error unless exactly one login was attempted.
    pub fn single_login(&self) -> Result<RegistryLogin, eyre::Report> {
        let logins = self
            .runtime
            .logins()
            .map_err(|err| eyre!("logins failed: {err}"))?;
        eyre::ensure!(logins.len() == 1, "expected one login, found {}", logins.len());
        logins
            .into_iter()
            .next()
            .ok_or_else(|| eyre!("no login recorded"))
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DockerWorld {
    DockerWorld::default()
}
