//! Docker hook service.

use super::domain::{
    DockerApiConfig, DockerClientSettings, DockerHookConfig, EMAIL_KEY, REAUTH_KEY,
    RegistryLogin, reauth_enabled,
};
use super::ports::{DockerClient, DockerRuntime};
use crate::connection::{domain::ConnectionProfile, ports::ConnectionStore};
use crate::hook::{
    domain::{ConfigurationError, HookResult, IntegrationError, ProfileField, require_field},
    ports::ClientRecipe,
    services::ConnectionHook,
};
use std::sync::Arc;
use std::time::Duration;

const SERVICE: &str = "docker";

/// Builds a Docker client and logs it into the profile's registry.
///
/// The profile must carry a host and a login. A client whose login fails is
/// dropped.
#[derive(Debug, Clone)]
pub struct DockerRecipe<R> {
    runtime: R,
    api: DockerApiConfig,
}

impl<R: DockerRuntime> ClientRecipe for DockerRecipe<R> {
    type Settings = DockerClientSettings;
    type Client = R::Client;

    fn service(&self) -> &'static str {
        SERVICE
    }

    fn prepare(&self, profile: &ConnectionProfile) -> Result<Self::Settings, ConfigurationError> {
        let registry = profile
            .host_with_port()
            .ok_or_else(|| ConfigurationError::MissingField {
                connection_id: profile.id().clone(),
                field: ProfileField::Host,
            })?;
        let username = require_field(profile, ProfileField::Login)?;
        let extra = profile.extra();
        Ok(DockerClientSettings {
            api: self.api.clone(),
            login: RegistryLogin {
                username: username.to_owned(),
                password: profile.password().map(str::to_owned),
                registry,
                reauth: reauth_enabled(extra.get_str(REAUTH_KEY).as_deref()),
                email: extra.get_str(EMAIL_KEY).map(std::borrow::Cow::into_owned),
            },
        })
    }

    fn endpoint(&self, settings: &Self::Settings) -> String {
        settings.api.base_url.clone()
    }

    fn construct(&self, settings: Self::Settings) -> Result<Self::Client, IntegrationError> {
        let DockerClientSettings { api, login } = settings;
        let client = self
            .runtime
            .connect(api)
            .map_err(|err| IntegrationError::new("failed to create docker client", err))?;
        client
            .login(&login)
            .map_err(|err| IntegrationError::new("could not log into registry", err))?;
        Ok(client)
    }
}

/// Docker hook bound to one connection profile.
#[derive(Debug)]
pub struct DockerHook<S, R>
where
    S: ConnectionStore + ?Sized,
    R: DockerRuntime,
{
    inner: ConnectionHook<S, DockerRecipe<R>>,
}

impl<S, R> DockerHook<S, R>
where
    S: ConnectionStore + ?Sized,
    R: DockerRuntime,
{
    /// Creates an unconnected hook.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingOption`] when the configuration
    /// lacks `base_url` or `version`.
    pub fn new(store: Arc<S>, config: DockerHookConfig, runtime: R) -> Result<Self, ConfigurationError> {
        let DockerHookConfig {
            connection_id,
            base_url,
            version,
            tls,
            timeout_secs,
        } = config;
        let api = DockerApiConfig {
            base_url: base_url.ok_or(ConfigurationError::MissingOption {
                service: SERVICE,
                option: "base_url",
            })?,
            version: version.ok_or(ConfigurationError::MissingOption {
                service: SERVICE,
                option: "version",
            })?,
            tls,
            timeout: timeout_secs.map(Duration::from_secs),
        };
        Ok(Self {
            inner: ConnectionHook::new(store, connection_id, DockerRecipe { runtime, api }),
        })
    }

    /// Returns the connection identifier.
    #[must_use]
    pub fn connection_id(&self) -> &str {
        self.inner.connection_id()
    }

    /// Returns `true` once a logged-in client has been cached.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.inner.is_connected()
    }

    /// Returns the cached client, building and logging it in on first use.
    ///
    /// # Errors
    ///
    /// See [`ConnectionHook::get_client`]. A failed registry login is an
    /// integration error.
    pub fn get_client(&mut self) -> HookResult<&R::Client> {
        self.inner.get_client()
    }
}
