//! Jenkins hook service.

use super::domain::{JenkinsHookConfig, JenkinsServerConfig, USE_HTTPS_KEY};
use super::ports::{JenkinsConnector, JenkinsServer};
use crate::connection::{domain::ConnectionProfile, ports::ConnectionStore};
use crate::hook::{
    domain::{ConfigurationError, HookResult, IntegrationError, ProfileField, require_field},
    ports::ClientRecipe,
    services::ConnectionHook,
};
use crate::providers::{credentials::BasicCredentials, vendor_failure};
use std::sync::Arc;
use tracing::info;

/// Builds Jenkins server handles from profiles.
#[derive(Debug, Clone)]
pub struct JenkinsRecipe<C> {
    connector: C,
}

impl<C: JenkinsConnector> ClientRecipe for JenkinsRecipe<C> {
    type Settings = JenkinsServerConfig;
    type Client = C::Server;

    fn service(&self) -> &'static str {
        "jenkins"
    }

    fn prepare(&self, profile: &ConnectionProfile) -> Result<Self::Settings, ConfigurationError> {
        let host = require_field(profile, ProfileField::Host)?;
        let scheme = if profile.extra().truthy(USE_HTTPS_KEY) {
            "https"
        } else {
            "http"
        };
        let port = profile
            .port()
            .map(|number| format!(":{number}"))
            .unwrap_or_default();
        Ok(JenkinsServerConfig {
            url: format!("{scheme}://{host}{port}"),
            credentials: profile.login().map(|login| {
                BasicCredentials::new(login, profile.password().map(str::to_owned))
            }),
        })
    }

    fn endpoint(&self, settings: &Self::Settings) -> String {
        settings.url.clone()
    }

    fn construct(&self, settings: Self::Settings) -> Result<Self::Client, IntegrationError> {
        self.connector
            .connect(settings)
            .map_err(|err| IntegrationError::new("failed to create jenkins server", err))
    }
}

/// Jenkins hook bound to one connection profile.
#[derive(Debug)]
pub struct JenkinsHook<S, C>
where
    S: ConnectionStore + ?Sized,
    C: JenkinsConnector,
{
    inner: ConnectionHook<S, JenkinsRecipe<C>>,
}

impl<S, C> JenkinsHook<S, C>
where
    S: ConnectionStore + ?Sized,
    C: JenkinsConnector,
{
    /// Creates an unconnected hook.
    #[must_use]
    pub fn new(store: Arc<S>, config: JenkinsHookConfig, connector: C) -> Self {
        Self {
            inner: ConnectionHook::new(store, config.connection_id, JenkinsRecipe { connector }),
        }
    }

    /// Returns the connection identifier.
    #[must_use]
    pub fn connection_id(&self) -> &str {
        self.inner.connection_id()
    }

    /// Returns `true` once the server handle has been built.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.inner.is_connected()
    }

    /// Returns the cached server handle, building it on first use.
    ///
    /// # Errors
    ///
    /// See [`ConnectionHook::get_client`].
    pub fn get_jenkins_server(&mut self) -> HookResult<&C::Server> {
        self.inner.get_client()
    }

    /// Reports whether a build is still running.
    ///
    /// With no build number, or `0`, the job's most recent build is checked.
    ///
    /// # Errors
    ///
    /// Returns the construction error, or an integration error when a query
    /// fails or the job has never been built.
    pub fn get_build_building_state(
        &mut self,
        job_name: &str,
        build_number: Option<u64>,
    ) -> HookResult<bool> {
        let server = self.get_jenkins_server()?;
        let number = match build_number.filter(|number| *number != 0) {
            Some(number) => number,
            None => {
                info!(job_name, "build number not given, using the latest build");
                let job = server
                    .job_info(job_name)
                    .map_err(vendor_failure("jenkins", "jenkins call failed"))?;
                job.last_build
                    .ok_or_else(|| {
                        IntegrationError::message(
                            "jenkins call failed",
                            format!("job '{job_name}' has no builds"),
                        )
                    })?
                    .number
            }
        };
        info!(job_name, build_number = number, "fetching build info");
        server
            .build_info(job_name, number)
            .map(|build| build.building)
            .map_err(vendor_failure("jenkins", "jenkins call failed"))
    }
}
