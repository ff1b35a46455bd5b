//! AWS hook services: the generic client hook plus EMR and RDS wrappers.

use super::domain::{
    AwsClientConfig, AwsHookConfig, AwsService, ClusterState, ENDPOINT_URL_KEY, EmrHookConfig,
    JobFlow, REGION_KEY, SESSION_TOKEN_KEY,
};
use super::ports::{AwsConnector, EmrApi};
use crate::connection::{domain::ConnectionProfile, ports::ConnectionStore};
use crate::hook::{
    domain::{ConfigurationError, HookResult, IntegrationError},
    ports::ClientRecipe,
    services::{ConnectionHook, resolve_profile},
};
use crate::providers::vendor_failure;
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::sync::Arc;
use tracing::debug;

/// Builds AWS service clients from profiles.
///
/// Login and password are the access key pair. Region precedence is the
/// caller override, then the profile's `region_name` extra, then the SDK
/// default.
#[derive(Debug, Clone)]
pub struct AwsRecipe<C> {
    connector: C,
    service: AwsService,
    region_override: Option<String>,
}

impl<C: AwsConnector> ClientRecipe for AwsRecipe<C> {
    type Settings = AwsClientConfig;
    type Client = C::Client;

    fn service(&self) -> &'static str {
        self.service.as_str()
    }

    fn prepare(&self, profile: &ConnectionProfile) -> Result<Self::Settings, ConfigurationError> {
        let extra = profile.extra();
        let owned = |key: &str| extra.get_str(key).map(Cow::into_owned);
        Ok(AwsClientConfig {
            service: self.service,
            access_key_id: profile.login().map(str::to_owned),
            secret_access_key: profile.password().map(str::to_owned),
            session_token: owned(SESSION_TOKEN_KEY),
            region: self.region_override.clone().or_else(|| owned(REGION_KEY)),
            endpoint_url: owned(ENDPOINT_URL_KEY),
        })
    }

    fn endpoint(&self, settings: &Self::Settings) -> String {
        settings.endpoint_url.clone().unwrap_or_else(|| {
            format!(
                "{}@{}",
                settings.service,
                settings.region.as_deref().unwrap_or("default-region")
            )
        })
    }

    fn construct(&self, settings: Self::Settings) -> Result<Self::Client, IntegrationError> {
        let service = settings.service;
        self.connector
            .connect(settings)
            .map_err(|err| IntegrationError::new(format!("failed to create {service} client"), err))
    }
}

/// AWS hook bound to one credentials profile and one service.
#[derive(Debug)]
pub struct AwsHook<S, C>
where
    S: ConnectionStore + ?Sized,
    C: AwsConnector,
{
    inner: ConnectionHook<S, AwsRecipe<C>>,
}

impl<S, C> AwsHook<S, C>
where
    S: ConnectionStore + ?Sized,
    C: AwsConnector,
{
    /// Creates an unconnected hook for `service`.
    #[must_use]
    pub fn new(store: Arc<S>, config: AwsHookConfig, service: AwsService, connector: C) -> Self {
        let recipe = AwsRecipe {
            connector,
            service,
            region_override: config.region_name,
        };
        Self {
            inner: ConnectionHook::new(store, config.connection_id, recipe),
        }
    }

    /// Returns the credentials profile identifier.
    #[must_use]
    pub fn connection_id(&self) -> &str {
        self.inner.connection_id()
    }

    /// Returns the service the client targets.
    #[must_use]
    pub const fn service(&self) -> AwsService {
        self.inner.recipe().service
    }

    /// Returns `true` once the client has been built.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.inner.is_connected()
    }

    /// Returns the cached client, building it on first use.
    ///
    /// # Errors
    ///
    /// See [`ConnectionHook::get_client`].
    pub fn get_client(&mut self) -> HookResult<&C::Client> {
        self.inner.get_client()
    }

    const fn store(&self) -> &Arc<S> {
        self.inner.store()
    }
}

/// EMR hook: cluster lookup and job-flow launch.
#[derive(Debug)]
pub struct EmrHook<S, C>
where
    S: ConnectionStore + ?Sized,
    C: AwsConnector,
{
    aws: AwsHook<S, C>,
    emr_connection_id: Option<String>,
}

impl<S, C> EmrHook<S, C>
where
    S: ConnectionStore + ?Sized,
    C: AwsConnector,
    C::Client: EmrApi,
{
    /// Creates an unconnected EMR hook.
    #[must_use]
    pub fn new(store: Arc<S>, config: EmrHookConfig, connector: C) -> Self {
        let EmrHookConfig {
            connection_id,
            region_name,
            emr_connection_id,
        } = config;
        let aws_config = AwsHookConfig {
            connection_id,
            region_name,
        };
        Self {
            aws: AwsHook::new(store, aws_config, AwsService::Emr, connector),
            emr_connection_id,
        }
    }

    /// Returns the underlying AWS hook.
    #[must_use]
    pub const fn aws(&self) -> &AwsHook<S, C> {
        &self.aws
    }

    /// Returns the cached EMR client, building it on first use.
    ///
    /// # Errors
    ///
    /// See [`ConnectionHook::get_client`].
    pub fn get_client(&mut self) -> HookResult<&C::Client> {
        self.aws.get_client()
    }

    /// Finds the identifier of the cluster named `name` among clusters in
    /// any of `states`.
    ///
    /// # Errors
    ///
    /// Returns the construction error, or an integration error when the
    /// listing fails or more than one cluster matches.
    pub fn get_cluster_id_by_name(
        &mut self,
        name: &str,
        states: &[ClusterState],
    ) -> HookResult<Option<String>> {
        let client = self.get_client()?;
        let clusters = client
            .list_clusters(states)
            .map_err(vendor_failure("emr", "failed to list emr clusters"))?;
        let mut matching: Vec<String> = clusters
            .into_iter()
            .filter(|cluster| cluster.name == name)
            .map(|cluster| cluster.id)
            .collect();
        match matching.len() {
            0 => {
                debug!(cluster_name = name, "no cluster found");
                Ok(None)
            }
            1 => Ok(matching.pop()),
            count => Err(IntegrationError::message(
                "emr cluster lookup",
                format!("{count} clusters found with name '{name}'"),
            )
            .into()),
        }
    }

    /// Launches a job flow from the EMR profile's template.
    ///
    /// The template is the extra map of the `emr_connection_id` profile;
    /// top-level keys in `overrides` replace template keys.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingOption`] when no EMR profile was
    /// configured, configuration errors when it cannot be resolved, and an
    /// integration error when the launch fails.
    pub fn create_job_flow(&mut self, overrides: Map<String, Value>) -> HookResult<JobFlow> {
        let emr_connection_id = self
            .emr_connection_id
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigurationError::MissingOption {
                service: "emr",
                option: "emr_connection_id",
            })?;
        let template = resolve_profile(self.aws.store().as_ref(), emr_connection_id)?;
        let mut request = template.extra().as_map().clone();
        request.extend(overrides);

        let client = self.get_client()?;
        client
            .run_job_flow(&request)
            .map_err(vendor_failure("emr", "failed to create emr job flow"))
    }
}

/// RDS hook exposing only the client.
#[derive(Debug)]
pub struct RdsHook<S, C>
where
    S: ConnectionStore + ?Sized,
    C: AwsConnector,
{
    aws: AwsHook<S, C>,
}

impl<S, C> RdsHook<S, C>
where
    S: ConnectionStore + ?Sized,
    C: AwsConnector,
{
    /// Creates an unconnected RDS hook.
    #[must_use]
    pub fn new(store: Arc<S>, config: AwsHookConfig, connector: C) -> Self {
        Self {
            aws: AwsHook::new(store, config, AwsService::Rds, connector),
        }
    }

    /// Returns the credentials profile identifier.
    #[must_use]
    pub fn connection_id(&self) -> &str {
        self.aws.connection_id()
    }

    /// Returns the cached RDS client, building it on first use.
    ///
    /// # Errors
    ///
    /// See [`ConnectionHook::get_client`].
    pub fn get_client(&mut self) -> HookResult<&C::Client> {
        self.aws.get_client()
    }
}
