//! Opsgenie hook service.

use super::domain::{
    AlertResponse, CloseAlertPayload, CreateAlertPayload, DEFAULT_API_URL, IdentifierType,
    OpsgenieClientConfig, OpsgenieHookConfig,
};
use super::ports::{OpsgenieAlerts, OpsgenieConnector};
use crate::connection::{domain::ConnectionProfile, ports::ConnectionStore};
use crate::hook::{
    domain::{ConfigurationError, HookResult, IntegrationError, ProfileField, require_field},
    ports::ClientRecipe,
    services::ConnectionHook,
};
use crate::providers::{http::compose_base_url, vendor_failure};
use std::sync::Arc;

/// Builds Opsgenie clients from profiles.
///
/// The API key is the profile password. The host, when set, overrides the
/// public API URL.
#[derive(Debug, Clone)]
pub struct OpsgenieRecipe<C> {
    connector: C,
}

impl<C: OpsgenieConnector> ClientRecipe for OpsgenieRecipe<C> {
    type Settings = OpsgenieClientConfig;
    type Client = C::Client;

    fn service(&self) -> &'static str {
        "opsgenie"
    }

    fn prepare(&self, profile: &ConnectionProfile) -> Result<Self::Settings, ConfigurationError> {
        let api_key = require_field(profile, ProfileField::Password)?;
        let api_url = profile.host().map_or_else(
            || DEFAULT_API_URL.to_owned(),
            |host| compose_base_url(host, profile.port(), "https"),
        );
        Ok(OpsgenieClientConfig {
            api_url,
            api_key: api_key.to_owned(),
        })
    }

    fn endpoint(&self, settings: &Self::Settings) -> String {
        settings.api_url.clone()
    }

    fn construct(&self, settings: Self::Settings) -> Result<Self::Client, IntegrationError> {
        self.connector
            .connect(settings)
            .map_err(|err| IntegrationError::new("failed to create opsgenie client", err))
    }
}

/// Opsgenie hook bound to one connection profile.
#[derive(Debug)]
pub struct OpsgenieHook<S, C>
where
    S: ConnectionStore + ?Sized,
    C: OpsgenieConnector,
{
    inner: ConnectionHook<S, OpsgenieRecipe<C>>,
}

impl<S, C> OpsgenieHook<S, C>
where
    S: ConnectionStore + ?Sized,
    C: OpsgenieConnector,
{
    /// Creates an unconnected hook.
    #[must_use]
    pub fn new(store: Arc<S>, config: OpsgenieHookConfig, connector: C) -> Self {
        Self {
            inner: ConnectionHook::new(store, config.connection_id, OpsgenieRecipe { connector }),
        }
    }

    /// Returns the connection identifier.
    #[must_use]
    pub fn connection_id(&self) -> &str {
        self.inner.connection_id()
    }

    /// Returns the cached alert client, building it on first use.
    ///
    /// # Errors
    ///
    /// See [`ConnectionHook::get_client`].
    pub fn get_client(&mut self) -> HookResult<&C::Client> {
        self.inner.get_client()
    }

    /// Creates an alert.
    ///
    /// The payload is validated before the client is built.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an invalid payload or profile, and
    /// an integration error when the request fails.
    pub fn create_alert(&mut self, payload: &CreateAlertPayload) -> HookResult<AlertResponse> {
        payload.validate()?;
        let client = self.get_client()?;
        client
            .create_alert(payload)
            .map_err(vendor_failure("opsgenie", "failed to create opsgenie alert"))
    }

    /// Closes an alert.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for a blank identifier or invalid
    /// profile, and an integration error when the request fails.
    pub fn close_alert(
        &mut self,
        identifier: &str,
        identifier_type: IdentifierType,
        payload: &CloseAlertPayload,
    ) -> HookResult<AlertResponse> {
        if identifier.trim().is_empty() {
            return Err(ConfigurationError::invalid_value("identifier", "must not be empty").into());
        }
        let client = self.get_client()?;
        client
            .close_alert(identifier, identifier_type, payload)
            .map_err(vendor_failure("opsgenie", "failed to close opsgenie alert"))
    }
}
