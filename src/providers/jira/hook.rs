//! Jira hook service.

use super::domain::{JiraClientConfig, JiraHookConfig, JiraIssue, SERVER_INFO_KEY, VALIDATE_KEY, VERIFY_KEY};
use super::ports::{JiraClient, JiraConnector};
use crate::connection::{domain::ConnectionProfile, ports::ConnectionStore};
use crate::hook::{
    domain::{ConfigurationError, HookResult, IntegrationError, ProfileField, require_field},
    ports::ClientRecipe,
    services::ConnectionHook,
};
use crate::providers::{
    credentials::BasicCredentials,
    http::{compose_base_url, validate_proxies},
    vendor_failure,
};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Builds Jira clients from profiles.
///
/// The host is required. A login yields basic auth, with an empty password
/// when the profile has none. The `verify`, `validate`, and
/// `get_server_info` extras are read as false-literal flags and every other
/// extra passes through as a client option. Caller proxies must use the
/// `http`, `https`, or `all` scheme and a parsable URL.
#[derive(Debug, Clone)]
pub struct JiraRecipe<C> {
    connector: C,
    proxies: BTreeMap<String, String>,
}

impl<C: JiraConnector> ClientRecipe for JiraRecipe<C> {
    type Settings = JiraClientConfig;
    type Client = C::Client;

    fn service(&self) -> &'static str {
        "jira"
    }

    fn prepare(&self, profile: &ConnectionProfile) -> Result<Self::Settings, ConfigurationError> {
        let host = require_field(profile, ProfileField::Host)?;
        validate_proxies(&self.proxies)?;
        let extra = profile.extra();
        let basic_auth = profile.login().map(|login| {
            BasicCredentials::new(login, Some(profile.password().unwrap_or_default().to_owned()))
        });
        Ok(JiraClientConfig {
            server: compose_base_url(host, profile.port(), "https"),
            basic_auth,
            verify: extra.flag(VERIFY_KEY),
            validate: extra.flag(VALIDATE_KEY),
            get_server_info: extra.flag(SERVER_INFO_KEY),
            options: extra.without(&[VERIFY_KEY, VALIDATE_KEY, SERVER_INFO_KEY]),
            proxies: self.proxies.clone(),
        })
    }

    fn endpoint(&self, settings: &Self::Settings) -> String {
        settings.server.clone()
    }

    fn construct(&self, settings: Self::Settings) -> Result<Self::Client, IntegrationError> {
        self.connector
            .connect(settings)
            .map_err(|err| IntegrationError::new("failed to create jira client", err))
    }
}

/// Jira hook bound to one connection profile.
#[derive(Debug)]
pub struct JiraHook<S, C>
where
    S: ConnectionStore + ?Sized,
    C: JiraConnector,
{
    inner: ConnectionHook<S, JiraRecipe<C>>,
}

impl<S, C> JiraHook<S, C>
where
    S: ConnectionStore + ?Sized,
    C: JiraConnector,
{
    /// Creates an unconnected hook.
    #[must_use]
    pub fn new(store: Arc<S>, config: JiraHookConfig, connector: C) -> Self {
        let JiraHookConfig {
            connection_id,
            proxies,
        } = config;
        Self {
            inner: ConnectionHook::new(store, connection_id, JiraRecipe { connector, proxies }),
        }
    }

    /// Returns the connection identifier.
    #[must_use]
    pub fn connection_id(&self) -> &str {
        self.inner.connection_id()
    }

    /// Returns `true` once the client has been built.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.inner.is_connected()
    }

    /// Returns the cached Jira client, building it on first use.
    ///
    /// # Errors
    ///
    /// See [`ConnectionHook::get_client`].
    pub fn get_client(&mut self) -> HookResult<&C::Client> {
        self.inner.get_client()
    }

    /// Fetches an issue by key.
    ///
    /// # Errors
    ///
    /// Returns the client construction error, or an integration error when
    /// the lookup fails.
    pub fn get_issue(&mut self, key: &str) -> HookResult<JiraIssue> {
        let client = self.get_client()?;
        client
            .issue(key)
            .map_err(vendor_failure("jira", format!("jira issue lookup failed for '{key}'")))
    }
}
