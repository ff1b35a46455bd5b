//! Docker hook configuration, runtime settings, and registry login.

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Extra key holding the registry account email.
pub const EMAIL_KEY: &str = "email";
/// Extra key disabling re-authentication when `"no"` or `"false"`.
pub const REAUTH_KEY: &str = "reauth";

/// Caller-supplied Docker hook configuration.
///
/// `base_url` and `version` are mandatory; the hook refuses to construct
/// without them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockerHookConfig {
    /// Connection profile identifier.
    pub connection_id: String,
    /// Daemon URL such as `unix://var/run/docker.sock`.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Engine API version, or `auto`.
    #[serde(default)]
    pub version: Option<String>,
    /// Client TLS settings.
    #[serde(default)]
    pub tls: Option<DockerTlsConfig>,
    /// Request timeout in seconds.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl DockerHookConfig {
    /// Creates a configuration with no daemon settings.
    #[must_use]
    pub fn new(connection_id: impl Into<String>) -> Self {
        Self {
            connection_id: connection_id.into(),
            ..Self::default()
        }
    }

    /// Sets the daemon URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the engine API version.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the TLS settings.
    #[must_use]
    pub fn with_tls(mut self, tls: DockerTlsConfig) -> Self {
        self.tls = Some(tls);
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout_secs(mut self, seconds: u64) -> Self {
        self.timeout_secs = Some(seconds);
        self
    }
}

/// Client TLS material for the daemon connection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockerTlsConfig {
    /// CA bundle used to verify the daemon.
    #[serde(default)]
    pub ca_cert: Option<Utf8PathBuf>,
    /// Client certificate.
    #[serde(default)]
    pub client_cert: Option<Utf8PathBuf>,
    /// Client private key.
    #[serde(default)]
    pub client_key: Option<Utf8PathBuf>,
    /// Verify the daemon certificate.
    #[serde(default)]
    pub verify: bool,
}

/// Daemon connection settings, passed to the runtime unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockerApiConfig {
    /// Daemon URL.
    pub base_url: String,
    /// Engine API version.
    pub version: String,
    /// Client TLS settings.
    pub tls: Option<DockerTlsConfig>,
    /// Request timeout.
    pub timeout: Option<Duration>,
}

/// Registry login request.
#[derive(Clone, PartialEq, Eq)]
pub struct RegistryLogin {
    /// Registry account name.
    pub username: String,
    /// Registry password.
    pub password: Option<String>,
    /// Registry address, `host[:port]`.
    pub registry: String,
    /// Force re-authentication.
    pub reauth: bool,
    /// Registry account email.
    pub email: Option<String>,
}

impl fmt::Debug for RegistryLogin {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RegistryLogin")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("registry", &self.registry)
            .field("reauth", &self.reauth)
            .field("email", &self.email)
            .finish()
    }
}

/// Everything needed to build and log in a Docker client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockerClientSettings {
    /// Daemon connection settings.
    pub api: DockerApiConfig,
    /// Registry login.
    pub login: RegistryLogin,
}

/// Reads the `reauth` extra: off only for `"no"` or `"false"`.
#[must_use]
pub fn reauth_enabled(value: Option<&str>) -> bool {
    !value.is_some_and(|text| text.eq_ignore_ascii_case("no") || text.eq_ignore_ascii_case("false"))
}
