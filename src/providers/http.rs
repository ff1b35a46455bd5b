//! Shared plumbing for the blocking HTTP adapters.

use super::vendor::VendorError;
use crate::hook::domain::ConfigurationError;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::{Proxy, StatusCode};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::time::Duration;
use thiserror::Error;

/// Errors raised while talking to a service over HTTP.
#[derive(Debug, Error)]
pub enum HttpAdapterError {
    /// A proxy entry used a scheme other than `http`, `https`, or `all`.
    #[error("unsupported proxy scheme '{0}'")]
    UnsupportedProxyScheme(String),

    /// The request could not be sent or the body could not be decoded.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("{url} answered {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// Response status.
        status: StatusCode,
    },
}

impl From<HttpAdapterError> for VendorError {
    fn from(value: HttpAdapterError) -> Self {
        match value {
            HttpAdapterError::Status { .. } => Self::rejected(value.to_string()),
            other => Self::transport(other),
        }
    }
}

/// Options shared by every HTTP adapter client.
#[derive(Debug, Clone)]
pub(crate) struct HttpClientOptions<'a> {
    pub timeout: Option<Duration>,
    pub verify_tls: bool,
    pub proxies: &'a BTreeMap<String, String>,
}

/// Builds a blocking client honouring timeout, TLS verification, and proxies.
pub(crate) fn build_client(options: &HttpClientOptions<'_>) -> Result<Client, HttpAdapterError> {
    let mut builder = Client::builder()
        .timeout(options.timeout)
        .danger_accept_invalid_certs(!options.verify_tls);
    for (scheme, url) in options.proxies {
        builder = builder.proxy(proxy_for(scheme, url)?);
    }
    Ok(builder.build()?)
}

/// Checks caller-supplied proxies without building a client.
pub(crate) fn validate_proxies(
    proxies: &BTreeMap<String, String>,
) -> Result<(), ConfigurationError> {
    for (scheme, url) in proxies {
        proxy_for(scheme, url).map_err(|err| {
            ConfigurationError::invalid_value(format!("proxy '{scheme}'"), err.to_string())
        })?;
    }
    Ok(())
}

fn proxy_for(scheme: &str, url: &str) -> Result<Proxy, HttpAdapterError> {
    let proxy = match scheme {
        "http" => Proxy::http(url)?,
        "https" => Proxy::https(url)?,
        "all" => Proxy::all(url)?,
        other => return Err(HttpAdapterError::UnsupportedProxyScheme(other.to_owned())),
    };
    Ok(proxy)
}

/// Sends a request and decodes a JSON body from a success response.
pub(crate) fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, HttpAdapterError> {
    let response = check_status(request.send()?)?;
    Ok(response.json()?)
}

/// Sends a request, discarding the body of a success response.
pub(crate) fn send_empty(request: RequestBuilder) -> Result<(), HttpAdapterError> {
    check_status(request.send()?)?;
    Ok(())
}

fn check_status(response: Response) -> Result<Response, HttpAdapterError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(HttpAdapterError::Status {
            url: response.url().to_string(),
            status,
        })
    }
}

/// Composes a base URL from a profile host and port.
///
/// Hosts that already carry a scheme keep it; bare hosts get
/// `default_scheme`. The port goes right after the authority, ahead of any
/// path, and is skipped when the host already names one. Trailing slashes
/// are removed.
#[must_use]
pub fn compose_base_url(host: &str, port: Option<u16>, default_scheme: &str) -> String {
    let trimmed = host.trim().trim_end_matches('/');
    let (scheme, rest) = trimmed
        .split_once("://")
        .unwrap_or((default_scheme, trimmed));
    let (authority, path) = rest
        .find('/')
        .map_or((rest, ""), |index| rest.split_at(index));
    let suffix = port
        .filter(|_| !has_explicit_port(authority))
        .map(|number| format!(":{number}"))
        .unwrap_or_default();
    format!("{scheme}://{authority}{suffix}{path}")
}

fn has_explicit_port(authority: &str) -> bool {
    authority.rsplit_once(':').is_some_and(|(_, tail)| {
        !tail.is_empty() && tail.chars().all(|character| character.is_ascii_digit())
    })
}
