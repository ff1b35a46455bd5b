//! Opsgenie alert API adapter over blocking `reqwest`.

use crate::providers::http::{HttpClientOptions, build_client, send_json};
use crate::providers::opsgenie::{
    domain::{
        AlertResponse, CloseAlertPayload, CreateAlertPayload, IdentifierType,
        OpsgenieClientConfig,
    },
    ports::{OpsgenieAlerts, OpsgenieConnector},
};
use crate::providers::vendor::VendorResult;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::AUTHORIZATION;
use std::collections::BTreeMap;
use std::time::Duration;

/// Connects to the Opsgenie alert API.
#[derive(Debug, Clone, Default)]
pub struct HttpOpsgenieConnector {
    timeout: Option<Duration>,
}

impl HttpOpsgenieConnector {
    /// Creates a connector with no request timeout.
    #[must_use]
    pub const fn new() -> Self {
        Self { timeout: None }
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl OpsgenieConnector for HttpOpsgenieConnector {
    type Client = HttpOpsgenieClient;

    fn connect(&self, config: OpsgenieClientConfig) -> VendorResult<Self::Client> {
        let proxies = BTreeMap::new();
        let http = build_client(&HttpClientOptions {
            timeout: self.timeout,
            verify_tls: true,
            proxies: &proxies,
        })?;
        Ok(HttpOpsgenieClient { http, config })
    }
}

/// Client produced by [`HttpOpsgenieConnector`].
#[derive(Debug)]
pub struct HttpOpsgenieClient {
    http: Client,
    config: OpsgenieClientConfig,
}

impl HttpOpsgenieClient {
    fn post(&self, path: &str) -> RequestBuilder {
        self.http
            .post(format!("{}{path}", self.config.api_url))
            .header(AUTHORIZATION, format!("GenieKey {}", self.config.api_key))
    }
}

impl OpsgenieAlerts for HttpOpsgenieClient {
    fn create_alert(&self, payload: &CreateAlertPayload) -> VendorResult<AlertResponse> {
        Ok(send_json(self.post("/v2/alerts").json(payload))?)
    }

    fn close_alert(
        &self,
        identifier: &str,
        identifier_type: IdentifierType,
        payload: &CloseAlertPayload,
    ) -> VendorResult<AlertResponse> {
        let path = format!("/v2/alerts/{}/close", urlencoding::encode(identifier));
        let request = self
            .post(&path)
            .query(&[("identifierType", identifier_type.as_str())])
            .json(payload);
        Ok(send_json(request)?)
    }
}
