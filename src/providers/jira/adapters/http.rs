//! Jira REST adapter over blocking `reqwest`.

use crate::providers::credentials::BasicCredentials;
use crate::providers::http::{HttpClientOptions, build_client, send_empty, send_json};
use crate::providers::jira::{
    domain::{JiraClientConfig, JiraIssue},
    ports::{JiraClient, JiraConnector},
};
use crate::providers::vendor::VendorResult;
use reqwest::blocking::{Client, RequestBuilder};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

const SERVER_INFO_PATH: &str = "/rest/api/2/serverInfo";
const SESSION_PATH: &str = "/rest/auth/1/session";

/// Connects to Jira over its REST API.
#[derive(Debug, Clone, Default)]
pub struct HttpJiraConnector {
    timeout: Option<Duration>,
}

impl HttpJiraConnector {
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

impl JiraConnector for HttpJiraConnector {
    type Client = HttpJiraClient;

    fn connect(&self, config: JiraClientConfig) -> VendorResult<Self::Client> {
        let http = build_client(&HttpClientOptions {
            timeout: self.timeout,
            verify_tls: config.verify,
            proxies: &config.proxies,
        })?;
        let mut client = HttpJiraClient {
            http,
            server: config.server,
            auth: config.basic_auth,
            server_info: None,
        };
        if config.get_server_info {
            let info: Value = send_json(client.get(SERVER_INFO_PATH))?;
            debug!(server = %client.server, "fetched jira server info");
            client.server_info = Some(info);
        }
        if config.validate {
            send_empty(client.get(SESSION_PATH))?;
        }
        Ok(client)
    }
}

/// Client produced by [`HttpJiraConnector`].
#[derive(Debug)]
pub struct HttpJiraClient {
    http: Client,
    server: String,
    auth: Option<BasicCredentials>,
    server_info: Option<Value>,
}

impl HttpJiraClient {
    /// Returns the server information fetched while connecting, when any.
    #[must_use]
    pub const fn server_info(&self) -> Option<&Value> {
        self.server_info.as_ref()
    }

    fn get(&self, path: &str) -> RequestBuilder {
        let mut request = self.http.get(format!("{}{path}", self.server));
        if let Some(credentials) = &self.auth {
            request = request.basic_auth(credentials.username(), credentials.password());
        }
        request
    }
}

impl JiraClient for HttpJiraClient {
    fn server(&self) -> &str {
        &self.server
    }

    fn issue(&self, key: &str) -> VendorResult<JiraIssue> {
        let path = format!("/rest/api/2/issue/{}", urlencoding::encode(key));
        Ok(send_json(self.get(&path))?)
    }
}
