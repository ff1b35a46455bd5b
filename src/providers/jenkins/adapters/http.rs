//! Jenkins JSON API adapter over blocking `reqwest`.

use crate::providers::credentials::BasicCredentials;
use crate::providers::http::{HttpClientOptions, build_client, send_json};
use crate::providers::jenkins::{
    domain::{BuildInfo, JenkinsServerConfig, JobInfo},
    ports::{JenkinsConnector, JenkinsServer},
};
use crate::providers::vendor::VendorResult;
use reqwest::blocking::{Client, RequestBuilder};
use std::collections::BTreeMap;
use std::time::Duration;

/// Connects to Jenkins through its JSON API.
#[derive(Debug, Clone, Default)]
pub struct HttpJenkinsConnector {
    timeout: Option<Duration>,
}

impl HttpJenkinsConnector {
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

impl JenkinsConnector for HttpJenkinsConnector {
    type Server = HttpJenkinsServer;

    fn connect(&self, config: JenkinsServerConfig) -> VendorResult<Self::Server> {
        let proxies = BTreeMap::new();
        let http = build_client(&HttpClientOptions {
            timeout: self.timeout,
            verify_tls: true,
            proxies: &proxies,
        })?;
        Ok(HttpJenkinsServer {
            http,
            url: config.url,
            credentials: config.credentials,
        })
    }
}

/// Server handle produced by [`HttpJenkinsConnector`].
#[derive(Debug)]
pub struct HttpJenkinsServer {
    http: Client,
    url: String,
    credentials: Option<BasicCredentials>,
}

impl HttpJenkinsServer {
    fn get(&self, path: &str) -> RequestBuilder {
        let mut request = self.http.get(format!("{}/{path}", self.url));
        if let Some(credentials) = &self.credentials {
            request = request.basic_auth(credentials.username(), credentials.password());
        }
        request
    }
}

impl JenkinsServer for HttpJenkinsServer {
    fn url(&self) -> &str {
        &self.url
    }

    fn job_info(&self, job_name: &str) -> VendorResult<JobInfo> {
        Ok(send_json(self.get(&format!("{}/api/json", job_path(job_name))))?)
    }

    fn build_info(&self, job_name: &str, number: u64) -> VendorResult<BuildInfo> {
        Ok(send_json(
            self.get(&format!("{}/{number}/api/json", job_path(job_name))),
        )?)
    }
}

/// Maps `folder/job` to `job/folder/job/job`.
#[must_use]
pub fn job_path(job_name: &str) -> String {
    job_name
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| format!("job/{}", urlencoding::encode(segment)))
        .collect::<Vec<_>>()
        .join("/")
}
