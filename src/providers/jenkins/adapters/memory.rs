//! In-memory Jenkins server for tests.

use crate::providers::jenkins::{
    domain::{BuildInfo, BuildRef, JenkinsServerConfig, JobInfo},
    ports::{JenkinsConnector, JenkinsServer},
};
use crate::providers::vendor::{VendorError, VendorResult};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

#[derive(Debug, Default)]
struct JenkinsState {
    connections: Vec<JenkinsServerConfig>,
    jobs: BTreeMap<String, Vec<BuildInfo>>,
    build_queries: Vec<(String, u64)>,
}

/// Serves jobs and builds from memory and records every query.
#[derive(Debug, Clone, Default)]
pub struct InMemoryJenkins {
    state: Arc<RwLock<JenkinsState>>,
}

impl InMemoryJenkins {
    /// Creates an empty server.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a job with no builds.
    ///
    /// # Errors
    ///
    /// Returns a vendor error when lock acquisition fails.
    pub fn add_job(&self, job_name: &str) -> VendorResult<()> {
        let mut state = self.state.write().map_err(VendorError::lock)?;
        state.jobs.entry(job_name.to_owned()).or_default();
        Ok(())
    }

    /// Records a build, creating the job when needed.
    ///
    /// # Errors
    ///
    /// Returns a vendor error when lock acquisition fails.
    pub fn add_build(&self, job_name: &str, build: BuildInfo) -> VendorResult<()> {
        let mut state = self.state.write().map_err(VendorError::lock)?;
        state.jobs.entry(job_name.to_owned()).or_default().push(build);
        Ok(())
    }

    /// Returns every configuration passed to [`JenkinsConnector::connect`].
    ///
    /// # Errors
    ///
    /// Returns a vendor error when lock acquisition fails.
    pub fn connections(&self) -> VendorResult<Vec<JenkinsServerConfig>> {
        let state = self.state.read().map_err(VendorError::lock)?;
        Ok(state.connections.clone())
    }

    /// Returns every `(job, build number)` pair queried so far.
    ///
    /// # Errors
    ///
    /// Returns a vendor error when lock acquisition fails.
    pub fn build_queries(&self) -> VendorResult<Vec<(String, u64)>> {
        let state = self.state.read().map_err(VendorError::lock)?;
        Ok(state.build_queries.clone())
    }
}

impl JenkinsConnector for InMemoryJenkins {
    type Server = InMemoryJenkinsServer;

    fn connect(&self, config: JenkinsServerConfig) -> VendorResult<Self::Server> {
        let mut state = self.state.write().map_err(VendorError::lock)?;
        state.connections.push(config.clone());
        Ok(InMemoryJenkinsServer {
            url: config.url,
            state: Arc::clone(&self.state),
        })
    }
}

/// Server handle produced by [`InMemoryJenkins`].
#[derive(Debug)]
pub struct InMemoryJenkinsServer {
    url: String,
    state: Arc<RwLock<JenkinsState>>,
}

impl JenkinsServer for InMemoryJenkinsServer {
    fn url(&self) -> &str {
        &self.url
    }

    fn job_info(&self, job_name: &str) -> VendorResult<JobInfo> {
        let state = self.state.read().map_err(VendorError::lock)?;
        let builds = state
            .jobs
            .get(job_name)
            .ok_or_else(|| VendorError::rejected(format!("job[{job_name}] does not exist")))?;
        Ok(JobInfo {
            name: job_name.to_owned(),
            last_build: builds
                .iter()
                .map(|build| build.number)
                .max()
                .map(|number| BuildRef { number }),
        })
    }

    fn build_info(&self, job_name: &str, number: u64) -> VendorResult<BuildInfo> {
        let mut state = self.state.write().map_err(VendorError::lock)?;
        state.build_queries.push((job_name.to_owned(), number));
        state
            .jobs
            .get(job_name)
            .and_then(|builds| builds.iter().find(|build| build.number == number))
            .cloned()
            .ok_or_else(|| {
                VendorError::rejected(format!("job[{job_name}] number[{number}] does not exist"))
            })
    }
}
