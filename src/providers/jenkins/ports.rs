//! Vendor ports for Jenkins.

use super::domain::{BuildInfo, JenkinsServerConfig, JobInfo};
use crate::providers::vendor::VendorResult;

/// Builds Jenkins server handles.
pub trait JenkinsConnector: Send + Sync {
    /// Server handle produced by this connector.
    type Server: JenkinsServer;

    /// Builds a server handle.
    ///
    /// # Errors
    ///
    /// Returns a vendor error when the handle cannot be created.
    fn connect(&self, config: JenkinsServerConfig) -> VendorResult<Self::Server>;
}

/// Queries against a Jenkins server.
pub trait JenkinsServer {
    /// Returns the server URL.
    fn url(&self) -> &str;

    /// Describes a job. Folder jobs use `/`-separated paths.
    ///
    /// # Errors
    ///
    /// Returns a vendor error when the job does not exist or the query fails.
    fn job_info(&self, job_name: &str) -> VendorResult<JobInfo>;

    /// Describes one build of a job.
    ///
    /// # Errors
    ///
    /// Returns a vendor error when the build does not exist or the query
    /// fails.
    fn build_info(&self, job_name: &str, number: u64) -> VendorResult<BuildInfo>;
}
