//! Vendor ports for AWS.

use super::domain::{AwsClientConfig, ClusterState, ClusterSummary, JobFlow};
use crate::providers::vendor::VendorResult;
use serde_json::{Map, Value};

/// Builds service clients from credentials and region settings.
pub trait AwsConnector: Send + Sync {
    /// Client produced by this connector.
    type Client;

    /// Builds a client for `config.service`.
    ///
    /// # Errors
    ///
    /// Returns a vendor error when the client cannot be created.
    fn connect(&self, config: AwsClientConfig) -> VendorResult<Self::Client>;
}

/// Elastic `MapReduce` operations.
pub trait EmrApi {
    /// Lists clusters in any of `states`.
    ///
    /// # Errors
    ///
    /// Returns a vendor error when the listing fails.
    fn list_clusters(&self, states: &[ClusterState]) -> VendorResult<Vec<ClusterSummary>>;

    /// Launches a job flow described by `request`.
    ///
    /// # Errors
    ///
    /// Returns a vendor error when the request is refused.
    fn run_job_flow(&self, request: &Map<String, Value>) -> VendorResult<JobFlow>;
}
