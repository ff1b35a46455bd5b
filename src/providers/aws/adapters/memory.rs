//! In-memory AWS connector with a simulated EMR control plane.

use crate::providers::aws::{
    domain::{AwsClientConfig, ClusterState, ClusterSummary, JobFlow},
    ports::{AwsConnector, EmrApi},
};
use crate::providers::vendor::{VendorError, VendorResult};
use serde_json::{Map, Value};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

#[derive(Debug, Default)]
struct AwsState {
    connections: Vec<AwsClientConfig>,
    clusters: Vec<ClusterSummary>,
    job_flow_requests: Vec<Map<String, Value>>,
}

/// Records client configurations and keeps EMR clusters in memory.
///
/// Launched job flows become clusters named after the request's `Name`.
/// They start `WAITING` when `Instances.KeepJobFlowAliveWhenNoSteps` is
/// `true`, otherwise `STARTING`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAws {
    state: Arc<RwLock<AwsState>>,
}

impl InMemoryAws {
    /// Creates an empty control plane.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a cluster directly.
    ///
    /// # Errors
    ///
    /// Returns a vendor error when lock acquisition fails.
    pub fn add_cluster(&self, cluster: ClusterSummary) -> VendorResult<()> {
        let mut state = self.state.write().map_err(VendorError::lock)?;
        state.clusters.push(cluster);
        Ok(())
    }

    /// Returns every configuration passed to [`AwsConnector::connect`].
    ///
    /// # Errors
    ///
    /// Returns a vendor error when lock acquisition fails.
    pub fn connections(&self) -> VendorResult<Vec<AwsClientConfig>> {
        let state = self.state.read().map_err(VendorError::lock)?;
        Ok(state.connections.clone())
    }

    /// Returns every job-flow request received.
    ///
    /// # Errors
    ///
    /// Returns a vendor error when lock acquisition fails.
    pub fn job_flow_requests(&self) -> VendorResult<Vec<Map<String, Value>>> {
        let state = self.state.read().map_err(VendorError::lock)?;
        Ok(state.job_flow_requests.clone())
    }
}

impl AwsConnector for InMemoryAws {
    type Client = InMemoryAwsClient;

    fn connect(&self, config: AwsClientConfig) -> VendorResult<Self::Client> {
        let mut state = self.state.write().map_err(VendorError::lock)?;
        state.connections.push(config.clone());
        Ok(InMemoryAwsClient {
            config,
            state: Arc::clone(&self.state),
        })
    }
}

/// Client produced by [`InMemoryAws`].
#[derive(Debug)]
pub struct InMemoryAwsClient {
    config: AwsClientConfig,
    state: Arc<RwLock<AwsState>>,
}

impl InMemoryAwsClient {
    /// Returns the settings the client was built with.
    #[must_use]
    pub const fn config(&self) -> &AwsClientConfig {
        &self.config
    }
}

impl EmrApi for InMemoryAwsClient {
    fn list_clusters(&self, states: &[ClusterState]) -> VendorResult<Vec<ClusterSummary>> {
        let state = self.state.read().map_err(VendorError::lock)?;
        Ok(state
            .clusters
            .iter()
            .filter(|cluster| states.is_empty() || states.contains(&cluster.state))
            .cloned()
            .collect())
    }

    fn run_job_flow(&self, request: &Map<String, Value>) -> VendorResult<JobFlow> {
        let name = request
            .get("Name")
            .and_then(Value::as_str)
            .ok_or_else(|| VendorError::rejected("job flow request requires a Name"))?;
        let keep_alive = request
            .get("Instances")
            .and_then(|instances| instances.get("KeepJobFlowAliveWhenNoSteps"))
            .and_then(Value::as_bool)
            .unwrap_or(false);

        let mut state = self.state.write().map_err(VendorError::lock)?;
        let cluster = ClusterSummary {
            id: job_flow_id(),
            name: name.to_owned(),
            state: if keep_alive {
                ClusterState::Waiting
            } else {
                ClusterState::Starting
            },
        };
        let flow = JobFlow {
            job_flow_id: cluster.id.clone(),
        };
        state.clusters.push(cluster);
        state.job_flow_requests.push(request.clone());
        Ok(flow)
    }
}

fn job_flow_id() -> String {
    let suffix: String = Uuid::new_v4()
        .simple()
        .to_string()
        .to_uppercase()
        .chars()
        .take(13)
        .collect();
    format!("j-{suffix}")
}
