//! Vendor ports for Jira.

use super::domain::{JiraClientConfig, JiraIssue};
use crate::providers::vendor::VendorResult;

/// Builds Jira clients.
pub trait JiraConnector: Send + Sync {
    /// Client produced by this connector.
    type Client: JiraClient;

    /// Builds a client, performing any validation the settings request.
    ///
    /// # Errors
    ///
    /// Returns a vendor error when the server rejects the credentials or
    /// cannot be reached during validation.
    fn connect(&self, config: JiraClientConfig) -> VendorResult<Self::Client>;
}

/// Operations on a connected Jira client.
pub trait JiraClient {
    /// Returns the server base URL.
    fn server(&self) -> &str;

    /// Fetches an issue by key.
    ///
    /// # Errors
    ///
    /// Returns a vendor error when the issue does not exist or the request
    /// fails.
    fn issue(&self, key: &str) -> VendorResult<JiraIssue>;
}
