//! Vendor ports for Opsgenie.

use super::domain::{
    AlertResponse, CloseAlertPayload, CreateAlertPayload, IdentifierType, OpsgenieClientConfig,
};
use crate::providers::vendor::VendorResult;

/// Builds Opsgenie alert clients.
pub trait OpsgenieConnector: Send + Sync {
    /// Client produced by this connector.
    type Client: OpsgenieAlerts;

    /// Builds a client.
    ///
    /// # Errors
    ///
    /// Returns a vendor error when the client cannot be created.
    fn connect(&self, config: OpsgenieClientConfig) -> VendorResult<Self::Client>;
}

/// Alert operations.
pub trait OpsgenieAlerts {
    /// Creates an alert.
    ///
    /// # Errors
    ///
    /// Returns a vendor error when the request is refused or fails.
    fn create_alert(&self, payload: &CreateAlertPayload) -> VendorResult<AlertResponse>;

    /// Closes an alert.
    ///
    /// # Errors
    ///
    /// Returns a vendor error when the request is refused or fails.
    fn close_alert(
        &self,
        identifier: &str,
        identifier_type: IdentifierType,
        payload: &CloseAlertPayload,
    ) -> VendorResult<AlertResponse>;
}
