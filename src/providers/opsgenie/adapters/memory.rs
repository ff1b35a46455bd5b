//! In-memory Opsgenie client for tests.

use crate::providers::opsgenie::{
    domain::{
        AlertResponse, CloseAlertPayload, CreateAlertPayload, IdentifierType,
        OpsgenieClientConfig,
    },
    ports::{OpsgenieAlerts, OpsgenieConnector},
};
use crate::providers::vendor::{VendorError, VendorResult};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// An alert closure recorded by [`InMemoryOpsgenie`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosedAlert {
    /// Identifier passed by the caller.
    pub identifier: String,
    /// How the identifier was interpreted.
    pub identifier_type: IdentifierType,
    /// Close request body.
    pub payload: CloseAlertPayload,
}

#[derive(Debug, Default)]
struct OpsgenieState {
    connections: Vec<OpsgenieClientConfig>,
    created: Vec<CreateAlertPayload>,
    closed: Vec<ClosedAlert>,
}

/// Records connections and alert requests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOpsgenie {
    state: Arc<RwLock<OpsgenieState>>,
}

impl InMemoryOpsgenie {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every configuration passed to [`OpsgenieConnector::connect`].
    ///
    /// # Errors
    ///
    /// Returns a vendor error when lock acquisition fails.
    pub fn connections(&self) -> VendorResult<Vec<OpsgenieClientConfig>> {
        let state = self.state.read().map_err(VendorError::lock)?;
        Ok(state.connections.clone())
    }

    /// Returns every created alert payload.
    ///
    /// # Errors
    ///
    /// Returns a vendor error when lock acquisition fails.
    pub fn created(&self) -> VendorResult<Vec<CreateAlertPayload>> {
        let state = self.state.read().map_err(VendorError::lock)?;
        Ok(state.created.clone())
    }

    /// Returns every alert closure.
    ///
    /// # Errors
    ///
    /// Returns a vendor error when lock acquisition fails.
    pub fn closed(&self) -> VendorResult<Vec<ClosedAlert>> {
        let state = self.state.read().map_err(VendorError::lock)?;
        Ok(state.closed.clone())
    }
}

impl OpsgenieConnector for InMemoryOpsgenie {
    type Client = Self;

    fn connect(&self, config: OpsgenieClientConfig) -> VendorResult<Self::Client> {
        let mut state = self.state.write().map_err(VendorError::lock)?;
        state.connections.push(config);
        Ok(self.clone())
    }
}

impl OpsgenieAlerts for InMemoryOpsgenie {
    fn create_alert(&self, payload: &CreateAlertPayload) -> VendorResult<AlertResponse> {
        let mut state = self.state.write().map_err(VendorError::lock)?;
        state.created.push(payload.clone());
        Ok(accepted())
    }

    fn close_alert(
        &self,
        identifier: &str,
        identifier_type: IdentifierType,
        payload: &CloseAlertPayload,
    ) -> VendorResult<AlertResponse> {
        let mut state = self.state.write().map_err(VendorError::lock)?;
        state.closed.push(ClosedAlert {
            identifier: identifier.to_owned(),
            identifier_type,
            payload: payload.clone(),
        });
        Ok(accepted())
    }
}

fn accepted() -> AlertResponse {
    AlertResponse {
        result: "Request will be processed".to_owned(),
        took: 0.0,
        request_id: Uuid::new_v4(),
    }
}
