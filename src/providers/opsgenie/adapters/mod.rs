//! Opsgenie connector adapters.

mod http;
mod memory;

pub use http::{HttpOpsgenieClient, HttpOpsgenieConnector};
pub use memory::{ClosedAlert, InMemoryOpsgenie};
