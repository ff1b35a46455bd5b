//! Provider hooks built on the connection client factory.
//!
//! Each provider pairs a [`ClientRecipe`](crate::hook::ports::ClientRecipe)
//! with vendor ports, so the SDK stays behind a trait and tests can swap in
//! the in-memory adapters.

pub mod aws;
pub mod credentials;
pub mod docker;
pub mod http;
pub mod jenkins;
pub mod jira;
pub mod opsgenie;
pub mod vendor;

use crate::hook::domain::{HookError, IntegrationError};
use tracing::warn;
use vendor::VendorError;

/// Maps a vendor failure on `service` into a logged integration error.
pub(crate) fn vendor_failure(
    service: &'static str,
    context: impl Into<String>,
) -> impl FnOnce(VendorError) -> HookError {
    let message = context.into();
    move |err| {
        warn!(service, context = %message, error = %err, "vendor call failed");
        IntegrationError::new(message, err).into()
    }
}
