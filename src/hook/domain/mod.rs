//! Domain model for the connection client factory.
//!
//! Errors split into configuration problems, found before any vendor call,
//! and integration failures raised by the vendor client.

mod error;
mod required;
mod slot;

pub use error::{ConfigurationError, HookError, HookResult, IntegrationError, ProfileField};
pub use required::require_field;
pub use slot::ClientSlot;
