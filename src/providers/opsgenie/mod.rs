//! Opsgenie alerting hook.
//!
//! The API key comes from the profile password; alerts are created and
//! closed through the [`ports::OpsgenieAlerts`] port.

pub mod adapters;
pub mod domain;
pub mod hook;
pub mod ports;

pub use hook::{OpsgenieHook, OpsgenieRecipe};
