//! Jira issue-tracker hook.
//!
//! - Configuration and client settings in [`domain`]
//! - Connector ports in [`ports`]
//! - REST and in-memory connectors in [`adapters`]
//! - The hook service in [`hook`]

pub mod adapters;
pub mod domain;
pub mod hook;
pub mod ports;

pub use hook::{JiraHook, JiraRecipe};
