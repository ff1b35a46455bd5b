//! Jira connector adapters.

mod http;
mod memory;

pub use http::{HttpJiraClient, HttpJiraConnector};
pub use memory::{InMemoryJiraClient, InMemoryJiraConnector};
