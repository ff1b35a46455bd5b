//! Port contracts for connection profile lookup.

mod store;

pub use store::{ConnectionStore, ConnectionStoreError, ConnectionStoreResult};
