//! AWS connector adapters.

mod memory;

pub use memory::{InMemoryAws, InMemoryAwsClient};
