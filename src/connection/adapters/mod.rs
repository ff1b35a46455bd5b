//! Adapter implementations for the connection store port.
//!
//! - [`InMemoryConnectionStore`] for tests and embedded callers
//! - [`EnvConnectionStore`] reading prefixed environment variables
//! - [`JsonFileConnectionStore`] reading a JSON document
//! - [`LayeredConnectionStore`] chaining the others in order

mod env;
mod file;
mod layered;
mod memory;
pub mod models;

pub use env::{DEFAULT_ENV_PREFIX, EnvConnectionStore};
pub use file::JsonFileConnectionStore;
pub use layered::LayeredConnectionStore;
pub use memory::InMemoryConnectionStore;
