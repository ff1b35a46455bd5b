//! Jenkins connector adapters.

mod http;
mod memory;

pub use http::{HttpJenkinsConnector, HttpJenkinsServer, job_path};
pub use memory::{InMemoryJenkins, InMemoryJenkinsServer};
