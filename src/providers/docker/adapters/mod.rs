//! Docker runtime adapters.

mod memory;

pub use memory::{RecordingDockerClient, RecordingDockerRuntime};
