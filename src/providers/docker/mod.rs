//! Docker container-runtime hook.
//!
//! The caller supplies the daemon settings; the profile supplies the
//! registry the client logs into.

pub mod adapters;
pub mod domain;
pub mod hook;
pub mod ports;

pub use hook::{DockerHook, DockerRecipe};
