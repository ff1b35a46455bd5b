//! AWS hooks.
//!
//! [`AwsHook`] builds a client for one service from a credentials profile.
//! [`EmrHook`] adds cluster lookup and job-flow launch; [`RdsHook`] only
//! exposes the client.

pub mod adapters;
pub mod domain;
pub mod hook;
pub mod ports;

pub use hook::{AwsHook, AwsRecipe, EmrHook, RdsHook};
