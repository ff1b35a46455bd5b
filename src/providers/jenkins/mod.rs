//! Jenkins CI hook.
//!
//! The hook composes `http[s]://host[:port]` from the profile and answers
//! whether a build is still running.

pub mod adapters;
pub mod domain;
pub mod hook;
pub mod ports;

pub use hook::{JenkinsHook, JenkinsRecipe};
