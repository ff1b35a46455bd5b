//! Service layer for client construction.

mod factory;

pub use factory::{ConnectionHook, resolve_profile};
