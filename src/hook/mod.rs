//! The connection client factory shared by every provider hook.
//!
//! A hook is bound to one connection identifier. On first use it resolves
//! the profile from a [`ConnectionStore`](crate::connection::ports::ConnectionStore),
//! validates what the vendor needs, builds the client and caches it. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Orchestration services in [`services`]

pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
